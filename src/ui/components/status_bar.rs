#![allow(dead_code)]
// Status bar component - 하단 상태바

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 상태바 위젯
///
/// 왼쪽에 파일 요약, 오른쪽에 언어 코드. 토스트 메시지가 있으면 왼쪽 내용을
/// 덮는다.
pub struct StatusBar<'a> {
    /// 왼쪽 텍스트 (파일/디렉토리 요약, 로컬라이즈 완료 상태로 전달)
    left: &'a str,
    /// 오른쪽 텍스트 (언어 코드 등)
    right: &'a str,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 토스트 색상
    toast_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            left: "",
            right: "",
            toast: None,
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::White,
            toast_color: Color::Rgb(255, 220, 130),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 왼쪽 텍스트 설정
    pub fn left(mut self, text: &'a str) -> Self {
        self.left = text;
        self
    }

    /// 오른쪽 텍스트 설정
    pub fn right(mut self, text: &'a str) -> Self {
        self.right = text;
        self
    }

    /// 토스트 메시지 설정
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.warning.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let base_style = Style::default().fg(self.fg_color).bg(self.bg_color);

        if let Some(toast) = self.toast {
            let style = Style::default().fg(self.toast_color).bg(self.bg_color);
            buf.set_stringn(
                area.x + 1,
                area.y,
                toast,
                area.width.saturating_sub(2) as usize,
                style,
            );
        } else {
            buf.set_stringn(
                area.x + 1,
                area.y,
                self.left,
                area.width.saturating_sub(2) as usize,
                base_style,
            );
        }

        // 오른쪽 정렬 텍스트
        let right_width = self.right.width() as u16;
        if right_width + 2 < area.width {
            let x = area.x + area.width - right_width - 1;
            buf.set_string(x, area.y, self.right, base_style);
        }
    }
}
