#![allow(dead_code)]
// Dialog component - 모달 다이얼로그
//
// 화면 중앙에 떠서 입력/확인을 받는 위젯. 종류 정의는 kind.rs,
// 생성자는 builders.rs, 실제 렌더링은 render.rs 참조.

mod builders;
mod kind;
mod render;

pub use kind::DialogKind;

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    /// 다이얼로그 종류
    kind: &'a DialogKind,
    /// 배경색
    pub(crate) bg_color: Color,
    /// 전경색
    pub(crate) fg_color: Color,
    /// 테두리 색상
    pub(crate) border_color: Color,
    /// 선택/포커스 배경색
    pub(crate) selected_bg: Color,
    /// 선택/포커스 전경색
    pub(crate) selected_fg: Color,
    /// 강조색
    pub(crate) accent_color: Color,
    /// 에러 색상
    pub(crate) error_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 45),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            accent_color: Color::Rgb(0, 120, 212),
            error_color: Color::Rgb(244, 71, 71),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.border_color = theme.accent.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.accent_color = theme.accent.to_color();
        self.error_color = theme.error.to_color();
        self
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.kind {
            DialogKind::Destination { .. } => self.render_destination(area, buf),
            DialogKind::MkdirInput { .. } => self.render_mkdir_input(area, buf),
            DialogKind::DeleteConfirm { .. } => self.render_delete_confirm(area, buf),
            DialogKind::Conflict { .. } => self.render_conflict(area, buf),
            DialogKind::Progress { .. } => self.render_progress(area, buf),
            DialogKind::Error { .. } | DialogKind::Message { .. } => {
                self.render_text_dialog(area, buf)
            }
        }
    }
}
