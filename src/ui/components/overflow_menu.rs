#![allow(dead_code)]
// Overflow menu component - 오버플로 팝업 메뉴
//
// 툴바에서 잘린 항목들을 표시자 아래에 세로 목록으로 보여주는 일회성 메뉴

use crate::ui::components::toolbar::OverflowState;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 오버플로 팝업 위젯
pub struct OverflowMenu<'a> {
    /// 오버플로 상태 (엔트리 + 선택 인덱스)
    state: &'a OverflowState,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 선택 배경색
    selected_bg: Color,
    /// 선택 전경색
    selected_fg: Color,
    /// 테두리 색상
    border_color: Color,
}

impl<'a> OverflowMenu<'a> {
    pub fn new(state: &'a OverflowState) -> Self {
        Self {
            state,
            bg_color: Color::Rgb(45, 45, 45),
            fg_color: Color::Rgb(212, 212, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            border_color: Color::Rgb(60, 60, 60),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.border_color = theme.panel_inactive_border.to_color();
        self
    }

    /// 팝업 너비 계산 (가장 긴 레이블 + 패딩)
    pub fn required_width(&self) -> u16 {
        let max_label = self
            .state
            .entries
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0);
        (max_label as u16 + 4).max(12)
    }

    /// 팝업 높이 계산 (엔트리 + 테두리)
    pub fn required_height(&self) -> u16 {
        self.state.entries.len() as u16 + 2
    }

    /// 표시자 아래에 붙는 팝업 영역 계산
    ///
    /// `anchor`는 툴바 영역. 팝업은 오른쪽 끝에 정렬되고 화면을 벗어나지 않게
    /// 잘린다.
    pub fn popup_area(&self, anchor: Rect, screen: Rect) -> Rect {
        let width = self.required_width().min(screen.width);
        let height = self
            .required_height()
            .min(screen.height.saturating_sub(anchor.y + 1));

        let right_edge = anchor.x + anchor.width;
        let x = right_edge.saturating_sub(width).max(screen.x);

        Rect {
            x,
            y: anchor.y + 1,
            width,
            height,
        }
    }
}

impl Widget for OverflowMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.entries.is_empty() || area.height < 3 {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        for (i, item) in self.state.entries.iter().enumerate() {
            if i as u16 + 1 >= area.height - 1 {
                break;
            }

            let y = area.y + 1 + i as u16;
            let inner_width = area.width.saturating_sub(2);

            if item.is_separator() {
                let line = "─".repeat(inner_width as usize);
                let span = Span::styled(&line, Style::default().fg(self.border_color));
                buf.set_span(area.x + 1, y, &span, inner_width);
                continue;
            }

            let is_selected = i == self.state.selected;
            let (bg, fg) = if is_selected {
                (self.selected_bg, self.selected_fg)
            } else {
                (self.bg_color, self.fg_color)
            };

            // 행 배경 채우기
            for x in area.x + 1..area.x + 1 + inner_width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(bg);
                }
            }

            let span = Span::styled(
                format!(" {}", item.label),
                Style::default().fg(fg).bg(bg),
            );
            buf.set_span(area.x + 1, y, &span, inner_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::toolbar::ToolbarItem;

    fn state_with_entries() -> OverflowState {
        OverflowState {
            indicator_shown: true,
            popup_open: true,
            entries: vec![
                ToolbarItem::button("move", "Move"),
                ToolbarItem::separator(),
                ToolbarItem::button("delete", "Delete"),
            ],
            selected: 0,
        }
    }

    #[test]
    fn test_required_size() {
        let state = state_with_entries();
        let menu = OverflowMenu::new(&state);

        // 최소 너비 12, 높이 = 엔트리 3 + 테두리 2
        assert_eq!(menu.required_width(), 12);
        assert_eq!(menu.required_height(), 5);
    }

    /// 팝업은 툴바 오른쪽 끝 아래에 붙음
    #[test]
    fn test_popup_area_anchored_right() {
        let state = state_with_entries();
        let menu = OverflowMenu::new(&state);

        let anchor = Rect::new(0, 0, 80, 1);
        let screen = Rect::new(0, 0, 80, 24);
        let area = menu.popup_area(anchor, screen);

        assert_eq!(area.y, 1);
        assert_eq!(area.x + area.width, 80);
    }

    /// 좁은 화면에서는 팝업이 화면 안으로 잘림
    #[test]
    fn test_popup_area_clamped_to_screen() {
        let state = state_with_entries();
        let menu = OverflowMenu::new(&state);

        let anchor = Rect::new(0, 0, 10, 1);
        let screen = Rect::new(0, 0, 10, 3);
        let area = menu.popup_area(anchor, screen);

        assert!(area.width <= 10);
        assert!(area.y + area.height <= 3);
    }
}
