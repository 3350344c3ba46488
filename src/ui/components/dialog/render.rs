// Dialog rendering - 다이얼로그 종류별 렌더링

use super::{Dialog, DialogKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 화면 중앙 영역 계산
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

impl Dialog<'_> {
    /// 공통 프레임 렌더링, 내부 영역 반환
    fn render_frame(&self, title: &str, dialog_area: Rect, buf: &mut Buffer) -> Rect {
        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .title(format!(" {} ", title));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);
        inner
    }

    /// 입력 한 줄 렌더링 (커서/전체 선택 표시)
    fn render_input_line(
        &self,
        value: &str,
        cursor_pos: usize,
        select_all: bool,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let base = Style::default().fg(self.fg_color).bg(self.bg_color);

        if select_all {
            // 전체 선택: 값 전체를 반전 표시
            let style = Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg);
            buf.set_stringn(area.x, area.y, value, area.width as usize, style);
            return;
        }

        buf.set_stringn(area.x, area.y, value, area.width as usize, base);

        if focused {
            // 커서 위치 반전
            let cursor_col = value[..cursor_pos.min(value.len())].width() as u16;
            if cursor_col < area.width {
                let cursor_char = value[cursor_pos.min(value.len())..]
                    .chars()
                    .next()
                    .unwrap_or(' ');
                buf.set_string(
                    area.x + cursor_col,
                    area.y,
                    cursor_char.to_string(),
                    base.add_modifier(Modifier::REVERSED),
                );
            }
        }
    }

    /// OK/Cancel 버튼 줄 렌더링
    fn render_buttons(
        &self,
        labels: [&str; 2],
        selected: usize,
        focused: bool,
        y: u16,
        inner: Rect,
        buf: &mut Buffer,
    ) {
        let total_width: u16 = labels
            .iter()
            .map(|l| l.width() as u16 + 4)
            .sum::<u16>()
            + 3;
        let mut x = inner.x + (inner.width.saturating_sub(total_width)) / 2;

        for (i, label) in labels.iter().enumerate() {
            let is_selected = i == selected;
            let style = if is_selected && focused {
                Style::default().fg(self.selected_fg).bg(self.selected_bg)
            } else if is_selected {
                Style::default()
                    .fg(self.accent_color)
                    .bg(self.bg_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color).bg(self.bg_color)
            };
            let text = format!("[ {} ]", label);
            buf.set_string(x, y, &text, style);
            x += text.width() as u16 + 3;
        }
    }

    /// 대상 경로 입력 다이얼로그
    pub(super) fn render_destination(&self, area: Rect, buf: &mut Buffer) {
        let DialogKind::Destination {
            title,
            prompt,
            value,
            cursor_pos,
            select_all,
            policy_prompt,
            policy_labels,
            policy_index,
            focused_field,
            selected_button,
            ok_label,
            cancel_label,
            ..
        } = self.kind
        else {
            return;
        };

        let dialog_area = centered_rect(56, 10, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 7 {
            return;
        }

        let label_style = Style::default().fg(self.fg_color).bg(self.bg_color);

        // 경로 입력
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            prompt,
            inner.width.saturating_sub(2) as usize,
            label_style,
        );
        let input_area = Rect {
            x: inner.x + 1,
            y: inner.y + 1,
            width: inner.width.saturating_sub(2),
            height: 1,
        };
        self.render_input_line(
            value,
            *cursor_pos,
            *select_all,
            *focused_field == 0,
            input_area,
            buf,
        );

        // 충돌 정책 선택
        let policy_prompt_y = inner.y + 3;
        buf.set_stringn(
            inner.x + 1,
            policy_prompt_y,
            policy_prompt,
            inner.width.saturating_sub(2) as usize,
            label_style,
        );
        if let Some(label) = policy_labels.get(*policy_index) {
            let selector = format!("◄ {} ►", label);
            let style = if *focused_field == 1 {
                Style::default().fg(self.selected_fg).bg(self.selected_bg)
            } else {
                Style::default().fg(self.accent_color).bg(self.bg_color)
            };
            buf.set_stringn(
                inner.x + 3,
                policy_prompt_y + 1,
                &selector,
                inner.width.saturating_sub(4) as usize,
                style,
            );
        }

        // 버튼
        self.render_buttons(
            [ok_label.as_str(), cancel_label.as_str()],
            *selected_button,
            *focused_field == 2,
            inner.y + inner.height - 1,
            inner,
            buf,
        );
    }

    /// 새 디렉토리 입력 다이얼로그
    pub(super) fn render_mkdir_input(&self, area: Rect, buf: &mut Buffer) {
        let DialogKind::MkdirInput {
            title,
            prompt,
            value,
            cursor_pos,
            selected_button,
            ok_label,
            cancel_label,
            ..
        } = self.kind
        else {
            return;
        };

        let dialog_area = centered_rect(50, 7, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 4 {
            return;
        }

        buf.set_stringn(
            inner.x + 1,
            inner.y,
            prompt,
            inner.width.saturating_sub(2) as usize,
            Style::default().fg(self.fg_color).bg(self.bg_color),
        );
        let input_area = Rect {
            x: inner.x + 1,
            y: inner.y + 1,
            width: inner.width.saturating_sub(2),
            height: 1,
        };
        self.render_input_line(value, *cursor_pos, false, true, input_area, buf);

        self.render_buttons(
            [ok_label.as_str(), cancel_label.as_str()],
            *selected_button,
            true,
            inner.y + inner.height - 1,
            inner,
            buf,
        );
    }

    /// 삭제 확인 다이얼로그
    pub(super) fn render_delete_confirm(&self, area: Rect, buf: &mut Buffer) {
        let DialogKind::DeleteConfirm {
            title,
            message,
            items,
            selected_button,
            ok_label,
            cancel_label,
        } = self.kind
        else {
            return;
        };

        const MAX_LISTED: usize = 6;
        let height = (5 + items.len().min(MAX_LISTED)) as u16;
        let dialog_area = centered_rect(50, height, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 3 {
            return;
        }

        let base = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            message,
            inner.width.saturating_sub(2) as usize,
            base.add_modifier(Modifier::BOLD),
        );

        for (i, item) in items.iter().take(MAX_LISTED).enumerate() {
            buf.set_stringn(
                inner.x + 2,
                inner.y + 1 + i as u16,
                item,
                inner.width.saturating_sub(3) as usize,
                base,
            );
        }

        self.render_buttons(
            [ok_label.as_str(), cancel_label.as_str()],
            *selected_button,
            true,
            inner.y + inner.height - 1,
            inner,
            buf,
        );
    }

    /// 충돌 다이얼로그
    pub(super) fn render_conflict(&self, area: Rect, buf: &mut Buffer) {
        let DialogKind::Conflict {
            title,
            message,
            options,
            selected_option,
        } = self.kind
        else {
            return;
        };

        let height = (4 + options.len()) as u16;
        let dialog_area = centered_rect(52, height, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 3 {
            return;
        }

        let base = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            message,
            inner.width.saturating_sub(2) as usize,
            base,
        );

        for (i, option) in options.iter().enumerate() {
            let style = if i == *selected_option {
                Style::default().fg(self.selected_fg).bg(self.selected_bg)
            } else {
                base
            };
            buf.set_stringn(
                inner.x + 2,
                inner.y + 2 + i as u16,
                format!(" {} ", option),
                inner.width.saturating_sub(3) as usize,
                style,
            );
        }
    }

    /// 진행률 다이얼로그
    pub(super) fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let DialogKind::Progress {
            title,
            current_file,
            files_line,
            hint,
        } = self.kind
        else {
            return;
        };

        let dialog_area = centered_rect(56, 7, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 4 {
            return;
        }

        let base = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            current_file,
            inner.width.saturating_sub(2) as usize,
            base,
        );
        buf.set_stringn(
            inner.x + 1,
            inner.y + 1,
            files_line,
            inner.width.saturating_sub(2) as usize,
            base.add_modifier(Modifier::BOLD),
        );
        buf.set_stringn(
            inner.x + 1,
            inner.y + inner.height - 1,
            hint,
            inner.width.saturating_sub(2) as usize,
            Style::default().fg(self.border_color).bg(self.bg_color),
        );
    }

    /// 에러/메시지 다이얼로그
    pub(super) fn render_text_dialog(&self, area: Rect, buf: &mut Buffer) {
        let (title, message, is_error) = match self.kind {
            DialogKind::Error { title, message } => (title, message, true),
            DialogKind::Message { title, message } => (title, message, false),
            _ => return,
        };

        let lines: Vec<&str> = message.lines().collect();
        let height = (4 + lines.len()) as u16;
        let dialog_area = centered_rect(52, height, area);
        let inner = self.render_frame(title, dialog_area, buf);
        if inner.height < 2 {
            return;
        }

        let color = if is_error {
            self.error_color
        } else {
            self.fg_color
        };
        let style = Style::default().fg(color).bg(self.bg_color);

        for (i, line) in lines.iter().enumerate() {
            if i as u16 >= inner.height.saturating_sub(1) {
                break;
            }
            buf.set_stringn(
                inner.x + 1,
                inner.y + i as u16,
                *line,
                inner.width.saturating_sub(2) as usize,
                style,
            );
        }
    }
}
