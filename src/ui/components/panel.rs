#![allow(dead_code)]
// Panel component - 파일 목록 패널

use crate::models::FileEntry;
use crate::ui::Theme;
use crate::utils::formatter::{format_date, format_file_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::collections::HashSet;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// 패널 상태 표시
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Active,
    Inactive,
}

/// 파일 목록 패널 위젯
pub struct Panel<'a> {
    /// 제목 (현재 경로)
    title: &'a str,
    /// 활성/비활성
    status: PanelStatus,
    /// 파일 엔트리
    entries: &'a [FileEntry],
    /// 선택된 항목 인덱스
    selected_index: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 마킹된 항목 경로
    marked: Option<&'a HashSet<PathBuf>>,
    /// 색상
    bg_color: Color,
    fg_color: Color,
    selected_fg: Color,
    selected_bg: Color,
    marked_color: Color,
    directory_color: Color,
    symlink_color: Color,
    active_border: Color,
    inactive_border: Color,
}

impl<'a> Default for Panel<'a> {
    fn default() -> Self {
        Self {
            title: "",
            status: PanelStatus::Inactive,
            entries: &[],
            selected_index: 0,
            scroll_offset: 0,
            marked: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            selected_fg: Color::White,
            selected_bg: Color::Rgb(0, 120, 212),
            marked_color: Color::Rgb(220, 220, 170),
            directory_color: Color::Rgb(86, 156, 214),
            symlink_color: Color::Rgb(206, 145, 120),
            active_border: Color::Rgb(0, 120, 212),
            inactive_border: Color::Rgb(60, 60, 60),
        }
    }
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목 설정
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// 활성/비활성 상태 설정
    pub fn status(mut self, status: PanelStatus) -> Self {
        self.status = status;
        self
    }

    /// 엔트리 목록 설정
    pub fn entries(mut self, entries: &'a [FileEntry]) -> Self {
        self.entries = entries;
        self
    }

    /// 선택 인덱스 설정
    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// 스크롤 오프셋 설정
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 마킹 목록 설정
    pub fn marked(mut self, marked: &'a HashSet<PathBuf>) -> Self {
        self.marked = Some(marked);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.marked_color = theme.file_marked.to_color();
        self.directory_color = theme.directory.to_color();
        self.symlink_color = theme.symlink.to_color();
        self.active_border = theme.panel_active_border.to_color();
        self.inactive_border = theme.panel_inactive_border.to_color();
        self
    }

    /// 한 줄 렌더링
    fn render_row(&self, entry: &FileEntry, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let is_marked = self
            .marked
            .map(|set| set.contains(&entry.path))
            .unwrap_or(false);

        let (fg, bg) = if is_selected && self.status == PanelStatus::Active {
            (self.selected_fg, self.selected_bg)
        } else if is_marked {
            (self.marked_color, self.bg_color)
        } else if entry.is_directory() {
            (self.directory_color, self.bg_color)
        } else if entry.file_type == crate::models::FileType::Symlink {
            (self.symlink_color, self.bg_color)
        } else {
            (self.fg_color, self.bg_color)
        };

        let mut style = Style::default().fg(fg).bg(bg);
        if is_marked {
            style = style.add_modifier(Modifier::BOLD);
        }

        // 행 배경 채우기
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_bg(bg);
            }
        }

        // 이름 | 크기(9) | 날짜(16)
        const SIZE_WIDTH: u16 = 9;
        const DATE_WIDTH: u16 = 16;

        let mark_prefix = if is_marked { "*" } else { " " };
        let name_prefix = if entry.is_directory() { "/" } else { "" };
        let name = format!("{}{}{}", mark_prefix, name_prefix, entry.name);

        let name_width = area
            .width
            .saturating_sub(SIZE_WIDTH + DATE_WIDTH + 2)
            .max(4);
        buf.set_stringn(area.x, area.y, &name, name_width as usize, style);

        if area.width > SIZE_WIDTH + DATE_WIDTH + 2 {
            let size_text = if entry.is_directory() {
                "<DIR>".to_string()
            } else {
                format_file_size(entry.size)
            };
            let size_x = area.x + name_width + 1;
            let padded = format!("{:>width$}", size_text, width = SIZE_WIDTH as usize);
            buf.set_stringn(size_x, area.y, &padded, SIZE_WIDTH as usize, style);

            let date_x = size_x + SIZE_WIDTH + 1;
            let date_width = (area.x + area.width).saturating_sub(date_x).min(DATE_WIDTH);
            if date_width > 0 {
                buf.set_stringn(
                    date_x,
                    area.y,
                    format_date(entry.modified),
                    date_width as usize,
                    style,
                );
            }
        }
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let border_color = match self.status {
            PanelStatus::Active => self.active_border,
            PanelStatus::Inactive => self.inactive_border,
        };

        // 제목이 길면 앞부분을 자름 (UTF-8 경계 유지)
        let max_title = area.width.saturating_sub(4) as usize;
        let title = if self.title.width() > max_title {
            let max_tail = max_title.saturating_sub(1);
            let mut tail: Vec<char> = Vec::new();
            let mut used = 0usize;
            for c in self.title.chars().rev() {
                let w = c.to_string().width();
                if used + w > max_tail {
                    break;
                }
                used += w;
                tail.push(c);
            }
            tail.reverse();
            format!("…{}", tail.into_iter().collect::<String>())
        } else {
            self.title.to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let visible_rows = inner.height as usize;
        for (row, index) in (self.scroll_offset..self.entries.len())
            .take(visible_rows)
            .enumerate()
        {
            let entry = &self.entries[index];
            let row_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            };
            self.render_row(entry, index == self.selected_index, row_area, buf);
        }
    }
}
