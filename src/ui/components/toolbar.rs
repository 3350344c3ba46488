#![allow(dead_code)]
// Toolbar component - 상단 툴바 컴포넌트
//
// 버튼/구분선으로 이루어진 가로 막대. 터미널이 좁아져 뒤쪽 항목이 잘리면
// 오른쪽 끝에 오버플로 표시자(»)가 나타나고, 표시자를 활성화하면 잘린
// 항목들이 팝업 메뉴로 나온다.

use crate::core::actions::ACTION_DEFS;
use crate::text::Translator;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 오버플로 표시자가 차지하는 오른쪽 영역 너비 (" [»]")
pub const OVERFLOW_INDICATOR_WIDTH: u16 = 4;

/// 항목 사이 간격 (셀)
const ITEM_GAP: u16 = 1;

/// 툴바 항목 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItemKind {
    /// 액션 버튼
    Button,
    /// 구분선
    Separator,
}

/// 툴바 항목
#[derive(Debug, Clone)]
pub struct ToolbarItem {
    /// 액션 ID
    pub id: String,
    /// 표시 레이블
    pub label: String,
    /// 항목 종류
    pub kind: ToolbarItemKind,
    /// 활성화 여부
    pub enabled: bool,
}

impl ToolbarItem {
    /// 버튼 항목 생성
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ToolbarItemKind::Button,
            enabled: true,
        }
    }

    /// 구분선 생성
    pub fn separator() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            kind: ToolbarItemKind::Separator,
            enabled: false,
        }
    }

    /// 구분선인지 확인
    pub fn is_separator(&self) -> bool {
        self.kind == ToolbarItemKind::Separator
    }

    /// 렌더링 너비 (버튼은 양쪽 공백 포함, 구분선은 1)
    pub fn width(&self) -> u16 {
        match self.kind {
            ToolbarItemKind::Button => self.label.width() as u16 + 2,
            ToolbarItemKind::Separator => 1,
        }
    }
}

/// 각 항목의 (x, 너비) 목록 계산
///
/// 항목은 왼쪽에서 오른쪽으로 간격 1셀씩 두고 배치된다.
pub fn item_extents(items: &[ToolbarItem]) -> Vec<(u16, u16)> {
    let mut extents = Vec::with_capacity(items.len());
    let mut x: u16 = 0;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            x += ITEM_GAP;
        }
        let width = item.width();
        extents.push((x, width));
        x += width;
    }

    extents
}

/// 항목 가시성 판정
///
/// 수평 범위 전체가 보이는 너비 안에 있어야만 보이는 것으로 친다.
/// 일부만 보이는 항목은 보이지 않는 것으로 취급한다.
pub fn is_fully_visible(extent: (u16, u16), visible_width: u16) -> bool {
    let (x, width) = extent;
    x + width <= visible_width
}

/// 오버플로 발생 여부
///
/// 마지막 항목의 가시성으로 판정한다. 항목 배치가 왼쪽부터 단조 증가이므로
/// 마지막 항목이 안 보이면 잘린 항목이 하나 이상 존재한다.
pub fn has_overflow(items: &[ToolbarItem], visible_width: u16) -> bool {
    match item_extents(items).last() {
        Some(&extent) => !is_fully_visible(extent, visible_width),
        None => false,
    }
}

/// 잘린 항목 목록 (전수 검사)
///
/// 원래 순서 유지, 구분선은 구분선 그대로 포함된다.
pub fn clipped_items(items: &[ToolbarItem], visible_width: u16) -> Vec<ToolbarItem> {
    item_extents(items)
        .iter()
        .zip(items.iter())
        .filter(|(&extent, _)| !is_fully_visible(extent, visible_width))
        .map(|(_, item)| item.clone())
        .collect()
}

/// 오버플로 표시자/팝업 상태
///
/// 표시자의 눌림 상태는 팝업이 열려 있는 동안으로 정의된다. 팝업이 어떤
/// 이유로든 닫히면 (선택/Esc/오버플로 해소) 눌림 상태도 함께 풀린다.
#[derive(Debug, Clone, Default)]
pub struct OverflowState {
    /// 표시자 표시 여부 (잘린 항목 존재)
    pub indicator_shown: bool,
    /// 팝업 열림 여부
    pub popup_open: bool,
    /// 팝업 엔트리 (열릴 때마다 다시 만들고 닫히면 파기)
    pub entries: Vec<ToolbarItem>,
    /// 팝업에서 선택된 엔트리 인덱스
    pub selected: usize,
}

impl OverflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 리사이즈 시 표시자 상태 재계산
    ///
    /// 오버플로가 사라지면 열려 있던 팝업도 닫는다.
    pub fn update_on_resize(&mut self, items: &[ToolbarItem], visible_width: u16) {
        self.indicator_shown = has_overflow(items, visible_width);
        if !self.indicator_shown && self.popup_open {
            self.close_popup();
        }
    }

    /// 팝업 열기
    ///
    /// 잘린 항목을 활성화 시점에 다시 검사해서 엔트리를 만든다.
    /// 실제로 잘린 항목이 없으면 (표시자 상태가 낡은 경우) 열지 않는다.
    pub fn open_popup(&mut self, items: &[ToolbarItem], visible_width: u16) -> bool {
        let entries = clipped_items(items, visible_width);
        if entries.iter().all(|item| item.is_separator()) {
            self.close_popup();
            return false;
        }

        self.selected = entries
            .iter()
            .position(|item| !item.is_separator())
            .unwrap_or(0);
        self.entries = entries;
        self.popup_open = true;
        true
    }

    /// 팝업 닫기 (엔트리 파기 + 표시자 눌림 해제)
    pub fn close_popup(&mut self) {
        self.popup_open = false;
        self.entries.clear();
        self.selected = 0;
    }

    /// 팝업 토글
    pub fn toggle_popup(&mut self, items: &[ToolbarItem], visible_width: u16) {
        if self.popup_open {
            self.close_popup();
        } else {
            self.open_popup(items, visible_width);
        }
    }

    /// 표시자 눌림 상태 (팝업이 열려 있는 동안)
    pub fn indicator_selected(&self) -> bool {
        self.popup_open
    }

    /// 다음 엔트리로 이동 (구분선 건너뛰기)
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let mut index = (self.selected + 1) % len;
        while self.entries[index].is_separator() && index != self.selected {
            index = (index + 1) % len;
        }
        self.selected = index;
    }

    /// 이전 엔트리로 이동 (구분선 건너뛰기)
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let mut index = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
        while self.entries[index].is_separator() && index != self.selected {
            index = if index == 0 { len - 1 } else { index - 1 };
        }
        self.selected = index;
    }

    /// 선택된 엔트리의 액션 ID 반환 (구분선이면 None)
    pub fn selected_action_id(&self) -> Option<&str> {
        self.entries
            .get(self.selected)
            .filter(|item| !item.is_separator() && item.enabled)
            .map(|item| item.id.as_str())
    }
}

/// 툴바 위젯
pub struct Toolbar<'a> {
    /// 툴바 항목
    items: &'a [ToolbarItem],
    /// 오버플로 표시자 표시 여부
    indicator_shown: bool,
    /// 오버플로 표시자 눌림 여부
    indicator_selected: bool,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 버튼 강조색
    accent_color: Color,
    /// 구분선 색상
    separator_color: Color,
}

impl<'a> Default for Toolbar<'a> {
    fn default() -> Self {
        Self {
            items: &[],
            indicator_shown: false,
            indicator_selected: false,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(0, 120, 212),
            separator_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> Toolbar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 툴바 항목 설정
    pub fn items(mut self, items: &'a [ToolbarItem]) -> Self {
        self.items = items;
        self
    }

    /// 오버플로 상태 반영
    pub fn overflow(mut self, state: &OverflowState) -> Self {
        self.indicator_shown = state.indicator_shown;
        self.indicator_selected = state.indicator_selected();
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.fg_color = theme.toolbar_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self.separator_color = theme.panel_inactive_border.to_color();
        self
    }

    /// 항목 배치에 쓸 수 있는 너비 (표시자 영역 제외)
    pub fn visible_width(area_width: u16) -> u16 {
        area_width.saturating_sub(OVERFLOW_INDICATOR_WIDTH)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let visible_width = Self::visible_width(area.width);
        let extents = item_extents(self.items);

        for (item, &extent) in self.items.iter().zip(extents.iter()) {
            // 일부만 보이는 항목은 아예 그리지 않음
            if !is_fully_visible(extent, visible_width) {
                continue;
            }

            let (x, width) = extent;
            if item.is_separator() {
                let style = Style::default().fg(self.separator_color).bg(self.bg_color);
                buf.set_string(area.x + x, area.y, "│", style);
            } else {
                let style = Style::default().fg(self.fg_color).bg(self.bg_color);
                buf.set_stringn(
                    area.x + x,
                    area.y,
                    format!(" {} ", item.label),
                    width as usize,
                    style,
                );
            }
        }

        // 오버플로 표시자 (항상 마지막 요소, 잘린 항목이 있을 때만 표시)
        if self.indicator_shown && area.width >= OVERFLOW_INDICATOR_WIDTH {
            let style = if self.indicator_selected {
                Style::default()
                    .fg(self.fg_color)
                    .bg(self.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color).bg(self.bg_color)
            };
            let x = area.x + area.width - (OVERFLOW_INDICATOR_WIDTH - 1);
            buf.set_string(x, area.y, "[»]", style);
        }
    }
}

/// 툴바 버튼 생성 헬퍼 (레지스트리에서 레이블 키 조회)
fn toolbar_button(translator: &Translator, id: &str) -> ToolbarItem {
    let label = ACTION_DEFS
        .iter()
        .find(|def| def.id == id)
        .map(|def| translator.tr(def.label_key))
        .unwrap_or_else(|| id.to_string());
    ToolbarItem::button(id, label)
}

/// 기본 툴바 생성
pub fn create_default_toolbar(translator: &Translator) -> Vec<ToolbarItem> {
    vec![
        toolbar_button(translator, "copy"),
        toolbar_button(translator, "move"),
        toolbar_button(translator, "unzip"),
        toolbar_button(translator, "download"),
        ToolbarItem::separator(),
        toolbar_button(translator, "mkdir"),
        toolbar_button(translator, "delete"),
        ToolbarItem::separator(),
        toolbar_button(translator, "refresh"),
        toolbar_button(translator, "quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<ToolbarItem> {
        vec![
            ToolbarItem::button("copy", "Copy"),   // x=0,  w=6
            ToolbarItem::button("move", "Move"),   // x=7,  w=6
            ToolbarItem::separator(),              // x=14, w=1
            ToolbarItem::button("delete", "Delete"), // x=16, w=8
        ]
    }

    #[test]
    fn test_item_extents_monotonic() {
        let items = sample_items();
        let extents = item_extents(&items);

        assert_eq!(extents, vec![(0, 6), (7, 6), (14, 1), (16, 8)]);
        // x는 항상 단조 증가
        for pair in extents.windows(2) {
            assert!(pair[0].0 + pair[0].1 <= pair[1].0);
        }
    }

    /// 모든 항목의 오른쪽 끝이 보이는 너비 이하면 표시자는 절대 나오지 않음
    #[test]
    fn test_no_overflow_when_all_fit() {
        let items = sample_items();
        assert!(!has_overflow(&items, 24));
        assert!(!has_overflow(&items, 100));
        assert!(clipped_items(&items, 24).is_empty());
    }

    /// 마지막 항목이 잘리면 표시자가 나옴
    #[test]
    fn test_overflow_when_last_item_clipped() {
        let items = sample_items();
        // 마지막 버튼은 x=16, w=8 → 24 필요
        assert!(has_overflow(&items, 23));
        assert!(has_overflow(&items, 10));
    }

    /// 일부만 보이는 항목은 보이지 않는 것으로 취급
    #[test]
    fn test_partially_visible_is_invisible() {
        assert!(is_fully_visible((0, 6), 6));
        assert!(!is_fully_visible((0, 6), 5));
        assert!(!is_fully_visible((16, 8), 23));
        assert!(is_fully_visible((16, 8), 24));
    }

    /// 팝업 내용은 잘린 항목 전부, 원래 순서, 구분선 유지
    #[test]
    fn test_clipped_items_order_and_separators() {
        let items = sample_items();
        // 너비 14: "Copy", "Move"만 완전히 보임 (구분선은 x=14라서 잘림)
        let clipped = clipped_items(&items, 14);

        assert_eq!(clipped.len(), 2);
        assert!(clipped[0].is_separator());
        assert_eq!(clipped[1].id, "delete");
    }

    /// 빈 툴바는 오버플로가 없음
    #[test]
    fn test_empty_bar_never_overflows() {
        let items: Vec<ToolbarItem> = Vec::new();
        assert!(!has_overflow(&items, 0));
        assert!(clipped_items(&items, 0).is_empty());

        let mut state = OverflowState::new();
        state.update_on_resize(&items, 0);
        assert!(!state.indicator_shown);
        assert!(!state.open_popup(&items, 0));
    }

    /// 리사이즈에 따라 표시자 상태가 양방향으로 전이
    #[test]
    fn test_update_on_resize_transitions() {
        let items = sample_items();
        let mut state = OverflowState::new();

        state.update_on_resize(&items, 10);
        assert!(state.indicator_shown);

        state.update_on_resize(&items, 50);
        assert!(!state.indicator_shown);
    }

    /// 오버플로가 사라지면 열려 있던 팝업도 닫히고 눌림 상태가 풀림
    #[test]
    fn test_resize_closes_open_popup() {
        let items = sample_items();
        let mut state = OverflowState::new();

        state.update_on_resize(&items, 10);
        assert!(state.open_popup(&items, 10));
        assert!(state.indicator_selected());

        state.update_on_resize(&items, 50);
        assert!(!state.popup_open);
        assert!(!state.indicator_selected());
        assert!(state.entries.is_empty());
    }

    /// 팝업은 열릴 때마다 현재 잘린 항목으로 다시 만들어짐
    #[test]
    fn test_popup_rebuilt_on_each_activation() {
        let items = sample_items();
        let mut state = OverflowState::new();

        assert!(state.open_popup(&items, 14));
        assert_eq!(state.entries.len(), 2);
        state.close_popup();

        // 더 좁아지면 더 많은 항목이 팝업으로
        assert!(state.open_popup(&items, 6));
        assert_eq!(state.entries.len(), 3);
        assert_eq!(state.entries[0].id, "move");
    }

    /// 낡은 표시자 상태로 활성화해도 실제 잘린 항목이 없으면 열리지 않음
    #[test]
    fn test_stale_activation_is_noop() {
        let items = sample_items();
        let mut state = OverflowState::new();
        state.indicator_shown = true; // 낡은 상태 가정

        assert!(!state.open_popup(&items, 100));
        assert!(!state.popup_open);
        assert!(!state.indicator_selected());
    }

    /// 어떤 경로로 닫혀도 표시자 눌림 상태는 항상 풀림
    #[test]
    fn test_close_always_resets_selection() {
        let items = sample_items();
        let mut state = OverflowState::new();

        // 선택으로 닫기
        state.open_popup(&items, 14);
        assert!(state.indicator_selected());
        state.close_popup();
        assert!(!state.indicator_selected());

        // 토글로 닫기
        state.toggle_popup(&items, 14);
        assert!(state.indicator_selected());
        state.toggle_popup(&items, 14);
        assert!(!state.indicator_selected());
    }

    /// 팝업 탐색은 구분선을 건너뜀
    #[test]
    fn test_popup_navigation_skips_separators() {
        let items = sample_items();
        let mut state = OverflowState::new();

        // 너비 6: "Copy"만 보임 → 팝업: Move, 구분선, Delete
        state.open_popup(&items, 6);
        assert_eq!(state.selected_action_id(), Some("move"));

        state.select_next();
        assert_eq!(state.selected_action_id(), Some("delete"));

        state.select_next();
        assert_eq!(state.selected_action_id(), Some("move"));

        state.select_prev();
        assert_eq!(state.selected_action_id(), Some("delete"));
    }

    /// 첫 엔트리가 구분선이면 선택은 첫 버튼에서 시작
    #[test]
    fn test_popup_initial_selection_skips_leading_separator() {
        let items = sample_items();
        let mut state = OverflowState::new();

        // 너비 14: 팝업은 [구분선, Delete]
        state.open_popup(&items, 14);
        assert_eq!(state.selected_action_id(), Some("delete"));
    }

    #[test]
    fn test_visible_width_reserves_indicator_region() {
        assert_eq!(Toolbar::visible_width(80), 80 - OVERFLOW_INDICATOR_WIDTH);
        assert_eq!(Toolbar::visible_width(2), 0);
    }

    /// 기본 툴바는 레지스트리의 레이블을 로컬라이즈해서 사용
    #[test]
    fn test_create_default_toolbar() {
        let translator = Translator::from_language_tag("en").unwrap();
        let items = create_default_toolbar(&translator);

        assert_eq!(items[0].id, "copy");
        assert_eq!(items[0].label, "Copy");
        assert!(items.iter().any(|item| item.is_separator()));
        assert_eq!(items.last().unwrap().id, "quit");
    }
}
