#![allow(dead_code)]

use crate::config::{Settings, SettingsStore};
use crate::core::actions::{action_by_id, Action};
use crate::models::transfer::{PendingTransfer, TransferStarter};
use crate::models::PanelState;
use crate::system::FileSystem;
use crate::text::Translator;
use crate::ui::components::toolbar::{create_default_toolbar, OverflowState, Toolbar, ToolbarItem};
use crate::ui::{ActivePanel, DialogKind, LayoutManager, ThemeManager};
use crate::utils::error::Result;
use crate::utils::formatter::format_file_size;
use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod dialogs;
mod navigation;
mod text_edit;
mod transfers;

/// 토스트 메시지 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 대상 경로 다이얼로그가 열려 있는 동안 보관하는 문맥
///
/// 다이얼로그가 확정되면 starter가 정확히 한 번 호출된다.
pub struct PendingDestination {
    /// 작업 대상으로 고정된 파일 목록
    pub files: Vec<PathBuf>,
    /// 전송 시작 확장점 구현
    pub starter: Box<dyn TransferStarter>,
    /// 에러 다이얼로그 제목 (전송 종류별)
    pub error_title: String,
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 좌측 패널 상태
    pub left_panel: PanelState,
    /// 우측 패널 상태
    pub right_panel: PanelState,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 문자열 조회 서비스 (시작 시 초기화, 이후 읽기 전용)
    pub translator: Translator,
    /// 영속 설정
    pub settings: Settings,
    /// 설정 저장소
    settings_store: SettingsStore,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 툴바 항목
    pub toolbar_items: Vec<ToolbarItem>,
    /// 오버플로 표시자/팝업 상태
    pub overflow: OverflowState,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 대상 경로 다이얼로그 문맥
    pub(crate) pending_destination: Option<PendingDestination>,
    /// 진행 중인 전송
    pub pending_transfer: Option<PendingTransfer>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    pub fn new() -> Result<Self> {
        let settings_store = SettingsStore::new();
        let mut settings = settings_store.load();

        // 사전 리소스 초기화 실패는 시작 단계 치명적 오류
        let translator = Translator::init(&mut settings)?;
        let _ = settings_store.save(&settings);

        let mut theme_manager = ThemeManager::new();
        if let Some(name) = settings.theme.clone() {
            let _ = theme_manager.switch_theme(&name);
        }

        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let filesystem = FileSystem::new();

        let mut left_panel = PanelState::new(current_dir.clone());
        left_panel.refresh(&filesystem)?;

        let mut right_panel = PanelState::new(current_dir);
        right_panel.refresh(&filesystem)?;

        let toolbar_items = create_default_toolbar(&translator);

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            left_panel,
            right_panel,
            filesystem,
            translator,
            settings,
            settings_store,
            theme_manager,
            toolbar_items,
            overflow: OverflowState::new(),
            dialog: None,
            pending_destination: None,
            pending_transfer: None,
            toast_message: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static TEST_APP_COUNTER: AtomicUsize = AtomicUsize::new(0);
        let suffix = TEST_APP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let settings_path = std::env::temp_dir().join(format!(
            "bokslcmd-test-settings-{}-{}.toml",
            std::process::id(),
            suffix
        ));

        let translator = Translator::from_language_tag("en").expect("builtin dictionary");
        let toolbar_items = create_default_toolbar(&translator);
        let current_dir = PathBuf::from(".");

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            left_panel: PanelState::new(current_dir.clone()),
            right_panel: PanelState::new(current_dir),
            filesystem: FileSystem::new(),
            translator,
            settings: Settings::default(),
            settings_store: SettingsStore::with_path(settings_path),
            theme_manager: ThemeManager::new(),
            toolbar_items,
            overflow: OverflowState::new(),
            dialog: None,
            pending_destination: None,
            pending_transfer: None,
            toast_message: None,
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        self.settings.theme = Some(self.theme_manager.current_name().to_string());
        let _ = self.settings_store.save(&self.settings);
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 활성 패널 반환
    pub fn active_panel(&self) -> ActivePanel {
        self.layout.active_panel()
    }

    /// 활성 패널 상태 반환
    pub fn active_panel_state(&self) -> &PanelState {
        match self.layout.active_panel() {
            ActivePanel::Left => &self.left_panel,
            ActivePanel::Right => &self.right_panel,
        }
    }

    /// 활성 패널 상태 반환 (mutable)
    pub fn active_panel_state_mut(&mut self) -> &mut PanelState {
        match self.layout.active_panel() {
            ActivePanel::Left => &mut self.left_panel,
            ActivePanel::Right => &mut self.right_panel,
        }
    }

    /// 비활성 패널 상태 반환 (대상 경로 다이얼로그의 초기값)
    pub fn inactive_panel_state(&self) -> &PanelState {
        match self.layout.active_panel() {
            ActivePanel::Left => &self.right_panel,
            ActivePanel::Right => &self.left_panel,
        }
    }

    /// 패널 전환 (Tab)
    pub fn toggle_panel(&mut self) {
        self.layout.toggle_panel();
    }

    /// 다이얼로그 활성 여부
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 오버플로 팝업 활성 여부
    pub fn is_overflow_popup_active(&self) -> bool {
        self.overflow.popup_open
    }

    /// 레이아웃 갱신 + 오버플로 표시자 재계산
    ///
    /// 리사이즈 알림을 받을 때마다 가시성 판정을 다시 돌린다.
    pub fn update_layout(&mut self, area: ratatui::layout::Rect) {
        self.layout.update(area);
        let visible_width = self.toolbar_visible_width();
        self.overflow
            .update_on_resize(&self.toolbar_items, visible_width);
    }

    /// 툴바에서 항목 배치에 쓸 수 있는 너비
    pub fn toolbar_visible_width(&self) -> u16 {
        Toolbar::visible_width(self.layout.areas().toolbar.width)
    }

    /// 오버플로 팝업 토글 (표시자 활성화)
    pub fn toggle_overflow_popup(&mut self) {
        let visible_width = self.toolbar_visible_width();
        self.overflow
            .toggle_popup(&self.toolbar_items, visible_width);
    }

    /// 오버플로 팝업 닫기
    pub fn close_overflow_popup(&mut self) {
        self.overflow.close_popup();
    }

    /// 오버플로 팝업에서 선택한 액션 실행
    ///
    /// 어떤 경로로든 팝업은 먼저 닫힌다 (표시자 눌림 해제 포함).
    pub fn activate_overflow_selection(&mut self) {
        let action_id = self
            .overflow
            .selected_action_id()
            .map(|id| id.to_string());
        self.close_overflow_popup();

        if let Some(id) = action_id {
            self.execute_action_by_id(&id);
        }
    }

    /// 액션 ID로 실행 (툴바/오버플로 메뉴)
    pub fn execute_action_by_id(&mut self, id: &str) {
        if let Some(action) = action_by_id(id) {
            self.execute_action(action);
        }
    }

    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            // Navigation
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::GoToParent => self.go_to_parent(),
            Action::EnterSelected => self.enter_selected(),
            Action::TogglePanel => self.toggle_panel(),
            // File operations
            Action::Copy => self.start_copy(),
            Action::Move => self.start_move(),
            Action::Unzip => self.start_unzip(),
            Action::Download => self.start_download(),
            Action::MakeDirectory => self.start_mkdir(),
            Action::Delete => self.start_delete(),
            // Selection
            Action::ToggleMark => self.toggle_mark_and_move_down(),
            // System
            Action::Refresh => self.refresh_panels(),
            Action::ToggleHidden => self.toggle_hidden(),
            Action::OpenOverflow => self.toggle_overflow_popup(),
            Action::CycleLanguage => self.cycle_language(),
            Action::Quit => self.quit(),
        }
    }

    /// 다음 언어로 전환 (사전 다시 로드 + 레이블 재구성 + 설정 저장)
    pub fn cycle_language(&mut self) {
        let available = Translator::available_languages();
        let current = self.translator.language();
        let current_index = available
            .iter()
            .position(|tag| *tag == current)
            .unwrap_or(0);
        let next_tag = available[(current_index + 1) % available.len()];

        match Translator::from_language_tag(next_tag) {
            Ok(translator) => {
                self.translator = translator;
                self.settings.language = Some(next_tag.to_string());
                let _ = self.settings_store.save(&self.settings);
                self.rebuild_toolbar();
                // 언어 표시 이름은 2차 사전에서 나옴
                let display = self.translator.tr(next_tag);
                self.set_toast(&display);
            }
            Err(e) => {
                tracing::warn!("language switch failed: {}", e);
            }
        }
    }

    /// 툴바 레이블 재구성 (언어 변경 후)
    fn rebuild_toolbar(&mut self) {
        self.toolbar_items = create_default_toolbar(&self.translator);
        let visible_width = self.toolbar_visible_width();
        self.overflow
            .update_on_resize(&self.toolbar_items, visible_width);
    }

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 표시할 토스트 반환 (만료되면 제거)
    pub fn current_toast(&mut self) -> Option<String> {
        let expired = matches!(
            &self.toast_message,
            Some((_, created)) if created.elapsed() >= TOAST_DURATION
        );
        if expired {
            self.toast_message = None;
        }
        self.toast_message
            .as_ref()
            .map(|(message, _)| message.clone())
    }

    /// 상태바 왼쪽 요약 문자열
    pub fn status_summary(&self) -> String {
        let panel = self.active_panel_state();
        let files = panel.file_count().to_string();
        let dirs = panel.dir_count().to_string();
        let size = format_file_size(panel.total_size());
        let mut summary = self
            .translator
            .get("status.summary", &[&files, &dirs, &size]);

        if !panel.marked.is_empty() {
            let marked = panel.marked.len().to_string();
            summary.push_str(" | ");
            summary.push_str(&self.translator.get("status.marked", &[&marked]));
        }

        summary
    }
}

#[cfg(test)]
mod tests;
