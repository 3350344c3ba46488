mod app;
mod config;
mod core;
mod models;
mod system;
mod text;
mod ui;
mod utils;

use anyhow::Context;
use app::App;
use crate::core::actions::find_action;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::Style,
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::sync::Mutex;
use ui::{Dialog, DialogKind, OverflowMenu, Panel, PanelStatus, StatusBar, Toolbar};
use utils::error::Result;

/// 로그는 TUI를 망치지 않도록 파일로만 쓴다
fn init_logging() -> anyhow::Result<()> {
    let log_dir = dirs::home_dir()
        .context("home directory not found")?
        .join(".bokslcmd");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("bokslcmd.log"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging().context("failed to initialize logging")?;

    // 사전 리소스가 없으면 여기서 중단된다
    let mut app = App::new().context("failed to initialize application")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 + 오버플로 표시자 재계산 (리사이즈 대응)
            app.update_layout(size);

            if app.layout.is_too_small() {
                render_too_small(f, app);
            } else {
                render_main_ui(f, app);
            }
        })?;

        // 전송 진행 중에는 짧은 타임아웃으로 이벤트 체크
        let poll_timeout = if app.is_transfer_processing() {
            std::time::Duration::from_millis(1)
        } else {
            std::time::Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.is_dialog_active() {
                    handle_dialog_keys(app, key.modifiers, key.code);
                } else if app.is_overflow_popup_active() {
                    handle_overflow_keys(app, key.modifiers, key.code);
                } else {
                    handle_normal_keys(app, key.modifiers, key.code);
                }
            }
        }

        // 전송 진행 중이면 다음 엔트리 처리
        if app.is_transfer_processing() {
            app.process_next_transfer();
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 오버플로 팝업 모드 키 처리
fn handle_overflow_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        // 어떤 이유로 닫혀도 표시자 눌림 상태는 풀린다
        KeyCode::Esc | KeyCode::Char('`') => app.close_overflow_popup(),
        KeyCode::Up | KeyCode::Char('k') => app.overflow.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.overflow.select_next(),
        KeyCode::Enter => app.activate_overflow_selection(),
        _ => {}
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let dialog_kind = match &app.dialog {
        Some(kind) => kind.clone(),
        None => return,
    };

    match dialog_kind {
        DialogKind::Destination { .. } => {
            handle_destination_dialog_keys(app, modifiers, code);
        }
        DialogKind::MkdirInput { .. } => {
            handle_mkdir_dialog_keys(app, modifiers, code);
        }
        DialogKind::DeleteConfirm { .. } => {
            handle_delete_confirm_dialog_keys(app, modifiers, code);
        }
        DialogKind::Conflict { .. } => {
            handle_conflict_dialog_keys(app, modifiers, code);
        }
        DialogKind::Progress { .. } => {
            if code == KeyCode::Esc {
                app.cancel_transfer();
            }
        }
        DialogKind::Error { .. } | DialogKind::Message { .. } => {
            handle_message_dialog_keys(app, modifiers, code);
        }
    }
}

/// 대상 경로 다이얼로그 키 처리
fn handle_destination_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 취소
        (_, KeyCode::Esc) => app.cancel_destination_dialog(),
        // 필드 순환 (경로 → 정책 → 버튼)
        (KeyModifiers::NONE, KeyCode::Tab) => app.destination_next_field(),
        (KeyModifiers::SHIFT, KeyCode::BackTab) => app.destination_prev_field(),
        // 확정 (입력 필드 제출 포함). 버튼 필드에서 Cancel이 선택된 경우만 취소
        (_, KeyCode::Enter) => {
            if app.destination_focused_field() == Some(2)
                && app.destination_selected_button() == Some(1)
            {
                app.cancel_destination_dialog();
            } else {
                app.confirm_destination_dialog();
            }
        }
        // 문자 입력
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.destination_input_char(c);
        }
        (_, KeyCode::Backspace) => app.destination_input_backspace(),
        (_, KeyCode::Delete) => app.destination_input_delete(),
        // 커서/선택 이동
        (_, KeyCode::Left) => app.destination_input_left(),
        (_, KeyCode::Right) => app.destination_input_right(),
        (_, KeyCode::Home) => app.destination_input_home(),
        (_, KeyCode::End) => app.destination_input_end(),
        _ => {}
    }
}

/// 새 디렉토리 입력 다이얼로그 키 처리
fn handle_mkdir_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Esc) => app.close_dialog(),
        (_, KeyCode::Enter) => app.confirm_mkdir(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.mkdir_toggle_button();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.mkdir_input_char(c);
        }
        (_, KeyCode::Backspace) => app.mkdir_input_backspace(),
        _ => {}
    }
}

/// 삭제 확인 다이얼로그 키 처리
fn handle_delete_confirm_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Esc) => app.close_dialog(),
        (_, KeyCode::Enter) => app.confirm_delete(),
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => {
            app.delete_confirm_toggle();
        }
        _ => {}
    }
}

/// 충돌 다이얼로그 키 처리
fn handle_conflict_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => app.conflict_next(),
        (KeyModifiers::SHIFT, KeyCode::BackTab) | (_, KeyCode::Up) => app.conflict_prev(),
        (_, KeyCode::Enter) => {
            if let Some(resolution) = app.conflict_resolution() {
                app.handle_conflict(resolution);
            }
        }
        (_, KeyCode::Esc) => app.cancel_transfer(),
        _ => {}
    }
}

/// 메시지/에러 다이얼로그 키 처리
fn handle_message_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// 터미널이 너무 작을 때 경고 표시
fn render_too_small(f: &mut ratatui::Frame<'_>, app: &App) {
    let (width, height) = app.layout.terminal_size();
    let message = format!(
        "{}\n{}x{} < {}x{}",
        app.translator.tr("warn.too_small"),
        width,
        height,
        ui::MIN_WIDTH,
        ui::MIN_HEIGHT,
    );
    let warning = Paragraph::new(message)
        .style(Style::default().fg(app.theme_manager.current().warning.to_color()));
    f.render_widget(warning, f.area());
}

/// 패널 위젯 생성 + 렌더링 (좌/우 공통)
fn render_panel(
    f: &mut ratatui::Frame<'_>,
    panel_state: &models::PanelState,
    is_active: bool,
    theme: &ui::Theme,
    area: ratatui::layout::Rect,
) {
    let path = panel_state.current_path.to_string_lossy();
    let panel = Panel::new()
        .title(&path)
        .status(if is_active {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        })
        .entries(&panel_state.entries)
        .selected_index(panel_state.selected_index)
        .scroll_offset(panel_state.scroll_offset)
        .marked(&panel_state.marked)
        .theme(theme);
    f.render_widget(panel, area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &mut App) {
    let areas = app.layout.areas().clone();
    let active_panel = app.layout.active_panel();

    // 스크롤 오프셋 조정 (mutable 작업은 렌더링 전에)
    let visible_rows = areas.left_panel.height.saturating_sub(2) as usize;
    app.left_panel.ensure_visible(visible_rows);
    app.right_panel.ensure_visible(visible_rows);

    let toast = app.current_toast();
    let summary = app.status_summary();
    let language = app.translator.language().to_string();

    let theme = app.theme_manager.current();

    let toolbar = Toolbar::new()
        .items(&app.toolbar_items)
        .overflow(&app.overflow)
        .theme(theme);
    f.render_widget(toolbar, areas.toolbar);

    render_panel(
        f,
        &app.left_panel,
        active_panel == ui::ActivePanel::Left,
        theme,
        areas.left_panel,
    );
    render_panel(
        f,
        &app.right_panel,
        active_panel == ui::ActivePanel::Right,
        theme,
        areas.right_panel,
    );

    let status_bar = StatusBar::new()
        .left(&summary)
        .right(&language)
        .toast(toast.as_deref())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    // 오버플로 팝업 (표시자 아래 앵커)
    if app.overflow.popup_open {
        let menu = OverflowMenu::new(&app.overflow).theme(theme);
        let popup_area = menu.popup_area(areas.toolbar, f.area());
        f.render_widget(menu, popup_area);
    }

    // 모달 다이얼로그
    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
