use super::*;
use crate::models::transfer::{ConflictPolicy, ConflictResolution, TransferKind};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions as ZipFileOptions;
use zip::ZipWriter;

fn make_test_app() -> App {
    App::new_for_test()
}

/// 좌(활성)/우(비활성) 패널을 지정한 디렉토리로 설정
fn setup_panels(app: &mut App, left: &Path, right: &Path) {
    app.left_panel = PanelState::new(left.to_path_buf());
    app.left_panel.refresh(&app.filesystem).unwrap();
    app.right_panel = PanelState::new(right.to_path_buf());
    app.right_panel.refresh(&app.filesystem).unwrap();
}

/// 커서를 이름이 일치하는 엔트리로 이동
fn select_entry(app: &mut App, name: &str) {
    let index = app
        .left_panel
        .entries
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("entry not found: {}", name));
    app.left_panel.selected_index = index;
}

/// 다이얼로그 입력 필드에 문자열 타이핑
fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.destination_input_char(c);
    }
}

fn run_transfer_until_done(app: &mut App) {
    let mut guard = 0usize;
    while app.pending_transfer.is_some() && guard < 10_000 {
        app.process_next_transfer();
        guard += 1;
    }
    assert!(guard < 10_000, "transfer loop guard exceeded");
}

fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    for (name, content) in entries {
        writer.start_file(*name, ZipFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

// === 대상 경로 다이얼로그 확정 흐름 ===

/// 해석 가능한 경로 + 단일 파일 + 새 이름 → 새 이름으로 전송 시작
#[test]
fn test_confirm_single_file_with_rename_starts_transfer() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "hello").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    assert!(matches!(app.dialog, Some(DialogKind::Destination { .. })));

    // 전체 선택 상태에서 새 경로 타이핑 (기존 값 교체)
    let rename_path = dest.join("renamed.txt");
    type_text(&mut app, &rename_path.to_string_lossy());
    app.confirm_destination_dialog();

    // 이름 변경이 반영된 요청으로 전송이 시작됨
    let pending = app.pending_transfer.as_ref().expect("transfer started");
    assert_eq!(pending.request.kind, TransferKind::Copy);
    assert_eq!(pending.request.new_name.as_deref(), Some("renamed.txt"));
    assert_eq!(pending.request.dest_dir, dest);

    run_transfer_until_done(&mut app);
    assert_eq!(fs::read_to_string(dest.join("renamed.txt")).unwrap(), "hello");
}

/// 파일 2개 이상 + 새 이름 → 에러 다이얼로그, 전송 시작 없음
#[test]
fn test_confirm_multiple_files_with_rename_shows_error() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();
    fs::write(src.join("b.txt"), "b").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);

    // 두 파일 마킹
    select_entry(&mut app, "a.txt");
    app.left_panel.toggle_mark();
    select_entry(&mut app, "b.txt");
    app.left_panel.toggle_mark();

    app.start_copy();
    // 존재하지 않는 마지막 요소 → 이름 변경 케이스로 해석됨
    let rename_path = dest.join("renamed.txt");
    type_text(&mut app, &rename_path.to_string_lossy());
    app.confirm_destination_dialog();

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert!(app.pending_transfer.is_none());
    // 원본은 그대로
    assert!(src.join("a.txt").exists());
    assert!(!dest.join("renamed.txt").exists());
}

/// 해석 불가능한 경로 → 로컬라이즈된 에러 메시지
#[test]
fn test_confirm_unresolvable_path_shows_error() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, temp.path());
    select_entry(&mut app, "a.txt");

    app.start_copy();
    type_text(&mut app, "/no/such/parent/anywhere/");
    app.confirm_destination_dialog();

    let Some(DialogKind::Error { title, message }) = &app.dialog else {
        panic!("expected error dialog");
    };
    // 전송 종류별 에러 제목 + 템플릿 치환된 메시지
    assert_eq!(title, "Copy error");
    assert!(message.contains("/no/such/parent/anywhere/"));
    assert!(app.pending_transfer.is_none());
}

/// 에러 이후에는 확장점 문맥이 남지 않음 (재시도 루프 없음)
#[test]
fn test_error_consumes_pending_destination() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, temp.path());
    select_entry(&mut app, "a.txt");

    app.start_copy();
    type_text(&mut app, "/no/such/parent/anywhere/");
    app.confirm_destination_dialog();

    assert!(app.pending_destination.is_none());
}

/// 선택 박스 인덱스가 다이얼로그 흐름을 통해 정책으로 번역됨
#[test]
fn test_policy_selector_translation_through_dialog() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    // 인덱스 0 → Ask
    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");
    app.start_copy();
    app.confirm_destination_dialog();
    assert_eq!(
        app.pending_transfer.as_ref().unwrap().request.policy,
        ConflictPolicy::Ask
    );
    run_transfer_until_done(&mut app);

    // 인덱스 1 → 첫 번째 고정 정책 (Overwrite)
    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");
    app.start_copy();
    app.destination_next_field(); // 정책 필드로
    app.destination_input_right(); // 인덱스 1
    assert_eq!(app.destination_policy_index(), Some(1));
    app.confirm_destination_dialog();
    assert_eq!(
        app.pending_transfer.as_ref().unwrap().request.policy,
        ConflictPolicy::Overwrite
    );
    run_transfer_until_done(&mut app);
}

/// 다이얼로그를 다시 열면 정책 선택은 항상 "매번 묻기"로 복귀
#[test]
fn test_policy_never_persists_across_dialogs() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    // 첫 다이얼로그에서 고정 정책 선택 후 취소
    app.start_copy();
    app.destination_next_field();
    app.destination_input_right();
    app.destination_input_right();
    assert_eq!(app.destination_policy_index(), Some(2));
    app.cancel_destination_dialog();

    // 다시 열면 Ask(0)
    app.start_copy();
    assert_eq!(app.destination_policy_index(), Some(0));
    app.cancel_destination_dialog();
}

/// Esc 취소는 다이얼로그와 확장점 문맥을 모두 정리
#[test]
fn test_cancel_clears_dialog_and_context() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, temp.path());
    select_entry(&mut app, "a.txt");

    app.start_copy();
    assert!(app.pending_destination.is_some());

    app.cancel_destination_dialog();
    assert!(app.dialog.is_none());
    assert!(app.pending_destination.is_none());
    assert!(app.pending_transfer.is_none());
}

/// 전체 선택 상태의 첫 타이핑은 초기값 전체를 교체
#[test]
fn test_destination_seed_is_replaced_on_typing() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    // 초기값은 비활성 패널 경로
    assert_eq!(
        app.destination_value().unwrap(),
        dest.to_string_lossy().to_string()
    );

    type_text(&mut app, "/x");
    assert_eq!(app.destination_value().unwrap(), "/x");
}

// === 전송 실행 ===

/// 이동: 원본이 사라지고 대상에 생김
#[test]
fn test_move_transfer_end_to_end() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("moved.txt"), "content").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "moved.txt");

    app.start_move();
    app.confirm_destination_dialog();
    run_transfer_until_done(&mut app);

    assert!(!src.join("moved.txt").exists());
    assert_eq!(fs::read_to_string(dest.join("moved.txt")).unwrap(), "content");
}

/// 내려받기: 대상 폴더에 사본 저장
#[test]
fn test_download_transfer_saves_copy() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("data.bin"), "payload").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "data.bin");

    app.start_download();
    let pending = app.pending_destination.as_ref().unwrap();
    assert_eq!(pending.error_title, "Download error");
    app.confirm_destination_dialog();
    assert_eq!(
        app.pending_transfer.as_ref().unwrap().request.kind,
        TransferKind::Download
    );
    run_transfer_until_done(&mut app);

    assert!(src.join("data.bin").exists());
    assert_eq!(fs::read_to_string(dest.join("data.bin")).unwrap(), "payload");
}

/// Ask 정책: 충돌 시 다이얼로그가 뜨고, Skip 선택은 기존 파일 유지
#[test]
fn test_ask_policy_conflict_skip() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "new").unwrap();
    fs::write(dest.join("a.txt"), "old").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    app.confirm_destination_dialog();
    app.process_next_transfer();

    // 충돌 다이얼로그 대기 상태
    assert!(matches!(app.dialog, Some(DialogKind::Conflict { .. })));
    assert!(!app.is_transfer_processing());

    app.handle_conflict(ConflictResolution::Skip);
    run_transfer_until_done(&mut app);

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "old");
}

/// Ask 정책: Overwrite 선택은 기존 파일 교체
#[test]
fn test_ask_policy_conflict_overwrite() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "new").unwrap();
    fs::write(dest.join("a.txt"), "old").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    app.confirm_destination_dialog();
    app.process_next_transfer();
    assert!(matches!(app.dialog, Some(DialogKind::Conflict { .. })));

    app.handle_conflict(ConflictResolution::Overwrite);
    run_transfer_until_done(&mut app);

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
}

/// Ask 정책: Cancel 선택은 전송 전체 중단
#[test]
fn test_ask_policy_conflict_cancel() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "new").unwrap();
    fs::write(dest.join("a.txt"), "old").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    app.confirm_destination_dialog();
    app.process_next_transfer();

    app.handle_conflict(ConflictResolution::Cancel);
    assert!(app.pending_transfer.is_none());
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "old");
}

/// Overwrite 고정 정책은 묻지 않고 교체
#[test]
fn test_fixed_overwrite_policy_silent() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "new").unwrap();
    fs::write(dest.join("a.txt"), "old").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    app.destination_next_field();
    app.destination_input_right(); // Overwrite
    app.confirm_destination_dialog();
    run_transfer_until_done(&mut app);

    // 충돌 다이얼로그 없이 끝남
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
}

/// Rename 고정 정책은 대체 이름으로 저장
#[test]
fn test_fixed_rename_policy_creates_alternative() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("a.txt"), "new").unwrap();
    fs::write(dest.join("a.txt"), "old").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "a.txt");

    app.start_copy();
    app.destination_next_field();
    app.destination_input_right();
    app.destination_input_right();
    app.destination_input_right(); // Rename (인덱스 3)
    assert_eq!(app.destination_policy_index(), Some(3));
    app.confirm_destination_dialog();
    run_transfer_until_done(&mut app);

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "old");
    assert_eq!(fs::read_to_string(dest.join("a (1).txt")).unwrap(), "new");
}

/// 압축 해제 전송: zip 내용이 대상 디렉토리에 풀림
#[test]
fn test_unzip_transfer_end_to_end() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    write_zip(
        &src.join("bundle.zip"),
        &[("readme.txt", "hi"), ("sub/inner.txt", "deep")],
    );

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "bundle.zip");

    app.start_unzip();
    app.confirm_destination_dialog();
    assert_eq!(
        app.pending_transfer.as_ref().unwrap().request.kind,
        TransferKind::Unzip
    );
    run_transfer_until_done(&mut app);

    assert_eq!(fs::read_to_string(dest.join("readme.txt")).unwrap(), "hi");
    assert_eq!(fs::read_to_string(dest.join("sub/inner.txt")).unwrap(), "deep");
}

/// 디렉토리 복사는 재귀적으로 동작
#[test]
fn test_copy_directory_recursive() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    fs::create_dir_all(src.join("folder/inner")).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("folder/top.txt"), "top").unwrap();
    fs::write(src.join("folder/inner/deep.txt"), "deep").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &src, &dest);
    select_entry(&mut app, "folder");

    app.start_copy();
    app.confirm_destination_dialog();
    run_transfer_until_done(&mut app);

    assert_eq!(
        fs::read_to_string(dest.join("folder/inner/deep.txt")).unwrap(),
        "deep"
    );
}

// === 기타 다이얼로그 ===

/// 새 디렉토리 생성 확정
#[test]
fn test_mkdir_confirm_creates_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("work");
    fs::create_dir_all(&dir).unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &dir, temp.path());

    app.start_mkdir();
    assert!(matches!(app.dialog, Some(DialogKind::MkdirInput { .. })));
    for c in "created".chars() {
        app.mkdir_input_char(c);
    }
    app.confirm_mkdir();

    assert!(dir.join("created").is_dir());
    assert!(app.dialog.is_none());
}

/// 삭제 확인 다이얼로그는 대상 이름 목록을 보여줌
#[test]
fn test_delete_confirm_dialog_lists_targets() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("work");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("victim.txt"), "x").unwrap();

    let mut app = make_test_app();
    setup_panels(&mut app, &dir, temp.path());
    select_entry(&mut app, "victim.txt");

    app.start_delete();
    let Some(DialogKind::DeleteConfirm { items, message, .. }) = &app.dialog else {
        panic!("expected delete confirm dialog");
    };
    assert_eq!(items, &vec!["victim.txt".to_string()]);
    assert!(message.contains('1'));

    // 취소 버튼으로 닫기
    app.delete_confirm_toggle();
    app.confirm_delete();
    assert!(app.dialog.is_none());
    assert!(dir.join("victim.txt").exists());
}

// === 언어 전환 ===

/// 언어 전환은 사전/툴바 레이블/설정을 함께 갱신
#[test]
fn test_cycle_language_updates_labels_and_settings() {
    let mut app = make_test_app();
    assert_eq!(app.translator.language(), "en");
    assert_eq!(app.toolbar_items[0].label, "Copy");

    app.cycle_language();
    assert_eq!(app.translator.language(), "ko");
    assert_eq!(app.settings.language.as_deref(), Some("ko"));
    assert_eq!(app.toolbar_items[0].label, "복사");

    // 한 바퀴 돌면 다시 영어
    let count = Translator::available_languages().len();
    for _ in 1..count {
        app.cycle_language();
    }
    assert_eq!(app.translator.language(), "en");
}
