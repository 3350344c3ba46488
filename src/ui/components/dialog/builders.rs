use super::DialogKind;
use crate::models::transfer::{ConflictPolicy, TransferKind};
use crate::text::Translator;
use std::path::{Path, PathBuf};

impl DialogKind {
    /// 대상 경로 입력 다이얼로그 생성
    ///
    /// 초기 경로는 전체 선택 상태로 시작하고, 정책 선택은 항상 "매번 묻기".
    /// 이전 호출에서 고른 정책은 의도적으로 기억하지 않는다.
    pub fn destination(
        translator: &Translator,
        kind: TransferKind,
        initial: impl Into<String>,
    ) -> Self {
        let value: String = initial.into();
        let cursor_pos = value.len();

        let mut policy_labels = vec![translator.tr(ConflictPolicy::Ask.label_key())];
        for policy in ConflictPolicy::FIXED_CHOICES {
            policy_labels.push(translator.tr(policy.label_key()));
        }

        DialogKind::Destination {
            title: translator.tr(kind.title_key()),
            prompt: translator.tr(kind.prompt_key()),
            value,
            cursor_pos,
            select_all: true,
            policy_prompt: translator.tr("destination_dialog.file_exists_action"),
            policy_labels,
            policy_index: 0, // Ask 기본
            focused_field: 0,
            selected_button: 0, // OK 기본 선택
            ok_label: translator.tr(kind.ok_key()),
            cancel_label: translator.tr("cancel"),
            transfer_kind: kind,
        }
    }

    /// 새 디렉토리 생성 입력 다이얼로그
    pub fn mkdir_input(translator: &Translator, parent_path: PathBuf) -> Self {
        DialogKind::MkdirInput {
            title: translator.tr("mkdir_dialog.title"),
            prompt: translator.tr("mkdir_dialog.name"),
            value: String::new(),
            cursor_pos: 0,
            selected_button: 0,
            parent_path,
            ok_label: translator.tr("ok"),
            cancel_label: translator.tr("cancel"),
        }
    }

    /// 삭제 확인 다이얼로그
    pub fn delete_confirm(translator: &Translator, items: Vec<String>) -> Self {
        let count = items.len().to_string();
        DialogKind::DeleteConfirm {
            title: translator.tr("delete_dialog.title"),
            message: translator.get("delete_dialog.confirm", &[&count]),
            items,
            selected_button: 0,
            ok_label: translator.tr("delete_dialog.delete"),
            cancel_label: translator.tr("cancel"),
        }
    }

    /// 충돌 다이얼로그
    pub fn conflict(translator: &Translator, dest: &Path) -> Self {
        let dest_display = dest.to_string_lossy();
        DialogKind::Conflict {
            title: translator.tr("file_exists.title"),
            message: translator.get("file_exists.description", &[&dest_display]),
            options: vec![
                translator.tr("file_exists.overwrite"),
                translator.tr("file_exists.skip"),
                translator.tr("file_exists.overwrite_all"),
                translator.tr("file_exists.skip_all"),
                translator.tr("cancel"),
            ],
            selected_option: 0,
        }
    }

    /// 진행률 다이얼로그
    pub fn progress(translator: &Translator, title: String) -> Self {
        DialogKind::Progress {
            title,
            current_file: String::new(),
            files_line: String::new(),
            hint: translator.tr("progress.press_esc"),
        }
    }

    /// 새 에러 다이얼로그 생성
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 새 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 대상 다이얼로그는 항상 "매번 묻기" 선택으로 열림
    #[test]
    fn test_destination_defaults() {
        let translator = Translator::from_language_tag("en").unwrap();
        let dialog = DialogKind::destination(&translator, TransferKind::Copy, "/tmp");

        let DialogKind::Destination {
            value,
            select_all,
            policy_labels,
            policy_index,
            selected_button,
            ..
        } = dialog
        else {
            panic!("expected destination dialog");
        };

        assert_eq!(value, "/tmp");
        assert!(select_all);
        assert_eq!(policy_index, 0);
        assert_eq!(selected_button, 0);
        // Ask + 고정 정책 수
        assert_eq!(
            policy_labels.len(),
            1 + ConflictPolicy::FIXED_CHOICES.len()
        );
        assert_eq!(policy_labels[0], "Ask");
    }

    /// 종류별로 제목/버튼 레이블이 다름
    #[test]
    fn test_destination_labels_per_kind() {
        let translator = Translator::from_language_tag("en").unwrap();

        let dialog = DialogKind::destination(&translator, TransferKind::Move, "/tmp");
        let DialogKind::Destination {
            title, ok_label, ..
        } = dialog
        else {
            panic!("expected destination dialog");
        };
        assert_eq!(title, "Move");
        assert_eq!(ok_label, "Move");
    }

    #[test]
    fn test_conflict_options_order() {
        let translator = Translator::from_language_tag("en").unwrap();
        let dialog = DialogKind::conflict(&translator, Path::new("/tmp/file.txt"));

        let DialogKind::Conflict {
            options, message, ..
        } = dialog
        else {
            panic!("expected conflict dialog");
        };
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], "Overwrite");
        assert_eq!(options[4], "Cancel");
        assert!(message.contains("/tmp/file.txt"));
    }
}
