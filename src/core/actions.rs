#![allow(dead_code)]
//! 액션 시스템 — 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩과 툴바 버튼이 이 모듈의 레지스트리를 참조합니다.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    GoToParent,
    EnterSelected,
    TogglePanel,
    // File Operations
    Copy,
    Move,
    Unzip,
    Download,
    MakeDirectory,
    Delete,
    // Selection
    ToggleMark,
    // System
    Refresh,
    ToggleHidden,
    OpenOverflow,
    CycleLanguage,
    Quit,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    /// 툴바/메뉴 레이블 사전 키
    pub label_key: &'static str,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::Copy,
        id: "copy",
        label_key: "toolbar.copy",
    },
    ActionDef {
        action: Action::Move,
        id: "move",
        label_key: "toolbar.move",
    },
    ActionDef {
        action: Action::Unzip,
        id: "unzip",
        label_key: "toolbar.unzip",
    },
    ActionDef {
        action: Action::Download,
        id: "download",
        label_key: "toolbar.download",
    },
    ActionDef {
        action: Action::MakeDirectory,
        id: "mkdir",
        label_key: "toolbar.mkdir",
    },
    ActionDef {
        action: Action::Delete,
        id: "delete",
        label_key: "toolbar.delete",
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        label_key: "toolbar.refresh",
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label_key: "toolbar.quit",
    },
];

/// 액션 ID로 액션 조회 (툴바/오버플로 메뉴 디스패치용)
pub fn action_by_id(id: &str) -> Option<Action> {
    ACTION_DEFS
        .iter()
        .find(|def| def.id == id)
        .map(|def| def.action)
}

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::F(10),
            modifiers: None,
            action: Action::Quit,
        },
        // 패널
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::TogglePanel,
        },
        // 탐색
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('h'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        // 파일 조작
        KeyBinding {
            code: KeyCode::F(5),
            modifiers: None,
            action: Action::Copy,
        },
        KeyBinding {
            code: KeyCode::Char('y'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Copy,
        },
        KeyBinding {
            code: KeyCode::F(6),
            modifiers: None,
            action: Action::Move,
        },
        KeyBinding {
            code: KeyCode::Char('x'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Move,
        },
        KeyBinding {
            code: KeyCode::Char('u'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Unzip,
        },
        KeyBinding {
            code: KeyCode::Char('w'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Download,
        },
        KeyBinding {
            code: KeyCode::F(7),
            modifiers: None,
            action: Action::MakeDirectory,
        },
        KeyBinding {
            code: KeyCode::Char('a'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MakeDirectory,
        },
        KeyBinding {
            code: KeyCode::F(8),
            modifiers: None,
            action: Action::Delete,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Delete,
        },
        // 선택
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleMark,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::F(2),
            modifiers: None,
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::Char('r'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::Char('.'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleHidden,
        },
        KeyBinding {
            code: KeyCode::Char('`'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenOverflow,
        },
        KeyBinding {
            code: KeyCode::Char('L'),
            modifiers: None,
            action: Action::CycleLanguage,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::F(5)),
            Some(Action::Copy)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('Z')), None);
    }

    /// modifiers가 None인 바인딩은 어떤 모디파이어와도 매칭
    #[test]
    fn test_find_action_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::F(10)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_action_by_id() {
        assert_eq!(action_by_id("copy"), Some(Action::Copy));
        assert_eq!(action_by_id("quit"), Some(Action::Quit));
        assert_eq!(action_by_id("no_such_action"), None);
    }

    /// 레지스트리의 ID는 중복이 없어야 함
    #[test]
    fn test_action_ids_unique() {
        let mut ids: Vec<&str> = ACTION_DEFS.iter().map(|d| d.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(before, ids.len());
    }
}
