use super::text_edit::TextBufferEdit;
use super::*;

impl App {
    // === 다이얼로그 공통 ===

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 대상 경로 다이얼로그 취소 (확장점 문맥도 함께 폐기)
    pub fn cancel_destination_dialog(&mut self) {
        self.dialog = None;
        self.pending_destination = None;
    }

    // === 대상 경로 다이얼로그: 입력 편집 ===

    /// 문자 입력 (전체 선택 상태면 값 전체 교체)
    pub fn destination_input_char(&mut self, c: char) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            ..
        }) = &mut self.dialog
        {
            if *focused_field != 0 {
                return;
            }
            if *select_all {
                TextBufferEdit::replace_all(value, cursor_pos, c);
                *select_all = false;
            } else {
                TextBufferEdit::insert_char(value, cursor_pos, c);
            }
        }
    }

    /// 백스페이스 (전체 선택 상태면 값 전체 삭제)
    pub fn destination_input_backspace(&mut self) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            ..
        }) = &mut self.dialog
        {
            if *focused_field != 0 {
                return;
            }
            if *select_all {
                TextBufferEdit::clear_all(value, cursor_pos);
                *select_all = false;
            } else {
                TextBufferEdit::backspace(value, cursor_pos);
            }
        }
    }

    /// Delete 키
    pub fn destination_input_delete(&mut self) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            ..
        }) = &mut self.dialog
        {
            if *focused_field != 0 {
                return;
            }
            if *select_all {
                TextBufferEdit::clear_all(value, cursor_pos);
                *select_all = false;
            } else {
                TextBufferEdit::delete(value, cursor_pos);
            }
        }
    }

    /// 커서 왼쪽 (경로 필드) / 이전 항목 (정책·버튼 필드)
    pub fn destination_input_left(&mut self) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            policy_index,
            selected_button,
            ..
        }) = &mut self.dialog
        {
            match *focused_field {
                0 => {
                    // 커서를 움직이면 전체 선택 해제
                    *select_all = false;
                    TextBufferEdit::left(value, cursor_pos);
                }
                1 => {
                    if *policy_index > 0 {
                        *policy_index -= 1;
                    }
                }
                _ => {
                    *selected_button = if *selected_button == 0 { 1 } else { 0 };
                }
            }
        }
    }

    /// 커서 오른쪽 (경로 필드) / 다음 항목 (정책·버튼 필드)
    pub fn destination_input_right(&mut self) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            policy_index,
            policy_labels,
            selected_button,
            ..
        }) = &mut self.dialog
        {
            match *focused_field {
                0 => {
                    *select_all = false;
                    TextBufferEdit::right(value, cursor_pos);
                }
                1 => {
                    if *policy_index + 1 < policy_labels.len() {
                        *policy_index += 1;
                    }
                }
                _ => {
                    *selected_button = if *selected_button == 0 { 1 } else { 0 };
                }
            }
        }
    }

    /// Home
    pub fn destination_input_home(&mut self) {
        if let Some(DialogKind::Destination {
            cursor_pos,
            select_all,
            focused_field,
            ..
        }) = &mut self.dialog
        {
            if *focused_field == 0 {
                *select_all = false;
                TextBufferEdit::home(cursor_pos);
            }
        }
    }

    /// End
    pub fn destination_input_end(&mut self) {
        if let Some(DialogKind::Destination {
            value,
            cursor_pos,
            select_all,
            focused_field,
            ..
        }) = &mut self.dialog
        {
            if *focused_field == 0 {
                *select_all = false;
                TextBufferEdit::end(value, cursor_pos);
            }
        }
    }

    /// 필드 순환 (경로 → 정책 → 버튼)
    pub fn destination_next_field(&mut self) {
        if let Some(DialogKind::Destination { focused_field, .. }) = &mut self.dialog {
            *focused_field = (*focused_field + 1) % 3;
        }
    }

    /// 필드 역순환
    pub fn destination_prev_field(&mut self) {
        if let Some(DialogKind::Destination { focused_field, .. }) = &mut self.dialog {
            *focused_field = if *focused_field == 0 {
                2
            } else {
                *focused_field - 1
            };
        }
    }

    /// 현재 입력값 반환
    pub fn destination_value(&self) -> Option<String> {
        if let Some(DialogKind::Destination { value, .. }) = &self.dialog {
            Some(value.clone())
        } else {
            None
        }
    }

    /// 선택된 정책 인덱스 반환
    pub fn destination_policy_index(&self) -> Option<usize> {
        if let Some(DialogKind::Destination { policy_index, .. }) = &self.dialog {
            Some(*policy_index)
        } else {
            None
        }
    }

    /// 포커스 필드 반환
    pub fn destination_focused_field(&self) -> Option<usize> {
        if let Some(DialogKind::Destination { focused_field, .. }) = &self.dialog {
            Some(*focused_field)
        } else {
            None
        }
    }

    /// 선택된 버튼 반환
    pub fn destination_selected_button(&self) -> Option<usize> {
        if let Some(DialogKind::Destination {
            selected_button, ..
        }) = &self.dialog
        {
            Some(*selected_button)
        } else {
            None
        }
    }

    // === 새 디렉토리 다이얼로그 ===

    /// 새 디렉토리 다이얼로그 열기
    pub fn start_mkdir(&mut self) {
        let parent = self.active_panel_state().current_path.clone();
        self.dialog = Some(DialogKind::mkdir_input(&self.translator, parent));
    }

    pub fn mkdir_input_char(&mut self, c: char) {
        if let Some(DialogKind::MkdirInput {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            TextBufferEdit::insert_char(value, cursor_pos, c);
        }
    }

    pub fn mkdir_input_backspace(&mut self) {
        if let Some(DialogKind::MkdirInput {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            TextBufferEdit::backspace(value, cursor_pos);
        }
    }

    pub fn mkdir_toggle_button(&mut self) {
        if let Some(DialogKind::MkdirInput {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    /// 새 디렉토리 생성 확정
    pub fn confirm_mkdir(&mut self) {
        let Some(DialogKind::MkdirInput {
            value,
            selected_button,
            parent_path,
            ..
        }) = &self.dialog
        else {
            return;
        };

        if *selected_button != 0 {
            self.close_dialog();
            return;
        }

        let name = value.trim().to_string();
        let parent = parent_path.clone();
        self.close_dialog();

        if name.is_empty() {
            return;
        }

        let target = parent.join(&name);
        match self.filesystem.make_directory(&target) {
            Ok(()) => {
                self.refresh_panels();
                self.set_toast(&name);
            }
            Err(e) => {
                self.dialog = Some(DialogKind::error(
                    self.translator.tr("mkdir_dialog.error_title"),
                    e.to_string(),
                ));
            }
        }
    }

    // === 삭제 확인 다이얼로그 ===

    /// 삭제 확인 다이얼로그 열기
    pub fn start_delete(&mut self) {
        let targets = self.active_panel_state().target_paths();
        if targets.is_empty() {
            return;
        }

        let items: Vec<String> = targets
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        self.dialog = Some(DialogKind::delete_confirm(&self.translator, items));
    }

    pub fn delete_confirm_toggle(&mut self) {
        if let Some(DialogKind::DeleteConfirm {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    /// 삭제 확정 (휴지통으로)
    pub fn confirm_delete(&mut self) {
        let Some(DialogKind::DeleteConfirm {
            selected_button, ..
        }) = &self.dialog
        else {
            return;
        };

        if *selected_button != 0 {
            self.close_dialog();
            return;
        }
        self.close_dialog();

        let targets = self.active_panel_state().target_paths();
        let mut failed = 0usize;
        for path in &targets {
            if self.filesystem.delete_to_trash(path).is_err() {
                failed += 1;
            }
        }

        let done = (targets.len() - failed).to_string();
        let toast = if failed > 0 {
            self.translator
                .get("transfer.failed", &[&failed.to_string()])
        } else {
            self.translator.get("transfer.done", &[&done])
        };
        self.set_toast(&toast);
        self.refresh_panels();
    }

    // === 충돌 다이얼로그 ===

    /// 옵션 이동 (다음)
    pub fn conflict_next(&mut self) {
        if let Some(DialogKind::Conflict {
            options,
            selected_option,
            ..
        }) = &mut self.dialog
        {
            *selected_option = (*selected_option + 1) % options.len();
        }
    }

    /// 옵션 이동 (이전)
    pub fn conflict_prev(&mut self) {
        if let Some(DialogKind::Conflict {
            options,
            selected_option,
            ..
        }) = &mut self.dialog
        {
            *selected_option = if *selected_option == 0 {
                options.len() - 1
            } else {
                *selected_option - 1
            };
        }
    }

    /// 선택된 충돌 해결 방법 반환
    pub fn conflict_resolution(&self) -> Option<crate::models::transfer::ConflictResolution> {
        use crate::models::transfer::ConflictResolution;

        if let Some(DialogKind::Conflict {
            selected_option, ..
        }) = &self.dialog
        {
            Some(match selected_option {
                0 => ConflictResolution::Overwrite,
                1 => ConflictResolution::Skip,
                2 => ConflictResolution::OverwriteAll,
                3 => ConflictResolution::SkipAll,
                _ => ConflictResolution::Cancel,
            })
        } else {
            None
        }
    }
}
