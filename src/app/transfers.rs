use super::*;
use crate::models::transfer::{
    ConflictPolicy, ConflictResolution, CopyStarter, DownloadStarter, MoveStarter, PlannedEntry,
    TransferKind, TransferRequest, TransferState, UnzipStarter,
};
use crate::system::transfer as engine;
use tracing::{info, warn};

impl App {
    // === 대상 경로 다이얼로그 열기 ===

    /// 복사 다이얼로그 열기
    pub fn start_copy(&mut self) {
        let sources = self.active_panel_state().target_paths();
        self.open_destination_dialog(
            TransferKind::Copy,
            sources.clone(),
            Box::new(CopyStarter { sources }),
        );
    }

    /// 이동 다이얼로그 열기
    pub fn start_move(&mut self) {
        let sources = self.active_panel_state().target_paths();
        self.open_destination_dialog(
            TransferKind::Move,
            sources.clone(),
            Box::new(MoveStarter { sources }),
        );
    }

    /// 압축 해제 다이얼로그 열기
    pub fn start_unzip(&mut self) {
        let archives = self.active_panel_state().target_paths();
        self.open_destination_dialog(
            TransferKind::Unzip,
            archives.clone(),
            Box::new(UnzipStarter { archives }),
        );
    }

    /// 내려받기 다이얼로그 열기
    pub fn start_download(&mut self) {
        let sources = self.active_panel_state().target_paths();
        self.open_destination_dialog(
            TransferKind::Download,
            sources.clone(),
            Box::new(DownloadStarter { sources }),
        );
    }

    /// 대상 경로 다이얼로그 공통 열기
    ///
    /// 초기 경로는 반대쪽 패널의 현재 디렉토리, 전체 선택 상태로 시작.
    fn open_destination_dialog(
        &mut self,
        kind: TransferKind,
        files: Vec<PathBuf>,
        starter: Box<dyn TransferStarter>,
    ) {
        if files.is_empty() {
            return;
        }

        let initial = self
            .inactive_panel_state()
            .current_path
            .to_string_lossy()
            .to_string();

        self.pending_destination = Some(PendingDestination {
            files,
            starter,
            error_title: self.translator.tr(kind.error_title_key()),
        });
        self.dialog = Some(DialogKind::destination(&self.translator, kind, initial));
    }

    // === 확정 흐름 ===

    /// 대상 경로 다이얼로그 확정
    ///
    /// 다이얼로그를 먼저 닫은 뒤 경로를 해석한다. 해석에 실패하거나, 파일이
    /// 여러 개인데 이름 변경이 섞이면 에러 다이얼로그만 남는다 (재시도 루프
    /// 없음, 사용자가 다이얼로그를 다시 열어야 한다).
    pub fn confirm_destination_dialog(&mut self) {
        let Some(DialogKind::Destination {
            value,
            policy_index,
            ..
        }) = &self.dialog
        else {
            return;
        };
        let dest_path = value.clone();
        let policy_index = *policy_index;

        // 검증 전에 다이얼로그부터 닫는다
        self.close_dialog();

        let Some(pending) = self.pending_destination.take() else {
            return;
        };

        let base = self.active_panel_state().current_path.clone();
        let resolved = self.filesystem.resolve_path(&dest_path, &base);

        // 해석 실패, 또는 이름 변경이 단일 파일 아닌 경우는 잘못된 입력
        let resolved = match resolved {
            Some((_, Some(_))) if pending.files.len() > 1 => None,
            other => other,
        };
        let Some((dest_folder, new_name)) = resolved else {
            self.dialog = Some(DialogKind::error(
                pending.error_title,
                self.translator
                    .get("this_folder_does_not_exist", &[&dest_path]),
            ));
            return;
        };
        let policy = ConflictPolicy::from_selector_index(policy_index);

        // 전송 시작 확장점 호출 (다이얼로그 인스턴스당 한 번)
        let request = pending.starter.start(dest_folder, new_name, policy);
        self.start_transfer(request);
    }

    /// 전송 시작 (엔트리 계획 + 진행 다이얼로그)
    pub fn start_transfer(&mut self, request: TransferRequest) {
        info!(
            "transfer start: {:?} {} item(s) -> {}",
            request.kind,
            request.sources.len(),
            request.dest_dir.display()
        );

        let entries = engine::plan_entries(&request);
        if entries.is_empty() {
            return;
        }

        let title = self.translator.tr(request.kind.title_key());
        self.dialog = Some(DialogKind::progress(&self.translator, title));
        self.pending_transfer = Some(PendingTransfer::new(request, entries));
        self.update_progress_dialog();
    }

    /// 전송 진행 중 여부
    pub fn is_transfer_processing(&self) -> bool {
        self.pending_transfer
            .as_ref()
            .map(|t| t.state == TransferState::Processing)
            .unwrap_or(false)
    }

    /// 다음 엔트리 처리 (이벤트 루프 틱마다 호출)
    pub fn process_next_transfer(&mut self) {
        let Some(pending) = &self.pending_transfer else {
            return;
        };
        if pending.state == TransferState::WaitingConflict {
            return;
        }
        if pending.is_done() {
            self.finish_transfer();
            return;
        }

        let Some(entry) = pending.current_entry().cloned() else {
            self.finish_transfer();
            return;
        };
        let kind = pending.request.kind;
        let policy = pending.request.policy;
        let resolution_all = pending.resolution_all;

        // 충돌 판정: Ask 정책이고 전체 적용 선택이 아직 없으면 다이얼로그로
        if self.entry_has_conflict(kind, &entry) {
            let effective = match resolution_all {
                Some(ConflictResolution::OverwriteAll) => Some(true),
                Some(ConflictResolution::SkipAll) => Some(false),
                _ => match policy {
                    ConflictPolicy::Ask => None,
                    ConflictPolicy::Overwrite => Some(true),
                    ConflictPolicy::Skip => Some(false),
                    ConflictPolicy::Rename => {
                        self.execute_current_entry_renamed(&entry);
                        return;
                    }
                },
            };

            match effective {
                None => {
                    // 사용자 선택 대기
                    if let Some(pending) = &mut self.pending_transfer {
                        pending.state = TransferState::WaitingConflict;
                    }
                    self.dialog = Some(DialogKind::conflict(&self.translator, &entry.dest));
                    return;
                }
                Some(false) => {
                    self.advance_transfer(&entry, None);
                    return;
                }
                Some(true) => {
                    self.execute_current_entry(&entry, true);
                    return;
                }
            }
        }

        self.execute_current_entry(&entry, false);
    }

    /// 현재 엔트리에 충돌이 있는지 확인 (활성화 시점 재검사)
    fn entry_has_conflict(&self, kind: TransferKind, entry: &PlannedEntry) -> bool {
        match kind {
            TransferKind::Unzip => engine::list_zip_conflicts(&entry.source, &entry.dest)
                .map(|c| !c.is_empty())
                .unwrap_or(false),
            _ => entry.dest.exists(),
        }
    }

    /// 현재 엔트리 실행 후 전진
    fn execute_current_entry(&mut self, entry: &PlannedEntry, overwrite: bool) {
        let kind = match &self.pending_transfer {
            Some(pending) => pending.request.kind,
            None => return,
        };

        let result = engine::transfer_entry(kind, &entry.source, &entry.dest, overwrite);
        let error = result.err().map(|e| {
            warn!("transfer entry failed: {}: {}", entry.source.display(), e);
            format!("{}: {}", entry.source.display(), e)
        });
        self.advance_transfer(entry, error);
    }

    /// 이름 변경 정책으로 현재 엔트리 실행
    fn execute_current_entry_renamed(&mut self, entry: &PlannedEntry) {
        let kind = match &self.pending_transfer {
            Some(pending) => pending.request.kind,
            None => return,
        };

        // 압축 해제에는 엔트리 단위 대체 이름이 없으므로 기존 파일만 건너뛴다
        if kind == TransferKind::Unzip {
            self.execute_current_entry(entry, false);
            return;
        }

        let error = match engine::rename_alternative(&entry.dest) {
            Some(alternative) => {
                engine::transfer_entry(kind, &entry.source, &alternative, false)
                    .err()
                    .map(|e| format!("{}: {}", entry.source.display(), e))
            }
            None => Some(format!(
                "{}: no alternative name available",
                entry.dest.display()
            )),
        };
        if let Some(message) = &error {
            warn!("transfer entry failed: {}", message);
        }
        self.advance_transfer(entry, error);
    }

    /// 진행 상태 갱신 + 다음 엔트리로 전진
    fn advance_transfer(&mut self, entry: &PlannedEntry, error: Option<String>) {
        if let Some(pending) = &mut self.pending_transfer {
            if let Some(message) = error {
                pending.add_error(message);
            }
            pending.progress.completed += 1;
            pending.progress.current_file = entry
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            pending.current_index += 1;
        }
        self.update_progress_dialog();
    }

    /// 진행률 다이얼로그 내용 갱신
    fn update_progress_dialog(&mut self) {
        let Some(pending) = &self.pending_transfer else {
            return;
        };
        let completed = pending.progress.completed.to_string();
        let total = pending.progress.total.to_string();
        let files_line = self.translator.get("progress.files", &[&completed, &total]);
        let current = pending.progress.current_file.clone();

        if let Some(DialogKind::Progress {
            current_file,
            files_line: line,
            ..
        }) = &mut self.dialog
        {
            *current_file = current;
            *line = files_line;
        }
    }

    /// 충돌 다이얼로그 선택 처리
    pub fn handle_conflict(&mut self, resolution: ConflictResolution) {
        let Some(pending) = &mut self.pending_transfer else {
            self.close_dialog();
            return;
        };
        let entry = match pending.current_entry().cloned() {
            Some(entry) => entry,
            None => {
                self.cancel_transfer();
                return;
            }
        };
        pending.state = TransferState::Processing;

        // 진행 다이얼로그로 복귀
        let title = self.translator.tr(pending.request.kind.title_key());
        self.dialog = Some(DialogKind::progress(&self.translator, title));

        match resolution {
            ConflictResolution::Overwrite => self.execute_current_entry(&entry, true),
            ConflictResolution::Skip => self.advance_transfer(&entry, None),
            ConflictResolution::OverwriteAll => {
                if let Some(pending) = &mut self.pending_transfer {
                    pending.resolution_all = Some(ConflictResolution::OverwriteAll);
                }
                self.execute_current_entry(&entry, true);
            }
            ConflictResolution::SkipAll => {
                if let Some(pending) = &mut self.pending_transfer {
                    pending.resolution_all = Some(ConflictResolution::SkipAll);
                }
                self.advance_transfer(&entry, None);
            }
            ConflictResolution::Cancel => self.cancel_transfer(),
        }
        self.update_progress_dialog();
    }

    /// 전송 취소 (엔트리 사이에서만)
    pub fn cancel_transfer(&mut self) {
        if self.pending_transfer.take().is_some() {
            info!("transfer canceled");
            let toast = self.translator.tr("transfer.canceled");
            self.set_toast(&toast);
        }
        self.close_dialog();
        self.refresh_panels();
    }

    /// 전송 마무리 (토스트 + 패널 새로고침)
    fn finish_transfer(&mut self) {
        let Some(pending) = self.pending_transfer.take() else {
            return;
        };

        info!(
            "transfer done: {:?} {}/{} entries, {} error(s)",
            pending.request.kind,
            pending.progress.completed,
            pending.progress.total,
            pending.errors.len()
        );

        let toast = if pending.errors.is_empty() {
            self.translator
                .get("transfer.done", &[&pending.progress.completed.to_string()])
        } else {
            self.translator
                .get("transfer.failed", &[&pending.errors.len().to_string()])
        };

        self.close_dialog();
        self.set_toast(&toast);
        self.refresh_panels();

        // 이동/복사 후 마킹은 의미를 잃음
        self.left_panel.marked.clear();
        self.right_panel.marked.clear();
    }
}
