#![allow(dead_code)]

use crate::models::file_entry::FileEntry;
use crate::system::filesystem::FileSystem;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// 패널 상태
#[derive(Debug, Clone)]
pub struct PanelState {
    /// 현재 경로
    pub current_path: PathBuf,
    /// 파일 목록
    pub entries: Vec<FileEntry>,
    /// 선택된 항목 인덱스
    pub selected_index: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
    /// 마킹된 항목 경로 (복사/이동 대상)
    pub marked: HashSet<PathBuf>,
    /// 숨김 파일 표시 여부
    pub show_hidden: bool,
}

impl PanelState {
    /// 새 패널 상태 생성
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_path: path,
            entries: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            marked: HashSet::new(),
            show_hidden: false,
        }
    }

    /// 파일 목록 새로고침
    ///
    /// 현재 경로의 파일 목록을 다시 읽어옵니다. 사라진 마킹은 정리합니다.
    pub fn refresh(&mut self, filesystem: &FileSystem) -> Result<()> {
        let mut entries = filesystem.read_directory(&self.current_path)?;

        if !self.show_hidden {
            entries.retain(|entry| !entry.is_hidden);
        }

        entries.sort_by(|a, b| match (a.is_directory(), b.is_directory()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });

        self.entries = entries;
        self.marked
            .retain(|path| self.entries.iter().any(|e| &e.path == path));

        // 선택 인덱스가 범위를 벗어나면 조정
        if self.selected_index >= self.entries.len() && !self.entries.is_empty() {
            self.selected_index = self.entries.len() - 1;
        }

        Ok(())
    }

    /// 경로 변경
    pub fn change_directory(&mut self, path: PathBuf, filesystem: &FileSystem) -> Result<()> {
        self.current_path = path;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.marked.clear();
        self.refresh(filesystem)
    }

    /// 선택된 항목 반환
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected_index)
    }

    /// 마킹 토글
    pub fn toggle_mark(&mut self) {
        if let Some(entry) = self.selected_entry() {
            let path = entry.path.clone();
            if !self.marked.remove(&path) {
                self.marked.insert(path);
            }
        }
    }

    /// 작업 대상 경로 목록 반환 (마킹이 있으면 마킹, 없으면 커서 위치)
    pub fn target_paths(&self) -> Vec<PathBuf> {
        if self.marked.is_empty() {
            self.selected_entry()
                .map(|e| vec![e.path.clone()])
                .unwrap_or_default()
        } else {
            // entries 순서 유지
            self.entries
                .iter()
                .filter(|e| self.marked.contains(&e.path))
                .map(|e| e.path.clone())
                .collect()
        }
    }

    /// 선택 항목이 보이도록 스크롤 오프셋 조정
    pub fn ensure_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
    }

    /// 파일 개수 반환
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    /// 디렉토리 개수 반환
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    /// 전체 크기 반환 (바이트)
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}
