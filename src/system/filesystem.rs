#![allow(dead_code)]

use crate::models::file_entry::{FileEntry, FileType};
use crate::utils::error::{BokslCmdError, Result};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// 파일 시스템 모듈
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 읽기
    ///
    /// 주어진 경로의 디렉토리를 읽어서 파일 엔트리 리스트를 반환합니다.
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FileEntry>> {
        if !path.exists() {
            return Err(BokslCmdError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        if !path.is_dir() {
            return Err(BokslCmdError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let read_dir = fs::read_dir(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                BokslCmdError::PermissionDenied {
                    path: path.to_path_buf(),
                }
            } else {
                BokslCmdError::Io(e)
            }
        })?;

        let mut entries = Vec::new();

        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let entry_path = entry.path();

            let Ok(link_metadata) = fs::symlink_metadata(&entry_path) else {
                continue;
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = self.get_file_type(&link_metadata);

            // 표시용 메타데이터 (symlink는 대상 메타데이터 우선)
            let display_metadata = if file_type == FileType::Symlink {
                fs::metadata(&entry_path).ok().unwrap_or(link_metadata)
            } else {
                link_metadata
            };

            let size = if display_metadata.is_file() {
                display_metadata.len()
            } else {
                0
            };

            let modified = display_metadata
                .modified()
                .unwrap_or_else(|_| std::time::SystemTime::now());

            let is_hidden = self.is_hidden(&entry_path);

            entries.push(FileEntry::new(
                name, entry_path, file_type, size, modified, is_hidden,
            ));
        }

        Ok(entries)
    }

    /// 파일 타입 판단
    #[allow(clippy::unused_self)]
    fn get_file_type(&self, metadata: &Metadata) -> FileType {
        if metadata.is_dir() {
            FileType::Directory
        } else if metadata.is_symlink() {
            FileType::Symlink
        } else {
            FileType::File
        }
    }

    /// 숨김 파일 여부 판단
    #[allow(clippy::unused_self)]
    fn is_hidden(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    /// 대상 경로 리졸버
    ///
    /// 입력 문자열을 기준 디렉토리에 대해 해석한다.
    /// - 존재하는 디렉토리 → (그 디렉토리, None)
    /// - 마지막 요소만 없고 부모가 디렉토리 → (부모, Some(새 이름)), 이름 변경 케이스
    /// - 그 외 → None (해석 실패)
    pub fn resolve_path(&self, input: &str, base: &Path) -> Option<(PathBuf, Option<String>)> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let path = self.expand_input(input, base);

        if path.is_dir() {
            return Some((path, None));
        }

        let parent = path.parent()?;
        if !parent.is_dir() {
            return None;
        }

        let leaf = path.file_name()?.to_string_lossy().to_string();
        Some((parent.to_path_buf(), Some(leaf)))
    }

    /// 입력 문자열을 절대 경로로 확장 (~, 상대 경로 처리)
    #[allow(clippy::unused_self)]
    fn expand_input(&self, input: &str, base: &Path) -> PathBuf {
        if input == "~" {
            return dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        }
        if let Some(rest) = input.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }

        let path = PathBuf::from(input);
        if path.is_absolute() {
            path
        } else {
            base.join(path)
        }
    }

    /// 새 디렉토리 생성
    #[allow(clippy::unused_self)]
    pub fn make_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir(path)?;
        Ok(())
    }

    /// 휴지통으로 삭제
    #[allow(clippy::unused_self)]
    pub fn delete_to_trash(&self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| BokslCmdError::Unknown(e.to_string()))
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("visible.txt"), "x").unwrap();
        fs::write(temp.path().join(".hidden"), "x").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let fs_layer = FileSystem::new();
        let entries = fs_layer.read_directory(temp.path()).unwrap();

        assert_eq!(entries.len(), 3);
        let hidden = entries.iter().find(|e| e.name == ".hidden").unwrap();
        assert!(hidden.is_hidden);
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert!(sub.is_directory());
    }

    #[test]
    fn test_read_directory_missing_path() {
        let fs_layer = FileSystem::new();
        let result = fs_layer.read_directory(Path::new("/no/such/path/anywhere"));
        assert!(matches!(result, Err(BokslCmdError::PathNotFound { .. })));
    }

    /// 존재하는 디렉토리 → (디렉토리, None)
    #[test]
    fn test_resolve_path_existing_directory() {
        let temp = TempDir::new().unwrap();
        let fs_layer = FileSystem::new();

        let (folder, new_name) = fs_layer
            .resolve_path(&temp.path().to_string_lossy(), Path::new("/"))
            .unwrap();
        assert_eq!(folder, temp.path());
        assert!(new_name.is_none());
    }

    /// 마지막 요소만 없으면 이름 변경 케이스 → (부모, Some(이름))
    #[test]
    fn test_resolve_path_rename_case() {
        let temp = TempDir::new().unwrap();
        let fs_layer = FileSystem::new();

        let input = temp.path().join("renamed.txt");
        let (folder, new_name) = fs_layer
            .resolve_path(&input.to_string_lossy(), Path::new("/"))
            .unwrap();
        assert_eq!(folder, temp.path());
        assert_eq!(new_name.as_deref(), Some("renamed.txt"));
    }

    /// 부모조차 없으면 해석 실패
    #[test]
    fn test_resolve_path_invalid() {
        let fs_layer = FileSystem::new();
        assert!(fs_layer
            .resolve_path("/no/such/parent/file.txt", Path::new("/"))
            .is_none());
        assert!(fs_layer.resolve_path("", Path::new("/")).is_none());
    }

    /// 상대 경로는 기준 디렉토리에 대해 해석
    #[test]
    fn test_resolve_path_relative_to_base() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let fs_layer = FileSystem::new();
        let (folder, new_name) = fs_layer.resolve_path("sub", temp.path()).unwrap();
        assert_eq!(folder, temp.path().join("sub"));
        assert!(new_name.is_none());
    }

    #[test]
    fn test_make_directory() {
        let temp = TempDir::new().unwrap();
        let fs_layer = FileSystem::new();

        let new_dir = temp.path().join("created");
        fs_layer.make_directory(&new_dir).unwrap();
        assert!(new_dir.is_dir());

        // 이미 존재하면 에러
        assert!(fs_layer.make_directory(&new_dir).is_err());
    }
}
