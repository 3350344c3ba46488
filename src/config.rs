// Config - 설정 저장소 (언어/테마)

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

const SETTINGS_VERSION: u32 = 1;

/// 영속 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// 포맷 버전
    pub version: u32,
    /// 언어 (로케일 태그, 예: "en", "ko", "pt-BR")
    pub language: Option<String>,
    /// 테마 이름
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            language: None,
            theme: None,
        }
    }
}

/// 설정 파일 저장소
///
/// 경로 우선순위: 명시 경로(테스트 격리용) → BOKSLCMD_SETTINGS_FILE 환경변수
/// → ~/.bokslcmd/settings.toml
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path_override: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장 경로를 고정한 저장소 생성
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path_override: Some(path),
        }
    }

    fn path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path_override {
            return Some(path.clone());
        }
        if let Ok(custom) = env::var("BOKSLCMD_SETTINGS_FILE") {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::home_dir().map(|home| home.join(".bokslcmd").join("settings.toml"))
    }

    /// 설정 로드 (없거나 손상되면 기본값)
    pub fn load(&self) -> Settings {
        let Some(path) = self.path() else {
            return Settings::default();
        };
        let Ok(data) = fs::read_to_string(path) else {
            return Settings::default();
        };
        decode_settings(&data).unwrap_or_default()
    }

    /// 설정 저장
    pub fn save(&self, settings: &Settings) -> std::io::Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }
}

fn decode_settings(data: &str) -> Option<Settings> {
    let parsed: Settings = toml::from_str(data).ok()?;
    if parsed.version != SETTINGS_VERSION {
        return None;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::with_path(temp.path().join("settings.toml"));

        let settings = Settings {
            version: SETTINGS_VERSION,
            language: Some("pt-BR".to_string()),
            theme: Some("dark".to_string()),
        };
        store.save(&settings).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.language.as_deref(), Some("pt-BR"));
        assert_eq!(loaded.theme.as_deref(), Some("dark"));
    }

    /// 파일이 없으면 기본값
    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::with_path(temp.path().join("nothing.toml"));

        let loaded = store.load();
        assert!(loaded.language.is_none());
        assert!(loaded.theme.is_none());
    }

    /// 버전이 다르면 기본값으로 폐기
    #[test]
    fn test_version_mismatch_discards() {
        let data = "version = 999\nlanguage = \"ko\"\n";
        assert!(decode_settings(data).is_none());
    }

    /// 손상된 파일은 기본값
    #[test]
    fn test_corrupt_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "not toml at all {{{").unwrap();

        let store = SettingsStore::with_path(path);
        let loaded = store.load();
        assert!(loaded.language.is_none());
    }
}
