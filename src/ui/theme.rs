#![allow(dead_code)]

use crate::utils::error::{BokslCmdError, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마 시스템
///
/// 애플리케이션 전체의 색상 테마를 관리합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 패널
    pub panel_active_border: ColorDef,
    pub panel_inactive_border: ColorDef,
    pub panel_bg: ColorDef,

    // 파일 리스트
    pub file_normal: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub file_marked: ColorDef,
    pub directory: ColorDef,
    pub symlink: ColorDef,

    // UI 컴포넌트
    pub toolbar_bg: ColorDef,
    pub toolbar_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            panel_active_border: "#0078d4".into(),
            panel_inactive_border: "#3c3c3c".into(),
            panel_bg: "#1e1e1e".into(),

            file_normal: "#d4d4d4".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#0078d4".into(),
            file_marked: "#dcdcaa".into(),
            directory: "#569cd6".into(),
            symlink: "#ce9178".into(),

            toolbar_bg: "#2d2d30".into(),
            toolbar_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            panel_active_border: "#0078d4".into(),
            panel_inactive_border: "#cccccc".into(),
            panel_bg: "#ffffff".into(),

            file_normal: "#1e1e1e".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            file_marked: "#8a6d00".into(),
            directory: "#0066cc".into(),
            symlink: "#a65e2b".into(),

            toolbar_bg: "#0078d4".into(),
            toolbar_fg: "#ffffff".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#cc7a00".into(),
            error: "#d32f2f".into(),
        }
    }
}

/// 테마 관리자
#[derive(Debug)]
pub struct ThemeManager {
    current_name: String,
    current: Theme,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current: Theme::dark(),
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// 현재 테마 이름 반환
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// 이름으로 테마 전환
    pub fn switch_theme(&mut self, name: &str) -> Result<()> {
        let theme = match name {
            "dark" => Theme::dark(),
            "light" => Theme::light(),
            _ => {
                return Err(BokslCmdError::Config(format!("unknown theme: {}", name)));
            }
        };
        self.current_name = name.to_string();
        self.current = theme;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0078d4"), Color::Rgb(0, 120, 212));
        assert_eq!(parse_hex_color("bad"), Color::Reset);
    }

    #[test]
    fn test_theme_manager_switch() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_name(), "dark");

        manager.switch_theme("light").unwrap();
        assert_eq!(manager.current_name(), "light");

        assert!(manager.switch_theme("no_such_theme").is_err());
        // 실패해도 기존 테마 유지
        assert_eq!(manager.current_name(), "light");
    }
}
