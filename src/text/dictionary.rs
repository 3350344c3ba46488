// Dictionary - 로케일별 키/템플릿 사전
//
// `key = value` 형식의 사전 리소스를 파싱한다. 키는 대소문자를 구분하지 않고,
// 값은 위치 기반 파라미터(%1, %2, ...)를 가질 수 있다.

use crate::utils::error::{BokslCmdError, Result};
use std::collections::HashMap;

/// 키/템플릿 사전
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// 사전 리소스 파싱
    ///
    /// 빈 줄과 `#` 주석은 무시. `=` 없는 줄은 파싱 에러 (시작 시 치명적 오류)
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(BokslCmdError::Dictionary(format!(
                    "line {}: missing '=' in entry: {}",
                    line_no + 1,
                    line
                )));
            };

            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return Err(BokslCmdError::Dictionary(format!(
                    "line {}: empty key",
                    line_no + 1
                )));
            }

            entries.insert(key, value.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// 키 존재 여부 (대소문자 무시)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// 템플릿 원문 반환
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    /// 등록된 엔트리 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 엔트리가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 템플릿의 위치 파라미터(%1..%9) 치환
///
/// 대응하는 파라미터가 없는 자리표시자는 그대로 남긴다.
pub fn format_template(template: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some(&d) if d.is_ascii_digit() && d != '0' => {
                let index = d as usize - '1' as usize;
                if let Some(value) = params.get(index) {
                    out.push_str(value);
                    chars.next();
                } else {
                    out.push('%');
                }
            }
            // "%%" 이스케이프
            Some('%') => {
                out.push('%');
                chars.next();
            }
            _ => out.push('%'),
        }
    }

    out
}
