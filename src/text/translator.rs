// Translator - 로케일 선택 + 문자열 조회 서비스
//
// 시작 시 한 번 초기화되고 이후 읽기 전용. 조회는 밖으로 실패하지 않는다:
// 1차 사전 → 2차(언어 이름) 사전 → 키 자신 순으로 폴백

use crate::config::Settings;
use crate::text::dictionary::{format_template, Dictionary};
use crate::utils::error::{BokslCmdError, Result};
use tracing::{debug, info};

/// 기본 언어
pub const DEFAULT_LANGUAGE: &str = "en";

/// 내장 사전 리소스 (로케일 태그별 한 파일)
const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/dict/en.dict")),
    ("ko", include_str!("../../resources/dict/ko.dict")),
    ("pt-BR", include_str!("../../resources/dict/pt-BR.dict")),
    ("zh-CN", include_str!("../../resources/dict/zh-CN.dict")),
];

/// 2차 사전 (언어 표시 이름)
const LANGUAGES_SOURCE: &str = include_str!("../../resources/dict/languages.dict");

/// 문자열 조회 서비스
#[derive(Debug, Clone)]
pub struct Translator {
    /// 실제 로드된 사전의 로케일 태그
    language: String,
    /// 1차 사전 (현재 로케일)
    dictionary: Dictionary,
    /// 2차 사전 (언어 이름, 치환 없이 그대로 반환)
    languages: Dictionary,
}

impl Translator {
    /// 설정에서 로케일을 골라 사전 초기화
    ///
    /// 설정에 언어가 없으면 시스템 로케일, 그것도 없으면 기본 언어.
    /// 선택한 로케일 태그는 설정에 다시 기록된다.
    pub fn init(settings: &mut Settings) -> Result<Self> {
        let requested = match settings.language.as_deref() {
            Some(tag) if !tag.trim().is_empty() => {
                info!("using language set in settings: {}", tag);
                normalize_tag(tag)
            }
            _ => {
                let system = system_locale_tag();
                info!(
                    "language not set in settings, trying system locale ({:?})",
                    system
                );
                system.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
            }
        };

        let translator = Self::from_language_tag(&requested)?;

        // 선택된 로케일을 설정에 기록 (저장은 호출자 몫)
        settings.language = Some(requested);

        Ok(translator)
    }

    /// 로케일 태그로 직접 사전 초기화
    pub fn from_language_tag(tag: &str) -> Result<Self> {
        let requested = normalize_tag(tag);
        let selected = match find_bundle_tag(&requested) {
            Some(tag) => {
                debug!("language {} is available", requested);
                tag
            }
            None => {
                debug!(
                    "language {} is not available, falling back to {}",
                    requested, DEFAULT_LANGUAGE
                );
                DEFAULT_LANGUAGE
            }
        };

        let source = bundle_source(selected).ok_or_else(|| {
            BokslCmdError::Dictionary(format!("dictionary bundle missing for {}", selected))
        })?;
        let dictionary = Dictionary::parse(source)?;
        let languages = Dictionary::parse(LANGUAGES_SOURCE)?;

        Ok(Self {
            language: selected.to_string(),
            dictionary,
            languages,
        })
    }

    /// 현재 로케일 태그 반환
    pub fn language(&self) -> &str {
        &self.language
    }

    /// 사용 가능한 로케일 태그 목록
    pub fn available_languages() -> Vec<&'static str> {
        BUNDLES.iter().map(|(tag, _)| *tag).collect()
    }

    /// 키 조회 + 파라미터 치환
    ///
    /// 1차 사전에 있으면 템플릿 치환, 2차 사전에 있으면 치환 없이 그대로,
    /// 어디에도 없으면 키 자신을 반환
    pub fn get(&self, key: &str, params: &[&str]) -> String {
        if let Some(template) = self.dictionary.get_raw(key) {
            return format_template(template, params);
        }

        if let Some(value) = self.languages.get_raw(key) {
            return value.to_string();
        }

        key.to_string()
    }

    /// 파라미터 없는 키 조회
    pub fn tr(&self, key: &str) -> String {
        self.get(key, &[])
    }

    /// 1차 사전에 키가 있는지 확인 (2차 사전은 보지 않음)
    pub fn has_value(&self, key: &str) -> bool {
        self.dictionary.contains(key)
    }
}

/// 로케일 태그 정규화 (밑줄 → 하이픈)
fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-")
}

/// 요청한 태그에 해당하는 번들 태그 탐색
///
/// 정확히 일치 → 기본 언어 부분("ko-KR" → "ko") 순으로 확인
fn find_bundle_tag(requested: &str) -> Option<&'static str> {
    let exact = BUNDLES
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(requested));
    if let Some((tag, _)) = exact {
        return Some(tag);
    }

    let base = requested.split('-').next()?;
    BUNDLES
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(base))
        .map(|(tag, _)| *tag)
}

/// 번들 리소스 원문 반환
fn bundle_source(tag: &str) -> Option<&'static str> {
    BUNDLES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, source)| *source)
}

/// 시스템 로케일 태그 추출 (LC_ALL / LC_MESSAGES / LANG)
///
/// "ko_KR.UTF-8" 같은 값에서 인코딩 접미사를 떼고 하이픈으로 정규화
fn system_locale_tag() -> Option<String> {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == "C" || trimmed == "POSIX" {
                continue;
            }
            let tag = trimmed.split('.').next().unwrap_or(trimmed);
            return Some(normalize_tag(tag));
        }
    }
    None
}
