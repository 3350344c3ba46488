// Text Layer - 사전 기반 문자열 조회
pub mod dictionary;
pub mod translator;

pub use dictionary::Dictionary;
pub use translator::Translator;
