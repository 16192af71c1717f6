//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The input is too short: it must be at least {min} characters, got {len}")]
    TooShort { min: usize, len: usize },

    #[error("The input is too long: it must be at most {max} characters, got {len}")]
    TooLong { max: usize, len: usize },

    #[error(
        "GMN starts with the GS1 Company Prefix: at least the first five characters must be digits (position {position}: '{character}')"
    )]
    NonDigitPrefix { position: usize, character: char },

    #[error("Invalid character at position {position}: '{character}'")]
    InvalidDataCharacter { position: usize, character: char },

    #[error("Invalid check character at position {position}: '{character}'")]
    InvalidCheckCharacter { position: usize, character: char },

    #[error("GS1 Company Prefix must be 5-12 digits, got {0} characters")]
    CompanyPrefixLength(usize),

    #[error("Model reference must be {min}-{max} characters for this company prefix, got {len}")]
    ModelReferenceLength { len: usize, min: usize, max: usize },

    #[error("Check character pair must be exactly 2 characters, got {0}")]
    CheckPairLength(usize),

    #[error("Check character mismatch: expected '{expected}', got '{got}'")]
    CheckCharacterMismatch { expected: String, got: String },
}

pub type Result<T> = std::result::Result<T, Error>;
