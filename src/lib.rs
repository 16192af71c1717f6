//! gmncheck - GS1 医疗器械 GMN 校验字符对
//!
//! 为符合 EU MDR 2017/745 与 EU IVDR 2017/746 的医疗器械 GS1 Global Model
//! Number (GMN) 计算并验证 2 位校验字符对。
//!
//! # GMN 格式
//!
//! ```text
//! ┌──────────────────────┬──────────────────┬──────────────┐
//! │ GS1 Company Prefix   │ Model reference  │ Check pair   │
//! │ ≥5 digits            │ CSET82           │ 2 × CSET32   │
//! └──────────────────────┴──────────────────┴──────────────┘
//!  部分 GMN: 6-23 字符      完整 GMN: 8-25 字符
//! ```
//!
//! # Example
//!
//! ```
//! use gmncheck::HealthcareGmn;
//!
//! let part = "1987654Ad4X4bL5ttr2310c";
//!
//! assert_eq!(HealthcareGmn::check_characters(part).unwrap(), "2K");
//!
//! let gmn = HealthcareGmn::add_check_characters(part).unwrap();
//! assert_eq!(gmn, "1987654Ad4X4bL5ttr2310c2K");
//!
//! assert!(HealthcareGmn::verify_check_characters(&gmn).unwrap());
//! assert!(!HealthcareGmn::verify_check_characters("1987654Ad4X4bL5ttr2310cXK").unwrap());
//! ```

pub mod charset;
pub mod checksum;
pub mod error;
pub mod gmn;
pub mod prefix;
pub mod validate;

// Re-exports
pub use checksum::{add_check_characters, check_characters, verify_check_characters};
pub use error::{Error, Result};
pub use gmn::Gmn;
pub use prefix::{add_check_characters_for, check_characters_for, verify_check_characters_for};
pub use validate::{good_character_positions, validate, Mode};

/// GMN 操作的便捷入口
pub struct HealthcareGmn;

impl HealthcareGmn {
    /// 计算部分 GMN 的校验字符对
    ///
    /// # Errors
    /// 当输入不是合法的部分 GMN 时返回格式错误。
    pub fn check_characters(part: &str) -> Result<String> {
        checksum::check_characters(part)
    }

    /// 追加校验字符对
    ///
    /// # Errors
    /// 当输入不是合法的部分 GMN 时返回格式错误。
    pub fn add_check_characters(part: &str) -> Result<String> {
        checksum::add_check_characters(part)
    }

    /// 验证完整 GMN 的校验字符对
    ///
    /// # Errors
    /// 当输入不是合法的完整 GMN 时返回格式错误。
    pub fn verify_check_characters(gmn: &str) -> Result<bool> {
        checksum::verify_check_characters(gmn)
    }

    /// 逐位置字符有效性，用于高亮错误字符
    #[must_use]
    pub fn good_character_positions(input: &str, complete: bool) -> Vec<bool> {
        let mode = if complete {
            Mode::Complete
        } else {
            Mode::Partial
        };
        validate::good_character_positions(input, mode)
    }
}
