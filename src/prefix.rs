//! 按 GS1 Company Prefix 与型号引用分开传参的入口
//!
//! 先检查前缀长度 (5-12 位数字) 与型号引用长度，拼接后交给
//! [`crate::checksum`] 计算，不重复校验算法。

use crate::checksum::{check_characters, verify_check_characters};
use crate::error::{Error, Result};
use crate::validate::{CHECK_PAIR_LEN, MAX_PART_LEN};

/// GS1 Company Prefix 最短位数
pub const MIN_COMPANY_PREFIX_LEN: usize = 5;

/// GS1 Company Prefix 最长位数
pub const MAX_COMPANY_PREFIX_LEN: usize = 12;

/// 计算校验字符对
///
/// # Example
/// ```
/// use gmncheck::prefix::check_characters_for;
/// assert_eq!(check_characters_for("1987654", "Ad4X4bL5ttr2310c").unwrap(), "2K");
/// ```
///
/// # Errors
/// 前缀或型号引用长度不合法、前缀含非数字字符，或拼接结果格式不合法时返回错误。
pub fn check_characters_for(company_prefix: &str, model_reference: &str) -> Result<String> {
    check_characters(&join_part(company_prefix, model_reference)?)
}

/// 返回带校验字符对的完整 GMN
///
/// # Errors
/// 同 [`check_characters_for`]。
pub fn add_check_characters_for(company_prefix: &str, model_reference: &str) -> Result<String> {
    let mut gmn = join_part(company_prefix, model_reference)?;
    let checks = check_characters(&gmn)?;
    gmn.push_str(&checks);
    Ok(gmn)
}

/// 验证分开传入的校验字符对
///
/// # Errors
/// 同 [`check_characters_for`]；校验字符对不是 2 个字符时返回 `CheckPairLength`。
pub fn verify_check_characters_for(
    company_prefix: &str,
    model_reference: &str,
    check_pair: &str,
) -> Result<bool> {
    let mut gmn = join_part(company_prefix, model_reference)?;

    let pair_len = check_pair.chars().count();
    if pair_len != CHECK_PAIR_LEN {
        return Err(Error::CheckPairLength(pair_len));
    }

    gmn.push_str(check_pair);
    verify_check_characters(&gmn)
}

/// 检查前缀与型号引用并拼接为部分 GMN
fn join_part(company_prefix: &str, model_reference: &str) -> Result<String> {
    let prefix_len = company_prefix.chars().count();
    if !(MIN_COMPANY_PREFIX_LEN..=MAX_COMPANY_PREFIX_LEN).contains(&prefix_len) {
        return Err(Error::CompanyPrefixLength(prefix_len));
    }

    if let Some((i, c)) = company_prefix
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(Error::NonDigitPrefix {
            position: i + 1,
            character: c,
        });
    }

    let model_len = model_reference.chars().count();
    let max = MAX_PART_LEN - prefix_len;
    if model_len == 0 || model_len > max {
        return Err(Error::ModelReferenceLength {
            len: model_len,
            min: 1,
            max,
        });
    }

    Ok(format!("{company_prefix}{model_reference}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_single_string_form() {
        assert_eq!(
            check_characters_for("1987654", "Ad4X4bL5ttr2310c").unwrap(),
            "2K"
        );
        assert_eq!(
            add_check_characters_for("1987654", "Ad4X4bL5ttr2310c").unwrap(),
            "1987654Ad4X4bL5ttr2310c2K"
        );
        assert!(verify_check_characters_for("1987654", "Ad4X4bL5ttr2310c", "2K").unwrap());
        assert!(!verify_check_characters_for("1987654", "Ad4X4bL5ttr2310c", "XK").unwrap());
    }

    #[test]
    fn test_split_point_does_not_matter() {
        // 同一部分 GMN 的不同拆分得到相同结果
        assert_eq!(check_characters_for("12345", "A").unwrap(), "NJ");
        assert_eq!(
            check_characters_for("123456789012", "34567890123").unwrap(),
            check_characters_for("12345", "678901234567890123").unwrap()
        );
    }

    #[test]
    fn test_company_prefix_length() {
        assert_eq!(
            check_characters_for("1234", "ABC"),
            Err(Error::CompanyPrefixLength(4))
        );
        assert_eq!(
            check_characters_for("1234567890123", "ABC"),
            Err(Error::CompanyPrefixLength(13))
        );
    }

    #[test]
    fn test_company_prefix_must_be_digits() {
        // 第 6 位以后的前缀字符同样必须是数字
        assert_eq!(
            check_characters_for("12345A7", "BC"),
            Err(Error::NonDigitPrefix {
                position: 6,
                character: 'A'
            })
        );
    }

    #[test]
    fn test_model_reference_length() {
        assert_eq!(
            check_characters_for("12345", ""),
            Err(Error::ModelReferenceLength {
                len: 0,
                min: 1,
                max: 18
            })
        );
        assert_eq!(
            check_characters_for("123456789012", "123456789012"),
            Err(Error::ModelReferenceLength {
                len: 12,
                min: 1,
                max: 11
            })
        );
        assert!(check_characters_for("123456789012", "12345678901").is_ok());
    }

    #[test]
    fn test_model_reference_characters() {
        assert!(matches!(
            check_characters_for("1987654", "A£"),
            Err(Error::InvalidDataCharacter { position: 9, character: '£' })
        ));
    }

    #[test]
    fn test_check_pair_length() {
        assert_eq!(
            verify_check_characters_for("1987654", "Ad4X4bL5ttr2310c", "2"),
            Err(Error::CheckPairLength(1))
        );
        assert_eq!(
            verify_check_characters_for("1987654", "Ad4X4bL5ttr2310c", "2KK"),
            Err(Error::CheckPairLength(3))
        );
    }

    #[test]
    fn test_check_pair_characters() {
        assert!(matches!(
            verify_check_characters_for("12345", "A", "N1"),
            Err(Error::InvalidCheckCharacter { position: 8, character: '1' })
        ));
    }
}
