//! 校验字符对计算与验证
//!
//! 算法:
//! 1. 权重右对齐: 部分 GMN 最后一个字符乘以 2，依次向左取更大的素数
//! 2. 加权和对 1021 取模，结果落在 0-1020 (10 bit)
//! 3. 高 5 bit 与低 5 bit 各映射为一个 CSET32 字符

use crate::charset::{value_in_82, CSET32, WEIGHTS};
use crate::error::Result;
use crate::validate::{validate, Mode, CHECK_PAIR_LEN};

/// 模数 (不超过 2^10 的最大素数)
pub const MODULUS: u32 = 1021;

/// 计算部分 GMN 的校验字符对
///
/// # Example
/// ```
/// use gmncheck::checksum::check_characters;
/// assert_eq!(check_characters("1987654Ad4X4bL5ttr2310c").unwrap(), "2K");
/// ```
///
/// # Errors
/// 当输入不是合法的部分 GMN 时返回格式错误。
pub fn check_characters(part: &str) -> Result<String> {
    validate(part, Mode::Partial)?;
    Ok(encode_pair(weighted_residue(part)))
}

/// 在部分 GMN 末尾追加校验字符对
///
/// # Errors
/// 当输入不是合法的部分 GMN 时返回格式错误。
pub fn add_check_characters(part: &str) -> Result<String> {
    let checks = check_characters(part)?;
    let mut gmn = String::with_capacity(part.len() + checks.len());
    gmn.push_str(part);
    gmn.push_str(&checks);
    Ok(gmn)
}

/// 验证完整 GMN 的校验字符对
///
/// 格式合法但校验字符对不匹配时返回 `Ok(false)`，不视为错误。
///
/// # Errors
/// 当输入不是合法的完整 GMN 时返回格式错误。
pub fn verify_check_characters(gmn: &str) -> Result<bool> {
    validate(gmn, Mode::Complete)?;
    let (part, supplied) = split_check_pair(gmn);
    Ok(check_characters(part)? == supplied)
}

/// 拆分出末尾校验字符对
///
/// 调用前输入已通过完整格式校验，全部为 ASCII，按字节切分安全。
pub(crate) fn split_check_pair(gmn: &str) -> (&str, &str) {
    gmn.split_at(gmn.len().saturating_sub(CHECK_PAIR_LEN))
}

/// 加权和对 1021 取模
///
/// 最大单项 81 × 83，共 23 项，u32 不会溢出。
fn weighted_residue(part: &str) -> u32 {
    let offset = WEIGHTS.len().saturating_sub(part.len());
    let sum: u32 = part
        .chars()
        .zip(&WEIGHTS[offset..])
        .map(|(c, &w)| u32::from(value_in_82(c).unwrap_or(0)) * w)
        .sum();
    sum % MODULUS
}

/// 10 bit 余数拆为两个 CSET32 字符
fn encode_pair(residue: u32) -> String {
    let high = (residue >> 5) as usize;
    let low = (residue & 31) as usize;
    [char::from(CSET32[high]), char::from(CSET32[low])]
        .iter()
        .collect()
}
