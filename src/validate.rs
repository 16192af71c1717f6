//! GMN 格式校验
//!
//! 长度范围:
//! - 部分 GMN (不含校验字符对): 6-23
//! - 完整 GMN (含校验字符对): 8-25
//!
//! 逐位置规则: 前 5 位为数字 (GS1 Company Prefix 起始)，其余数据位属于
//! CSET82，完整 GMN 的最后两位属于 CSET32。

use crate::charset::{is_cset32, is_cset82};
use crate::error::{Error, Result};

/// 数据部分最短长度
pub const MIN_PART_LEN: usize = 6;

/// 数据部分最长长度
pub const MAX_PART_LEN: usize = 23;

/// 校验字符对长度
pub const CHECK_PAIR_LEN: usize = 2;

/// 必须为数字的前缀长度
pub const DIGIT_PREFIX_LEN: usize = 5;

/// 输入形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 部分 GMN，不含校验字符对
    Partial,
    /// 完整 GMN，末尾两位为校验字符对
    Complete,
}

impl Mode {
    /// 该形态允许的最短长度
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            Self::Partial => MIN_PART_LEN,
            Self::Complete => MIN_PART_LEN + CHECK_PAIR_LEN,
        }
    }

    /// 该形态允许的最长长度
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Partial => MAX_PART_LEN,
            Self::Complete => MAX_PART_LEN + CHECK_PAIR_LEN,
        }
    }
}

/// 单个位置适用的规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// ASCII 数字
    Digit,
    /// CSET82
    Data,
    /// CSET32
    Check,
}

impl Rule {
    /// 按位置 (0 起始) 和总长度确定规则
    const fn at(index: usize, len: usize, mode: Mode) -> Self {
        if index < DIGIT_PREFIX_LEN {
            Self::Digit
        } else if matches!(mode, Mode::Complete) && index + CHECK_PAIR_LEN >= len {
            Self::Check
        } else {
            Self::Data
        }
    }

    /// 字符是否满足规则
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Data => is_cset82(c),
            Self::Check => is_cset32(c),
        }
    }

    /// 规则不满足时的错误，position 为 1 起始
    const fn error(self, position: usize, character: char) -> Error {
        match self {
            Self::Digit => Error::NonDigitPrefix {
                position,
                character,
            },
            Self::Data => Error::InvalidDataCharacter {
                position,
                character,
            },
            Self::Check => Error::InvalidCheckCharacter {
                position,
                character,
            },
        }
    }
}

/// 校验输入格式
///
/// 先检查长度，再从左到右检查每个位置，返回第一个不满足的错误。
///
/// # Errors
/// 长度越界返回 `TooShort` / `TooLong`；前 5 位非数字返回 `NonDigitPrefix`；
/// 数据位不在 CSET82 返回 `InvalidDataCharacter`；校验位不在 CSET32 返回
/// `InvalidCheckCharacter`。
pub fn validate(input: &str, mode: Mode) -> Result<()> {
    let len = input.chars().count();

    if len < mode.min_len() {
        return Err(Error::TooShort {
            min: mode.min_len(),
            len,
        });
    }
    if len > mode.max_len() {
        return Err(Error::TooLong {
            max: mode.max_len(),
            len,
        });
    }

    for (i, c) in input.chars().enumerate() {
        let rule = Rule::at(i, len, mode);
        if !rule.accepts(c) {
            return Err(rule.error(i + 1, c));
        }
    }

    Ok(())
}

/// 逐位置检查字符是否满足其位置规则
///
/// 不做长度检查，任意长度输入均可，便于界面高亮错误字符。
#[must_use]
pub fn good_character_positions(input: &str, mode: Mode) -> Vec<bool> {
    let len = input.chars().count();
    input
        .chars()
        .enumerate()
        .map(|(i, c)| Rule::at(i, len, mode).accepts(c))
        .collect()
}
