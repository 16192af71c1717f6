//! 字符集定义
//!
//! - CSET82: GS1 AI 可编码字符集，字符在序列中的位置即其数值 (0-81)
//! - CSET32: 校验字符对使用的 32 字符子集，排除易混淆字符 0/1/I/O

use std::collections::HashMap;
use std::sync::LazyLock;

/// GS1 AI 可编码字符集 82
pub const CSET82: &[u8; 82] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// 校验字符集 32 (CSET82 的子集)
pub const CSET32: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// 降序素数权重，右对齐使用：最后一个数据字符总是乘以 2
pub const WEIGHTS: [u32; 23] = [
    83, 79, 73, 71, 67, 61, 59, 53, 47, 43, 41, 37, 31, 29, 23, 19, 17, 13, 11, 7, 5, 3, 2,
];

/// CSET82 字符 → 数值
static CSET82_VALUE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| index_map(CSET82));

/// CSET32 字符 → 索引 (与 CSET82 数值无关)
static CSET32_VALUE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| index_map(CSET32));

/// 按序列位置建立字符到索引的映射
fn index_map(set: &[u8]) -> HashMap<char, u8> {
    set.iter()
        .zip(0u8..)
        .map(|(&c, i)| (char::from(c), i))
        .collect()
}

/// 字符在 CSET82 中的数值，无效字符返回 None
#[inline]
#[must_use]
pub fn value_in_82(c: char) -> Option<u8> {
    CSET82_VALUE.get(&c).copied()
}

/// 字符在 CSET32 中的索引 (0-31)，无效字符返回 None
#[inline]
#[must_use]
pub fn value_in_32(c: char) -> Option<u8> {
    CSET32_VALUE.get(&c).copied()
}

/// 验证字符是否在 CSET82 内
#[inline]
#[must_use]
pub fn is_cset82(c: char) -> bool {
    value_in_82(c).is_some()
}

/// 验证字符是否在 CSET32 内
#[inline]
#[must_use]
pub fn is_cset32(c: char) -> bool {
    value_in_32(c).is_some()
}

/// 索引转 CSET32 字符
#[inline]
#[must_use]
pub fn cset32_char(i: u8) -> Option<char> {
    CSET32.get(usize::from(i)).copied().map(char::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_charset_lengths() {
        assert_eq!(CSET82.len(), 82);
        assert_eq!(CSET32.len(), 32);
        assert_eq!(CSET82_VALUE.len(), 82);
        assert_eq!(CSET32_VALUE.len(), 32);
    }

    #[test]
    fn test_cset32_is_subset_of_cset82() {
        for &c in CSET32 {
            assert!(is_cset82(char::from(c)), "{} missing from CSET82", c as char);
        }
    }

    #[test]
    fn test_excluded_check_chars() {
        // 0, 1, I, O 不能作为校验字符
        for c in ['0', '1', 'I', 'O', 'a', '_'] {
            assert!(!is_cset32(c));
            assert!(is_cset82(c));
        }
    }

    #[test]
    fn test_values() {
        assert_eq!(value_in_82('!'), Some(0));
        assert_eq!(value_in_82('0'), Some(13));
        assert_eq!(value_in_82('A'), Some(29));
        assert_eq!(value_in_82('_'), Some(55));
        assert_eq!(value_in_82('z'), Some(81));
        assert_eq!(value_in_82('#'), None);
        assert_eq!(value_in_82('£'), None);

        assert_eq!(value_in_32('2'), Some(0));
        assert_eq!(value_in_32('A'), Some(8));
        assert_eq!(value_in_32('Z'), Some(31));
    }

    #[test]
    fn test_numbering_is_independent() {
        // 'A' 在两个字符集中的数值不同
        assert_ne!(value_in_82('A').map(u32::from), value_in_32('A').map(u32::from));
    }

    #[test]
    fn test_weights_descending_primes() {
        assert!(WEIGHTS.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(WEIGHTS[0], 83);
        assert_eq!(WEIGHTS[22], 2);
        let distinct: HashSet<u32> = WEIGHTS.iter().copied().collect();
        assert_eq!(distinct.len(), 23);
    }

    #[test]
    fn test_round_trip() {
        for i in 0..32u8 {
            let c = cset32_char(i).unwrap();
            assert_eq!(value_in_32(c), Some(i));
        }
        assert_eq!(cset32_char(32), None);
    }
}
