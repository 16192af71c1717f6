//! 完整 GMN 值类型.
//!
//! 结构: 部分 GMN (6-23 字符) + 2 位校验字符对.

use crate::checksum::{add_check_characters, check_characters, split_check_pair};
use crate::error::{Error, Result};
use crate::validate::{validate, Mode};

/// 已通过格式校验且校验字符对正确的完整 GMN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gmn {
    /// 完整 GMN (ASCII).
    text: String,
}

impl Gmn {
    /// 从部分 GMN 创建（自动追加校验字符对）.
    ///
    /// # Example
    /// ```
    /// use gmncheck::Gmn;
    /// let gmn = Gmn::new("1987654Ad4X4bL5ttr2310c").unwrap();
    /// assert_eq!(gmn.check_characters(), "2K");
    /// assert_eq!(gmn.part(), "1987654Ad4X4bL5ttr2310c");
    /// ```
    ///
    /// # Errors
    /// 当输入不是合法的部分 GMN 时返回格式错误。.
    pub fn new(part: &str) -> Result<Self> {
        Ok(Self {
            text: add_check_characters(part)?,
        })
    }

    /// 解析完整 GMN（验证校验字符对）.
    ///
    /// # Errors
    /// 格式不合法时返回格式错误；校验字符对不匹配时返回 `CheckCharacterMismatch`。.
    pub fn parse(s: &str) -> Result<Self> {
        validate(s, Mode::Complete)?;

        let (part, supplied) = split_check_pair(s);
        let expected = check_characters(part)?;
        if expected != supplied {
            return Err(Error::CheckCharacterMismatch {
                expected,
                got: supplied.to_string(),
            });
        }

        Ok(Self {
            text: s.to_string(),
        })
    }

    /// 获取部分 GMN（不含校验字符对）.
    #[must_use]
    pub fn part(&self) -> &str {
        split_check_pair(&self.text).0
    }

    /// 获取校验字符对.
    #[must_use]
    pub fn check_characters(&self) -> &str {
        split_check_pair(&self.text).1
    }

    /// 获取完整 GMN.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Gmn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Gmn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Gmn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
