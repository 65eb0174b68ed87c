use super::error::ExtractionError;
use super::field::DateFields;
use super::pattern::{DatePattern, WildcardPosition};

impl DatePattern {
    /// 去除輸入字串中格式未涵蓋的雜訊
    ///
    /// - 開頭為 `*`：只保留結尾 `body_len` 個字元
    /// - 結尾為 `*`：只保留開頭 `body_len` 個字元
    /// - 沒有 `*`：輸入長度必須剛好等於 `body_len`
    ///
    /// # Errors
    /// 剩餘字元數與格式不符時回傳 `ExtractionError::LengthMismatch`
    pub fn strip_noise<'a>(&self, raw: &'a str) -> Result<&'a str, ExtractionError> {
        let expected = self.body_len();
        let found = raw.chars().count();

        match self.wildcard() {
            Some(WildcardPosition::Leading) if found >= expected => {
                Ok(&raw[char_offset(raw, found - expected)..])
            }
            Some(WildcardPosition::Trailing) if found >= expected => {
                Ok(&raw[..char_offset(raw, expected)])
            }
            None if found == expected => Ok(raw),
            _ => Err(ExtractionError::LengthMismatch { expected, found }),
        }
    }

    /// 對齊格式與輸入，擷取每個欄位的數字字串
    ///
    /// 非欄位字元的位置直接略過，不比對內容
    ///
    /// # Errors
    /// 長度不符，或欄位位置出現非數字字元時回傳 `ExtractionError`
    pub fn extract(&self, raw: &str) -> Result<DateFields, ExtractionError> {
        let aligned: Vec<char> = self.strip_noise(raw)?.chars().collect();
        let mut fields = DateFields::default();

        for run in self.runs() {
            let value: String = aligned[run.start..run.end].iter().collect();

            if !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(ExtractionError::InvalidField {
                    field: run.field,
                    value,
                });
            }

            fields.set(run.field, value);
        }

        Ok(fields)
    }
}

/// 第 `chars` 個字元的位元組位置
fn char_offset(raw: &str, chars: usize) -> usize {
    raw.char_indices()
        .nth(chars)
        .map_or(raw.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::date_pattern::DateField;

    fn pattern(source: &str) -> DatePattern {
        DatePattern::parse(source).unwrap()
    }

    #[test]
    fn test_strip_noise_wildcard_at_start() {
        assert_eq!(
            pattern("*yyyy-MM-dd").strip_noise("asdf2019-01-31"),
            Ok("2019-01-31")
        );
    }

    #[test]
    fn test_strip_noise_wildcard_at_end() {
        assert_eq!(
            pattern("yyyy-MM-dd*").strip_noise("2019-01-31;lkjhgfds"),
            Ok("2019-01-31")
        );
    }

    #[test]
    fn test_strip_noise_no_wildcard() {
        let raw = "lorem2019-01-31lorem";
        assert_eq!(pattern("xxxxxyyyy-MM-ddxxxxx").strip_noise(raw), Ok(raw));
    }

    #[test]
    fn test_strip_noise_multibyte_noise() {
        assert_eq!(
            pattern("*yyyyMMdd").strip_noise("照片_20190131"),
            Ok("20190131")
        );
        assert_eq!(
            pattern("yyyyMMdd*").strip_noise("20190131 生日"),
            Ok("20190131")
        );
    }

    #[test]
    fn test_strip_noise_length_mismatch() {
        assert_eq!(
            pattern("yyyy-MM-dd*").strip_noise("2019-01"),
            Err(ExtractionError::LengthMismatch {
                expected: 10,
                found: 7
            })
        );
        assert_eq!(
            pattern("yyyy-MM-dd").strip_noise("2019-01-31 "),
            Err(ExtractionError::LengthMismatch {
                expected: 10,
                found: 11
            })
        );
    }

    #[test]
    fn test_extract_date() {
        let fields = pattern("xxyyyy-MM-dd").extract("lo2019-01-31").unwrap();

        assert_eq!(fields.year.as_deref(), Some("2019"));
        assert_eq!(fields.month.as_deref(), Some("01"));
        assert_eq!(fields.day.as_deref(), Some("31"));
        assert_eq!(fields.hour, None);
    }

    #[test]
    fn test_extract_literals_are_not_compared() {
        let fields = pattern("yyyy-MM-dd").extract("2019/01/31").unwrap();
        assert_eq!(fields.month.as_deref(), Some("01"));
    }

    #[test]
    fn test_extract_non_digit_field() {
        let err = pattern("yyyy-MM-dd").extract("2022-1X-16").unwrap_err();
        assert_eq!(
            err,
            ExtractionError::InvalidField {
                field: DateField::Month,
                value: "1X".to_string()
            }
        );
    }

    #[test]
    fn test_extract_rejects_non_ascii_digits() {
        let err = pattern("yyyy").extract("２０１９").unwrap_err();
        assert_eq!(err.field(), Some(DateField::Year));
    }
}
