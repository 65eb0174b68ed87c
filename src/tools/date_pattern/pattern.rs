use super::error::FormatError;
use super::field::{DateField, WILDCARD};
use super::validator::validate_format;

/// 萬用字元所在位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardPosition {
    /// 丟棄輸入開頭的雜訊
    Leading,
    /// 丟棄輸入結尾的雜訊
    Trailing,
}

/// 欄位在格式主體（去除 `*` 後）中的位置 `[start, end)`，以字元為單位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRun {
    pub field: DateField,
    pub start: usize,
    pub end: usize,
}

impl FieldRun {
    #[must_use]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }
}

/// 已驗證並編譯的日期格式
///
/// 驗證一次之後可重複套用在多個輸入字串上
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    wildcard: Option<WildcardPosition>,
    body_len: usize,
    runs: Vec<FieldRun>,
}

impl DatePattern {
    /// 驗證並編譯格式字串
    ///
    /// # Errors
    /// 格式不合法時回傳 `FormatError`
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        validate_format(pattern)?;

        let wildcard = if pattern.starts_with(WILDCARD) {
            Some(WildcardPosition::Leading)
        } else if pattern.ends_with(WILDCARD) {
            Some(WildcardPosition::Trailing)
        } else {
            None
        };

        let mut runs: Vec<FieldRun> = Vec::new();
        let mut body_len = 0;

        for (index, c) in pattern.chars().filter(|&c| c != WILDCARD).enumerate() {
            body_len = index + 1;

            let Some(field) = DateField::from_marker(c) else {
                continue;
            };

            match runs.last_mut() {
                Some(run) if run.field == field && run.end == index => run.end += 1,
                _ => runs.push(FieldRun {
                    field,
                    start: index,
                    end: index + 1,
                }),
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            wildcard,
            body_len,
            runs,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn wildcard(&self) -> Option<WildcardPosition> {
        self.wildcard
    }

    /// 格式主體的字元數（不含 `*`），也就是輸入去除雜訊後應有的長度
    #[must_use]
    pub const fn body_len(&self) -> usize {
        self.body_len
    }

    #[must_use]
    pub fn runs(&self) -> &[FieldRun] {
        &self.runs
    }

    #[must_use]
    pub fn has_field(&self, field: DateField) -> bool {
        self.runs.iter().any(|run| run.field == field)
    }
}

impl std::str::FromStr for DatePattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runs() {
        let pattern = DatePattern::parse("xxyyyy-MM-dd hh:mm").unwrap();

        assert_eq!(pattern.wildcard(), None);
        assert_eq!(pattern.body_len(), 18);
        assert_eq!(
            pattern.runs(),
            &[
                FieldRun { field: DateField::Year, start: 2, end: 6 },
                FieldRun { field: DateField::Month, start: 7, end: 9 },
                FieldRun { field: DateField::Day, start: 10, end: 12 },
                FieldRun { field: DateField::Hour, start: 13, end: 15 },
                FieldRun { field: DateField::Minute, start: 16, end: 18 },
            ]
        );
    }

    #[test]
    fn test_parse_wildcard_positions() {
        let leading = DatePattern::parse("*yyyyMMddxxxxx").unwrap();
        assert_eq!(leading.wildcard(), Some(WildcardPosition::Leading));
        assert_eq!(leading.body_len(), 13);
        assert_eq!(leading.runs()[0].start, 0);

        let trailing = DatePattern::parse("ddMMyyyy hh:mm:ss*").unwrap();
        assert_eq!(trailing.wildcard(), Some(WildcardPosition::Trailing));
        assert_eq!(trailing.body_len(), 17);
        assert!(trailing.has_field(DateField::Second));
        assert_eq!(trailing.runs().len(), 6);
    }

    #[test]
    fn test_adjacent_runs_of_different_fields() {
        let pattern = DatePattern::parse("yyyyMMdd").unwrap();
        let widths: Vec<usize> = pattern.runs().iter().map(FieldRun::width).collect();
        assert_eq!(widths, vec![4, 2, 2]);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            DatePattern::parse("yMy"),
            Err(FormatError::NonContiguous('y'))
        );
        assert!("yyyy*MM".parse::<DatePattern>().is_err());
    }
}
