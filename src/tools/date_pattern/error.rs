use super::field::DateField;
use derive_more::{Display, Error, From};

/// 格式字串本身不合法
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[display("date patterns with several \"{_0}\" chars must have them contiguous")]
    NonContiguous(#[error(not(source))] char),
    #[display("only one \"*\" is allowed in a date pattern")]
    MultipleWildcards,
    #[display("\"*\" is only allowed at the beginning or the end of a date pattern")]
    MisplacedWildcard,
    #[display("no more than {max} \"{marker}\" chars are allowed in a date pattern")]
    TooManyChars { marker: char, max: usize },
    #[display("exactly {expected} \"{marker}\" chars are necessary in a date pattern, found {found}")]
    ExactWidth {
        marker: char,
        expected: usize,
        found: usize,
    },
    #[display("date pattern does not contain any date or time field")]
    NoFields,
}

/// 格式合法，但輸入字串無法對齊或欄位不是數字
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[display("input has {found} chars but the date pattern needs {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[display("wrong {field} value: \"{value}\"")]
    InvalidField { field: DateField, value: String },
}

impl ExtractionError {
    /// 解析失敗的欄位（長度不符時為 `None`）
    #[must_use]
    pub const fn field(&self) -> Option<DateField> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            Self::LengthMismatch { .. } => None,
        }
    }
}

#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[display("invalid date pattern: {_0}")]
    Format(FormatError),
    #[display("{_0}")]
    Extraction(ExtractionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message_names_field() {
        let err = ExtractionError::InvalidField {
            field: DateField::Year,
            value: "XX22".to_string(),
        };
        assert_eq!(err.to_string(), "wrong year value: \"XX22\"");
        assert_eq!(err.field(), Some(DateField::Year));
    }

    #[test]
    fn test_parse_error_from_format_error() {
        let err: DateParseError = FormatError::MultipleWildcards.into();
        assert!(matches!(err, DateParseError::Format(_)));
        assert!(err.to_string().starts_with("invalid date pattern"));
    }
}
