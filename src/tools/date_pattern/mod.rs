//! 日期格式解析
//!
//! 以欄位字元組成的格式字串，從含有雜訊的字串（例如檔名）中擷取日期時間：
//!
//! | 字元 | 欄位 | 字元數 |
//! |------|------|--------|
//! | `y`  | 年   | 4      |
//! | `M`  | 月   | 1-2    |
//! | `d`  | 日   | 1-2    |
//! | `h`  | 時   | 1-2    |
//! | `m`  | 分   | 1-2    |
//! | `s`  | 秒   | 1-2    |
//! | `*`  | 開頭或結尾的任意雜訊 | - |
//!
//! 其他字元都是佔位字元，只佔位置，不比對內容。
//!
//! ```
//! use futils::tools::date_pattern::parse_date;
//!
//! let date = parse_date("20032015 15:16:23(015).jpg", "ddMMyyyy hh:mm:ss*").unwrap();
//! assert_eq!((date.year, date.month, date.day), (2015, 3, 20));
//! ```

mod error;
mod extractor;
mod field;
mod pattern;
mod validator;
mod value;

pub use error::{DateParseError, ExtractionError, FormatError};
pub use field::{DateField, DateFields, FIELD_SPECS, FieldSpec, WILDCARD};
pub use pattern::{DatePattern, FieldRun, WildcardPosition};
pub use validator::validate_format;
pub use value::DateValue;

/// 預設格式
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd";

/// EXIF 日期時間格式（`2019:01:31 05:23:11`），結尾可能帶有其他字元
pub const EXIF_DATETIME_PATTERN: &str = "yyyy:MM:dd hh:mm:ss*";

impl DatePattern {
    /// # Errors
    /// 輸入無法對齊或欄位不是數字時回傳 `ExtractionError`
    pub fn parse_date(&self, raw: &str) -> Result<DateValue, ExtractionError> {
        self.extract(raw).map(|fields| DateValue::from_fields(&fields))
    }
}

/// 驗證格式後擷取各欄位的數字字串
///
/// # Errors
/// 格式不合法回傳 `DateParseError::Format`，擷取失敗回傳 `DateParseError::Extraction`
pub fn extract_fields(raw: &str, pattern: &str) -> Result<DateFields, DateParseError> {
    let pattern = DatePattern::parse(pattern)?;
    Ok(pattern.extract(raw)?)
}

/// 依格式解析日期時間
///
/// # Errors
/// 格式不合法回傳 `DateParseError::Format`，擷取失敗回傳 `DateParseError::Extraction`
pub fn parse_date(raw: &str, pattern: &str) -> Result<DateValue, DateParseError> {
    let pattern = DatePattern::parse(pattern)?;
    Ok(pattern.parse_date(raw)?)
}

/// 以 `DEFAULT_PATTERN` 解析日期
///
/// # Errors
/// 同 `parse_date`
pub fn parse_default_date(raw: &str) -> Result<DateValue, DateParseError> {
    parse_date(raw, DEFAULT_PATTERN)
}
