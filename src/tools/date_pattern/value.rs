use super::field::{DateField, DateFields};
use chrono::{NaiveDate, NaiveDateTime};
use derive_more::Display;

/// 解析完成的日期時間，格式中沒有的欄位為 0
///
/// 不做日曆驗證（閏年、每月天數），需要時使用 `to_naive_datetime`
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
pub struct DateValue {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateValue {
    /// 將擷取出的數字字串轉為數值
    #[must_use]
    pub fn from_fields(fields: &DateFields) -> Self {
        let number = |field: DateField| fields.get(field).map_or(0, digits_to_number);

        Self {
            year: number(DateField::Year),
            month: number(DateField::Month),
            day: number(DateField::Day),
            hour: number(DateField::Hour),
            minute: number(DateField::Minute),
            second: number(DateField::Second),
        }
    }

    /// 轉為 `chrono::NaiveDateTime`，日期或時間不存在時回傳 `None`
    #[must_use]
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

impl From<&DateFields> for DateValue {
    fn from(fields: &DateFields) -> Self {
        Self::from_fields(fields)
    }
}

// 擷取器已確認全為 ASCII 數字，且最多四位
fn digits_to_number(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
