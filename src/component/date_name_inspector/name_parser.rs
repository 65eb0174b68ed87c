//! 以同一個已編譯的格式平行解析多個檔名

use crate::tools::date_pattern::{DatePattern, DateValue, ExtractionError};
use crate::tools::file_name;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDate {
    pub path: PathBuf,
    pub result: Result<DateValue, ExtractionError>,
}

impl NameDate {
    /// 解析成功且是存在的日曆日期
    #[must_use]
    pub fn is_calendar_date(&self) -> bool {
        self.result
            .as_ref()
            .is_ok_and(|value| value.to_naive_datetime().is_some())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameDateSummary {
    pub parsed: usize,
    /// 解析成功但日期不存在（例如 2 月 30 日）
    pub not_calendar: usize,
    pub failed: usize,
}

/// 解析每個檔名（含副檔名），結果維持輸入順序
#[must_use]
pub fn parse_file_names(files: &[PathBuf], pattern: &DatePattern) -> Vec<NameDate> {
    files
        .par_iter()
        .map(|path| NameDate {
            result: pattern.parse_date(&file_name(path, true)),
            path: path.clone(),
        })
        .collect()
}

#[must_use]
pub fn summarize(dates: &[NameDate]) -> NameDateSummary {
    dates
        .iter()
        .fold(NameDateSummary::default(), |mut summary, date| {
            match &date.result {
                Ok(_) if date.is_calendar_date() => summary.parsed += 1,
                Ok(_) => summary.not_calendar += 1,
                Err(_) => summary.failed += 1,
            }
            summary
        })
}
