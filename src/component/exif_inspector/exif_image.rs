//! 讀取圖片 EXIF 中的日期欄位

use crate::tools::date_pattern::{DatePattern, DateValue, EXIF_DATETIME_PATTERN};
use anyhow::{Context, Result};
use exif::{Exif, In, Tag, Value};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static EXIF_DATETIME: LazyLock<DatePattern> = LazyLock::new(|| {
    DatePattern::parse(EXIF_DATETIME_PATTERN).expect("Invalid EXIF datetime pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifImage {
    pub path: PathBuf,
    pub has_exif: bool,
    /// 檔案建立（或最後編輯）時間
    pub datetime: Option<String>,
    /// 拍攝時間
    pub datetime_original: Option<String>,
    /// 數位化時間，例如掃描的時間
    pub datetime_digitized: Option<String>,
}

impl ExifImage {
    /// 讀取圖片的 EXIF 日期欄位，沒有 EXIF 資料時 `has_exif` 為 false
    ///
    /// # Errors
    /// 檔案無法開啟時回傳錯誤
    pub fn read(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("無法開啟圖片: {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(e) => {
                debug!("沒有 EXIF 資料 {}: {e}", path.display());
                return Ok(Self {
                    path: path.to_path_buf(),
                    ..Self::default()
                });
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            has_exif: true,
            datetime: ascii_field(&exif, Tag::DateTime),
            datetime_original: ascii_field(&exif, Tag::DateTimeOriginal),
            datetime_digitized: ascii_field(&exif, Tag::DateTimeDigitized),
        })
    }

    /// 最能代表拍攝時間的欄位：拍攝時間 → 數位化時間 → 檔案時間
    #[must_use]
    pub fn best_datetime(&self) -> Option<DateValue> {
        [
            &self.datetime_original,
            &self.datetime_digitized,
            &self.datetime,
        ]
        .into_iter()
        .flatten()
        .find_map(|raw| parse_exif_datetime(raw))
    }
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref values) => values.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        }),
        _ => None,
    }
}

/// 解析 `yyyy:MM:dd hh:mm:ss` 格式，容許後方多餘的字元（例如時區）
#[must_use]
pub fn parse_exif_datetime(raw: &str) -> Option<DateValue> {
    EXIF_DATETIME.parse_date(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;
    use tempfile::TempDir;

    /// 只有 IFD0 `DateTime` 一個欄位的最小 TIFF
    fn tiff_with_datetime(datetime: &str) -> Vec<u8> {
        let mut value = datetime.as_bytes().to_vec();
        value.push(0);
        let count = u32::try_from(value.len()).unwrap();

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"II");
        bytes.extend_from_slice(&42u16.to_le_bytes());
        bytes.extend_from_slice(&8u32.to_le_bytes());
        // IFD0
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0x0132u16.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&count.to_le_bytes());
        bytes.extend_from_slice(&26u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&value);
        bytes
    }

    #[test]
    fn test_read_image_without_exif() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.png");
        RgbImage::new(4, 4).save(&path).unwrap();

        let image = ExifImage::read(&path).unwrap();
        assert!(!image.has_exif);
        assert_eq!(image.datetime, None);
        assert_eq!(image.best_datetime(), None);
    }

    #[test]
    fn test_read_tiff_datetime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.tif");
        fs::write(&path, tiff_with_datetime("2021:03:04 05:06:07")).unwrap();

        let image = ExifImage::read(&path).unwrap();
        assert!(image.has_exif);
        assert_eq!(image.datetime.as_deref(), Some("2021:03:04 05:06:07"));
        assert_eq!(image.datetime_original, None);
        assert_eq!(
            image.best_datetime().unwrap().to_string(),
            "2021-03-04 05:06:07"
        );
    }

    #[test]
    fn test_read_missing_file() {
        assert!(ExifImage::read(Path::new("/no/existent/photo.jpg")).is_err());
    }

    #[test]
    fn test_parse_exif_datetime() {
        let value = parse_exif_datetime("2019:12:31 23:59:58").unwrap();
        assert_eq!(value.year, 2019);
        assert_eq!(value.month, 12);
        assert_eq!(value.second, 58);

        let with_offset = parse_exif_datetime("2019:12:31 23:59:58+08:00").unwrap();
        assert_eq!(with_offset, value);

        assert_eq!(parse_exif_datetime("    :  :     :  :  "), None);
        assert_eq!(parse_exif_datetime("2019:12"), None);
    }

    #[test]
    fn test_best_datetime_prefers_original() {
        let image = ExifImage {
            datetime: Some("2020:01:01 00:00:00".to_string()),
            datetime_original: Some("2019:06:15 10:20:30".to_string()),
            ..ExifImage::default()
        };
        assert_eq!(image.best_datetime().unwrap().year, 2019);
    }
}
