use crate::tools::date_pattern::DEFAULT_PATTERN;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// 最近使用路徑的保存數量
pub const MAX_RECENT_PATHS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "EXIF_IMAGE_FILE")]
    pub exif_image_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        to_extension_set(&self.video_file)
    }

    #[must_use]
    pub fn image_extensions_set(&self) -> HashSet<String> {
        to_extension_set(&self.image_file)
    }

    #[must_use]
    pub fn exif_image_extensions_set(&self) -> HashSet<String> {
        to_extension_set(&self.exif_image_file)
    }
}

fn to_extension_set(extensions: &[String]) -> HashSet<String> {
    extensions.iter().map(|ext| ext.to_lowercase()).collect()
}

/// 副檔名集合格式為 `.ext`（小寫）
pub fn has_extension_in(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
}

/// 介面語言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 圖片縮放預設尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// 使用者設定（settings.json）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub recent_paths: Vec<String>,
    pub resize: ResizeSettings,
    /// 檔名日期檢視使用的預設格式
    pub date_pattern: String,
    /// EXIF 檢視每頁顯示的圖片數
    pub exif_page_size: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            recent_paths: Vec::new(),
            resize: ResizeSettings::default(),
            date_pattern: DEFAULT_PATTERN.to_string(),
            exif_page_size: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{"language":"zh-TW"}"#).unwrap();
        assert_eq!(settings.language, Language::ZhTw);
        assert_eq!(settings.date_pattern, DEFAULT_PATTERN);
        assert_eq!(settings.resize, ResizeSettings::default());
        assert_eq!(settings.exif_page_size, 100);
        assert!(settings.recent_paths.is_empty());
    }

    #[test]
    fn test_has_extension_in_is_case_insensitive() {
        let extensions: HashSet<String> = [".mkv".to_string()].into_iter().collect();
        assert!(has_extension_in(Path::new("/movies/Film.MKV"), &extensions));
        assert!(!has_extension_in(Path::new("/movies/Film.srt"), &extensions));
        assert!(!has_extension_in(Path::new("/movies/Film"), &extensions));
    }
}
