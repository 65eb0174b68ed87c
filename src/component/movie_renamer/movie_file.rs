//! 電影檔名
//!
//! 格式：`<Title> (<Year>) - [Resolution] [Audio language] [Extra].<ext>`

use crate::tools::{RenameTarget, non_empty};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFile {
    pub src_file: PathBuf,
    pub title: String,
    pub year: u32,
    /// 例如 720p、1080p、4K
    pub resolution: Option<String>,
    /// 例如 Eng、Lat、Dual
    pub audio_lang: Option<String>,
    /// 例如 HDR、Extended、3D
    pub extra_comment: Option<String>,
    /// 不含前導點
    pub file_ext: Option<String>,
}

impl MovieFile {
    pub fn new(src_file: impl Into<PathBuf>, title: impl Into<String>, year: u32) -> Self {
        Self {
            src_file: src_file.into(),
            title: title.into(),
            year,
            ..Self::default()
        }
    }
}

impl RenameTarget for MovieFile {
    fn source_file(&self) -> &Path {
        &self.src_file
    }

    fn has_required_data(&self) -> bool {
        !self.title.trim().is_empty() && self.year > 0
    }

    fn build_file_name(&self) -> String {
        let resolution = non_empty(self.resolution.as_deref());
        let audio_lang = non_empty(self.audio_lang.as_deref());
        let extra_comment = non_empty(self.extra_comment.as_deref());

        let mut name = format!("{} ({})", self.title.trim(), self.year);

        if let Some(resolution) = resolution {
            name.push_str(&format!(" - {resolution}"));
        }

        if let Some(audio_lang) = audio_lang {
            let separator = if resolution.is_some() { "" } else { " -" };
            name.push_str(&format!("{separator} {audio_lang}"));
        }

        if let Some(extra_comment) = extra_comment {
            let separator = if resolution.is_some() || audio_lang.is_some() {
                ""
            } else {
                " -"
            };
            name.push_str(&format!("{separator} {extra_comment}"));
        }

        if let Some(ext) = non_empty(self.file_ext.as_deref()) {
            name.push('.');
            name.push_str(ext.trim_start_matches('.'));
        }

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::RenameError;
    use tempfile::{NamedTempFile, TempDir};

    fn movie(src_file: &Path) -> MovieFile {
        MovieFile::new(src_file, "Interstellar", 2018)
    }

    #[test]
    fn test_make_file_name() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(movie(file.path()).make_file_name().unwrap(), "Interstellar (2018)");
    }

    #[test]
    fn test_make_file_name_not_valid() {
        let movie = movie(Path::new("/no/existent/path"));
        assert!(matches!(
            movie.make_file_name(),
            Err(RenameError::MissingRequiredData { .. })
        ));
    }

    #[test]
    fn test_make_file_name_resolution() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());
        movie.resolution = Some("4k".to_string());

        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018) - 4k");
    }

    #[test]
    fn test_make_file_name_audio() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());
        movie.audio_lang = Some("Eng".to_string());

        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018) - Eng");
    }

    #[test]
    fn test_make_file_name_comment() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());
        movie.extra_comment = Some("3D".to_string());

        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018) - 3D");
    }

    #[test]
    fn test_make_file_name_ext() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());

        movie.file_ext = Some("mkv".to_string());
        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018).mkv");

        movie.file_ext = Some(".mkv".to_string());
        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018).mkv");
    }

    #[test]
    fn test_make_file_name_res_audio_comment() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());
        movie.resolution = Some("1080p".to_string());
        movie.audio_lang = Some("Dual".to_string());
        assert_eq!(
            movie.make_file_name().unwrap(),
            "Interstellar (2018) - 1080p Dual"
        );

        movie.extra_comment = Some("Extended".to_string());
        assert_eq!(
            movie.make_file_name().unwrap(),
            "Interstellar (2018) - 1080p Dual Extended"
        );
    }

    #[test]
    fn test_make_file_name_blank_optionals_are_ignored() {
        let file = NamedTempFile::new().unwrap();
        let mut movie = movie(file.path());
        movie.resolution = Some(String::new());
        movie.audio_lang = Some("  ".to_string());

        assert_eq!(movie.make_file_name().unwrap(), "Interstellar (2018)");
    }

    #[test]
    fn test_make_target_file_path_same_directory() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("interstellar.2018.mkv");
        std::fs::write(&src, "").unwrap();

        let mut movie = movie(&src);
        movie.file_ext = Some("mkv".to_string());

        assert_eq!(
            movie.make_target_file_path().unwrap(),
            temp_dir.path().join("Interstellar (2018).mkv")
        );
    }

    #[test]
    fn test_is_valid() {
        let file = NamedTempFile::new().unwrap();
        let temp_dir = TempDir::new().unwrap();

        assert!(movie(file.path()).is_valid());
        assert!(!movie(temp_dir.path()).is_valid());
        assert!(!movie(Path::new("/no/existent/path")).is_valid());
        assert!(!MovieFile::new(file.path(), "", 1999).is_valid());
        assert!(!MovieFile::new(file.path(), "The Fight Club", 0).is_valid());
    }
}
