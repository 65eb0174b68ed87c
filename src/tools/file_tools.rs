use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 取得路徑的檔名
///
/// `include_extension` 為 false 時只移除最後一個副檔名（`file.tar.gz` → `file.tar`）
#[must_use]
pub fn file_name(path: &Path, include_extension: bool) -> String {
    let name = if include_extension {
        path.file_name()
    } else {
        path.file_stem()
    };

    name.map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// 取得副檔名（不含前導點），沒有副檔名時回傳 `None`
#[must_use]
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_string())
}

/// 讀取路徑清單檔案
///
/// 每一行視為一個路徑，忽略空行與 `#` 開頭的註解行
pub fn read_paths_file(path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("無法讀取路徑清單: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("some/path/file.zip"), true), "file.zip");
    }

    #[test]
    fn test_file_name_no_ext() {
        assert_eq!(file_name(Path::new("some/path/file.zip"), false), "file");
    }

    #[test]
    fn test_file_name_without_ext() {
        assert_eq!(file_name(Path::new("some/path/file"), true), "file");
    }

    #[test]
    fn test_file_name_multiple_dots() {
        assert_eq!(
            file_name(Path::new("some/path/file.tar.gz"), false),
            "file.tar"
        );
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(
            file_extension(Path::new("Movie.mkv")),
            Some("mkv".to_string())
        );
        assert_eq!(file_extension(Path::new("Movie")), None);
    }

    #[test]
    fn test_read_paths_file() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("paths.txt");
        fs::write(
            &list,
            "test/path/1\n\n# comment\n  test/path/2  \n#another\n",
        )
        .unwrap();

        let paths = read_paths_file(&list).unwrap();
        assert_eq!(
            paths,
            vec![PathBuf::from("test/path/1"), PathBuf::from("test/path/2")]
        );
    }

    #[test]
    fn test_read_paths_file_missing() {
        assert!(read_paths_file(Path::new("/invalid/path/to/file")).is_err());
    }
}
