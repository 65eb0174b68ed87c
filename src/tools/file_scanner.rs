use crate::config::has_extension_in;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出資料夾第一層的檔案（不遞迴），依檔名排序
///
/// `extensions` 為空時不過濾副檔名；否則格式為 `.ext`（小寫）
pub fn scan_files(directory: &Path, extensions: &HashSet<String>) -> Result<Vec<PathBuf>> {
    validate_directory_exists(directory)?;

    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| extensions.is_empty() || has_extension_in(entry.path(), extensions))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}
