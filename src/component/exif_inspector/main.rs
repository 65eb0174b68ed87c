use super::exif_image::{ExifImage, parse_exif_datetime};
use crate::component::interactive::{print_table, prompt_directory, remember_directory};
use crate::config::Config;
use crate::tools::{file_name, read_paths_file, scan_files, validate_directory_exists, validate_file_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const TABLE_HEADERS: [&str; 4] = [
    "Filename",
    "File creation time",
    "Original datetime",
    "Digitalized datetime",
];

/// EXIF 日期檢視元件
pub struct ExifInspector {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl ExifInspector {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    /// 分頁顯示資料夾中所有圖片的 EXIF 日期
    pub fn run_directory(&mut self) -> Result<()> {
        println!("{}", style("=== EXIF 日期檢視（資料夾）===").cyan().bold());

        let Some(directory) = prompt_directory(&self.config, "請輸入圖片資料夾路徑")? else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        remember_directory(&mut self.config, &directory);

        let extensions = self.config.file_type_table.exif_image_extensions_set();
        let files = scan_files(&directory, &extensions)?;
        info!("找到 {} 張圖片: {}", files.len(), directory.display());

        if files.is_empty() {
            println!("{}", style("沒有找到可檢視的圖片").yellow());
            return Ok(());
        }

        let page_size = self.config.settings.exif_page_size.max(1);
        let total_pages = files.len().div_ceil(page_size);

        for (page, chunk) in files.chunks(page_size).enumerate() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷信號，停止處理");
                break;
            }

            println!(
                "\n{}",
                style(format!("第 {}/{} 頁", page + 1, total_pages)).dim()
            );
            Self::print_images(&inspect_files(chunk));

            if page + 1 < total_pages {
                let next = Confirm::new()
                    .with_prompt("繼續顯示下一頁？")
                    .default(true)
                    .interact()?;
                if !next {
                    break;
                }
            }
        }

        Ok(())
    }

    /// 檢視路徑清單檔案中列出的每張圖片
    pub fn run_paths_file(&mut self) -> Result<()> {
        println!("{}", style("=== EXIF 日期檢視（路徑清單）===").cyan().bold());

        let path: String = Input::new()
            .with_prompt("請輸入路徑清單檔案")
            .interact_text()?;
        let paths_file = PathBuf::from(path.trim());
        validate_file_exists(&paths_file)?;

        let (existing, missing): (Vec<PathBuf>, Vec<PathBuf>) = read_paths_file(&paths_file)?
            .into_iter()
            .partition(|p| p.is_file());

        for path in &missing {
            println!("{} {}", style("找不到檔案:").red(), path.display());
        }

        if existing.is_empty() {
            println!("{}", style("沒有找到可檢視的圖片").yellow());
            return Ok(());
        }

        Self::print_images(&inspect_files(&existing));
        Ok(())
    }

    fn print_images(images: &[ExifImage]) {
        let rows: Vec<Vec<String>> = images
            .iter()
            .map(|image| {
                vec![
                    file_name(&image.path, true),
                    describe(image.datetime.as_deref()),
                    describe(image.datetime_original.as_deref()),
                    describe(image.datetime_digitized.as_deref()),
                ]
            })
            .collect();

        print_table(&TABLE_HEADERS, &rows);

        let without_exif = images.iter().filter(|i| !i.has_exif).count();
        if without_exif > 0 {
            println!(
                "  {}",
                style(format!("{without_exif} 張圖片沒有 EXIF 資料")).dim()
            );
        }
    }
}

/// 平行讀取，結果維持輸入順序；無法讀取的檔案視為沒有 EXIF
fn inspect_files(files: &[PathBuf]) -> Vec<ExifImage> {
    files
        .par_iter()
        .map(|path| read_or_empty(path))
        .collect()
}

fn read_or_empty(path: &Path) -> ExifImage {
    ExifImage::read(path).unwrap_or_else(|e| {
        warn!("{e:#}");
        ExifImage {
            path: path.to_path_buf(),
            ..ExifImage::default()
        }
    })
}

/// 原始值無法以 EXIF 格式解析時加上標記
fn describe(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(raw) if parse_exif_datetime(raw).is_some() => raw.to_string(),
        Some(raw) => format!("{raw} (?)"),
    }
}
