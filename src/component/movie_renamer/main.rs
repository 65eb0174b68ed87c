use super::movie_file::MovieFile;
use crate::component::interactive::{
    ask_optional, evaluate_rename_order, print_rename_summary, prompt_directory,
    remember_directory,
};
use crate::config::Config;
use crate::tools::{RenameOrder, file_extension, file_name, scan_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 電影檔案重新命名元件
pub struct MovieRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl MovieRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 電影檔案重新命名 ===").cyan().bold());

        let Some(directory) = prompt_directory(&self.config, "請輸入電影資料夾路徑")? else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        remember_directory(&mut self.config, &directory);

        let order = self.prepare_rename_order(&directory)?;
        let Some(mut order) = order else {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        };

        evaluate_rename_order(&mut order)?;

        match order.apply()? {
            Some(summary) => print_rename_summary(&summary),
            None => println!("{}", style("操作已取消").yellow()),
        }

        Ok(())
    }

    /// 掃描資料夾並逐一詢問電影資訊，尚未套用任何變更
    ///
    /// 收到中斷信號時回傳 `None`
    fn prepare_rename_order(&self, directory: &Path) -> Result<Option<RenameOrder<MovieFile>>> {
        println!(
            "{}",
            style(format!("搜尋電影檔案: {}", directory.display())).dim()
        );

        let extensions = self.config.file_type_table.video_extensions_set();
        let files = scan_files(directory, &extensions)?;
        info!("找到 {} 個電影檔案: {}", files.len(), directory.display());

        let mut order = RenameOrder::new(directory);

        for movie_file in files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷信號，停止處理");
                return Ok(None);
            }

            let src_file_name = file_name(&movie_file, true);
            println!("\n {} {}", style("找到檔案:").cyan(), src_file_name);

            let approved = Confirm::new()
                .with_prompt("Rename file?")
                .default(true)
                .interact()?;

            if !approved {
                order.skip(movie_file);
                continue;
            }

            let movie = Self::ask_movie_details(movie_file)?;
            if let Err(e) = order.push(movie) {
                order.errors.push(e.to_string());
            }
        }

        Ok(Some(order))
    }

    fn ask_movie_details(src_file: PathBuf) -> Result<MovieFile> {
        let title: String = Input::new().with_prompt("Movie title").interact_text()?;
        let year: u32 = Input::new().with_prompt("Year").interact_text()?;
        let resolution = ask_optional("[Resolution (eg: 720p|1080p|4k)]")?;
        let audio_lang = ask_optional("[Language (eg: Eng|Lat|Dual)]")?;
        let extra_comment = ask_optional("[Extra data (eg: HDR|Extended|3D)]")?;

        Ok(MovieFile {
            file_ext: file_extension(&src_file),
            src_file,
            title: title.trim().to_string(),
            year,
            resolution,
            audio_lang,
            extra_comment,
        })
    }
}
