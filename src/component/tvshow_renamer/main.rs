use super::chapter::{TvShowChapter, guess_episode};
use crate::component::interactive::{
    ask_optional, evaluate_rename_order, print_rename_summary, prompt_directory,
    remember_directory,
};
use crate::config::Config;
use crate::tools::{RenameOrder, file_extension, file_name, scan_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 整季共用的影集資訊
struct ShowInfo {
    title: String,
    year: Option<u32>,
}

/// 影集檔案重新命名元件
pub struct TvShowRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl TvShowRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 影集檔案重新命名 ===").cyan().bold());

        let Some(directory) = prompt_directory(&self.config, "請輸入影集資料夾路徑")? else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        remember_directory(&mut self.config, &directory);

        let Some(mut order) = self.prepare_rename_order(&directory)? else {
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

    fn prepare_rename_order(
        &self,
        directory: &Path,
    ) -> Result<Option<RenameOrder<TvShowChapter>>> {
        println!(
            "{}",
            style(format!("Looking for TV Show files in: {}", directory.display())).dim()
        );

        let extensions = self.config.file_type_table.video_extensions_set();
        let files = scan_files(directory, &extensions)?;
        info!("找到 {} 個影集檔案: {}", files.len(), directory.display());

        let mut order = RenameOrder::new(directory);
        if files.is_empty() {
            return Ok(Some(order));
        }

        let show = Self::ask_show_info()?;

        for chapter_file in files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷信號，停止處理");
                return Ok(None);
            }

            let src_file_name = file_name(&chapter_file, true);
            println!("\n {} {}", style("找到檔案:").cyan(), src_file_name);

            let approved = Confirm::new()
                .with_prompt("Rename file?")
                .default(true)
                .interact()?;

            if !approved {
                order.skip(chapter_file);
                continue;
            }

            let chapter = Self::ask_chapter_details(&show, chapter_file, &src_file_name)?;
            if let Err(e) = order.push(chapter) {
                order.errors.push(e.to_string());
            }
        }

        Ok(Some(order))
    }

    fn ask_show_info() -> Result<ShowInfo> {
        let title: String = Input::new().with_prompt("TV Show title").interact_text()?;
        let year: String = Input::new()
            .with_prompt("[Year]")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), &str> {
                let input = input.trim();
                if input.is_empty() || input.parse::<u32>().is_ok() {
                    Ok(())
                } else {
                    Err("請輸入數字")
                }
            })
            .interact_text()?;

        Ok(ShowInfo {
            title: title.trim().to_string(),
            year: year.trim().parse().ok(),
        })
    }

    fn ask_chapter_details(
        show: &ShowInfo,
        src_file: PathBuf,
        src_file_name: &str,
    ) -> Result<TvShowChapter> {
        let guessed = guess_episode(src_file_name);
        debug!("猜測集數 {src_file_name}: {guessed:?}");
        let (guessed_season, guessed_chapter) = guessed.unwrap_or((1, 1));

        let season_number: u32 = Input::new()
            .with_prompt("Season number")
            .default(guessed_season)
            .interact_text()?;
        let chapter_number: u32 = Input::new()
            .with_prompt("Chapter number")
            .default(guessed_chapter)
            .interact_text()?;
        let chapter_title = ask_optional("[Chapter title]")?;
        let resolution = ask_optional("[Resolution (eg: 720p|1080p|4K HDR)]")?;

        Ok(TvShowChapter {
            file_ext: file_extension(&src_file),
            src_file,
            show_title: show.title.clone(),
            season_number,
            chapter_number,
            show_year: show.year,
            chapter_title,
            resolution,
        })
    }
}
