use super::resize_order::{MIN_HEIGHT, MIN_WIDTH, ResizeOrder};
use super::resizer::{ResizeResult, execute_resize};
use crate::component::interactive::{print_table, prompt_directory, remember_directory};
use crate::config::Config;
use crate::tools::{file_name, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 圖片批次縮放元件
pub struct ImageResizer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl ImageResizer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 圖片批次縮放 ===").cyan().bold());

        let Some(src_dir) = prompt_directory(&self.config, "請輸入圖片資料夾路徑")? else {
            return Ok(());
        };
        validate_directory_exists(&src_dir)?;
        remember_directory(&mut self.config, &src_dir);

        let defaults = &self.config.settings.resize;
        let width: u32 = Input::new()
            .with_prompt("Width")
            .default(defaults.width)
            .validate_with(|w: &u32| -> Result<(), String> {
                if *w >= MIN_WIDTH {
                    Ok(())
                } else {
                    Err(format!("Minimal supported width is {MIN_WIDTH}px"))
                }
            })
            .interact_text()?;
        let height: u32 = Input::new()
            .with_prompt("Height")
            .default(defaults.height)
            .validate_with(|h: &u32| -> Result<(), String> {
                if *h >= MIN_HEIGHT {
                    Ok(())
                } else {
                    Err(format!("Minimal supported height is {MIN_HEIGHT}px"))
                }
            })
            .interact_text()?;
        let dst_dir: String = Input::new()
            .with_prompt("[Destination directory]")
            .allow_empty(true)
            .interact_text()?;
        let dst_dir = Some(dst_dir.trim())
            .filter(|d| !d.is_empty())
            .map(PathBuf::from);

        let mut order = ResizeOrder::new(src_dir.clone(), width, height, dst_dir);
        order.preview(&self.config.file_type_table.image_extensions_set())?;

        Self::evaluate_preview(&mut order)?;

        match execute_resize(&order, &self.shutdown_signal)? {
            Some(result) => Self::print_result(&order, &result),
            None => println!("{}", style("操作已取消").yellow()),
        }

        Ok(())
    }

    /// 顯示預覽結果並詢問使用者是否執行
    fn evaluate_preview(order: &mut ResizeOrder) -> Result<()> {
        if order.has_errors() {
            for error in &order.general_errors {
                println!("{}", style(error).red());
            }
            order.execute = false;
            return Ok(());
        }

        if !order.invalid_images.is_empty() {
            println!(
                "\n{}",
                style(format!(
                    "{} 張圖片小於 {}x{} 或無法讀取，將被略過:",
                    order.invalid_images.len(),
                    order.tgt_width,
                    order.tgt_height
                ))
                .yellow()
            );
            for path in &order.invalid_images {
                println!("  - {}", file_name(path, true));
            }
        }

        let rows: Vec<Vec<String>> = order
            .ok_images
            .iter()
            .map(|i| (i, "Ok"))
            .chain(order.existent_images.iter().map(|i| (i, "Existent")))
            .map(|(image, status)| {
                vec![
                    file_name(&image.src_file, true),
                    file_name(&image.dst_file, true),
                    status.to_string(),
                ]
            })
            .collect();

        println!();
        print_table(&["Source", "Destination", "Status"], &rows);
        println!(
            "\n{} {}",
            style("輸出資料夾:").cyan(),
            order.dst_dir.display()
        );

        if order.existent_images.is_empty() {
            order.execute = Confirm::new()
                .with_prompt(format!("確定要縮放 {} 張圖片嗎？", order.ok_images.len()))
                .default(false)
                .interact()?;
            return Ok(());
        }

        let choices = ["取消操作", "只縮放新的圖片", "全部縮放並覆寫已存在的圖片"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} 張圖片的輸出已存在，請選擇",
                order.existent_images.len()
            ))
            .items(&choices)
            .default(1)
            .interact_opt()?;

        match selection {
            Some(1) => {
                order.execute = true;
                order.overwrite = false;
            }
            Some(2) => {
                order.execute = true;
                order.overwrite = true;
            }
            _ => order.execute = false,
        }

        Ok(())
    }

    fn print_result(order: &ResizeOrder, result: &ResizeResult) {
        println!();
        println!("{}", style("=== 縮放結果 ===").cyan().bold());
        println!("  成功: {} 張", style(result.resized).green());
        if result.skipped > 0 {
            println!("  跳過: {} 張", style(result.skipped).yellow());
        }
        if result.errors > 0 {
            println!("  失敗: {} 張", style(result.errors).red());
        }
        println!("  輸出資料夾: {}", order.dst_dir.display());
    }
}
