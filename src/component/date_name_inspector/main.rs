use super::name_parser::{NameDate, parse_file_names, summarize};
use crate::component::interactive::{print_table, prompt_directory, remember_directory};
use crate::config::Config;
use crate::config::save::save_settings;
use crate::tools::date_pattern::{DatePattern, validate_format};
use crate::tools::{file_name, scan_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::collections::HashSet;

/// 檔名日期檢視元件
pub struct DateNameInspector {
    config: Config,
}

impl DateNameInspector {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 檔名日期檢視 ===").cyan().bold());

        let Some(directory) = prompt_directory(&self.config, "請輸入資料夾路徑")? else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        remember_directory(&mut self.config, &directory);

        let pattern = self.prompt_pattern()?;

        let files = scan_files(&directory, &HashSet::new())?;
        info!(
            "以格式 {} 解析 {} 個檔名: {}",
            pattern.as_str(),
            files.len(),
            directory.display()
        );

        if files.is_empty() {
            println!("{}", style("資料夾中沒有檔案").yellow());
            return Ok(());
        }

        let dates = parse_file_names(&files, &pattern);
        Self::print_dates(&dates);
        Ok(())
    }

    /// 詢問日期格式，輸入時即驗證；與預設不同時記住為新的預設
    fn prompt_pattern(&mut self) -> Result<DatePattern> {
        let source: String = Input::new()
            .with_prompt("日期格式 (y 年, M 月, d 日, h 時, m 分, s 秒, * 雜訊)")
            .default(self.config.settings.date_pattern.clone())
            .validate_with(|input: &String| validate_format(input))
            .interact_text()?;

        let pattern = DatePattern::parse(&source)?;

        if source != self.config.settings.date_pattern {
            self.config.settings.date_pattern = source;
            if let Err(e) = save_settings(&self.config.settings) {
                warn!("無法儲存日期格式: {e}");
            }
        }

        Ok(pattern)
    }

    fn print_dates(dates: &[NameDate]) {
        let rows: Vec<Vec<String>> = dates
            .iter()
            .map(|date| {
                let (value, status) = match &date.result {
                    Ok(value) if date.is_calendar_date() => (value.to_string(), "Ok".to_string()),
                    Ok(value) => (value.to_string(), "Not a calendar date".to_string()),
                    Err(e) => ("-".to_string(), e.to_string()),
                };
                vec![file_name(&date.path, true), value, status]
            })
            .collect();

        println!();
        print_table(&["Filename", "Date", "Status"], &rows);

        let summary = summarize(dates);
        println!();
        println!("  成功: {} 個", style(summary.parsed).green());
        if summary.not_calendar > 0 {
            println!("  日期不存在: {} 個", style(summary.not_calendar).yellow());
        }
        if summary.failed > 0 {
            println!("  失敗: {} 個", style(summary.failed).red());
        }
    }
}
