//! 元件共用的互動流程：選擇路徑、確認重新命名單、表格輸出

use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{RenameOrder, RenameSummary, RenameTarget, file_name};
use anyhow::Result;
use console::{Alignment, measure_text_width, pad_str, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::warn;
use std::path::{Path, PathBuf};

/// 從最近使用的路徑中選擇，或輸入新路徑
///
/// 按 ESC 時回傳 `None`
pub fn prompt_directory(config: &Config, prompt: &str) -> Result<Option<PathBuf>> {
    let recent_paths = &config.settings.recent_paths;

    if recent_paths.is_empty() {
        let path: String = Input::new().with_prompt(prompt).interact_text()?;
        return Ok(Some(PathBuf::from(path.trim())));
    }

    let mut options: Vec<String> = recent_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let indicator = if Path::new(p).is_dir() { "✓" } else { "✗" };
            format!("{} [{}] {}", i + 1, indicator, p)
        })
        .collect();
    options.push("輸入新路徑...".to_string());

    println!("{}", style("(按 ESC 返回主選單)").dim());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇路徑")
        .items(&options)
        .default(0)
        .interact_opt()?;

    match selection {
        None => Ok(None),
        Some(idx) if idx < recent_paths.len() => Ok(Some(PathBuf::from(&recent_paths[idx]))),
        Some(_) => {
            let path: String = Input::new().with_prompt(prompt).interact_text()?;
            Ok(Some(PathBuf::from(path.trim())))
        }
    }
}

/// 可留空的欄位，留空時回傳 `None`
pub fn ask_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// 記錄最近使用的路徑並儲存設定
pub fn remember_directory(config: &mut Config, directory: &Path) {
    add_recent_path(&mut config.settings, &directory.to_string_lossy());
    if let Err(e) = save_settings(&config.settings) {
        warn!("無法儲存路徑歷史: {e}");
    }
}

/// 檢查重新命名單並詢問使用者是否執行
///
/// 有錯誤時直接取消；有警告時讓使用者選擇取消、只處理安全項目或全部覆寫
pub fn evaluate_rename_order<T: RenameTarget>(order: &mut RenameOrder<T>) -> Result<()> {
    if order.has_errors() {
        for error in order.error_messages() {
            println!("{}", style(error).red());
        }
        order.execute = false;
        return Ok(());
    }

    print_rename_preview(order);

    if !order.has_warnings() {
        order.execute = Confirm::new()
            .with_prompt("確定要重新命名這些檔案嗎？")
            .default(false)
            .interact()?;
        return Ok(());
    }

    for warning in order.warning_messages() {
        println!("{}", style(warning).yellow());
    }

    let choices = ["取消操作", "只重新命名安全的檔案", "全部重新命名並覆寫已存在的檔案"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇")
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

fn print_rename_preview<T: RenameTarget>(order: &RenameOrder<T>) {
    let mut rows: Vec<Vec<String>> = Vec::new();

    let entries = order
        .targets
        .iter()
        .map(|t| (t, "Ok"))
        .chain(order.dst_existent_targets.iter().map(|t| (t, "Existent")));

    for (target, status) in entries {
        let new_name = target
            .make_file_name()
            .unwrap_or_else(|e| format!("<{e}>"));
        rows.push(vec![
            file_name(target.source_file(), true),
            new_name,
            status.to_string(),
        ]);
    }

    println!();
    print_table(&["Current name", "New name", "Status"], &rows);
    println!();
}

pub fn print_rename_summary(summary: &RenameSummary) {
    println!();
    println!("{}", style("=== 重新命名結果 ===").cyan().bold());
    println!("  成功: {} 個", style(summary.renamed).green());
    if summary.overwritten > 0 {
        println!("  覆寫: {} 個", style(summary.overwritten).yellow());
    }
    if summary.skipped > 0 {
        println!("  跳過: {} 個", style(summary.skipped).yellow());
    }
    if summary.errors > 0 {
        println!("  失敗: {} 個", style(summary.errors).red());
    }
}

/// 以固定欄寬輸出表格（欄寬依最寬的內容計算，支援全形字元）
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad_str(h, w, Alignment::Left, None).to_string())
        .collect();
    println!("  {}", style(header_line.join(" │ ")).bold());

    let separator: Vec<String> = widths.iter().map(|&w| "─".repeat(w)).collect();
    println!("  {}", style(separator.join("─┼─")).dim());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad_str(cell, w, Alignment::Left, None).to_string())
            .collect();
        println!("  {}", line.join(" │ "));
    }
}
