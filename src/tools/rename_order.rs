//! 重新命名單
//!
//! 收集待重新命名的檔案，區分目標已存在的項目，經使用者確認後才套用

use anyhow::Result;
use derive_more::{Display, Error};
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum RenameError {
    #[display("not enough data to rename {}", path.display())]
    MissingRequiredData { path: PathBuf },
    #[display("{} conflicts with another file in this rename order", path.display())]
    DestinationConflict { path: PathBuf },
}

/// 可被重新命名的檔案
pub trait RenameTarget {
    fn source_file(&self) -> &Path;

    /// 必要欄位是否齊全（不檢查檔案系統）
    fn has_required_data(&self) -> bool;

    /// 組出目標檔名，呼叫前須確認 `is_valid`
    fn build_file_name(&self) -> String;

    fn is_valid(&self) -> bool {
        self.source_file().is_file() && self.has_required_data()
    }

    /// # Errors
    /// 來源檔案不存在或必要欄位不齊全時回傳 `RenameError::MissingRequiredData`
    fn make_file_name(&self) -> Result<String, RenameError> {
        if !self.is_valid() {
            return Err(RenameError::MissingRequiredData {
                path: self.source_file().to_path_buf(),
            });
        }
        Ok(self.build_file_name())
    }

    /// 目標路徑與來源位於同一資料夾
    ///
    /// # Errors
    /// 同 `make_file_name`
    fn make_target_file_path(&self) -> Result<PathBuf, RenameError> {
        let file_name = self.make_file_name()?;
        let dir = self.source_file().parent().unwrap_or_else(|| Path::new(""));
        Ok(dir.join(file_name))
    }
}

/// 去除前後空白後為空字串時視為沒有值
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 套用結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub errors: usize,
}

#[derive(Debug)]
pub struct RenameOrder<T> {
    pub src_dir: PathBuf,
    /// 可安全重新命名的項目
    pub targets: Vec<T>,
    /// 目標檔案已存在的項目
    pub dst_existent_targets: Vec<T>,
    pub skipped_files: Vec<PathBuf>,
    pub errors: Vec<String>,
    /// 使用者已確認
    pub execute: bool,
    /// 覆寫已存在的目標檔案
    pub overwrite: bool,
    /// 已加入項目的來源與目標路徑
    claimed_sources: HashSet<PathBuf>,
    claimed_destinations: HashSet<PathBuf>,
}

enum RenameOutcome {
    Renamed,
    Collided,
    Failed,
}

impl<T: RenameTarget> RenameOrder<T> {
    pub fn new(src_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            targets: Vec::new(),
            dst_existent_targets: Vec::new(),
            skipped_files: Vec::new(),
            errors: Vec::new(),
            execute: false,
            overwrite: false,
            claimed_sources: HashSet::new(),
            claimed_destinations: HashSet::new(),
        }
    }

    /// 依目標檔案是否存在分類加入
    ///
    /// 目標與清單中其他項目的來源或目標重疊時拒絕加入
    ///
    /// # Errors
    /// 項目資料不齊全時回傳 `RenameError::MissingRequiredData`，
    /// 路徑衝突時回傳 `RenameError::DestinationConflict`，兩者都不會加入清單
    pub fn push(&mut self, target: T) -> Result<(), RenameError> {
        let destination = target.make_target_file_path()?;
        let source = target.source_file().to_path_buf();

        let conflicts = self.claimed_destinations.contains(&destination)
            || (destination != source && self.claimed_sources.contains(&destination))
            || self.claimed_destinations.contains(&source);
        if conflicts {
            return Err(RenameError::DestinationConflict { path: destination });
        }

        let exists = destination.exists();
        self.claimed_sources.insert(source);
        self.claimed_destinations.insert(destination);

        if exists {
            self.dst_existent_targets.push(target);
        } else {
            self.targets.push(target);
        }
        Ok(())
    }

    pub fn skip(&mut self, path: impl Into<PathBuf>) {
        self.skipped_files.push(path.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.dst_existent_targets.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.is_empty()
    }

    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = self.errors.clone();
        if self.is_empty() {
            messages.push("No files to rename".to_string());
        }
        messages
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.dst_existent_targets.is_empty()
    }

    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        if self.has_warnings() {
            vec![format!(
                "{} file(s) will be overwritten",
                self.dst_existent_targets.len()
            )]
        } else {
            Vec::new()
        }
    }

    /// 套用重新命名
    ///
    /// 尚未經使用者確認時回傳 `None`；目標已存在的項目只有在 `overwrite` 時才處理。
    /// 單一項目失敗只計入統計，不中斷其餘項目
    pub fn apply(&self) -> Result<Option<RenameSummary>> {
        if !self.execute {
            return Ok(None);
        }

        let mut summary = RenameSummary::default();

        for target in &self.targets {
            match Self::rename(target, false) {
                RenameOutcome::Renamed => summary.renamed += 1,
                RenameOutcome::Collided => summary.skipped += 1,
                RenameOutcome::Failed => summary.errors += 1,
            }
        }

        if self.overwrite {
            for target in &self.dst_existent_targets {
                match Self::rename(target, true) {
                    RenameOutcome::Renamed => summary.overwritten += 1,
                    RenameOutcome::Collided => summary.skipped += 1,
                    RenameOutcome::Failed => summary.errors += 1,
                }
            }
        } else {
            summary.skipped += self.dst_existent_targets.len();
        }

        info!(
            "重新命名完成 - 成功: {}, 覆寫: {}, 跳過: {}, 失敗: {}",
            summary.renamed, summary.overwritten, summary.skipped, summary.errors
        );

        Ok(Some(summary))
    }

    /// `replace` 為否時，目標在加入後才出現也不會被覆寫
    fn rename(target: &T, replace: bool) -> RenameOutcome {
        let source = target.source_file();
        let destination = match target.make_target_file_path() {
            Ok(destination) => destination,
            Err(e) => {
                warn!("略過 {}: {e}", source.display());
                return RenameOutcome::Failed;
            }
        };

        if !replace && destination.exists() {
            warn!("目標已存在，略過 {}", destination.display());
            return RenameOutcome::Collided;
        }

        match fs::rename(source, &destination) {
            Ok(()) => RenameOutcome::Renamed,
            Err(e) => {
                warn!(
                    "無法重新命名 {} -> {}: {e}",
                    source.display(),
                    destination.display()
                );
                RenameOutcome::Failed
            }
        }
    }
}
