//! 縮放單
//!
//! 預覽階段只讀取圖片尺寸並分類，不會寫入任何檔案

use crate::tools::{file_name, scan_files};
use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const MIN_WIDTH: u32 = 320;
pub const MIN_HEIGHT: u32 = 480;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedImage {
    pub src_file: PathBuf,
    pub dst_file: PathBuf,
}

#[derive(Debug)]
pub struct ResizeOrder {
    pub src_dir: PathBuf,
    pub tgt_width: u32,
    pub tgt_height: u32,
    /// 未指定時為 `<src_dir>/<W>x<H>`
    pub dst_dir: PathBuf,
    /// 整體錯誤，有任何一項時不可執行
    pub general_errors: Vec<String>,
    /// 尺寸小於目標或無法讀取的圖片
    pub invalid_images: Vec<PathBuf>,
    /// 目標資料夾中已有同名輸出的圖片
    pub existent_images: Vec<ResizedImage>,
    pub ok_images: Vec<ResizedImage>,
    pub execute: bool,
    pub overwrite: bool,
}

/// 單張圖片的預覽結果
enum Preview {
    Invalid(PathBuf),
    Existent(ResizedImage),
    Ok(ResizedImage),
}

impl ResizeOrder {
    pub fn new(
        src_dir: impl Into<PathBuf>,
        tgt_width: u32,
        tgt_height: u32,
        dst_dir: Option<PathBuf>,
    ) -> Self {
        let src_dir = src_dir.into();
        let dst_dir =
            dst_dir.unwrap_or_else(|| make_destination_dir(&src_dir, tgt_width, tgt_height));

        Self {
            src_dir,
            tgt_width,
            tgt_height,
            dst_dir,
            general_errors: Vec::new(),
            invalid_images: Vec::new(),
            existent_images: Vec::new(),
            ok_images: Vec::new(),
            execute: false,
            overwrite: false,
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.general_errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.existent_images.is_empty() || !self.invalid_images.is_empty()
    }

    /// 檢查目標尺寸並分類來源資料夾中的圖片
    ///
    /// # Errors
    /// 來源資料夾無法讀取時回傳錯誤
    pub fn preview(&mut self, extensions: &HashSet<String>) -> Result<()> {
        if self.tgt_width < MIN_WIDTH {
            self.general_errors
                .push(format!("Minimal supported width is {MIN_WIDTH}px"));
        }
        if self.tgt_height < MIN_HEIGHT {
            self.general_errors
                .push(format!("Minimal supported height is {MIN_HEIGHT}px"));
        }
        if self.has_errors() {
            return Ok(());
        }

        let files = scan_files(&self.src_dir, extensions)?;

        let previews: Vec<Preview> = files
            .into_par_iter()
            .map(|src_file| self.preview_image(src_file))
            .collect();

        for preview in previews {
            match preview {
                Preview::Invalid(path) => self.invalid_images.push(path),
                Preview::Existent(image) => self.existent_images.push(image),
                Preview::Ok(image) => self.ok_images.push(image),
            }
        }

        if self.ok_images.is_empty() && self.existent_images.is_empty() {
            self.general_errors
                .push("Valid images for resize not found".to_string());
        }

        Ok(())
    }

    fn preview_image(&self, src_file: PathBuf) -> Preview {
        let (width, height) = match image::image_dimensions(&src_file) {
            Ok(dimensions) => dimensions,
            Err(e) => {
                warn!("無法讀取圖片尺寸 {}: {e}", src_file.display());
                return Preview::Invalid(src_file);
            }
        };

        if width < self.tgt_width || height < self.tgt_height {
            debug!(
                "圖片尺寸不足 {} ({width}x{height})",
                src_file.display()
            );
            return Preview::Invalid(src_file);
        }

        let dst_file =
            make_destination_file(&src_file, &self.dst_dir, self.tgt_width, self.tgt_height);
        let image = ResizedImage { src_file, dst_file };

        if image.dst_file.exists() {
            Preview::Existent(image)
        } else {
            Preview::Ok(image)
        }
    }

    /// 依使用者選擇實際要處理的圖片
    pub fn selected_images(&self) -> Vec<&ResizedImage> {
        let mut images: Vec<&ResizedImage> = self.ok_images.iter().collect();
        if self.overwrite {
            images.extend(self.existent_images.iter());
        }
        images
    }
}

/// `<dst_dir>/<stem>_<W>x<H><.ext>`
#[must_use]
pub fn make_destination_file(src_file: &Path, dst_dir: &Path, width: u32, height: u32) -> PathBuf {
    let stem = file_name(src_file, false);
    let ext = src_file
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    dst_dir.join(format!("{stem}_{width}x{height}{ext}"))
}

/// `<src_dir>/<W>x<H>`
#[must_use]
pub fn make_destination_dir(src_dir: &Path, width: u32, height: u32) -> PathBuf {
    src_dir.join(format!("{width}x{height}"))
}
