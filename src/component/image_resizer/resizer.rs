use super::resize_order::{MIN_HEIGHT, MIN_WIDTH, ResizeOrder, make_destination_file};
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result, bail};
use image::imageops::FilterType;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// 縮放執行結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResizeResult {
    pub resized: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// # Errors
/// 目標尺寸小於最小支援尺寸時回傳錯誤
pub fn validate_target_size(width: u32, height: u32) -> Result<()> {
    if width < MIN_WIDTH {
        bail!("Minimal supported width is {MIN_WIDTH}px");
    }
    if height < MIN_HEIGHT {
        bail!("Minimal supported height is {MIN_HEIGHT}px");
    }
    Ok(())
}

/// 以等同 CSS `cover` 的方式縮放並裁切圖片，輸出至 `dst_dir`
///
/// # Returns
/// 輸出檔案路徑
pub fn resize_image(src_file: &Path, width: u32, height: u32, dst_dir: &Path) -> Result<PathBuf> {
    validate_target_size(width, height)?;

    let img = image::open(src_file)
        .with_context(|| format!("無法開啟圖片: {}", src_file.display()))?;
    let resized = img.resize_to_fill(width, height, FilterType::Lanczos3);

    let dst_file = make_destination_file(src_file, dst_dir, width, height);
    resized
        .save(&dst_file)
        .with_context(|| format!("無法儲存圖片: {}", dst_file.display()))?;

    debug!("縮放完成: {} -> {}", src_file.display(), dst_file.display());
    Ok(dst_file)
}

/// 平行處理已確認的縮放單
///
/// 未經確認時不做任何事並回傳 `None`
pub fn execute_resize(
    order: &ResizeOrder,
    shutdown_signal: &AtomicBool,
) -> Result<Option<ResizeResult>> {
    if !order.execute {
        return Ok(None);
    }

    validate_target_size(order.tgt_width, order.tgt_height)?;
    ensure_directory_exists(&order.dst_dir)?;

    let images = order.selected_images();

    let progress_bar = ProgressBar::new(images.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message("縮放圖片中...");

    let resized_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    images.par_iter().for_each(|image| {
        if shutdown_signal.load(Ordering::SeqCst) {
            return;
        }

        match resize_image(&image.src_file, order.tgt_width, order.tgt_height, &order.dst_dir) {
            Ok(_) => {
                resized_count.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                warn!("縮放失敗 {}: {e:#}", image.src_file.display());
                error_count.fetch_add(1, Ordering::SeqCst);
            }
        }

        progress_bar.inc(1);
    });

    progress_bar.finish_with_message("完成");

    let resized = resized_count.load(Ordering::SeqCst);
    let errors = error_count.load(Ordering::SeqCst);
    let result = ResizeResult {
        resized,
        errors,
        skipped: order.ok_images.len() + order.existent_images.len() - resized - errors,
    };

    info!(
        "縮放完成 - 成功: {}, 跳過: {}, 失敗: {}",
        result.resized, result.skipped, result.errors
    );

    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn create_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_validate_target_size() {
        assert!(validate_target_size(319, 1080).is_err());
        assert!(validate_target_size(1920, 479).is_err());
        assert!(validate_target_size(320, 480).is_ok());
    }

    #[test]
    fn test_resize_image_wrong_size() {
        let temp_dir = TempDir::new().unwrap();
        let src = create_image(temp_dir.path(), "a.png", 800, 800);

        assert!(resize_image(&src, 300, 1080, temp_dir.path()).is_err());
        assert!(resize_image(&src, 1920, 479, temp_dir.path()).is_err());
    }

    #[test]
    fn test_resize_image() {
        let temp_dir = TempDir::new().unwrap();
        let src = create_image(temp_dir.path(), "square.png", 800, 800);

        let dst = resize_image(&src, 320, 480, temp_dir.path()).unwrap();

        assert_eq!(dst, temp_dir.path().join("square_320x480.png"));
        assert_eq!(image::image_dimensions(&dst).unwrap(), (320, 480));
    }

    #[test]
    fn test_execute_resize_not_approved() {
        let temp_dir = TempDir::new().unwrap();
        create_image(temp_dir.path(), "a.png", 400, 600);

        let extensions: HashSet<String> = [".png".to_string()].into_iter().collect();
        let mut order = ResizeOrder::new(temp_dir.path(), 320, 480, None);
        order.preview(&extensions).unwrap();

        let shutdown = AtomicBool::new(false);
        assert_eq!(execute_resize(&order, &shutdown).unwrap(), None);
        assert!(!order.dst_dir.exists());
    }

    #[test]
    fn test_execute_resize() {
        let temp_dir = TempDir::new().unwrap();
        create_image(temp_dir.path(), "a.png", 400, 600);
        create_image(temp_dir.path(), "b.png", 640, 960);
        create_image(temp_dir.path(), "tiny.png", 100, 100);

        let extensions: HashSet<String> = [".png".to_string()].into_iter().collect();
        let mut order = ResizeOrder::new(temp_dir.path(), 320, 480, None);
        order.preview(&extensions).unwrap();
        order.execute = true;

        let shutdown = AtomicBool::new(false);
        let result = execute_resize(&order, &shutdown).unwrap().unwrap();

        assert_eq!(result.resized, 2);
        assert_eq!(result.errors, 0);
        assert!(order.dst_dir.join("a_320x480.png").is_file());
        assert!(order.dst_dir.join("b_320x480.png").is_file());
        assert!(!order.dst_dir.join("tiny_320x480.png").exists());
    }
}
