use crate::component::{
    DateNameInspector, ExifInspector, ImageResizer, MovieRenamer, TvShowRenamer,
};
use crate::config::Config;
use crate::config::load::SETTINGS_FILE;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::warn;
use rust_i18n::t;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 元件執行期間可能更新了設定檔（例如最近使用的路徑），重新讀取
fn refresh_settings(config: &mut Config) {
    match Config::load_settings(Path::new(SETTINGS_FILE)) {
        Ok(settings) => config.settings = settings,
        Err(e) => warn!("無法重新讀取設定檔: {e:#}"),
    }
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
    }
}

pub fn run_movie_renamer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut renamer = MovieRenamer::new(config.clone(), Arc::clone(shutdown_signal));
    report(renamer.run());
    refresh_settings(config);

    pause(term)?;
    Ok(())
}

pub fn run_tvshow_renamer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut renamer = TvShowRenamer::new(config.clone(), Arc::clone(shutdown_signal));
    report(renamer.run());
    refresh_settings(config);

    pause(term)?;
    Ok(())
}

pub fn run_image_resizer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut resizer = ImageResizer::new(config.clone(), Arc::clone(shutdown_signal));
    report(resizer.run());
    refresh_settings(config);

    pause(term)?;
    Ok(())
}

pub fn run_exif_directory(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut inspector = ExifInspector::new(config.clone(), Arc::clone(shutdown_signal));
    report(inspector.run_directory());
    refresh_settings(config);

    pause(term)?;
    Ok(())
}

pub fn run_exif_paths_file(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut inspector = ExifInspector::new(config.clone(), Arc::clone(shutdown_signal));
    report(inspector.run_paths_file());

    pause(term)?;
    Ok(())
}

pub fn run_date_name_inspector(term: &Term, config: &mut Config) -> Result<()> {
    let mut inspector = DateNameInspector::new(config.clone());
    report(inspector.run());
    refresh_settings(config);

    pause(term)?;
    Ok(())
}
