use crate::config::save::save_settings;
use crate::config::{Config, Language};
use crate::component::image_resizer::{MIN_HEIGHT, MIN_WIDTH};
use crate::menu::handlers::{
    run_date_name_inspector, run_exif_directory, run_exif_paths_file, run_image_resizer,
    run_movie_renamer, run_tvshow_renamer,
};
use crate::tools::date_pattern::validate_format;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_movie"),
        t!("main_menu.opt_tvshow"),
        t!("main_menu.opt_resize"),
        t!("main_menu.opt_exif_dir"),
        t!("main_menu.opt_exif_file"),
        t!("main_menu.opt_date_names"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => run_movie_renamer(term, shutdown_signal, config)?,
        Some(1) => run_tvshow_renamer(term, shutdown_signal, config)?,
        Some(2) => run_image_resizer(term, shutdown_signal, config)?,
        Some(3) => run_exif_directory(term, shutdown_signal, config)?,
        Some(4) => run_exif_paths_file(term, shutdown_signal, config)?,
        Some(5) => run_date_name_inspector(term, config)?,
        Some(6) => show_settings_menu(term, config)?,
        Some(7) | None => return Ok(false),
        _ => unreachable!(),
    }

    Ok(true)
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_language"),
            t!("settings.opt_date_pattern"),
            t!("settings.opt_resize"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_language_menu(term, config)?,
            Some(1) => show_date_pattern_menu(term, config)?,
            Some(2) => show_resize_menu(term, config)?,
            Some(3) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn saved_notice(value: impl std::fmt::Display) {
    println!("\n{} {}", style(t!("settings.saved")).green(), value);
    std::thread::sleep(std::time::Duration::from_secs(1));
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];
    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        saved_notice(selected_lang);
    }

    Ok(())
}

/// 檔名日期預設格式
fn show_date_pattern_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.date_pattern.title")).cyan().bold());
    println!("{}", style(t!("settings.date_pattern.legend")).dim());

    let pattern: String = Input::new()
        .with_prompt(t!("settings.date_pattern.prompt"))
        .default(config.settings.date_pattern.clone())
        .validate_with(|input: &String| validate_format(input))
        .interact_text_on(term)?;

    if pattern != config.settings.date_pattern {
        config.settings.date_pattern = pattern;
        save_settings(&config.settings)?;
        saved_notice(&config.settings.date_pattern);
    }

    Ok(())
}

/// 圖片縮放預設尺寸
fn show_resize_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.resize.title")).cyan().bold());

    let width: u32 = Input::new()
        .with_prompt(t!("settings.resize.width"))
        .default(config.settings.resize.width)
        .validate_with(|w: &u32| -> Result<(), String> {
            if *w >= MIN_WIDTH {
                Ok(())
            } else {
                Err(t!("settings.resize.too_small", min = MIN_WIDTH).to_string())
            }
        })
        .interact_text_on(term)?;
    let height: u32 = Input::new()
        .with_prompt(t!("settings.resize.height"))
        .default(config.settings.resize.height)
        .validate_with(|h: &u32| -> Result<(), String> {
            if *h >= MIN_HEIGHT {
                Ok(())
            } else {
                Err(t!("settings.resize.too_small", min = MIN_HEIGHT).to_string())
            }
        })
        .interact_text_on(term)?;

    if (width, height) != (config.settings.resize.width, config.settings.resize.height) {
        config.settings.resize.width = width;
        config.settings.resize.height = height;
        save_settings(&config.settings)?;
        saved_notice(format!("{width}x{height}"));
    }

    Ok(())
}
