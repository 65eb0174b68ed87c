#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

pub mod component;
pub mod config;
pub mod init;
pub mod menu;
pub mod signal;
pub mod tools;

use anyhow::Result;
use console::{Term, style};

pub fn pause(term: &Term) -> Result<()> {
    println!("\n{}", style(t!("common.press_enter")).dim());
    term.read_line()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_exit_messages_are_translated() {
        assert_eq!(t!("main_menu.goodbye", locale = "en-US"), "Bye!");
        assert_eq!(t!("main_menu.goodbye", locale = "zh-TW"), "再見！");
        assert_eq!(t!("common.error_prefix", locale = "en-US"), "Error:");
        assert_eq!(t!("common.error_prefix", locale = "zh-TW"), "錯誤:");
    }
}
