//! 影集重新命名元件
//!
//! 一次處理同一部影集的多個章節檔案

mod chapter;
mod main;

pub use chapter::{TvShowChapter, guess_episode};
pub use main::TvShowRenamer;
