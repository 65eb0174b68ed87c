//! 電影重新命名元件
//!
//! 將電影檔案重新命名為媒體掃描器容易辨識的格式

mod main;
mod movie_file;

pub use main::MovieRenamer;
pub use movie_file::MovieFile;
