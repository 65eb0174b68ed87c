//! 檔名日期檢視元件
//!
//! 以使用者指定的日期格式解析資料夾中每個檔名

mod main;
mod name_parser;

pub use main::DateNameInspector;
pub use name_parser::{NameDate, NameDateSummary, parse_file_names, summarize};
