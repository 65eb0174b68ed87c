pub mod date_pattern;
mod file_scanner;
mod file_tools;
mod path_validator;
mod rename_order;

pub use file_scanner::scan_files;
pub use file_tools::{file_extension, file_name, read_paths_file};
pub use path_validator::{ensure_directory_exists, validate_directory_exists, validate_file_exists};
pub use rename_order::{RenameError, RenameOrder, RenameSummary, RenameTarget, non_empty};
