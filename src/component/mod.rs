//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod date_name_inspector;
pub mod exif_inspector;
pub mod image_resizer;
pub mod interactive;
pub mod movie_renamer;
pub mod tvshow_renamer;

pub use date_name_inspector::DateNameInspector;
pub use exif_inspector::ExifInspector;
pub use image_resizer::ImageResizer;
pub use movie_renamer::MovieRenamer;
pub use tvshow_renamer::TvShowRenamer;
