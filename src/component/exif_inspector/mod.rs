//! EXIF 日期檢視元件

mod exif_image;
mod main;

pub use exif_image::{ExifImage, parse_exif_datetime};
pub use main::ExifInspector;
