//! 圖片批次縮放元件
//!
//! 將資料夾中的圖片縮放並裁切成相同尺寸，輸出至 `<來源>/<寬>x<高>`

mod main;
mod resize_order;
mod resizer;

pub use main::ImageResizer;
pub use resize_order::{
    MIN_HEIGHT, MIN_WIDTH, ResizeOrder, ResizedImage, make_destination_dir, make_destination_file,
};
pub use resizer::{ResizeResult, execute_resize, resize_image, validate_target_size};
