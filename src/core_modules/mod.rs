pub mod hsv;
pub mod mask;
pub mod pixel;
pub mod ripeness;
pub mod segmentation;
pub mod stats;
pub mod utils;
