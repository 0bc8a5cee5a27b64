pub mod errors;
pub mod geometry;
pub mod segmenter;
pub mod imaging;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RegionKit;

pub use errors::{RegionError, RegionResult};
pub use geometry::{BoundingBox, Point, DEFAULT_EXPANSION};
pub use segmenter::{segment_image, segment_with, IterationOrder, Segments, TileBoxes, TileGrid};
pub use imaging::ImageSource;
