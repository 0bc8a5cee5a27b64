//! Rectangle geometry for image regions
//!
//! This module provides the integer bounding box used to describe
//! detections, crops and tiles, together with the point type used
//! for its corners and center.

mod bbox;
mod point;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::{BoundingBox, DEFAULT_EXPANSION};
pub use self::point::Point;
