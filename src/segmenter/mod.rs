//! Deterministic image tiling
//!
//! This module partitions an image into a grid of non-overlapping tiles
//! and enumerates them lazily in row-major or column-major order. Tiles on
//! the right and bottom edges are shrunk to fit the image rather than padded.

mod order;
mod grid;
mod segments;
#[cfg(test)]
mod tests;

// Public exports
pub use order::IterationOrder;
pub use grid::{TileBoxes, TileGrid};
pub use segments::{segment_image, segment_with, Segments};
