//! Lazy sequence of cropped image segments

use std::iter::FusedIterator;

use log::{debug, info};

use crate::errors::RegionResult;
use crate::geometry::BoundingBox;
use crate::imaging::ImageSource;

use super::grid::{TileBoxes, TileGrid};
use super::order::IterationOrder;

/// Pull-based iterator handing each tile box to a crop function
///
/// Only one tile is materialized at a time. Dropping the iterator early
/// leaves nothing behind.
pub struct Segments<F> {
    boxes: TileBoxes,
    crop: F,
}

impl<F> Segments<F> {
    /// Boxes of the tiles not yet produced
    pub fn remaining_boxes(&self) -> TileBoxes {
        self.boxes.clone()
    }
}

impl<F, T> Iterator for Segments<F>
where
    F: FnMut(BoundingBox) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let tile = self.boxes.next()?;
        debug!("Cropping segment {}", tile);
        Some((self.crop)(tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boxes.size_hint()
    }
}

impl<F, T> ExactSizeIterator for Segments<F> where F: FnMut(BoundingBox) -> T {}

impl<F, T> FusedIterator for Segments<F> where F: FnMut(BoundingBox) -> T {}

/// Tile an image of the given size, cropping each tile with `crop`
///
/// # Arguments
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `segment_width` - Nominal tile width
/// * `segment_height` - Nominal tile height
/// * `order` - Traversal order of the tiles
/// * `crop` - Materializes one tile from its box
///
/// # Returns
/// A lazy iterator of `ceil(width / segment_width) * ceil(height / segment_height)`
/// crops, or `InvalidDimension` if any size is not positive
pub fn segment_with<F, T>(
    width: i64,
    height: i64,
    segment_width: i64,
    segment_height: i64,
    order: IterationOrder,
    crop: F,
) -> RegionResult<Segments<F>>
where
    F: FnMut(BoundingBox) -> T,
{
    let grid = TileGrid::new(width, height, segment_width, segment_height)?;
    info!("Segmenting {}x{} image into {} tiles of {}x{} ({} order)",
          width, height, grid.len(), segment_width, segment_height, order);

    Ok(Segments {
        boxes: grid.boxes(order),
        crop,
    })
}

/// Tile an image source into sub-images
///
/// Like a puzzle, the image is returned piece by piece: left to right then
/// top to bottom for [`IterationOrder::Horizontal`], top to bottom then left
/// to right for [`IterationOrder::Vertical`].
pub fn segment_image<'a, S>(
    source: &'a S,
    segment_width: i64,
    segment_height: i64,
    order: IterationOrder,
) -> RegionResult<Segments<impl FnMut(BoundingBox) -> S::Output + 'a>>
where
    S: ImageSource + ?Sized,
{
    segment_with(
        i64::from(source.width()),
        i64::from(source.height()),
        segment_width,
        segment_height,
        order,
        move |tile: BoundingBox| source.crop(&tile),
    )
}
