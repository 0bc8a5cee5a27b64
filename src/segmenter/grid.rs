//! Tile grid layout and ordered box enumeration
//!
//! A grid covering a `width x height` image with nominal `tile_width x
//! tile_height` tiles has `ceil(width / tile_width)` columns and
//! `ceil(height / tile_height)` rows. Every cell maps to exactly one box and
//! the boxes partition the image.

use std::iter::FusedIterator;

use log::debug;

use crate::errors::{RegionError, RegionResult};
use crate::geometry::BoundingBox;

use super::order::IterationOrder;

/// Layout of the tiles covering an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: i64,
    height: i64,
    tile_width: i64,
    tile_height: i64,
    columns: i64,
    rows: i64,
    count: usize,
}

impl TileGrid {
    /// Create a new tile grid
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `tile_width` - Nominal tile width in pixels
    /// * `tile_height` - Nominal tile height in pixels
    ///
    /// # Returns
    /// The grid, or `InvalidDimension` if any size is not positive or the
    /// tile count does not fit in a `usize`
    pub fn new(width: i64, height: i64, tile_width: i64, tile_height: i64) -> RegionResult<Self> {
        for (name, value) in [
            ("image width", width),
            ("image height", height),
            ("segment width", tile_width),
            ("segment height", tile_height),
        ] {
            if value <= 0 {
                return Err(RegionError::InvalidDimension(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let columns = width / tile_width + i64::from(width % tile_width > 0);
        let rows = height / tile_height + i64::from(height % tile_height > 0);
        let count = columns
            .checked_mul(rows)
            .and_then(|count| usize::try_from(count).ok())
            .ok_or_else(|| RegionError::InvalidDimension(format!(
                "{} columns x {} rows is too many tiles to enumerate",
                columns, rows
            )))?;
        debug!("Tile grid for {}x{} image with {}x{} tiles: {} columns, {} rows",
               width, height, tile_width, tile_height, columns, rows);

        Ok(TileGrid {
            width,
            height,
            tile_width,
            tile_height,
            columns,
            rows,
            count,
        })
    }

    pub fn columns(&self) -> i64 {
        self.columns
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Number of tiles in the grid
    pub fn len(&self) -> usize {
        self.count
    }

    /// A valid grid always holds at least one tile
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nominal `(width, height)` of a tile
    pub fn tile_size(&self) -> (i64, i64) {
        (self.tile_width, self.tile_height)
    }

    /// Box of the tile at `column`, `row`
    ///
    /// Edge tiles are narrower or shorter when the image size is not a
    /// multiple of the tile size. Returns `None` outside the grid.
    pub fn tile_at(&self, column: i64, row: i64) -> Option<BoundingBox> {
        if !(0..self.columns).contains(&column) || !(0..self.rows).contains(&row) {
            return None;
        }

        let x = column * self.tile_width;
        let y = row * self.tile_height;
        let width = self.tile_width.min(self.width - x);
        let height = self.tile_height.min(self.height - y);

        BoundingBox::new(x, y, width, height).ok()
    }

    /// Tile boxes in the requested order
    pub fn boxes(&self, order: IterationOrder) -> TileBoxes {
        TileBoxes {
            grid: *self,
            order,
            next: 0,
            end: self.len(),
        }
    }

    /// Tile boxes left to right, then top to bottom
    pub fn row_major(&self) -> TileBoxes {
        self.boxes(IterationOrder::Horizontal)
    }

    /// Tile boxes top to bottom, then left to right
    pub fn column_major(&self) -> TileBoxes {
        self.boxes(IterationOrder::Vertical)
    }

    /// Maps a position in the traversal to its `(column, row)` cell
    fn cell_at(&self, order: IterationOrder, index: usize) -> (i64, i64) {
        let index = index as i64;
        match order {
            IterationOrder::Horizontal => (index % self.columns, index / self.columns),
            IterationOrder::Vertical => (index / self.rows, index % self.rows),
        }
    }
}

/// Lazy iterator over the tile boxes of a [`TileGrid`]
#[derive(Debug, Clone)]
pub struct TileBoxes {
    grid: TileGrid,
    order: IterationOrder,
    next: usize,
    end: usize,
}

impl TileBoxes {
    pub fn order(&self) -> IterationOrder {
        self.order
    }

    fn box_at(&self, index: usize) -> Option<BoundingBox> {
        let (column, row) = self.grid.cell_at(self.order, index);
        self.grid.tile_at(column, row)
    }
}

impl Iterator for TileBoxes {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let tile = self.box_at(self.next);
        self.next += 1;
        tile
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for TileBoxes {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        self.end -= 1;
        self.box_at(self.end)
    }
}

impl ExactSizeIterator for TileBoxes {}

impl FusedIterator for TileBoxes {}
