//! Bounding box structure for defining regions
//!
//! A box is anchored at its top-left corner and extends `width` pixels to
//! the right and `height` pixels down. Coordinates may become negative
//! after [`BoundingBox::expand`]; [`BoundingBox::fit_in_size`] pulls a box
//! back inside an image.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::errors::{RegionError, RegionResult};

/// Proportion used by [`BoundingBox::expand`] callers that have no preference
pub const DEFAULT_EXPANSION: f64 = 0.2;

/// An axis-aligned rectangle in pixel coordinates
///
/// Serializes as the bare array `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "[i64; 4]", try_from = "[i64; 4]")]
pub struct BoundingBox {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the box, must not be negative
    /// * `height` - Height of the box, must not be negative
    ///
    /// # Returns
    /// The box, or `InvalidDimension` if width or height is negative or the
    /// far edges `x + width` / `y + height` do not fit in an `i64`
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> RegionResult<Self> {
        if width < 0 || height < 0 {
            return Err(RegionError::InvalidDimension(format!(
                "bounding box extent must not be negative (width={}, height={})",
                width, height
            )));
        }

        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(RegionError::InvalidDimension(format!(
                "bounding box [{}, {}, {}, {}] reaches past the coordinate range",
                x, y, width, height
            )));
        }

        Ok(BoundingBox { x, y, width, height })
    }

    /// The degenerate box at the origin, meaning "no region"
    pub const fn zero() -> Self {
        BoundingBox { x: 0, y: 0, width: 0, height: 0 }
    }

    /// Builds a box from its top-left and bottom-right corners.
    /// Caller guarantees `top_left <= bottom_right` on both axes.
    fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        BoundingBox {
            x: top_left.x,
            y: top_left.y,
            width: bottom_right.x - top_left.x,
            height: bottom_right.y - top_left.y,
        }
    }

    /// Parse a bounding box from a string (format: "x,y,width,height")
    ///
    /// Whitespace around each field is ignored, but exactly four
    /// comma-separated integers are required.
    pub fn from_string(bbox_str: &str) -> RegionResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(RegionError::ParseError(format!(
                "bounding box must have 4 comma-separated values, found {} in '{}'",
                parts.len(),
                bbox_str
            )));
        }

        let mut values = [0i64; 4];
        for (slot, (name, part)) in values
            .iter_mut()
            .zip(["x", "y", "width", "height"].iter().zip(parts.iter()))
        {
            *slot = part.trim().parse::<i64>().map_err(|_| {
                RegionError::ParseError(format!("invalid {} value '{}'", name, part.trim()))
            })?;
        }

        let [x, y, width, height] = values;
        BoundingBox::new(x, y, width, height)
    }

    /// Parse a bounding box from its JSON array form
    pub fn from_json(json: &str) -> RegionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the box as a compact JSON array
    pub fn to_json(&self) -> RegionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Returns `(x, y, width, height)`
    pub fn get_box(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Returns `[x, y, width, height]`, the canonical serialized form
    pub fn to_array(&self) -> [i64; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Corner points in the order top-left, top-right, bottom-left, bottom-right
    pub fn get_box_coord(&self) -> [Point; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(self.x, bottom),
            Point::new(right, bottom),
        ]
    }

    /// Axis-ordered form `[y, y + height, x, x + width]` for row-major buffers
    pub fn get_numpy_format(&self) -> [i64; 4] {
        [self.y, self.y + self.height, self.x, self.x + self.width]
    }

    /// Computes the overlap between this box and another one
    ///
    /// # Returns
    /// The intersection box, or the degenerate box `(0, 0, 0, 0)` when the
    /// two boxes do not share any area
    pub fn intersect_with(&self, other: &BoundingBox) -> BoundingBox {
        let ours = self.get_box_coord();
        let theirs = other.get_box_coord();

        let top_left = ours[0].max(theirs[0]);
        let bottom_right = ours[3].min(theirs[3]);

        if top_left.x >= bottom_right.x || top_left.y >= bottom_right.y {
            return BoundingBox::zero();
        }

        BoundingBox::from_corners(top_left, bottom_right)
    }

    /// Share of the smaller box covered by the intersection, in percent
    ///
    /// Returns 0.0 when either box has no area.
    pub fn overlap_percentage(&self, other: &BoundingBox) -> f64 {
        let lesser_area = self.get_area().min(other.get_area());
        if lesser_area <= 0 {
            return 0.0;
        }

        self.intersect_with(other).get_area() as f64 / lesser_area as f64 * 100.0
    }

    /// Number of pixels covered; `i128` holds any `width * height`
    pub fn get_area(&self) -> i128 {
        i128::from(self.width) * i128::from(self.height)
    }

    /// Whether the box covers no pixels
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center point, truncated toward zero on each axis
    pub fn get_center(&self) -> Point {
        // (2x + w) / 2 truncates the exact half-pixel center, also for negative x.
        // The result lies between x and x + w, so narrowing back cannot fail.
        let center = |start: i64, extent: i64| {
            ((2 * i128::from(start) + i128::from(extent)) / 2) as i64
        };
        Point::new(center(self.x, self.width), center(self.y, self.height))
    }

    /// Grow the box by `proportion` of its size, split evenly between both sides
    ///
    /// The margin per side is `trunc(extent * proportion / 2)`. The result may
    /// reach into negative coordinates; use [`BoundingBox::fit_in_size`] to
    /// bring it back inside an image.
    ///
    /// # Arguments
    /// * `proportion` - Growth factor, [`DEFAULT_EXPANSION`] for 20%
    ///
    /// # Returns
    /// The expanded box, or `InvalidDimension` when the proportion is not
    /// finite, would shrink the box below zero size, or would push it past
    /// the `i64` coordinate range
    pub fn expand(&self, proportion: f64) -> RegionResult<BoundingBox> {
        if !proportion.is_finite() {
            return Err(RegionError::InvalidDimension(format!(
                "expansion proportion must be finite, got {}",
                proportion
            )));
        }

        let horizontally = ((self.width as f64 * proportion) / 2.0) as i64;
        let vertically = ((self.height as f64 * proportion) / 2.0) as i64;

        let grow = |start: i64, extent: i64, margin: i64| -> Option<(i64, i64)> {
            Some((start.checked_sub(margin)?, extent.checked_add(margin.checked_mul(2)?)?))
        };
        let out_of_range = || RegionError::InvalidDimension(format!(
            "expanding {} by {} leaves the coordinate range",
            self, proportion
        ));

        let (x, width) = grow(self.x, self.width, horizontally).ok_or_else(out_of_range)?;
        let (y, height) = grow(self.y, self.height, vertically).ok_or_else(out_of_range)?;
        let expanded = BoundingBox::new(x, y, width, height)?;

        debug!("Expanded {} by {} to {}", self, proportion, expanded);
        Ok(expanded)
    }

    /// Clamp the box into `[0, width) x [0, height)`
    ///
    /// A box starting left of (or above) the image loses the overhang; a box
    /// starting at or beyond the far edge collapses to zero extent at 0; a
    /// box reaching the far edge is cut at it.
    ///
    /// # Arguments
    /// * `size_limit` - Image `(width, height)` to fit into
    pub fn fit_in_size(&self, size_limit: (i64, i64)) -> BoundingBox {
        let (x, width) = fit_axis(self.x, self.width, size_limit.0);
        let (y, height) = fit_axis(self.y, self.height, size_limit.1);

        BoundingBox { x, y, width, height }
    }

    /// Console representation, e.g. `BoundingBox: [1, 2, 3, 4]`
    pub fn describe(&self) -> String {
        format!("BoundingBox: {}", self)
    }
}

/// Fits one axis of a box into `[0, limit)`.
fn fit_axis(mut start: i64, mut extent: i64, limit: i64) -> (i64, i64) {
    if start < 0 {
        extent += start;
        start = 0;
    } else if start >= limit {
        start = 0;
        extent = 0;
    }

    if start + extent >= limit {
        extent = limit - start;
    }

    (start, extent.max(0))
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for BoundingBox {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundingBox::from_string(s)
    }
}

impl From<BoundingBox> for [i64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

impl TryFrom<[i64; 4]> for BoundingBox {
    type Error = RegionError;

    fn try_from([x, y, width, height]: [i64; 4]) -> Result<Self, Self::Error> {
        BoundingBox::new(x, y, width, height)
    }
}
