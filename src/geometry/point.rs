//! Point structure for representing pixel positions

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate (columns, growing to the right)
    pub x: i64,
    /// Y coordinate (rows, growing downwards)
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Component-wise maximum of two points
    pub fn max(self, other: Point) -> Self {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum of two points
    pub fn min(self, other: Point) -> Self {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns the point as an `[x, y]` pair
    pub fn to_array(self) -> [i64; 2] {
        [self.x, self.y]
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}
