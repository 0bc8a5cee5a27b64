//! Traversal order for tile enumeration

use std::fmt;
use std::str::FromStr;

use crate::errors::RegionError;

/// Raster order in which tiles are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationOrder {
    /// Row-major: left to right, then top to bottom
    #[default]
    Horizontal,
    /// Column-major: top to bottom, then left to right
    Vertical,
}

impl IterationOrder {
    pub fn name(&self) -> &'static str {
        match self {
            IterationOrder::Horizontal => "horizontal",
            IterationOrder::Vertical => "vertical",
        }
    }
}

impl fmt::Display for IterationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IterationOrder {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(IterationOrder::Horizontal),
            "vertical" => Ok(IterationOrder::Vertical),
            other => Err(RegionError::ParseError(format!(
                "unknown iteration order '{}' (expected horizontal or vertical)",
                other
            ))),
        }
    }
}
