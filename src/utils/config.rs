//! Configuration for tiling and cropping runs
//!
//! Built-in defaults are embedded from `regionkit_defaults.toml`. A user
//! TOML file can override any of them; unknown keys are ignored.

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{RegionError, RegionResult};
use crate::segmenter::IterationOrder;

lazy_static! {
    // Parse the embedded defaults once
    static ref BUILTIN_SETTINGS: Settings = {
        let content = include_str!("../../regionkit_defaults.toml");
        Settings::fallback().merged_with(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse built-in defaults: {}", e);
                Settings::fallback()
            })
    };
}

/// Settings shared by the CLI commands and the API facade
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Nominal tile width in pixels
    pub tile_width: i64,
    /// Nominal tile height in pixels
    pub tile_height: i64,
    /// Tile traversal order
    pub order: IterationOrder,
    /// Proportion used when expanding crop boxes
    pub expansion: f64,
    /// Directory receiving written tiles and crops
    pub output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        BUILTIN_SETTINGS.clone()
    }
}

impl Settings {
    /// Hard-coded values used if the embedded file cannot be parsed
    fn fallback() -> Self {
        Settings {
            tile_width: 200,
            tile_height: 200,
            order: IterationOrder::Horizontal,
            expansion: crate::geometry::DEFAULT_EXPANSION,
            output_dir: "tiles".to_string(),
        }
    }

    /// Built-in defaults overridden by a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> RegionResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RegionError::ConfigError(format!("Cannot read {}: {}", path.as_ref().display(), e))
        })?;
        debug!("Loading configuration from {}", path.as_ref().display());
        Settings::default().merged_with(&content)
    }

    /// Built-in defaults overridden by TOML text
    pub fn from_toml_str(content: &str) -> RegionResult<Self> {
        Settings::default().merged_with(content)
    }

    /// Returns a copy with every key present in `content` applied
    fn merged_with(mut self, content: &str) -> RegionResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RegionError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(table) = toml_value.get("segment").and_then(|v| v.as_table()) {
            if let Some(width) = Self::positive_int(table, "tile_width")? {
                self.tile_width = width;
            }
            if let Some(height) = Self::positive_int(table, "tile_height")? {
                self.tile_height = height;
            }
            if let Some(order) = table.get("order") {
                let name = order.as_str().ok_or_else(|| {
                    RegionError::ConfigError("segment.order must be a string".to_string())
                })?;
                self.order = name.parse()?;
            }
        }

        if let Some(table) = toml_value.get("crop").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("expansion") {
                // Accept `expansion = 1` as well as `expansion = 1.0`
                self.expansion = value.as_float()
                    .or_else(|| value.as_integer().map(|i| i as f64))
                    .ok_or_else(|| RegionError::ConfigError("crop.expansion must be a number".to_string()))?;
            }
        }

        if let Some(table) = toml_value.get("output").and_then(|v| v.as_table()) {
            if let Some(dir) = table.get("directory").and_then(|v| v.as_str()) {
                self.output_dir = dir.to_string();
            }
        }

        for key in toml_value.as_table().into_iter().flat_map(|t| t.keys()) {
            if !matches!(key.as_str(), "segment" | "crop" | "output") {
                warn!("Ignoring unknown configuration section [{}]", key);
            }
        }

        Ok(self)
    }

    fn positive_int(table: &toml::value::Table, key: &str) -> RegionResult<Option<i64>> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };

        match value.as_integer() {
            Some(v) if v > 0 => Ok(Some(v)),
            _ => Err(RegionError::ConfigError(format!(
                "segment.{} must be a positive integer, got {}",
                key, value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tile_width, 200);
        assert_eq!(settings.tile_height, 200);
        assert_eq!(settings.order, IterationOrder::Horizontal);
        assert_eq!(settings.expansion, 0.2);
        assert_eq!(settings.output_dir, "tiles");
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml_str("[segment]\ntile_width = 64\norder = \"vertical\"\n").unwrap();
        assert_eq!(settings.tile_width, 64);
        assert_eq!(settings.tile_height, 200);
        assert_eq!(settings.order, IterationOrder::Vertical);
    }

    #[test]
    fn test_integer_expansion_is_accepted() {
        let settings = Settings::from_toml_str("[crop]\nexpansion = 1\n").unwrap();
        assert_eq!(settings.expansion, 1.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Settings::from_toml_str("[segment]\ntile_height = 0\n"),
            Err(RegionError::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[segment]\norder = \"diagonal\"\n"),
            Err(RegionError::ParseError(_))
        ));
        assert!(matches!(Settings::from_toml_str("not toml ["), Err(RegionError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regionkit.toml");
        fs::write(&path, "[output]\ndirectory = \"out\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.output_dir, "out");
        assert!(Settings::load(dir.path().join("missing.toml")).is_err());
    }
}
