//! Custom error types for region and tiling operations

use std::fmt;
use std::io;

/// Errors produced by box geometry, tiling and image handling
#[derive(Debug)]
pub enum RegionError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding failed
    ImageError(image::ImageError),
    /// JSON (de)serialization failed
    JsonError(serde_json::Error),
    /// A textual box or option could not be parsed
    ParseError(String),
    /// A width, height or segment size is out of range
    InvalidDimension(String),
    /// Configuration file could not be read or understood
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::IoError(e) => write!(f, "I/O error: {}", e),
            RegionError::ImageError(e) => write!(f, "Image error: {}", e),
            RegionError::JsonError(e) => write!(f, "JSON error: {}", e),
            RegionError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RegionError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            RegionError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RegionError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegionError::IoError(e) => Some(e),
            RegionError::ImageError(e) => Some(e),
            RegionError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegionError {
    fn from(error: io::Error) -> Self {
        RegionError::IoError(error)
    }
}

impl From<image::ImageError> for RegionError {
    fn from(error: image::ImageError) -> Self {
        RegionError::ImageError(error)
    }
}

impl From<serde_json::Error> for RegionError {
    fn from(error: serde_json::Error) -> Self {
        RegionError::JsonError(error)
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
