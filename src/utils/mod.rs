//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and configuration
//! used by the command line front end and the API facade.

pub mod logger;
pub mod config;
pub(crate) mod progress;
