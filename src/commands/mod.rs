//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod segment_command;
pub mod crop_command;
pub mod cli;

#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use segment_command::SegmentCommand;
pub use crop_command::CropCommand;
pub use cli::build_cli;

use clap::ArgMatches;
use log::info;

use crate::errors::{RegionError, RegionResult};
use crate::geometry::BoundingBox;
use crate::utils::config::Settings;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RegionkitCommandFactory;

impl RegionkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RegionkitCommandFactory
    }
}

impl Default for RegionkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RegionkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RegionResult<Box<dyn Command + 'a>> {
        if args.get_flag("segment") && args.get_flag("crop") {
            return Err(RegionError::GenericError("--segment and --crop cannot be combined".to_string()));
        }

        if args.get_flag("segment") {
            Ok(Box::new(SegmentCommand::new(args, logger)?))
        } else if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Input image path
pub(crate) fn input_from_args(args: &ArgMatches) -> RegionResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| RegionError::GenericError("Missing input file".to_string()))
}

/// Settings from `--config` (or built-in defaults) with tile flags applied
pub(crate) fn settings_from_args(args: &ArgMatches) -> RegionResult<Settings> {
    let mut settings = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Settings::load(path)?
        }
        None => Settings::default(),
    };

    if let Some(width) = args.get_one::<String>("tile-width") {
        settings.tile_width = parse_positive(width, "tile width")?;
    }
    if let Some(height) = args.get_one::<String>("tile-height") {
        settings.tile_height = parse_positive(height, "tile height")?;
    }
    if let Some(order) = args.get_one::<String>("order") {
        settings.order = order.parse()?;
    }
    if let Some(output) = args.get_one::<String>("output") {
        settings.output_dir = output.clone();
    }

    Ok(settings)
}

/// All `--bbox` values, parsed in the order given
pub(crate) fn boxes_from_args(args: &ArgMatches) -> RegionResult<Vec<BoundingBox>> {
    args.get_many::<String>("bbox")
        .into_iter()
        .flatten()
        .map(|s| BoundingBox::from_string(s))
        .collect()
}

fn parse_positive(value: &str, name: &str) -> RegionResult<i64> {
    match value.trim().parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(RegionError::InvalidDimension(format!("Invalid {}: {}", name, value))),
    }
}
