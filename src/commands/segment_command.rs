//! Image segmentation command
//!
//! This module implements the command that cuts an image into a grid
//! of tiles and writes each tile as a PNG file.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::errors::RegionResult;
use crate::imaging::{self, ImageSource};
use crate::segmenter::TileGrid;
use crate::utils::config::Settings;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for tiling an image into files
pub struct SegmentCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Tile size, order and output directory
    settings: Settings,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SegmentCommand<'a> {
    /// Create a new segment command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SegmentCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RegionResult<Self> {
        let input_file = super::input_from_args(args)?;
        info!("Input file: {}", input_file);

        let settings = super::settings_from_args(args)?;
        info!("Tiles: {}x{} ({} order) into {}",
              settings.tile_width, settings.tile_height, settings.order, settings.output_dir);

        Ok(SegmentCommand {
            input_file,
            settings,
            logger,
        })
    }
}

impl<'a> Command for SegmentCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        let image = imaging::get_file_image(&self.input_file)?;
        let (width, height) = image.size_limit();
        let grid = TileGrid::new(width, height, self.settings.tile_width, self.settings.tile_height)?;

        let progress = ProgressTracker::new(grid.len() as u64, "tiles");
        let written = imaging::export::write_segments(
            &image,
            self.settings.tile_width,
            self.settings.tile_height,
            self.settings.order,
            Path::new(&self.settings.output_dir),
            &progress,
        )?;

        self.logger.log(&format!(
            "Segmented {} ({}x{}) into {} tiles of {}x{} in {}",
            self.input_file, width, height, written.len(),
            self.settings.tile_width, self.settings.tile_height, self.settings.output_dir
        ))?;
        println!("Wrote {} tiles to {}", written.len(), self.settings.output_dir);

        Ok(())
    }
}
