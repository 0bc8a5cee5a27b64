//! Image and bounding box analysis command
//!
//! This module implements the command that reports an image's size,
//! its tile grid and the geometry of any boxes given on the command line.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::RegionResult;
use crate::geometry::BoundingBox;
use crate::imaging::{self, ImageSource};
use crate::segmenter::TileGrid;
use crate::utils::config::Settings;
use crate::utils::logger::Logger;

/// Command for analyzing an image and its boxes
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Boxes to report on
    boxes: Vec<BoundingBox>,
    /// Tile settings for the grid summary
    settings: Settings,
    /// Whether to list every tile box
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RegionResult<Self> {
        let input_file = super::input_from_args(args)?;
        let boxes = super::boxes_from_args(args)?;
        let settings = super::settings_from_args(args)?;
        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            boxes,
            settings,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        info!("Analyzing {}", self.input_file);
        let image = imaging::get_file_image(&self.input_file)?;
        let (width, height) = image.size_limit();

        let grid = TileGrid::new(width, height, self.settings.tile_width, self.settings.tile_height)?;
        let report = imaging::export::describe((width, height), &self.boxes, Some(&grid));
        println!("{}", report);

        if self.verbose {
            println!("Tiles ({} order):", self.settings.order);
            for (index, tile) in grid.boxes(self.settings.order).enumerate() {
                println!("  #{}: {}", index, tile);
            }
        }

        let labelled: Vec<(String, BoundingBox)> = self.boxes.iter()
            .enumerate()
            .map(|(i, b)| (format!("Box #{}", i), *b))
            .collect();
        self.logger.print_boxes(&format!("Analyzed {}", self.input_file), &labelled)?;

        Ok(())
    }
}
