//! Bounding box cropping command
//!
//! This module implements the command that crops an image by one or
//! more bounding boxes, optionally expanding them first.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::errors::{RegionError, RegionResult};
use crate::geometry::BoundingBox;
use crate::imaging;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for cropping an image by bounding boxes
pub struct CropCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory receiving the crops
    output_dir: String,
    /// Boxes to crop by
    boxes: Vec<BoundingBox>,
    /// Expansion applied before cropping, if requested
    expansion: Option<f64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CropCommand<'a> {
    /// Create a new crop command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CropCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RegionResult<Self> {
        let input_file = super::input_from_args(args)?;
        let settings = super::settings_from_args(args)?;

        let boxes = super::boxes_from_args(args)?;
        if boxes.is_empty() {
            return Err(RegionError::GenericError("Cropping requires at least one --bbox".to_string()));
        }
        info!("Boxes: {:?}", boxes.iter().map(|b| b.to_string()).collect::<Vec<_>>());

        // A bare --expand uses the configured proportion
        let expansion = match args.get_one::<String>("expand") {
            Some(value) if value.is_empty() => Some(settings.expansion),
            Some(value) => Some(value.trim().parse::<f64>()
                .map_err(|_| RegionError::ParseError(format!("Invalid expansion proportion: {}", value)))?),
            None => None,
        };
        info!("Expansion: {:?}", expansion);

        Ok(CropCommand {
            input_file,
            output_dir: settings.output_dir,
            boxes,
            expansion,
            logger,
        })
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        let image = imaging::get_file_image(&self.input_file)?;

        let progress = ProgressTracker::new(self.boxes.len() as u64, "crops");
        let written = imaging::export::write_crops(
            &image,
            &self.boxes,
            self.expansion,
            Path::new(&self.output_dir),
            &progress,
        )?;

        self.logger.log(&format!(
            "Cropped {} of {} boxes from {} into {}",
            written.len(), self.boxes.len(), self.input_file, self.output_dir
        ))?;
        println!("Wrote {} crops to {}", written.len(), self.output_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use image::RgbImage;

    use crate::commands::tests::cli_matches;

    #[test]
    fn test_expand_flag_forms() {
        let logger = Logger::detached();

        let absent = CropCommand::new(&cli_matches(&["in.png", "--crop", "--bbox", "1,2,3,4"]), &logger).unwrap();
        assert_eq!(absent.expansion, None);

        let bare = CropCommand::new(&cli_matches(&["in.png", "--crop", "--bbox", "1,2,3,4", "--expand"]), &logger).unwrap();
        assert_eq!(bare.expansion, Some(0.2));

        let explicit = CropCommand::new(
            &cli_matches(&["in.png", "--crop", "--bbox", "1,2,3,4", "--expand", "0.3"]),
            &logger,
        ).unwrap();
        assert_eq!(explicit.expansion, Some(0.3));

        let invalid = CropCommand::new(
            &cli_matches(&["in.png", "--crop", "--bbox", "1,2,3,4", "--expand", "wide"]),
            &logger,
        );
        assert!(matches!(invalid, Err(RegionError::ParseError(_))));
    }

    #[test]
    fn test_bare_expand_uses_configured_proportion() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        RgbImage::new(100, 100).save(&input).unwrap();
        let config = dir.path().join("regionkit.toml");
        fs::write(&config, "[crop]\nexpansion = 0.5\n").unwrap();
        let output = dir.path().join("crops");

        let logger = Logger::detached();
        let command = CropCommand::new(
            &cli_matches(&[
                input.to_str().unwrap(),
                "--crop",
                "--bbox", "10,10,20,20",
                "--config", config.to_str().unwrap(),
                "-o", output.to_str().unwrap(),
                "--expand",
            ]),
            &logger,
        ).unwrap();
        assert_eq!(command.expansion, Some(0.5));
        assert_eq!(command.output_dir, output.to_str().unwrap());

        command.execute().unwrap();

        // 20 * 0.5 / 2 = 5 pixels added on every side
        let crop = image::open(output.join("crop_0000.png")).unwrap();
        assert_eq!((crop.width(), crop.height()), (30, 30));
    }
}
