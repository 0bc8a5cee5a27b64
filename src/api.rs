use std::path::{Path, PathBuf};
use log::info;

use crate::errors::RegionResult;
use crate::geometry::BoundingBox;
use crate::imaging::{self, ImageSource};
use crate::segmenter::TileGrid;
use crate::utils::config::Settings;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Main interface to the RegionKit library for file-based workflows
pub struct RegionKit {
    logger: Logger,
    settings: Settings,
}

impl RegionKit {
    /// Create a new RegionKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file recording each run
    ///
    /// # Returns
    /// A RegionKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> RegionResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::detached(),
        };
        Ok(RegionKit { logger, settings: Settings::default() })
    }

    /// Replace the tiling and cropping settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Describe an image, its tile grid and the given boxes
    ///
    /// # Arguments
    /// * `input_path` - Path to the image
    /// * `boxes` - Boxes to report on, may be empty
    ///
    /// # Returns
    /// The report text or an error if the image cannot be loaded
    pub fn analyze<P: AsRef<Path>>(&self, input_path: P, boxes: &[BoundingBox]) -> RegionResult<String> {
        let image = imaging::get_file_image(input_path.as_ref())?;
        let size_limit = image.size_limit();
        let grid = TileGrid::new(size_limit.0, size_limit.1, self.settings.tile_width, self.settings.tile_height)?;

        let labelled: Vec<(String, BoundingBox)> = boxes.iter()
            .enumerate()
            .map(|(i, b)| (format!("Box #{}", i), *b))
            .collect();
        self.logger.print_boxes(&format!("Analyzed {}", input_path.as_ref().display()), &labelled)?;

        Ok(imaging::export::describe(size_limit, boxes, Some(&grid)))
    }

    /// Tile an image into PNG files inside `output_dir`
    ///
    /// Tile size and order come from the current settings.
    ///
    /// # Returns
    /// Paths of the written tiles in traversal order
    pub fn segment<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_dir: Q) -> RegionResult<Vec<PathBuf>> {
        let image = imaging::get_file_image(input_path.as_ref())?;
        info!("Segmenting {} into {}", input_path.as_ref().display(), output_dir.as_ref().display());

        let written = imaging::export::write_segments(
            &image,
            self.settings.tile_width,
            self.settings.tile_height,
            self.settings.order,
            output_dir.as_ref(),
            &ProgressTracker::hidden(),
        )?;

        self.logger.log(&format!("Segmented {} into {} tiles", input_path.as_ref().display(), written.len()))?;
        Ok(written)
    }

    /// Crop an image by each box into PNG files inside `output_dir`
    ///
    /// # Arguments
    /// * `input_path` - Path to the image
    /// * `output_dir` - Directory receiving `crop_<index>.png` files
    /// * `boxes` - Boxes to crop by
    /// * `expand` - Whether to grow boxes by the configured expansion first
    ///
    /// # Returns
    /// Paths of the written crops; boxes entirely outside the image are skipped
    pub fn crop<P: AsRef<Path>, Q: AsRef<Path>>(&self,
                                               input_path: P,
                                               output_dir: Q,
                                               boxes: &[BoundingBox],
                                               expand: bool) -> RegionResult<Vec<PathBuf>> {
        let image = imaging::get_file_image(input_path.as_ref())?;
        let expansion = expand.then_some(self.settings.expansion);

        let written = imaging::export::write_crops(
            &image,
            boxes,
            expansion,
            output_dir.as_ref(),
            &ProgressTracker::hidden(),
        )?;

        self.logger.log(&format!("Cropped {} boxes from {}", written.len(), input_path.as_ref().display()))?;
        Ok(written)
    }
}
