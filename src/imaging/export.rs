//! Writing tiles and crops to disk, and summarizing boxes

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use log::{debug, info, warn};

use crate::errors::RegionResult;
use crate::geometry::BoundingBox;
use crate::segmenter::{segment_with, IterationOrder, TileGrid};
use crate::utils::progress::ProgressTracker;

use super::helpers::crop_by_bbox;
use super::source::ImageSource;

/// Tile `image` and write every tile as `tile_<index>_<x>_<y>.png`
///
/// # Returns
/// Paths of the written tiles, in traversal order
pub(crate) fn write_segments(
    image: &DynamicImage,
    tile_width: i64,
    tile_height: i64,
    order: IterationOrder,
    output_dir: &Path,
    progress: &ProgressTracker,
) -> RegionResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let segments = segment_with(
        i64::from(ImageSource::width(image)),
        i64::from(ImageSource::height(image)),
        tile_width,
        tile_height,
        order,
        |tile| (tile, ImageSource::crop(image, &tile)),
    )?;

    let mut written = Vec::with_capacity(segments.len());
    for (index, (tile, segment)) in segments.enumerate() {
        let path = output_dir.join(format!("tile_{:04}_{}_{}.png", index, tile.x(), tile.y()));
        segment.save_with_format(&path, ImageFormat::Png)?;
        debug!("Wrote tile {} to {}", tile, path.display());

        written.push(path);
        progress.written();
    }

    progress.finish(written.len());
    info!("Wrote {} tiles to {}", written.len(), output_dir.display());
    Ok(written)
}

/// Crop `image` by each box and write the crops as `crop_<index>.png`
///
/// Boxes are expanded by `expansion` when given, then clamped into the
/// image. Boxes left without area are skipped.
pub(crate) fn write_crops(
    image: &DynamicImage,
    boxes: &[BoundingBox],
    expansion: Option<f64>,
    output_dir: &Path,
    progress: &ProgressTracker,
) -> RegionResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let size_limit = image.size_limit();

    let mut written = Vec::with_capacity(boxes.len());
    for (index, bbox) in boxes.iter().enumerate() {
        let target = match expansion {
            Some(proportion) => bbox.expand(proportion)?,
            None => *bbox,
        };

        if target.fit_in_size(size_limit).is_degenerate() {
            warn!("Skipping box {} ({}): no area inside the image", index, bbox);
            progress.skipped(index);
            continue;
        }

        let path = output_dir.join(format!("crop_{:04}.png", index));
        crop_by_bbox(image, &target).save_with_format(&path, ImageFormat::Png)?;
        debug!("Wrote crop of {} to {}", target, path.display());

        written.push(path);
        progress.written();
    }

    progress.finish(written.len());
    info!("Wrote {} of {} crops to {}", written.len(), boxes.len(), output_dir.display());
    Ok(written)
}

/// Human-readable report on an image size, its boxes and an optional grid
pub(crate) fn describe(size_limit: (i64, i64), boxes: &[BoundingBox], grid: Option<&TileGrid>) -> String {
    let mut result = format!("Image dimensions: {}x{}\n", size_limit.0, size_limit.1);

    if let Some(grid) = grid {
        let (tile_width, tile_height) = grid.tile_size();
        result.push_str(&format!(
            "Tile grid ({}x{}): {} columns x {} rows = {} tiles\n",
            tile_width, tile_height, grid.columns(), grid.rows(), grid.len()
        ));
    }

    for (index, bbox) in boxes.iter().enumerate() {
        let fitted = bbox.fit_in_size(size_limit);
        let center = bbox.get_center();
        result.push_str(&format!("\nBox #{}: {}\n", index, bbox));
        result.push_str(&format!("  Area: {}\n", bbox.get_area()));
        result.push_str(&format!("  Center: ({}, {})\n", center.x, center.y));
        result.push_str(&format!("  Fitted to image: {}\n", fitted));
    }

    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            let intersection = a.intersect_with(b);
            result.push_str(&format!(
                "\nBox #{} & Box #{}: intersection {} (area {}, overlap {:.2}%)\n",
                i, j, intersection, intersection.get_area(), a.overlap_percentage(b)
            ));
        }
    }

    result
}
