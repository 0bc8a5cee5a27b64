//! Croppable image abstraction

use image::{DynamicImage, GenericImageView, RgbImage};

use crate::geometry::BoundingBox;

/// Anything with pixel dimensions that can be cut into sub-images
pub trait ImageSource {
    /// Type produced by a crop
    type Output;

    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Crop the area described by `region`
    ///
    /// Callers pass boxes inside `[0, width) x [0, height)`.
    fn crop(&self, region: &BoundingBox) -> Self::Output;

    /// Image `(width, height)` as box coordinates
    fn size_limit(&self) -> (i64, i64) {
        (i64::from(self.width()), i64::from(self.height()))
    }
}

/// Converts an in-bounds box into `crop_imm` arguments
fn crop_args(region: &BoundingBox) -> (u32, u32, u32, u32) {
    let to_u32 = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
    (
        to_u32(region.x()),
        to_u32(region.y()),
        to_u32(region.width()),
        to_u32(region.height()),
    )
}

impl ImageSource for DynamicImage {
    type Output = DynamicImage;

    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn crop(&self, region: &BoundingBox) -> DynamicImage {
        let (x, y, width, height) = crop_args(region);
        self.crop_imm(x, y, width, height)
    }
}

impl ImageSource for RgbImage {
    type Output = RgbImage;

    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    fn crop(&self, region: &BoundingBox) -> RgbImage {
        let (x, y, width, height) = crop_args(region);
        image::imageops::crop_imm(self, x, y, width, height).to_image()
    }
}
