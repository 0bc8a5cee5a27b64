//! Image loading, encoding and cropping helpers

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use log::{debug, info};

use crate::errors::RegionResult;
use crate::geometry::BoundingBox;

use super::source::ImageSource;

/// Read the raw bytes of a file
pub fn get_file_binary_content<P: AsRef<Path>>(path: P) -> RegionResult<Vec<u8>> {
    let content = fs::read(path.as_ref())?;
    debug!("Read {} bytes from {}", content.len(), path.as_ref().display());
    Ok(content)
}

/// Load an image file, converted to 8-bit RGB
pub fn get_file_image<P: AsRef<Path>>(path: P) -> RegionResult<DynamicImage> {
    let image = image::open(path.as_ref())?;
    info!("Loaded {} ({}x{})", path.as_ref().display(), image.width(), image.height());
    Ok(DynamicImage::ImageRgb8(image.into_rgb8()))
}

/// Decode an in-memory encoded image, converted to 8-bit RGB
pub fn get_image(bytes: &[u8]) -> RegionResult<DynamicImage> {
    let image = image::load_from_memory(bytes)?;
    debug!("Decoded {}x{} image from {} bytes", image.width(), image.height(), bytes.len());
    Ok(DynamicImage::ImageRgb8(image.into_rgb8()))
}

/// Encode an image as PNG bytes
pub fn to_byte_array(image: &DynamicImage) -> RegionResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Crop an image by a bounding box
///
/// The box is clamped into the image first, so parts reaching past the
/// edges (for example after [`BoundingBox::expand`]) are dropped.
pub fn crop_by_bbox<S>(source: &S, bbox: &BoundingBox) -> S::Output
where
    S: ImageSource + ?Sized,
{
    let fitted = bbox.fit_in_size(source.size_limit());
    if fitted != *bbox {
        debug!("Clamped crop box {} to {}", bbox, fitted);
    }
    source.crop(&fitted)
}

/// Crop an image by each of the given boxes, in order
pub fn crop_regions<S>(source: &S, boxes: &[BoundingBox]) -> Vec<S::Output>
where
    S: ImageSource + ?Sized,
{
    boxes.iter().map(|bbox| crop_by_bbox(source, bbox)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(80, 45, |x, y| Rgb([x as u8, y as u8, 7])))
    }

    #[test]
    fn test_crop_by_bbox() {
        let image = sample_image();
        let cropped = crop_by_bbox(&image, &BoundingBox::new(0, 0, 15, 15).unwrap());
        assert_eq!(cropped.dimensions(), (15, 15));
    }

    #[test]
    fn test_crop_by_bbox_clamps_to_image() {
        let image = sample_image();
        let expanded = BoundingBox::new(70, 40, 20, 20).unwrap().expand(0.5).unwrap();
        let cropped = crop_by_bbox(&image, &expanded);
        assert_eq!(cropped.dimensions(), (15, 10));
        assert_eq!(cropped.get_pixel(0, 0), image.get_pixel(65, 35));
    }

    #[test]
    fn test_crop_regions() {
        let image = sample_image();
        let boxes = [BoundingBox::new(0, 0, 15, 15).unwrap(), BoundingBox::new(20, 20, 45, 25).unwrap()];
        let crops = crop_regions(&image, &boxes);

        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].dimensions(), (15, 15));
        assert_eq!(crops[1].dimensions(), (45, 25));
        assert_eq!(crops[1].get_pixel(0, 0), image.get_pixel(20, 20));
    }

    #[test]
    fn test_byte_array_round_trip_keeps_size() {
        let bytes = to_byte_array(&sample_image()).unwrap();
        assert!(!bytes.is_empty());

        let decoded = get_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (80, 45));
        assert!(get_image(b"definitely not an image").is_err());
    }

    #[test]
    fn test_file_helpers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        sample_image().save(&path).unwrap();

        let content = get_file_binary_content(&path).unwrap();
        assert_eq!(content, std::fs::read(&path).unwrap());

        let image = get_file_image(&path).unwrap();
        assert_eq!(image.dimensions(), (80, 45));
        assert!(get_file_image(dir.path().join("missing.png")).is_err());
    }
}
