//! Tests for lazy segment production

use std::cell::Cell;

use image::{DynamicImage, GenericImageView, RgbImage};

use crate::errors::RegionError;
use crate::segmenter::{segment_image, segment_with, IterationOrder};

#[test]
fn test_segment_image_sizes() {
    let image = DynamicImage::new_rgb8(800, 450);
    let sizes: Vec<(u32, u32)> = segment_image(&image, 200, 200, IterationOrder::Horizontal)
        .unwrap()
        .map(|segment| segment.dimensions())
        .collect();

    let mut expected = vec![(200, 200); 8];
    expected.extend(vec![(200, 50); 4]);
    assert_eq!(sizes, expected);
}

#[test]
fn test_segment_image_vertical_sizes() {
    let image = DynamicImage::new_rgb8(800, 450);
    let sizes: Vec<(u32, u32)> = segment_image(&image, 200, 200, IterationOrder::Vertical)
        .unwrap()
        .map(|segment| segment.dimensions())
        .collect();

    let column = vec![(200, 200), (200, 200), (200, 50)];
    assert_eq!(sizes, column.repeat(4));
}

#[test]
fn test_segments_carry_the_right_pixels() {
    let image = RgbImage::from_fn(6, 4, |x, y| image::Rgb([x as u8, y as u8, 0]));
    let segments: Vec<RgbImage> = segment_image(&image, 4, 3, IterationOrder::Horizontal)
        .unwrap()
        .collect();

    assert_eq!(segments.len(), 4);
    assert_eq!(segments[1].dimensions(), (2, 3));
    assert_eq!(segments[1].get_pixel(0, 0), &image::Rgb([4, 0, 0]));
    assert_eq!(segments[2].dimensions(), (4, 1));
    assert_eq!(segments[2].get_pixel(3, 0), &image::Rgb([3, 3, 0]));
}

#[test]
fn test_segments_are_lazy() {
    let calls = Cell::new(0);
    let mut segments = segment_with(800, 450, 200, 200, IterationOrder::Horizontal, |tile| {
        calls.set(calls.get() + 1);
        tile
    })
    .unwrap();

    assert_eq!(calls.get(), 0);
    assert_eq!(segments.len(), 12);

    let first = segments.next().unwrap();
    assert_eq!(first.get_box(), (0, 0, 200, 200));
    assert_eq!(calls.get(), 1);

    assert_eq!(segments.remaining_boxes().len(), 11);
    drop(segments);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_segmenting_twice_restarts() {
    let collect = || -> Vec<_> {
        segment_with(30, 20, 7, 9, IterationOrder::Vertical, |tile| tile.get_box())
            .unwrap()
            .collect()
    };
    assert_eq!(collect(), collect());
}

#[test]
fn test_segment_with_rejects_bad_sizes() {
    let result = segment_with(800, 450, 0, 200, IterationOrder::Horizontal, |tile| tile);
    assert!(matches!(result, Err(RegionError::InvalidDimension(_))));

    let too_many = segment_with(i64::MAX, i64::MAX, 1, 1, IterationOrder::Vertical, |tile| tile);
    assert!(matches!(too_many, Err(RegionError::InvalidDimension(_))));

    let empty = DynamicImage::new_rgb8(0, 10);
    assert!(matches!(
        segment_image(&empty, 5, 5, IterationOrder::Horizontal),
        Err(RegionError::InvalidDimension(_))
    ));
}
