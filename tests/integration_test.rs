//! End-to-end tests for the file based workflows

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use tempfile::TempDir;

use regionkit::utils::config::Settings;
use regionkit::{BoundingBox, IterationOrder, RegionKit};

/// Writes an 800x450 gradient PNG and returns its directory and path
fn sample_png() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subject.png");
    let image = RgbImage::from_fn(800, 450, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
    DynamicImage::ImageRgb8(image).save(&path).unwrap();
    (dir, path)
}

#[test]
fn test_segment_workflow() {
    let (dir, input) = sample_png();
    let output = dir.path().join("tiles");

    let kit = RegionKit::new(None).unwrap();
    let written = kit.segment(&input, &output).unwrap();
    assert_eq!(written.len(), 12);

    let names: Vec<String> = written.iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names[0], "tile_0000_0_0.png");
    assert_eq!(names[3], "tile_0003_600_0.png");
    assert_eq!(names[11], "tile_0011_600_400.png");

    let sizes: Vec<(u32, u32)> = written.iter()
        .map(|p| image::open(p).unwrap().dimensions())
        .collect();
    let mut expected = vec![(200, 200); 8];
    expected.extend(vec![(200, 50); 4]);
    assert_eq!(sizes, expected);
}

#[test]
fn test_segment_workflow_vertical_with_settings() {
    let (dir, input) = sample_png();
    let output = dir.path().join("columns");

    let settings = Settings::from_toml_str("[segment]\ntile_width = 300\ntile_height = 450\norder = \"vertical\"\n").unwrap();
    assert_eq!(settings.order, IterationOrder::Vertical);

    let kit = RegionKit::new(None).unwrap().with_settings(settings);
    let written = kit.segment(&input, &output).unwrap();

    let sizes: Vec<(u32, u32)> = written.iter()
        .map(|p| image::open(p).unwrap().dimensions())
        .collect();
    assert_eq!(sizes, vec![(300, 450), (300, 450), (200, 450)]);
}

#[test]
fn test_crop_workflow_with_expansion() {
    let (dir, input) = sample_png();
    let output = dir.path().join("crops");
    let log_path = dir.path().join("run.log");

    let boxes = [
        BoundingBox::from_string("3, 3, 100, 100").unwrap(),
        BoundingBox::from_string("790, 440, 20, 20").unwrap(),
        BoundingBox::from_string("900, 10, 5, 5").unwrap(),
    ];

    let kit = RegionKit::new(log_path.to_str()).unwrap();
    let written = kit.crop(&input, &output, &boxes, true).unwrap();

    // The third box lies outside the image and is skipped
    assert_eq!(written.len(), 2);
    // [3,3,100,100] expands to [-7,-7,120,120] and is fitted to [0,0,113,113]
    assert_eq!(image::open(&written[0]).unwrap().dimensions(), (113, 113));
    // [790,440,20,20] expands to [788,438,24,24] and is fitted to [788,438,12,12]
    assert_eq!(image::open(&written[1]).unwrap().dimensions(), (12, 12));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Cropped 2 boxes"));
}

#[test]
fn test_analyze_report() {
    let (_dir, input) = sample_png();
    let boxes = [
        BoundingBox::new(80, 60, 250, 170).unwrap(),
        BoundingBox::new(200, 130, 200, 170).unwrap(),
    ];

    let kit = RegionKit::new(None).unwrap();
    let report = kit.analyze(&input, &boxes).unwrap();

    assert!(report.contains("Image dimensions: 800x450"));
    assert!(report.contains("4 columns x 3 rows = 12 tiles"));
    assert!(report.contains("Box #0: [80, 60, 250, 170]"));
    assert!(report.contains("intersection [200, 130, 130, 100] (area 13000, overlap 38.24%)"));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let kit = RegionKit::new(None).unwrap();
    assert!(kit.segment(dir.path().join("nope.png"), dir.path().join("out")).is_err());
}
