//! Tests for the EXIF metadata extractor

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use attendance::adapters::exif::ExifMetadataExtractor;
use attendance::core::ports::MetadataExtractor;

use crate::common::fixtures::{JpegBuilder, plain_jpeg};

fn extract(path: &Path) -> attendance::core::models::PhotoMetadata {
    ExifMetadataExtractor.extract(path).unwrap()
}

#[test]
fn test_reads_southern_eastern_position() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new()
        .gps((-6.2005, 106.8168))
        .write_to(dir.path(), "a.jpg");

    let position = extract(&path).position.unwrap();

    assert!((position.latitude() - -6.2005).abs() < 1e-6);
    assert!((position.longitude() - 106.8168).abs() < 1e-6);
}

#[test]
fn test_reads_northern_western_position() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new()
        .gps((40.7128, -74.0060))
        .write_to(dir.path(), "ny.jpg");

    let position = extract(&path).position.unwrap();

    assert!((position.latitude() - 40.7128).abs() < 1e-6);
    assert!((position.longitude() - -74.0060).abs() < 1e-6);
}

#[test]
fn test_prefers_original_capture_time() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new()
        .date_time("2024:01:15 17:00:00")
        .date_time_original("2024:01:15 08:30:00")
        .write_to(dir.path(), "t.jpg");

    let taken_at = extract(&path).taken_at.unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    assert_eq!(taken_at, expected);
}

#[test]
fn test_falls_back_to_modification_time() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new()
        .date_time("2023:12:31 23:59:59")
        .write_to(dir.path(), "t.jpg");

    let taken_at = extract(&path).taken_at.unwrap();

    assert_eq!(taken_at.to_string(), "2023-12-31 23:59:59");
}

#[test]
fn test_timestamp_without_position() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new()
        .date_time_original("2024:01:15 08:30:00")
        .write_to(dir.path(), "t.jpg");

    let metadata = extract(&path);

    assert!(metadata.position.is_none());
    assert!(metadata.taken_at.is_some());
}

#[test]
fn test_position_without_timestamp() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new().gps((-6.2, 106.8166)).write_to(dir.path(), "p.jpg");

    let metadata = extract(&path);

    assert!(metadata.position.is_some());
    assert!(metadata.taken_at.is_none());
}

#[test]
fn test_jpeg_without_exif_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.jpg");
    fs::write(&path, plain_jpeg()).unwrap();

    assert!(extract(&path).is_empty());
}

#[test]
fn test_garbage_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.jpg");
    fs::write(&path, b"definitely not an image").unwrap();

    assert!(extract(&path).is_empty());
}

#[test]
fn test_exif_without_tags_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = JpegBuilder::new().write_to(dir.path(), "bare.jpg");

    assert!(extract(&path).is_empty());
}
