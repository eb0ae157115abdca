//! EXIF metadata extraction
//!
//! Implements `MetadataExtractor` with the `kamadak-exif` decoder, which
//! understands JPEG, TIFF, PNG, WebP and HEIF containers.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{Exif, In, Reader, Tag, Value};
use log::debug;

use crate::core::models::{GeoPoint, PhotoMetadata};
use crate::core::ports::MetadataExtractor;

/// EXIF date/time layout (`2024:01:15 08:30:00`)
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Reads GPS position and capture time from EXIF tags
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifMetadataExtractor;

impl MetadataExtractor for ExifMetadataExtractor {
    fn extract(&self, path: &Path) -> io::Result<PhotoMetadata> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        match Reader::new().read_from_container(&mut reader) {
            Ok(exif) => Ok(metadata_from_exif(&exif)),
            Err(err) => {
                debug!("No usable EXIF in {}: {err}", path.display());
                Ok(PhotoMetadata::empty())
            },
        }
    }
}

/// Pull position and capture time out of decoded EXIF fields
#[must_use]
pub fn metadata_from_exif(exif: &Exif) -> PhotoMetadata {
    PhotoMetadata {
        position: gps_position(exif),
        taken_at: capture_time(exif),
    }
}

fn gps_position(exif: &Exif) -> Option<GeoPoint> {
    let latitude = coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S')?;
    let longitude = coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W')?;
    GeoPoint::new(latitude, longitude).ok()
}

/// Signed decimal degrees from a degrees/minutes/seconds field and its
/// hemisphere reference; `negative` is the reference letter for south/west
fn coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag, negative: u8) -> Option<f64> {
    let field = exif.get_field(value_tag, In::PRIMARY)?;
    let parts: Vec<f64> = match &field.value {
        Value::Rational(values) => values.iter().map(exif::Rational::to_f64).collect(),
        _ => return None,
    };
    let degrees = dms_to_degrees(&parts)?;

    let negate = exif
        .get_field(ref_tag, In::PRIMARY)
        .is_some_and(|f| match &f.value {
            Value::Ascii(values) => values
                .first()
                .and_then(|v| v.first())
                .is_some_and(|c| c.eq_ignore_ascii_case(&negative)),
            _ => false,
        });

    Some(if negate { -degrees } else { degrees })
}

/// Degrees + minutes/60 + seconds/3600; missing trailing parts count as zero
fn dms_to_degrees(parts: &[f64]) -> Option<f64> {
    if parts.is_empty() {
        return None;
    }
    let get = |i: usize| parts.get(i).copied().unwrap_or(0.0);
    let degrees = get(0) + get(1) / 60.0 + get(2) / 3600.0;
    degrees.is_finite().then_some(degrees)
}

fn capture_time(exif: &Exif) -> Option<NaiveDateTime> {
    [Tag::DateTimeOriginal, Tag::DateTime]
        .into_iter()
        .find_map(|tag| match &exif.get_field(tag, In::PRIMARY)?.value {
            Value::Ascii(values) => values.first().and_then(|raw| parse_exif_datetime(raw)),
            _ => None,
        })
}

fn parse_exif_datetime(raw: &[u8]) -> Option<NaiveDateTime> {
    let text = std::str::from_utf8(raw).ok()?;
    let text = text.trim_end_matches('\0').trim();
    NaiveDateTime::parse_from_str(text, EXIF_DATETIME_FORMAT).ok()
}
