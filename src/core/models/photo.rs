//! Photo uploads and the metadata embedded in them

use std::fmt;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::GeoPoint;

/// Location and time a camera embedded in a photo at capture
///
/// Both fields are independent: either, both or neither may be present.
/// An unreadable metadata block is represented as both absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhotoMetadata {
    /// Position recorded by the camera
    pub position: Option<GeoPoint>,
    /// Capture time as written by the camera (no zone information)
    pub taken_at: Option<NaiveDateTime>,
}

impl PhotoMetadata {
    /// Metadata with neither position nor timestamp
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            position: None,
            taken_at: None,
        }
    }

    /// True when nothing could be extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.position.is_none() && self.taken_at.is_none()
    }
}

/// An uploaded photo as received from the client
pub struct PhotoUpload<'a> {
    /// File name supplied by the client
    pub original_name: String,
    /// Size in bytes the client declared for the upload
    pub declared_size: u64,
    /// The photo bytes
    pub content: &'a mut dyn Read,
}

impl PhotoUpload<'_> {
    /// Lower-cased extension of the declared file name, without the dot
    ///
    /// Returns an empty string when the name has no extension.
    #[must_use]
    pub fn extension(&self) -> String {
        Path::new(&self.original_name)
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

impl fmt::Debug for PhotoUpload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("original_name", &self.original_name)
            .field("declared_size", &self.declared_size)
            .finish_non_exhaustive()
    }
}
