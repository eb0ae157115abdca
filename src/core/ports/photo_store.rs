//! Photo store port
//!
//! Defines the interface for persisting uploaded photos.

use std::io;
use std::path::PathBuf;

use crate::core::error::AttendanceError;
use crate::core::models::PhotoUpload;

/// Storage for uploaded photo blobs
///
/// Implementations enforce the extension and size policy and never leave a
/// partially written file visible after a failed save.
pub trait PhotoStore: Send + Sync {
    /// Validate and persist an upload
    ///
    /// Returns the generated file name, relative to the store root. Fails
    /// with `UnsupportedMediaType`, `PayloadTooLarge` or `StorageFailure`.
    fn save(&self, upload: PhotoUpload<'_>) -> Result<String, AttendanceError>;

    /// Resolve a stored name to the path metadata can be read from
    fn locate(&self, name: &str) -> PathBuf;

    /// Delete a stored photo
    ///
    /// A photo that no longer exists is not an error.
    fn remove(&self, name: &str) -> io::Result<()>;
}
