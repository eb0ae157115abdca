//! Metadata extractor port

use std::io;
use std::path::Path;

use crate::core::models::PhotoMetadata;

/// Reads embedded location and capture time from a stored image
pub trait MetadataExtractor: Send + Sync {
    /// Extract metadata from the image at `path`
    ///
    /// Only filesystem errors are returned as `Err`. A missing, corrupt or
    /// unsupported metadata block yields [`PhotoMetadata::empty`].
    fn extract(&self, path: &Path) -> io::Result<PhotoMetadata>;
}
