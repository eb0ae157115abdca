//! Error taxonomy of the attendance integrity pipeline
//!
//! Validation and storage errors carry the values needed for a user-facing
//! message. Persistence errors display a generic message and keep the
//! underlying cause only as [`std::error::Error::source`].

use std::io;

use thiserror::Error;

use crate::core::models::ReadingError;

/// Errors surfaced by the pipeline and the record lifecycle
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// Claimed GPS accuracy is worse than the configured maximum
    #[error("GPS accuracy too low: {accuracy:.2}m (max: {max:.2}m)")]
    AccuracyTooLow {
        /// Accuracy reported by the device, in meters
        accuracy: f64,
        /// Configured maximum, in meters
        max: f64,
    },

    /// Photo extension is not on the allow-list
    #[error("file type not allowed: '{extension}' (allowed: {})", .allowed.join(", "))]
    UnsupportedMediaType {
        /// Extension of the uploaded file (lower case, may be empty)
        extension: String,
        /// Configured allow-list
        allowed: Vec<String>,
    },

    /// Photo is larger than the configured maximum
    #[error("file too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge {
        /// Declared or observed size in bytes
        size: u64,
        /// Configured maximum in bytes
        max: u64,
    },

    /// Writing the photo failed; nothing was stored
    #[error("failed to store photo")]
    StorageFailure(#[source] io::Error),

    /// Writing or reading the record failed
    #[error("failed to save attendance record")]
    PersistenceFailure(#[source] anyhow::Error),

    /// No record with this id
    #[error("attendance record {0} not found")]
    NotFound(i64),

    /// Submitted coordinates or accuracy are invalid
    #[error(transparent)]
    InvalidReading(#[from] ReadingError),
}
