//! Attendance records through their lifecycle
//!
//! A [`Submission`] is what arrives from the caller. The pipeline turns it into
//! an [`AttendanceEntry`], persistence returns a [`StoredAttendance`], and read
//! paths hand out [`AttendanceRecord`]s with a resolved photo URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ClaimedReading, PhotoMetadata, PhotoUpload, SuspicionVerdict};

/// A check-in as submitted by an employee
#[derive(Debug)]
pub struct Submission<'a> {
    /// Owning employee
    pub employee_id: i64,
    /// Position, accuracy and address reported by the device
    pub reading: ClaimedReading,
    /// Opaque device description
    pub device_info: String,
    /// The uploaded photo
    pub photo: PhotoUpload<'a>,
}

/// An attendance record before persistence assigns its id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    /// Owning employee
    pub employee_id: i64,
    /// The claimed reading
    pub reading: ClaimedReading,
    /// Stored photo path, relative to the upload root
    pub photo_path: String,
    /// Metadata extracted from the stored photo
    pub photo: PhotoMetadata,
    /// Suspicion verdict computed at submission time
    pub verdict: SuspicionVerdict,
    /// Opaque device description
    pub device_info: String,
}

/// An entry as returned by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredAttendance {
    /// Identifier assigned at insert
    pub id: i64,
    /// Creation time assigned at insert
    pub created_at: DateTime<Utc>,
    /// The persisted fields
    pub entry: AttendanceEntry,
}

/// A stored attendance with its externally fetchable photo URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    /// Identifier assigned at insert
    pub id: i64,
    /// Creation time assigned at insert
    pub created_at: DateTime<Utc>,
    /// Public URL of the stored photo
    pub photo_url: String,
    /// The persisted fields
    pub entry: AttendanceEntry,
}

impl AttendanceRecord {
    /// Attach a resolved photo URL to a stored attendance
    #[must_use]
    pub fn resolved(stored: StoredAttendance, photo_url: String) -> Self {
        Self {
            id: stored.id,
            created_at: stored.created_at,
            photo_url,
            entry: stored.entry,
        }
    }
}
