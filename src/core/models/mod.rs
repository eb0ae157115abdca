//! Domain models for attendance
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`GeoPoint`] - A validated latitude/longitude pair
//! - [`ClaimedReading`] - What the device reports for "now"
//! - [`PhotoMetadata`] - Position and capture time embedded in a photo
//! - [`SuspicionVerdict`] - Trust judgment with ordered reasons
//! - [`AttendanceEntry`] / [`AttendanceRecord`] - The persisted check-in

mod geo;
mod photo;
mod record;
mod verdict;

pub use geo::{ClaimedReading, GeoPoint, ReadingError};
pub use photo::{PhotoMetadata, PhotoUpload};
pub use record::{AttendanceEntry, AttendanceRecord, StoredAttendance, Submission};
pub use verdict::SuspicionVerdict;
