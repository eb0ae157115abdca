//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{AttendanceRecord, ClaimedReading, GeoPoint, ReadingError};

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.into()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Form fields accompanying a check-in photo
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    /// Claimed latitude in degrees
    pub latitude: f64,
    /// Claimed longitude in degrees
    pub longitude: f64,
    /// Claimed accuracy radius in meters
    pub accuracy: f64,
    /// Free-text address
    #[serde(default)]
    pub address: String,
    /// Opaque device description
    #[serde(default)]
    pub device_info: String,
}

impl SubmitRequest {
    /// Validate the fields into a claimed reading
    pub fn reading(&self) -> Result<ClaimedReading, ReadingError> {
        let position = GeoPoint::new(self.latitude, self.longitude)?;
        ClaimedReading::new(position, self.accuracy, self.address.clone())
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Flat JSON view of an attendance record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceView {
    /// Record id
    pub id: i64,
    /// Owning employee
    pub employee_id: i64,
    /// Claimed latitude
    pub latitude: f64,
    /// Claimed longitude
    pub longitude: f64,
    /// Claimed accuracy in meters
    pub accuracy: f64,
    /// Free-text address
    pub address: String,
    /// Stored photo path relative to the upload root
    pub photo_path: String,
    /// Public photo URL
    pub photo_url: String,
    /// Latitude embedded in the photo
    pub photo_latitude: Option<f64>,
    /// Longitude embedded in the photo
    pub photo_longitude: Option<f64>,
    /// Capture time embedded in the photo (no zone)
    pub photo_timestamp: Option<NaiveDateTime>,
    /// Opaque device description
    pub device_info: String,
    /// Whether the record was flagged
    pub is_suspicious: bool,
    /// Reasons for the flag, in detection order
    pub suspicious_reasons: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<&AttendanceRecord> for AttendanceView {
    fn from(record: &AttendanceRecord) -> Self {
        let entry = &record.entry;
        let claimed = entry.reading.position();
        Self {
            id: record.id,
            employee_id: entry.employee_id,
            latitude: claimed.latitude(),
            longitude: claimed.longitude(),
            accuracy: entry.reading.accuracy(),
            address: entry.reading.address().to_string(),
            photo_path: entry.photo_path.clone(),
            photo_url: record.photo_url.clone(),
            photo_latitude: entry.photo.position.map(|p| p.latitude()),
            photo_longitude: entry.photo.position.map(|p| p.longitude()),
            photo_timestamp: entry.photo.taken_at,
            device_info: entry.device_info.clone(),
            is_suspicious: entry.verdict.is_suspicious(),
            suspicious_reasons: entry.verdict.reasons().to_vec(),
            created_at: record.created_at,
        }
    }
}

/// Submission response data
#[derive(Debug, Serialize)]
pub struct SubmitData {
    /// Confirmation message
    pub message: String,
    /// The recorded attendance
    pub attendance: AttendanceView,
}

/// History response data
#[derive(Debug, Serialize)]
pub struct HistoryData {
    /// Employee the history belongs to
    pub employee_id: i64,
    /// Records, most recent first
    pub attendances: Vec<AttendanceView>,
}
