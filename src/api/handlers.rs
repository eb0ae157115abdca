//! Pure API handlers
//!
//! These handlers contain the calling-layer rules and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`. The requesting
//! employee id is assumed to come from an already authenticated session.

use log::warn;

use crate::core::models::{PhotoUpload, Submission};
use crate::core::services::{RecordLifecycle, VerificationPipeline};

use super::error::ApiError;
use super::types::{AttendanceView, HistoryData, SubmitData, SubmitRequest};

/// Confirmation returned with a recorded attendance
pub const SUBMIT_MESSAGE: &str = "Attendance recorded successfully";

// =============================================================================
// SUBMISSION
// =============================================================================

/// Record a check-in for `employee_id`
pub fn submit_attendance(
    pipeline: &VerificationPipeline,
    employee_id: i64,
    request: &SubmitRequest,
    photo: PhotoUpload<'_>,
) -> Result<SubmitData, ApiError> {
    let reading = request
        .reading()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let record = pipeline.submit(Submission {
        employee_id,
        reading,
        device_info: request.device_info.clone(),
        photo,
    })?;

    Ok(SubmitData {
        message: SUBMIT_MESSAGE.to_string(),
        attendance: AttendanceView::from(&record),
    })
}

// =============================================================================
// READS
// =============================================================================

/// The requesting employee's most recent records
pub fn attendance_history(
    records: &RecordLifecycle,
    employee_id: i64,
    limit: usize,
) -> Result<HistoryData, ApiError> {
    let history = records.history(employee_id, limit)?;

    Ok(HistoryData {
        employee_id,
        attendances: history.iter().map(AttendanceView::from).collect(),
    })
}

/// A single record, visible only to the employee who owns it
pub fn attendance_detail(
    records: &RecordLifecycle,
    requester: i64,
    id: i64,
) -> Result<AttendanceView, ApiError> {
    let record = records.get(id)?;

    if record.entry.employee_id != requester {
        warn!(
            "Employee {requester} requested attendance {id} owned by {}",
            record.entry.employee_id
        );
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(AttendanceView::from(&record))
}
