//! Attendance repository port
//!
//! Defines the interface for persisting and loading attendance records.

use chrono::{DateTime, Utc};

use crate::core::models::{AttendanceEntry, StoredAttendance};

/// Relational persistence for attendance records
///
/// Implementations must preserve the order of suspicion reasons on a round
/// trip and accept an empty reason list.
pub trait AttendanceRepository: Send + Sync {
    /// Insert an entry, returning the assigned id and creation time
    fn insert(&self, entry: &AttendanceEntry) -> anyhow::Result<(i64, DateTime<Utc>)>;

    /// Up to `limit` records of one employee, most recent first
    fn select_by_employee(
        &self,
        employee_id: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<StoredAttendance>>;

    /// A single record by id
    fn select_by_id(&self, id: i64) -> anyhow::Result<Option<StoredAttendance>>;
}
