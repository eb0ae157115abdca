//! Record lifecycle
//!
//! Wraps the attendance repository: creates records and expands stored rows
//! into [`AttendanceRecord`]s. The photo URL is resolved on every read so the
//! public prefix can change without rewriting stored rows.
//!
//! No per-employee filtering happens here; ownership checks belong to the
//! calling layer.

use std::fmt;
use std::sync::Arc;

use crate::core::error::AttendanceError;
use crate::core::models::{AttendanceEntry, AttendanceRecord, StoredAttendance};
use crate::core::ports::AttendanceRepository;

/// Creates and reads attendance records
pub struct RecordLifecycle {
    repository: Arc<dyn AttendanceRepository>,
    public_prefix: String,
}

impl RecordLifecycle {
    /// Create a lifecycle manager over a repository
    ///
    /// `public_prefix` is the URL prefix photos are served under, e.g. `/uploads`.
    pub fn new(repository: Arc<dyn AttendanceRepository>, public_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            public_prefix: public_prefix.into(),
        }
    }

    /// Resolve a stored relative photo path to its public URL
    #[must_use]
    pub fn photo_url(&self, photo_path: &str) -> String {
        format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            photo_path.trim_start_matches('/')
        )
    }

    /// Persist a new entry, assigning its id and creation time
    pub fn create(&self, entry: AttendanceEntry) -> Result<AttendanceRecord, AttendanceError> {
        let (id, created_at) = self
            .repository
            .insert(&entry)
            .map_err(AttendanceError::PersistenceFailure)?;

        Ok(self.resolve(StoredAttendance {
            id,
            created_at,
            entry,
        }))
    }

    /// Up to `limit` records of an employee, most recent first
    pub fn history(
        &self,
        employee_id: i64,
        limit: usize,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        let stored = self
            .repository
            .select_by_employee(employee_id, limit)
            .map_err(AttendanceError::PersistenceFailure)?;

        Ok(stored.into_iter().map(|s| self.resolve(s)).collect())
    }

    /// A single record by id
    pub fn get(&self, id: i64) -> Result<AttendanceRecord, AttendanceError> {
        self.repository
            .select_by_id(id)
            .map_err(AttendanceError::PersistenceFailure)?
            .map(|s| self.resolve(s))
            .ok_or(AttendanceError::NotFound(id))
    }

    fn resolve(&self, stored: StoredAttendance) -> AttendanceRecord {
        let url = self.photo_url(&stored.entry.photo_path);
        AttendanceRecord::resolved(stored, url)
    }
}

impl fmt::Debug for RecordLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordLifecycle")
            .field("public_prefix", &self.public_prefix)
            .finish_non_exhaustive()
    }
}
