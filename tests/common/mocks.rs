//! Mock implementations of port traits for testing
//!
//! These mocks record how they were called and never touch the filesystem
//! or a database.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use attendance::core::error::AttendanceError;
use attendance::core::models::{AttendanceEntry, PhotoMetadata, PhotoUpload, StoredAttendance};
use attendance::core::ports::{AttendanceRepository, MetadataExtractor, PhotoStore};

/// Photo store that keeps uploads in memory and counts calls
#[derive(Default)]
pub struct MockPhotoStore {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
    removed: Mutex<Vec<String>>,
    fail_remove: bool,
}

impl MockPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `remove` always fails
    pub fn failing_remove() -> Self {
        Self {
            fail_remove: true,
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.saved.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn saved_bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.clone())
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl PhotoStore for MockPhotoStore {
    fn save(&self, upload: PhotoUpload<'_>) -> Result<String, AttendanceError> {
        let mut bytes = Vec::new();
        upload
            .content
            .read_to_end(&mut bytes)
            .map_err(AttendanceError::StorageFailure)?;

        let mut saved = self.saved.lock().unwrap();
        let name = format!("photo_{}.{}", saved.len() + 1, upload.extension());
        saved.push((name.clone(), bytes));
        Ok(name)
    }

    fn locate(&self, name: &str) -> PathBuf {
        PathBuf::from("/mock").join(name)
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        self.removed.lock().unwrap().push(name.to_string());
        if self.fail_remove {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        Ok(())
    }
}

/// Extractor returning a fixed result regardless of the path
pub struct StaticMetadata {
    result: Result<PhotoMetadata, io::ErrorKind>,
    calls: Mutex<Vec<PathBuf>>,
}

impl StaticMetadata {
    pub fn returning(metadata: PhotoMetadata) -> Self {
        Self {
            result: Ok(metadata),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            result: Err(kind),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl MetadataExtractor for StaticMetadata {
    fn extract(&self, path: &Path) -> io::Result<PhotoMetadata> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        self.result.map_err(|kind| io::Error::new(kind, "mock extraction failure"))
    }
}

/// Repository keeping rows in a vector
#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<Vec<StoredAttendance>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl AttendanceRepository for MemoryRepository {
    fn insert(&self, entry: &AttendanceEntry) -> anyhow::Result<(i64, DateTime<Utc>)> {
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len())? + 1;
        let created_at = Utc::now();
        rows.push(StoredAttendance {
            id,
            created_at,
            entry: entry.clone(),
        });
        Ok((id, created_at))
    }

    fn select_by_employee(
        &self,
        employee_id: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<StoredAttendance>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.entry.employee_id == employee_id)
            .take(limit)
            .cloned()
            .collect())
    }

    fn select_by_id(&self, id: i64) -> anyhow::Result<Option<StoredAttendance>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }
}

/// Repository whose every call fails
pub struct FailingRepository;

impl AttendanceRepository for FailingRepository {
    fn insert(&self, _entry: &AttendanceEntry) -> anyhow::Result<(i64, DateTime<Utc>)> {
        anyhow::bail!("database is locked")
    }

    fn select_by_employee(&self, _: i64, _: usize) -> anyhow::Result<Vec<StoredAttendance>> {
        anyhow::bail!("database is locked")
    }

    fn select_by_id(&self, _: i64) -> anyhow::Result<Option<StoredAttendance>> {
        anyhow::bail!("database is locked")
    }
}
