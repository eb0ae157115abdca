//! Tests for the SQLite repository behind the record lifecycle

use std::sync::Arc;

use tempfile::TempDir;

use attendance::adapters::sqlite::SqliteAttendanceRepository;
use attendance::core::error::AttendanceError;
use attendance::core::models::{AttendanceEntry, GeoPoint, PhotoMetadata, SuspicionVerdict};
use attendance::core::services::RecordLifecycle;

use crate::common::fixtures::{OFFICE, reading};

fn entry(employee_id: i64, verdict: SuspicionVerdict) -> AttendanceEntry {
    AttendanceEntry {
        employee_id,
        reading: reading(OFFICE, 12.0),
        photo_path: "20240115_083000_1a2b3c4d.jpg".to_string(),
        photo: PhotoMetadata {
            position: Some(GeoPoint::new(-6.2005, 106.8168).unwrap()),
            taken_at: None,
        },
        verdict,
        device_info: "Pixel 8".to_string(),
    }
}

#[test]
fn test_lifecycle_over_sqlite_file() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("data").join("attendance.db");
    let repository = Arc::new(SqliteAttendanceRepository::open(&db).unwrap());
    let records = RecordLifecycle::new(repository, "/uploads");

    let flagged = SuspicionVerdict::from_parts(true, vec!["Photo has no GPS data".to_string()]);
    let created = records.create(entry(5, flagged.clone())).unwrap();

    assert!(db.exists());
    assert_eq!(created.photo_url, "/uploads/20240115_083000_1a2b3c4d.jpg");

    let fetched = records.get(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.entry.verdict, flagged);
}

#[test]
fn test_missing_record_is_not_found() {
    let repository = Arc::new(SqliteAttendanceRepository::open_in_memory().unwrap());
    let records = RecordLifecycle::new(repository, "/uploads");

    assert!(matches!(records.get(42), Err(AttendanceError::NotFound(42))));
}

#[test]
fn test_history_only_returns_requested_employee() {
    let repository = Arc::new(SqliteAttendanceRepository::open_in_memory().unwrap());
    let records = RecordLifecycle::new(repository, "/uploads");

    records.create(entry(1, SuspicionVerdict::trusted())).unwrap();
    records.create(entry(2, SuspicionVerdict::trusted())).unwrap();
    records.create(entry(1, SuspicionVerdict::trusted())).unwrap();

    let history = records.history(1, 50).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|r| r.entry.employee_id == 1));
    assert!(history[0].id > history[1].id);
}
