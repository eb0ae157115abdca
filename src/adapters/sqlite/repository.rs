//! Attendance repository on SQLite
//!
//! Suspicion reasons are stored as a JSON array so their order survives the
//! round trip. Creation times are assigned by the database default.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::migrations::run_migrations;
use crate::core::models::{
    AttendanceEntry, ClaimedReading, GeoPoint, PhotoMetadata, StoredAttendance, SuspicionVerdict,
};
use crate::core::ports::AttendanceRepository;

/// Storage layout of `photo_timestamp`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_COLUMNS: &str = "SELECT
        id,
        employee_id,
        latitude,
        longitude,
        accuracy,
        address,
        photo_path,
        photo_latitude,
        photo_longitude,
        photo_timestamp,
        device_info,
        is_suspicious,
        suspicious_reasons,
        created_at
    FROM attendances";

/// SQLite-backed attendance repository
#[derive(Debug)]
pub struct SqliteAttendanceRepository {
    conn: Mutex<Connection>,
}

impl SqliteAttendanceRepository {
    /// Open (or create) the database file and bring its schema up to date
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .context("failed to enable WAL mode")?;
        debug!("SQLite journal mode: {mode}");

        Self::from_connection(conn)
    }

    /// A private in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        run_migrations(&mut conn).context("failed to run database migrations")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("attendance database lock poisoned"))
    }
}

impl AttendanceRepository for SqliteAttendanceRepository {
    fn insert(&self, entry: &AttendanceEntry) -> Result<(i64, DateTime<Utc>)> {
        let reasons = serde_json::to_string(entry.verdict.reasons())
            .context("failed to serialize suspicious reasons")?;
        let position = entry.reading.position();
        let photo_position = entry.photo.position;
        let photo_timestamp = entry
            .photo
            .taken_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string());

        let conn = self.lock()?;
        let (id, created_at): (i64, String) = conn
            .query_row(
                "INSERT INTO attendances (
                    employee_id,
                    latitude,
                    longitude,
                    accuracy,
                    address,
                    photo_path,
                    photo_latitude,
                    photo_longitude,
                    photo_timestamp,
                    device_info,
                    is_suspicious,
                    suspicious_reasons
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                RETURNING id, created_at",
                params![
                    entry.employee_id,
                    position.latitude(),
                    position.longitude(),
                    entry.reading.accuracy(),
                    entry.reading.address(),
                    entry.photo_path,
                    photo_position.map(|p| p.latitude()),
                    photo_position.map(|p| p.longitude()),
                    photo_timestamp,
                    entry.device_info,
                    entry.verdict.is_suspicious(),
                    reasons,
                ],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .context("failed to insert attendance")?;

        Ok((id, parse_datetime(&created_at, "created_at")?))
    }

    fn select_by_employee(&self, employee_id: i64, limit: usize) -> Result<Vec<StoredAttendance>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS}
            WHERE employee_id = ?1
            ORDER BY created_at DESC, id DESC
            LIMIT ?2"
        ))?;

        let rows = stmt
            .query_map(params![employee_id, limit], AttendanceRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to load attendance history")?;

        rows.into_iter().map(AttendanceRow::into_stored).collect()
    }

    fn select_by_id(&self, id: i64) -> Result<Option<StoredAttendance>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                AttendanceRow::from_row,
            )
            .optional()
            .with_context(|| format!("failed to load attendance {id}"))?;

        row.map(AttendanceRow::into_stored).transpose()
    }
}

/// Raw column values of one `attendances` row
struct AttendanceRow {
    id: i64,
    employee_id: i64,
    latitude: f64,
    longitude: f64,
    accuracy: f64,
    address: Option<String>,
    photo_path: String,
    photo_latitude: Option<f64>,
    photo_longitude: Option<f64>,
    photo_timestamp: Option<String>,
    device_info: Option<String>,
    is_suspicious: bool,
    suspicious_reasons: Option<String>,
    created_at: String,
}

impl AttendanceRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            employee_id: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            accuracy: row.get(4)?,
            address: row.get(5)?,
            photo_path: row.get(6)?,
            photo_latitude: row.get(7)?,
            photo_longitude: row.get(8)?,
            photo_timestamp: row.get(9)?,
            device_info: row.get(10)?,
            is_suspicious: row.get(11)?,
            suspicious_reasons: row.get(12)?,
            created_at: row.get(13)?,
        })
    }

    fn into_stored(self) -> Result<StoredAttendance> {
        let id = self.id;
        let position = GeoPoint::new(self.latitude, self.longitude)
            .with_context(|| format!("attendance {id} has an invalid position"))?;
        let reading = ClaimedReading::new(position, self.accuracy, self.address.unwrap_or_default())
            .with_context(|| format!("attendance {id} has an invalid accuracy"))?;

        let photo_position = match (self.photo_latitude, self.photo_longitude) {
            (Some(lat), Some(lon)) => Some(
                GeoPoint::new(lat, lon)
                    .with_context(|| format!("attendance {id} has an invalid photo position"))?,
            ),
            _ => None,
        };
        let taken_at = self
            .photo_timestamp
            .as_deref()
            .map(|raw| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT))
            .transpose()
            .with_context(|| format!("attendance {id} has an invalid photo timestamp"))?;

        let reasons: Vec<String> = match self.suspicious_reasons.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw)
                .with_context(|| format!("attendance {id} has malformed suspicious reasons"))?,
        };

        Ok(StoredAttendance {
            id,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            entry: AttendanceEntry {
                employee_id: self.employee_id,
                reading,
                photo_path: self.photo_path,
                photo: PhotoMetadata {
                    position: photo_position,
                    taken_at,
                },
                verdict: SuspicionVerdict::from_parts(self.is_suspicious, reasons),
                device_info: self.device_info.unwrap_or_default(),
            },
        })
    }
}

fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field} '{value}'"))
}
