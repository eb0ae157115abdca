//! SQLite attendance storage
//!
//! Implements `AttendanceRepository` on a single SQLite database file.
//! The schema is versioned through `PRAGMA user_version`.

mod migrations;
mod repository;

pub use repository::SqliteAttendanceRepository;
