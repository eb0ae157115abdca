//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Photo storage on the local filesystem
//! - `exif/` - EXIF metadata decoding
//! - `sqlite/` - Attendance persistence in SQLite

pub mod exif;
pub mod file;
pub mod sqlite;
