//! Adapter tests
//!
//! Tests for I/O adapter implementations:
//! - EXIF metadata extraction from generated JPEGs
//! - Filesystem photo store
//! - SQLite repository behind the record lifecycle

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod exif_test;
mod sqlite_test;
