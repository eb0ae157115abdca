//! Core domain logic for attendance
//!
//! This module contains the integrity pipeline with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`GeoPoint`, `ClaimedReading`, `PhotoMetadata`, records)
//! - `services/` - Distance, suspicion assessment, pipeline and record lifecycle
//! - `ports/` - Trait definitions for photo storage, metadata and persistence
//! - `error` - The error taxonomy surfaced to callers

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::AttendanceError;
