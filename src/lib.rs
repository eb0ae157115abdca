//! attendance - Employee check-in service with an attendance integrity pipeline
//!
//! A worker submits a GPS reading and a photo. The pipeline stores the photo,
//! reads the location and capture time embedded in it, cross-checks that
//! position against the claimed one and records a suspicion verdict.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
