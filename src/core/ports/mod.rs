//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the integrity pipeline
//! and external systems (filesystem, image decoding, relational storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. Every collaborator is passed in at construction time:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic

mod attendance_repo;
mod metadata;
mod photo_store;

pub use attendance_repo::AttendanceRepository;
pub use metadata::MetadataExtractor;
pub use photo_store::PhotoStore;
