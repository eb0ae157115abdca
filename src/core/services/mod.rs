//! Business logic services
//!
//! - [`distance`] - Great-circle distance between two points
//! - [`suspicion`] - Derive a verdict from the claimed and embedded positions
//! - [`pipeline`] - Drive a submission from photo upload to stored record
//! - [`lifecycle`] - Create and read records, resolving photo URLs

pub mod distance;
pub mod lifecycle;
pub mod pipeline;
pub mod suspicion;

pub use distance::{EARTH_RADIUS_M, haversine_distance};
pub use lifecycle::RecordLifecycle;
pub use pipeline::{VerificationPipeline, VerificationPolicy};
pub use suspicion::{NO_GPS_REASON, assess};
