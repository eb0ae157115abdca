//! Suspicion assessment
//!
//! Pure logic: compares the claimed position with the photo's embedded
//! position. Exactly one check fires per submission: the mismatch check when
//! the photo carries a position, the missing-GPS check when it does not.

use crate::core::models::{GeoPoint, PhotoMetadata, SuspicionVerdict};

use super::distance::haversine_distance;

/// Reason recorded when the photo carries no position
pub const NO_GPS_REASON: &str = "Photo has no GPS data";

/// Derive the verdict for a claimed position and extracted photo metadata
///
/// `max_distance_m` is the largest accepted gap, in meters, between the two
/// positions; a gap exactly at the threshold is accepted.
#[must_use]
pub fn assess(claimed: &GeoPoint, photo: &PhotoMetadata, max_distance_m: f64) -> SuspicionVerdict {
    let mut verdict = SuspicionVerdict::trusted();

    match &photo.position {
        Some(position) => {
            let distance = haversine_distance(claimed, position);
            if distance > max_distance_m {
                verdict.flag(format!("Location mismatch: {distance:.2}m difference"));
            }
        },
        None => verdict.flag(NO_GPS_REASON),
    }

    verdict
}
