//! Great-circle distance on a spherical earth

use crate::core::models::GeoPoint;

/// Earth mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters
#[must_use]
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let d_phi = (b.latitude() - a.latitude()).to_radians();
    let d_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push h past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
