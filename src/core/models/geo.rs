//! Geographic coordinates and the position a device claims

use serde::Serialize;
use thiserror::Error;

/// Errors raised when a reading violates coordinate or accuracy bounds
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReadingError {
    /// Latitude outside [-90, 90] (or not a number)
    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] (or not a number)
    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),

    /// Accuracy is negative or not finite
    #[error("accuracy must be a non-negative number of meters, got {0}")]
    InvalidAccuracy(f64),
}

/// A point on the earth in decimal degrees (south and west are negative)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates outside their valid ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ReadingError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ReadingError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ReadingError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The GPS reading a device submits with a check-in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimedReading {
    position: GeoPoint,
    accuracy: f64,
    address: String,
}

impl ClaimedReading {
    /// Create a reading; accuracy is in meters and must be non-negative
    pub fn new(
        position: GeoPoint,
        accuracy: f64,
        address: impl Into<String>,
    ) -> Result<Self, ReadingError> {
        if !accuracy.is_finite() || accuracy < 0.0 {
            return Err(ReadingError::InvalidAccuracy(accuracy));
        }
        Ok(Self {
            position,
            accuracy,
            address: address.into(),
        })
    }

    /// Claimed position
    #[must_use]
    pub const fn position(&self) -> &GeoPoint {
        &self.position
    }

    /// Reported accuracy radius in meters
    #[must_use]
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Free-text address label
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
