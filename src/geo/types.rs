//! Geographic coordinate type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range (degrees).
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range (degrees).
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// A latitude/longitude pair in degrees (WGS-84).
///
/// Distances, bearings, target zones, and landing ellipses are all derived
/// from values of this type.
///
/// The decision path performs no validation (non-finite coordinates
/// propagate through the math as NaN); layers that construct snapshots from
/// untrusted sources should go through [`LatLng::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in degrees (-180 to 180).
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate without validation.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate, validating that both components are finite and
    /// inside the WGS-84 ranges.
    ///
    /// Intended for the input-construction layer; engine internals build
    /// coordinates directly from already-valid math.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(MIN_LNG..=MAX_LNG).contains(&lng) {
            return Err(CoordError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Errors that can occur when constructing a validated coordinate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is non-finite or outside -90 to 90 degrees.
    #[error("invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),
    /// Longitude is non-finite or outside -180 to 180 degrees.
    #[error("invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
}
