//! Geodesic primitives for golf-scale spatial math.
//!
//! This module provides the great-circle distance, bearing, and
//! destination-point calculations that every spatial computation in the
//! decision path depends on. All functions use a spherical Earth model,
//! which is accurate to well under a yard over the 0-400 yard range a golf
//! shot covers.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Bearing: degrees true (0-360, 0=north, 90=east)
//! - Distance: yards

mod types;

pub use types::{CoordError, LatLng, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

use std::f64::consts::PI;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters to yards conversion factor.
const METERS_TO_YARDS: f64 = 1.0936133;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Calculate the great-circle distance between two coordinates, in yards.
///
/// Uses the haversine formula for accuracy over short distances. The result
/// is symmetric in its arguments and zero when both points coincide.
///
/// # Arguments
///
/// * `a` - First coordinate
/// * `b` - Second coordinate
///
/// # Returns
///
/// Distance in yards.
///
/// # Example
///
/// ```
/// use shotcaller::geo::{distance_yds, LatLng};
///
/// // One thousandth of a degree of latitude is ~121.6 yards
/// let tee = LatLng::new(35.0, -78.0);
/// let green = LatLng::new(35.001, -78.0);
/// let dist = distance_yds(tee, green);
/// assert!((dist - 121.6).abs() < 0.5);
/// ```
pub fn distance_yds(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat * DEG_TO_RAD;
    let phi2 = b.lat * DEG_TO_RAD;
    let delta_phi = (b.lat - a.lat) * DEG_TO_RAD;
    let delta_lambda = (b.lng - a.lng) * DEG_TO_RAD;

    // Haversine formula
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c * METERS_TO_YARDS
}

/// Calculate the initial bearing from one coordinate toward another.
///
/// Returns the forward azimuth along the great circle from `a` to `b`.
/// Undefined when both points coincide; callers must avoid that case.
///
/// # Arguments
///
/// * `a` - Starting coordinate
/// * `b` - Destination coordinate
///
/// # Returns
///
/// Bearing in degrees, normalized to [0, 360).
///
/// # Example
///
/// ```
/// use shotcaller::geo::{bearing_deg, LatLng};
///
/// // Bearing from the origin to a point due east
/// let bearing = bearing_deg(LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0));
/// assert!((bearing - 90.0).abs() < 0.1);
/// ```
pub fn bearing_deg(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat * DEG_TO_RAD;
    let phi2 = b.lat * DEG_TO_RAD;
    let delta_lambda = (b.lng - a.lng) * DEG_TO_RAD;

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_bearing(y.atan2(x) * RAD_TO_DEG)
}

/// Project a coordinate along a bearing for a given distance.
///
/// Uses the standard spherical direct-geodesic solution. A negative
/// distance moves along the reciprocal bearing, which the engine relies on
/// for long/short aim compensation.
///
/// # Arguments
///
/// * `origin` - Starting coordinate
/// * `bearing_deg` - Direction of travel in degrees (0=north, 90=east)
/// * `distance_yds` - Distance to travel in yards (may be negative)
///
/// # Returns
///
/// The destination coordinate, longitude normalized to (-180, 180].
///
/// # Example
///
/// ```
/// use shotcaller::geo::{project_position, LatLng};
///
/// // Project ~121.6 yards north from the tee
/// let dest = project_position(LatLng::new(35.0, -78.0), 0.0, 121.6);
/// assert!((dest.lat - 35.001).abs() < 1e-4);
/// assert!((dest.lng - (-78.0)).abs() < 1e-9);
/// ```
pub fn project_position(origin: LatLng, bearing_deg: f64, distance_yds: f64) -> LatLng {
    let angular_distance = (distance_yds / METERS_TO_YARDS) / EARTH_RADIUS_M;
    let bearing_rad = bearing_deg * DEG_TO_RAD;
    let phi1 = origin.lat * DEG_TO_RAD;
    let lambda1 = origin.lng * DEG_TO_RAD;

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let phi2 = (sin_phi1 * cos_d + cos_phi1 * sin_d * bearing_rad.cos()).asin();
    let lambda2 =
        lambda1 + (bearing_rad.sin() * sin_d * cos_phi1).atan2(cos_d - sin_phi1 * phi2.sin());

    LatLng {
        lat: phi2 * RAD_TO_DEG,
        lng: ((lambda2 * RAD_TO_DEG + 540.0) % 360.0) - 180.0,
    }
}

/// Normalize a bearing to the range [0, 360) degrees.
///
/// Handles negative bearings and values >= 360 by wrapping appropriately.
///
/// # Example
///
/// ```
/// use shotcaller::geo::normalize_bearing;
///
/// assert_eq!(normalize_bearing(0.0), 0.0);
/// assert_eq!(normalize_bearing(360.0), 0.0);
/// assert_eq!(normalize_bearing(-90.0), 270.0);
/// assert_eq!(normalize_bearing(450.0), 90.0);
/// ```
pub fn normalize_bearing(bearing: f64) -> f64 {
    let mut b = bearing % 360.0;
    if b < 0.0 {
        b += 360.0;
    }
    if b >= 360.0 {
        b -= 360.0;
    }
    b
}
