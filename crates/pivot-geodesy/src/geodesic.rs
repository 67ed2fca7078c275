//! Direct and inverse geodesic problems on a sphere.
//!
//! Accurate to well under a centimeter for arm-scale distances; error versus
//! WGS-84 is up to ~0.5% of distance, which is fine for display.

use pivot_core::constants::EARTH_RADIUS_M;
use pivot_core::types::{normalize_deg, GeoPoint};

/// Destination reached from `origin` after `distance_m` along `bearing_deg`
/// (0 = North, clockwise). Zero distance returns `origin` unchanged.
pub fn forward(origin: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    if distance_m == 0.0 {
        return origin;
    }

    let theta = normalize_deg(bearing_deg).to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_d, cos_d) = delta.sin_cos();

    let sin_lat2 = (sin_lat1 * cos_d + cos_lat1 * sin_d * theta.cos()).clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lon2 = lon1 + (theta.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * sin_lat2);

    GeoPoint::from_degrees(lat2.to_degrees(), lon2.to_degrees())
}

/// Initial bearing from `from` to `to`, in `[0, 360)`.
///
/// Coincident points have no defined bearing; 0 is returned.
pub fn inverse(from: GeoPoint, to: GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    normalize_deg(y.atan2(x).to_degrees() + 360.0)
}

/// Great-circle distance between two points (meters, haversine).
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
