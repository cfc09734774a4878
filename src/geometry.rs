use std::f64::consts::PI;

use crate::region::GlobeRect;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const KM_PER_DEGREE: f64 = 111.0;

/// Approximate area of `rect` in square kilometers.
///
/// This is a coarse approximation, not a geodesic area: the latitude term is
/// `sqrt(hi_lat² - lo_lat²)` and the longitude span is taken from the
/// magnitude of the raw longitudes rather than their difference. Boxes with
/// `|lo_lat| > |hi_lat|` yield `NaN`.
pub fn area(rect: &GlobeRect) -> f64 {
    let dist = (rect.west_long.powi(2) + rect.east_long.powi(2)).sqrt() * KM_PER_DEGREE;
    let lat_span = (rect.hi_lat.powi(2) - rect.lo_lat.powi(2)).sqrt();
    2.0 * PI * EARTH_RADIUS_KM * lat_span * (dist / 360.0) * (1.0 / 1.6)
}
