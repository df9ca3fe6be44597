//! Great-circle distance between geographic coordinates

use crate::constants::{DISTANCE_DECIMALS, EARTH_RADIUS_KM};

/// Distance in kilometres between (lat1, lon1) and (lat2, lon2)
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`] and
/// rounds the result to the nearest metre.
///
/// # Examples
/// ```
/// # use bikeshare_stations::app::services::geo::lat_lon_distance;
/// let d = lat_lon_distance(43.659777, -79.397383, 43.657129, -79.399439);
/// assert!((d - 0.338).abs() < 1e-9);
/// ```
pub fn lat_lon_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    round_to_metre(haversine_km(lat1, lon1, lat2, lon2))
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let lat_diff = lat2 - lat1;
    let lon_diff = lon2 - lon1;
    let a = (lat_diff / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (lon_diff / 2.0).sin().powi(2);

    2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
}

fn round_to_metre(km: f64) -> f64 {
    let scale = 10f64.powi(DISTANCE_DECIMALS);
    (km * scale).round() / scale
}
