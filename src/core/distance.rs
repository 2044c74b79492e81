use crate::models::{GeoPoint, Place};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance used for places whose distance is unknown, in metres
pub const UNKNOWN_DISTANCE_M: u32 = 99_999;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Parse a map API distance string. Only plain digit strings are accepted.
pub fn parse_distance(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Resolve a place's distance in metres
///
/// The map API's own distance wins. Without one, the straight-line distance from
/// `origin` is used when the place has coordinates; otherwise the place is treated
/// as [`UNKNOWN_DISTANCE_M`] away.
pub fn resolve_distance_m(place: &Place, origin: Option<&GeoPoint>) -> u32 {
    if let Some(distance) = parse_distance(place.distance.as_deref()) {
        return distance;
    }

    match (origin, place.coordinates()) {
        (Some(origin), Some(point)) => {
            let km = haversine_distance(origin.lat, origin.lng, point.lat, point.lng);
            (km * 1000.0).round().min(UNKNOWN_DISTANCE_M as f64) as u32
        }
        _ => UNKNOWN_DISTANCE_M,
    }
}
