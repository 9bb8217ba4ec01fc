//! Haversine great-circle distance.

/// Mean Earth radius in kilometers (haversine formula input).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two coordinates in kilometers
///
/// Uses the Haversine formula for accuracy on Earth's surface. Inputs are
/// treated as plain numbers; range validation happens where coordinates
/// enter the system (`Coordinates::ensure_valid`).
///
/// # Arguments
/// * `lat1`, `lng1` - First coordinate (decimal degrees)
/// * `lat2`, `lng2` - Second coordinate (decimal degrees)
///
/// # Returns
/// Distance in kilometers
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
