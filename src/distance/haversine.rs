//! Haversine distance and centroid.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Symmetric, non-negative, and exactly zero for identical inputs.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
/// use route_sequencer::distance::haversine_km;
///
/// let a = Coordinate::new(-42.0, -73.0);
/// let b = Coordinate::new(-42.01, -73.0);
/// assert!((haversine_km(&a, &b) - 1.112).abs() < 1e-3);
/// assert_eq!(haversine_km(&a, &a), 0.0);
/// ```
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of a set of coordinates.
///
/// Returns `None` for an empty slice. Not used to seed sequencing.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
/// use route_sequencer::distance::centroid;
///
/// let points = [Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 4.0)];
/// assert_eq!(centroid(&points), Some(Coordinate::new(1.0, 2.0)));
/// assert_eq!(centroid(&[]), None);
/// ```
pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), p| {
        (lat + p.latitude, lon + p.longitude)
    });
    Some(Coordinate::new(lat_sum / n, lon_sum / n))
}
