//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// No range validation is applied by [`Coordinate::new`]; use
/// [`Coordinate::checked`] when the input comes from an untrusted source.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
///
/// let c = Coordinate::new(-41.4693, -72.9424);
/// assert_eq!(c.latitude, -41.4693);
/// assert!(Coordinate::checked(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without validation.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, returning `None` if either component is
    /// non-finite or outside `[-90, 90]` / `[-180, 180]`.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self::new(latitude, longitude))
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::haversine_km(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_valid() {
        let c = Coordinate::checked(-42.0, -73.0).expect("valid");
        assert_eq!(c, Coordinate::new(-42.0, -73.0));
        assert!(Coordinate::checked(90.0, 180.0).is_some());
        assert!(Coordinate::checked(-90.0, -180.0).is_some());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(Coordinate::checked(90.1, 0.0).is_none());
        assert!(Coordinate::checked(0.0, -180.5).is_none());
        assert!(Coordinate::checked(f64::NAN, 0.0).is_none());
        assert!(Coordinate::checked(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (10.0, 20.0).into();
        assert_eq!(c.latitude, 10.0);
        assert_eq!(c.longitude, 20.0);
    }

    #[test]
    fn test_distance_to_self() {
        let c = Coordinate::new(-33.45, -70.66);
        assert_eq!(c.distance_to(&c), 0.0);
    }
}
