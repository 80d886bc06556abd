//! Delivery stop type.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A single delivery location tied to one originating order.
///
/// Coordinates are mandatory: callers drop orders without a geocoded
/// client address before building stops.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Coordinate, Stop};
///
/// let stop = Stop::new(1, 501, "Ferretería Sur", Coordinate::new(-41.47, -72.94))
///     .with_address("Av. Angelmó 1950")
///     .with_area("Puerto Montt");
/// assert_eq!(stop.order_id, 501);
/// assert_eq!(stop.area.as_deref(), Some("Puerto Montt"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Stop identifier.
    pub id: u64,
    /// Identifier of the order this stop delivers.
    pub order_id: u64,
    /// Display name (usually the client name).
    #[serde(rename = "displayName")]
    pub name: String,
    /// Free-text street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Area or commune label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Location of the stop.
    #[serde(flatten)]
    pub location: Coordinate,
}

impl Stop {
    /// Creates a stop with no address or area.
    pub fn new(id: u64, order_id: u64, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id,
            order_id,
            name: name.into(),
            address: None,
            area: None,
            location,
        }
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the area label.
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Great-circle distance to another stop, in kilometers.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        self.location.distance_to(&other.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new(3, 42, "Client", Coordinate::new(-42.0, -73.0));
        assert_eq!(s.id, 3);
        assert_eq!(s.order_id, 42);
        assert_eq!(s.name, "Client");
        assert!(s.address.is_none());
        assert!(s.area.is_none());
    }

    #[test]
    fn test_stop_distance_symmetric() {
        let a = Stop::new(1, 1, "a", Coordinate::new(-42.0, -73.0));
        let b = Stop::new(2, 2, "b", Coordinate::new(-42.01, -73.02));
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
    }
}
