//! Sequenced route type.

use serde::Serialize;

use super::Stop;
use crate::config::CostModel;
use crate::evaluation::{estimate_cost, CostEstimate};

/// An ordered visiting sequence over a set of stops, with its metrics.
///
/// The route is an open path: there is no return leg to the first stop.
/// `ordered_ids` is a projection of the stop order (order IDs), kept for
/// consumers that only need identifiers.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Coordinate, SequencedRoute, Stop};
///
/// let route = SequencedRoute::empty();
/// assert!(route.is_empty());
/// assert_eq!(route.total_distance_km(), 0.0);
/// assert_eq!(route.estimated_minutes(), 0);
///
/// let stop = Stop::new(1, 77, "Client", Coordinate::new(-42.0, -73.0));
/// let route = SequencedRoute::new(vec![stop], 0.0, 15);
/// assert_eq!(route.ordered_ids(), &[77]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencedRoute {
    ordered_stops: Vec<Stop>,
    total_distance_km: f64,
    estimated_minutes: i64,
    ordered_ids: Vec<u64>,
}

impl SequencedRoute {
    /// Creates a route from stops already in visiting order.
    pub fn new(ordered_stops: Vec<Stop>, total_distance_km: f64, estimated_minutes: i64) -> Self {
        let ordered_ids = ordered_stops.iter().map(|s| s.order_id).collect();
        Self {
            ordered_stops,
            total_distance_km,
            estimated_minutes,
            ordered_ids,
        }
    }

    /// A route with no stops, zero distance, and zero time.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, 0)
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.ordered_stops
    }

    /// Consumes the route, returning the ordered stops.
    pub fn into_stops(self) -> Vec<Stop> {
        self.ordered_stops
    }

    /// Cumulative travel distance in kilometers (2 decimals).
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Estimated travel plus service time, in whole minutes.
    pub fn estimated_minutes(&self) -> i64 {
        self.estimated_minutes
    }

    /// Order IDs in visiting order.
    pub fn ordered_ids(&self) -> &[u64] {
        &self.ordered_ids
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.ordered_stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.ordered_stops.is_empty()
    }

    /// Fuel and money estimate for driving this route.
    pub fn cost_estimate(&self, model: &CostModel) -> CostEstimate {
        estimate_cost(self.total_distance_km, model)
    }
}

impl Default for SequencedRoute {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_ordered_ids_follow_stop_order() {
        let stops = vec![
            Stop::new(1, 30, "c", Coordinate::new(0.0, 0.0)),
            Stop::new(2, 10, "a", Coordinate::new(0.0, 0.1)),
            Stop::new(3, 20, "b", Coordinate::new(0.0, 0.2)),
        ];
        let route = SequencedRoute::new(stops, 22.24, 79);
        assert_eq!(route.ordered_ids(), &[30, 10, 20]);
        assert_eq!(route.len(), 3);
        assert_eq!(route.estimated_minutes(), 79);
    }

    #[test]
    fn test_cost_estimate_uses_distance() {
        let route = SequencedRoute::new(Vec::new(), 10.0, 0);
        let est = route.cost_estimate(&CostModel::default());
        assert!((est.fuel_liters - 1.2).abs() < 1e-10);
        assert_eq!(est.fuel_cost, 1560);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(SequencedRoute::default(), SequencedRoute::empty());
    }
}
