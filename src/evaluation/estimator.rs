//! Travel time and cost estimation.
//!
//! Time is driving at a constant average speed plus a fixed dwell per stop:
//!
//! ```text
//! minutes = ceil(distance_km / speed_kmh * 60 + stops * service_minutes)
//! ```

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::config::CostModel;
use crate::distance::haversine_km;
use crate::models::Stop;

/// Fuel and money needed to drive a given distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Fuel in liters (2 decimals).
    pub fuel_liters: f64,
    /// Fuel cost in whole currency units.
    pub fuel_cost: i64,
}

/// Estimated total minutes for a route of `stop_count` stops and the given
/// driving distance, rounded up.
///
/// # Examples
///
/// ```
/// use route_sequencer::config::CostModel;
/// use route_sequencer::evaluation::estimate_minutes;
///
/// let model = CostModel::default();
/// assert_eq!(estimate_minutes(0.0, 1, &model), 15);
/// assert_eq!(estimate_minutes(1.11, 2, &model), 32);
/// ```
pub fn estimate_minutes(distance_km: f64, stop_count: usize, model: &CostModel) -> i64 {
    let total = model.travel_minutes(distance_km) + model.service_minutes(stop_count);
    total.ceil() as i64
}

/// Length of the open path through `stops` in order, in kilometers.
///
/// There is no return leg; fewer than two stops give zero.
pub fn path_distance(stops: &[Stop]) -> f64 {
    stops
        .windows(2)
        .map(|w| haversine_km(&w[0].location, &w[1].location))
        .sum()
}

/// Fuel and fuel cost for driving `distance_km`.
pub fn estimate_cost(distance_km: f64, model: &CostModel) -> CostEstimate {
    let fuel_liters = round_to(model.fuel_liters(distance_km), 2);
    CostEstimate {
        fuel_liters,
        fuel_cost: (fuel_liters * model.fuel_price_per_liter).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn stop(id: u64, lat: f64, lon: f64) -> Stop {
        Stop::new(id, id, format!("stop-{id}"), Coordinate::new(lat, lon))
    }

    #[test]
    fn test_minutes_service_only() {
        let m = CostModel::default();
        assert_eq!(estimate_minutes(0.0, 0, &m), 0);
        assert_eq!(estimate_minutes(0.0, 1, &m), 15);
        assert_eq!(estimate_minutes(0.0, 4, &m), 60);
    }

    #[test]
    fn test_minutes_rounds_up() {
        let m = CostModel::default();
        // 1.11 km at 40 km/h = 1.665 min
        assert_eq!(estimate_minutes(1.11, 2, &m), 32);
        // 40 km = exactly 60 min
        assert_eq!(estimate_minutes(40.0, 0, &m), 60);
        assert_eq!(estimate_minutes(40.01, 0, &m), 61);
    }

    #[test]
    fn test_minutes_custom_model() {
        let m = CostModel::default()
            .with_speed_kmh(60.0)
            .with_service_minutes_per_stop(5.0);
        assert_eq!(estimate_minutes(30.0, 2, &m), 40);
    }

    #[test]
    fn test_path_distance_open() {
        let stops = vec![stop(1, 0.0, 0.0), stop(2, 0.0, 0.01), stop(3, 0.0, 0.02)];
        let expected = haversine_km(&stops[0].location, &stops[1].location)
            + haversine_km(&stops[1].location, &stops[2].location);
        assert!((path_distance(&stops) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_path_distance_degenerate() {
        assert_eq!(path_distance(&[]), 0.0);
        assert_eq!(path_distance(&[stop(1, -42.0, -73.0)]), 0.0);
    }

    #[test]
    fn test_estimate_cost() {
        let est = estimate_cost(25.0, &CostModel::default());
        assert!((est.fuel_liters - 3.0).abs() < 1e-10);
        assert_eq!(est.fuel_cost, 3900);
        assert_eq!(estimate_cost(0.0, &CostModel::default()), CostEstimate::default());
    }
}
