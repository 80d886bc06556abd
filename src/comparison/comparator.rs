//! Distance, time, fuel, and money saved by one stop ordering over another.
//!
//! Both orderings are measured as open paths (no return leg). The
//! comparator is plain arithmetic: a worse "optimized" order yields negative
//! savings rather than an error.

use log::{debug, warn};

use crate::config::CostModel;
use crate::evaluation::{path_distance, round_to};
use crate::models::{Comparison, Stop};

/// Compares a manual ordering against an optimized one using the default
/// [`CostModel`].
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Coordinate, Stop};
/// use route_sequencer::comparison::compare;
///
/// let stops = vec![
///     Stop::new(1, 1, "A", Coordinate::new(-42.0, -73.0)),
///     Stop::new(2, 2, "B", Coordinate::new(-42.01, -73.0)),
/// ];
/// let same = compare(&stops, &stops);
/// assert_eq!(same.distance_saved_km, 0.0);
/// assert_eq!(same.money_saved, 0);
/// ```
pub fn compare(manual: &[Stop], optimized: &[Stop]) -> Comparison {
    compare_with(manual, optimized, &CostModel::default())
}

/// Compares two orderings under an explicit [`CostModel`].
pub fn compare_with(manual: &[Stop], optimized: &[Stop], model: &CostModel) -> Comparison {
    compare_distances(path_distance(manual), path_distance(optimized), model)
}

/// Derives savings from two path lengths in kilometers.
///
/// - distance saved: `manual - optimized`, reported to 2 decimals
/// - time saved: driving minutes for the saved distance, rounded
/// - fuel saved: liters for the saved distance, 2 decimals
/// - money saved: fuel saved times price, rounded
/// - percent: saved distance over manual distance, 1 decimal; `0.0` when
///   the manual distance is zero
///
/// # Examples
///
/// ```
/// use route_sequencer::config::CostModel;
/// use route_sequencer::comparison::compare_distances;
///
/// let c = compare_distances(10.0, 7.0, &CostModel::default());
/// assert_eq!(c.distance_saved_km, 3.0);
/// assert_eq!(c.time_saved_minutes, 5);
/// assert_eq!(c.fuel_saved_liters, 0.36);
/// assert_eq!(c.money_saved, 468);
/// assert_eq!(c.percent_improvement, 30.0);
/// ```
pub fn compare_distances(manual_km: f64, optimized_km: f64, model: &CostModel) -> Comparison {
    let saved = manual_km - optimized_km;
    let fuel_saved_liters = round_to(model.fuel_liters(saved), 2);

    let percent_improvement = if manual_km > 0.0 {
        round_to(saved / manual_km * 100.0, 1)
    } else {
        warn!(
            "manual distance is {manual_km} km; reporting 0% improvement over {optimized_km} km"
        );
        0.0
    };

    let comparison = Comparison {
        distance_saved_km: round_to(saved, 2),
        time_saved_minutes: model.travel_minutes(saved).round() as i64,
        fuel_saved_liters,
        money_saved: (fuel_saved_liters * model.fuel_price_per_liter).round() as i64,
        percent_improvement,
    };
    debug!(
        "manual {:.3} km vs optimized {:.3} km: {:?}",
        manual_km, optimized_km, comparison
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::sequence;
    use crate::models::Coordinate;

    fn stop(id: u64, lat: f64, lon: f64) -> Stop {
        Stop::new(id, id, format!("client-{id}"), Coordinate::new(lat, lon))
    }

    #[test]
    fn test_reference_savings() {
        let c = compare_distances(10.0, 7.0, &CostModel::default());
        assert_eq!(c.distance_saved_km, 3.0);
        assert_eq!(c.time_saved_minutes, 5);
        assert_eq!(c.fuel_saved_liters, 0.36);
        assert_eq!(c.money_saved, 468);
        assert_eq!(c.percent_improvement, 30.0);
        assert!(c.is_improvement());
    }

    #[test]
    fn test_identical_orders_zero() {
        let stops = vec![stop(1, 0.0, 0.0), stop(2, 0.0, 0.03), stop(3, 0.0, 0.01)];
        let c = compare(&stops, &stops);
        assert_eq!(c.distance_saved_km, 0.0);
        assert_eq!(c.time_saved_minutes, 0);
        assert_eq!(c.fuel_saved_liters, 0.0);
        assert_eq!(c.money_saved, 0);
        assert_eq!(c.percent_improvement, 0.0);
    }

    #[test]
    fn test_worse_order_gives_negative_savings() {
        let c = compare_distances(7.0, 10.0, &CostModel::default());
        assert_eq!(c.distance_saved_km, -3.0);
        assert_eq!(c.time_saved_minutes, -5);
        assert_eq!(c.fuel_saved_liters, -0.36);
        assert_eq!(c.money_saved, -468);
        assert!((c.percent_improvement - -42.9).abs() < 1e-9);
        assert!(!c.is_improvement());
    }

    #[test]
    fn test_zero_manual_distance() {
        let c = compare_distances(0.0, 0.0, &CostModel::default());
        assert_eq!(c.percent_improvement, 0.0);
        assert!(c.percent_improvement.is_finite());

        let c = compare_distances(0.0, 2.0, &CostModel::default());
        assert_eq!(c.percent_improvement, 0.0);
        assert_eq!(c.distance_saved_km, -2.0);
    }

    #[test]
    fn test_single_stop_comparison() {
        let one = vec![stop(1, -42.0, -73.0)];
        let c = compare(&one, &one);
        assert_eq!(c, Comparison::default());
    }

    #[test]
    fn test_sequenced_order_beats_manual_zigzag() {
        let manual = vec![
            stop(1, 0.0, 0.0),
            stop(2, 0.0, 0.03),
            stop(3, 0.0, 0.01),
            stop(4, 0.0, 0.02),
        ];
        let optimized = sequence(&manual, None).into_stops();
        let c = compare(&manual, &optimized);
        assert!(c.is_improvement());
        // manual walks 3 + 2 + 1 = 6 units, optimized 3 units
        assert!((c.percent_improvement - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_model() {
        let model = CostModel::default()
            .with_speed_kmh(60.0)
            .with_fuel_liters_per_km(0.1)
            .with_fuel_price_per_liter(1000.0);
        let c = compare_distances(20.0, 10.0, &model);
        assert_eq!(c.time_saved_minutes, 10);
        assert_eq!(c.fuel_saved_liters, 1.0);
        assert_eq!(c.money_saved, 1000);
    }
}
