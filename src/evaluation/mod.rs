//! Time, distance, and cost estimates for stop orderings.

mod estimator;

pub use estimator::{estimate_cost, estimate_minutes, path_distance, CostEstimate};

/// Rounds `value` to the given number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
