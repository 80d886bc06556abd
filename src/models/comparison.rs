//! Comparison result type.

use serde::{Deserialize, Serialize};

/// Savings of one stop ordering over another.
///
/// Positive values mean the optimized order is shorter; negative values are
/// reported as-is when it is longer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Distance saved in kilometers (2 decimals).
    pub distance_saved_km: f64,
    /// Driving time saved, in whole minutes.
    pub time_saved_minutes: i64,
    /// Fuel saved in liters (2 decimals).
    pub fuel_saved_liters: f64,
    /// Money saved, in whole currency units.
    pub money_saved: i64,
    /// Improvement relative to the manual distance, in percent (1 decimal).
    pub percent_improvement: f64,
}

impl Comparison {
    /// Returns `true` if the optimized order is strictly shorter.
    pub fn is_improvement(&self) -> bool {
        self.distance_saved_km > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let c = Comparison::default();
        assert_eq!(c.distance_saved_km, 0.0);
        assert_eq!(c.time_saved_minutes, 0);
        assert_eq!(c.money_saved, 0);
        assert!(!c.is_improvement());
    }

    #[test]
    fn test_negative_savings_not_improvement() {
        let c = Comparison {
            distance_saved_km: -1.5,
            ..Comparison::default()
        };
        assert!(!c.is_improvement());
    }
}
