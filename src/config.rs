//! Fixed business assumptions used for time, fuel, and money estimates.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Assumed average driving speed, km/h.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Dwell time spent at each stop, minutes.
pub const DEFAULT_SERVICE_MINUTES_PER_STOP: f64 = 15.0;

/// Fuel consumption, liters per kilometer.
pub const DEFAULT_FUEL_LITERS_PER_KM: f64 = 0.12;

/// Fuel price, currency units per liter.
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 1300.0;

/// Policy constants for converting distance into time and money.
///
/// Every field defaults to the constants above, so a partially specified
/// model (e.g. from JSON) only overrides what it names.
///
/// # Examples
///
/// ```
/// use route_sequencer::config::CostModel;
///
/// let model = CostModel::default();
/// assert_eq!(model.speed_kmh, 40.0);
/// assert_eq!(model.service_minutes_per_stop, 15.0);
///
/// let slow = CostModel::default().with_speed_kmh(25.0).validate().unwrap();
/// assert_eq!(slow.speed_kmh, 25.0);
/// assert!(CostModel::default().with_speed_kmh(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostModel {
    /// Average driving speed in km/h. Must be positive.
    pub speed_kmh: f64,
    /// Service minutes per stop.
    pub service_minutes_per_stop: f64,
    /// Fuel consumption in liters per kilometer.
    pub fuel_liters_per_km: f64,
    /// Fuel price per liter.
    pub fuel_price_per_liter: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            service_minutes_per_stop: DEFAULT_SERVICE_MINUTES_PER_STOP,
            fuel_liters_per_km: DEFAULT_FUEL_LITERS_PER_KM,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
        }
    }
}

impl CostModel {
    /// Sets the average driving speed.
    pub fn with_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Sets the per-stop service time.
    pub fn with_service_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Sets the fuel consumption rate.
    pub fn with_fuel_liters_per_km(mut self, rate: f64) -> Self {
        self.fuel_liters_per_km = rate;
        self
    }

    /// Sets the fuel price.
    pub fn with_fuel_price_per_liter(mut self, price: f64) -> Self {
        self.fuel_price_per_liter = price;
        self
    }

    /// Checks that every field is finite, the speed is positive, and the
    /// remaining fields are non-negative.
    pub fn validate(self) -> Result<Self> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(invalid("speed_kmh", self.speed_kmh));
        }
        let non_negative = [
            ("service_minutes_per_stop", self.service_minutes_per_stop),
            ("fuel_liters_per_km", self.fuel_liters_per_km),
            ("fuel_price_per_liter", self.fuel_price_per_liter),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, value));
            }
        }
        Ok(self)
    }

    /// Driving minutes for the given distance.
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh * 60.0
    }

    /// Service minutes for the given number of stops.
    pub fn service_minutes(&self, stop_count: usize) -> f64 {
        stop_count as f64 * self.service_minutes_per_stop
    }

    /// Fuel burned over the given distance, in liters.
    pub fn fuel_liters(&self, distance_km: f64) -> f64 {
        distance_km * self.fuel_liters_per_km
    }
}

fn invalid(field: &'static str, value: f64) -> Error {
    Error::InvalidCostModel { field, value }
}
