//! JSON request/response adapter for the sequencing and comparison
//! operations.
//!
//! Field names are camelCase. A `costModel` object is optional and any
//! field it omits keeps its default.

use serde::{Deserialize, Serialize};

use crate::comparison::compare_with;
use crate::config::CostModel;
use crate::constructive::sequence_with;
use crate::error::Result;
use crate::evaluation::CostEstimate;
use crate::models::{Comparison, Coordinate, SequencedRoute, Stop};

/// Input for [`sequence_json`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRequest {
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub start: Option<Coordinate>,
    #[serde(default)]
    pub cost_model: Option<CostModel>,
}

/// Output of [`sequence_json`]: the route plus its fuel estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResponse {
    #[serde(flatten)]
    pub route: SequencedRoute,
    pub cost: CostEstimate,
}

/// Input for [`compare_json`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub manual_order: Vec<Stop>,
    pub optimized_order: Vec<Stop>,
    #[serde(default)]
    pub cost_model: Option<CostModel>,
}

/// Decodes a [`SequenceRequest`], sequences it, and encodes the response.
///
/// # Examples
///
/// ```
/// use route_sequencer::json::sequence_json;
///
/// let out = sequence_json(r#"{
///     "stops": [
///         {"id": 1, "orderId": 11, "displayName": "A", "latitude": -42.0, "longitude": -73.0},
///         {"id": 2, "orderId": 12, "displayName": "B", "latitude": -42.01, "longitude": -73.0}
///     ]
/// }"#).unwrap();
/// assert!(out.contains(r#""orderedIds":[11,12]"#));
/// assert!(out.contains(r#""estimatedMinutes":32"#));
/// ```
pub fn sequence_json(input: &str) -> Result<String> {
    let request: SequenceRequest = serde_json::from_str(input)?;
    let model = resolve_model(request.cost_model)?;
    let route = sequence_with(&request.stops, request.start, &model);
    let cost = route.cost_estimate(&model);
    Ok(serde_json::to_string(&SequenceResponse { route, cost })?)
}

/// Decodes a [`CompareRequest`], compares the orders, and encodes the
/// [`Comparison`].
pub fn compare_json(input: &str) -> Result<String> {
    let request: CompareRequest = serde_json::from_str(input)?;
    let model = resolve_model(request.cost_model)?;
    let comparison: Comparison =
        compare_with(&request.manual_order, &request.optimized_order, &model);
    Ok(serde_json::to_string(&comparison)?)
}

fn resolve_model(model: Option<CostModel>) -> Result<CostModel> {
    model.unwrap_or_default().validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::Value;

    const TWO_STOPS: &str = r#"[
        {"id": 1, "orderId": 11, "displayName": "A", "address": "Calle 1", "latitude": -42.0, "longitude": -73.0},
        {"id": 2, "orderId": 12, "displayName": "B", "area": "Centro", "latitude": -42.01, "longitude": -73.0}
    ]"#;

    #[test]
    fn test_sequence_json_shape() {
        let input = format!(r#"{{"stops": {TWO_STOPS}}}"#);
        let out: Value = serde_json::from_str(&sequence_json(&input).expect("ok")).expect("json");
        assert_eq!(out["totalDistanceKm"], 1.11);
        assert_eq!(out["estimatedMinutes"], 32);
        assert_eq!(out["orderedIds"], serde_json::json!([11, 12]));
        assert_eq!(out["orderedStops"][0]["address"], "Calle 1");
        assert_eq!(out["orderedStops"][1]["area"], "Centro");
        assert_eq!(out["cost"]["fuelLiters"], 0.13);
        assert_eq!(out["cost"]["fuelCost"], 169);
    }

    #[test]
    fn test_sequence_json_with_start_and_model() {
        let input = format!(
            r#"{{"stops": {TWO_STOPS}, "start": {{"latitude": -42.02, "longitude": -73.0}}, "costModel": {{"serviceMinutesPerStop": 0}}}}"#
        );
        let out: Value = serde_json::from_str(&sequence_json(&input).expect("ok")).expect("json");
        assert_eq!(out["orderedIds"], serde_json::json!([12, 11]));
        assert_eq!(out["totalDistanceKm"], 2.22);
        // 2.22 km at 40 km/h, no service time
        assert_eq!(out["estimatedMinutes"], 4);
    }

    #[test]
    fn test_sequence_json_empty() {
        let out: Value =
            serde_json::from_str(&sequence_json(r#"{"stops": []}"#).expect("ok")).expect("json");
        assert_eq!(out["orderedStops"], serde_json::json!([]));
        assert_eq!(out["estimatedMinutes"], 0);
    }

    #[test]
    fn test_invalid_cost_model_rejected() {
        let input = format!(r#"{{"stops": {TWO_STOPS}, "costModel": {{"speedKmh": 0}}}}"#);
        assert!(matches!(
            sequence_json(&input),
            Err(Error::InvalidCostModel { field: "speed_kmh", .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(sequence_json("{"), Err(Error::Json(_))));
        assert!(matches!(
            sequence_json(r#"{"stops": [{"id": 1}]}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_compare_json() {
        let input = format!(r#"{{"manualOrder": {TWO_STOPS}, "optimizedOrder": {TWO_STOPS}}}"#);
        let out: Value = serde_json::from_str(&compare_json(&input).expect("ok")).expect("json");
        assert_eq!(out["distanceSavedKm"], 0.0);
        assert_eq!(out["timeSavedMinutes"], 0);
        assert_eq!(out["moneySaved"], 0);
        assert_eq!(out["percentImprovement"], 0.0);
    }
}
