//! Nearest-neighbor stop sequencing.
//!
//! Starting from a reference coordinate, repeatedly travels to the closest
//! stop not yet visited. The reference is the caller's start point if one is
//! given, otherwise the first stop in the input. The start point itself is
//! never part of the returned order.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Determinism
//!
//! Candidates are scanned in input order and only a strictly shorter
//! distance replaces the current best, so ties always go to the earliest
//! remaining stop.

use log::{debug, trace};

use crate::config::CostModel;
use crate::distance::haversine_km;
use crate::evaluation::{estimate_minutes, round_to};
use crate::models::{Coordinate, SequencedRoute, Stop};

/// Orders stops with the nearest-neighbor heuristic using the default
/// [`CostModel`].
///
/// # Arguments
///
/// * `stops` — Stops to visit; every stop must carry real coordinates
/// * `start` — Optional reference point used to pick the first stop
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Coordinate, Stop};
/// use route_sequencer::constructive::sequence;
///
/// let stops = vec![
///     Stop::new(1, 1, "A", Coordinate::new(-42.0, -73.0)),
///     Stop::new(2, 2, "B", Coordinate::new(-42.01, -73.0)),
/// ];
/// let route = sequence(&stops, None);
/// assert_eq!(route.ordered_ids(), &[1, 2]);
/// assert_eq!(route.total_distance_km(), 1.11);
/// assert_eq!(route.estimated_minutes(), 32);
/// ```
pub fn sequence(stops: &[Stop], start: Option<Coordinate>) -> SequencedRoute {
    sequence_with(stops, start, &CostModel::default())
}

/// Orders stops with the nearest-neighbor heuristic under an explicit
/// [`CostModel`].
///
/// - No stops: empty route, zero distance, zero minutes.
/// - One stop: that stop, zero distance, one service period. Any `start`
///   is ignored.
/// - Otherwise: greedy tour from `start` (or the first stop), distance
///   rounded to 2 decimals, minutes rounded up.
pub fn sequence_with(stops: &[Stop], start: Option<Coordinate>, model: &CostModel) -> SequencedRoute {
    match stops {
        [] => SequencedRoute::empty(),
        [only] => SequencedRoute::new(vec![only.clone()], 0.0, estimate_minutes(0.0, 1, model)),
        [first, ..] => {
            let reference = start.unwrap_or(first.location);
            let (order, distance) = greedy_order(stops, reference);
            debug!(
                "sequenced {} stops: {:.3} km (explicit start: {})",
                stops.len(),
                distance,
                start.is_some()
            );
            build_route(stops, &order, distance, model)
        }
    }
}

/// Greedy nearest-neighbor order of `stops` from `reference`.
///
/// Returns stop indices in visiting order and the unrounded cumulative
/// distance, including the leg from `reference` to the first stop.
pub(crate) fn greedy_order(stops: &[Stop], reference: Coordinate) -> (Vec<usize>, f64) {
    let mut remaining: Vec<usize> = (0..stops.len()).collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = reference;
    let mut total = 0.0;

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_dist = haversine_km(&current, &stops[remaining[0]].location);
        for (pos, &idx) in remaining.iter().enumerate().skip(1) {
            let d = haversine_km(&current, &stops[idx].location);
            if d < best_dist {
                best_pos = pos;
                best_dist = d;
            }
        }

        let next = remaining.remove(best_pos);
        trace!("hop to stop {} (+{:.3} km)", stops[next].id, best_dist);
        total += best_dist;
        current = stops[next].location;
        order.push(next);
    }

    (order, total)
}

/// Materializes a [`SequencedRoute`] from an index order and raw distance.
pub(crate) fn build_route(
    stops: &[Stop],
    order: &[usize],
    distance_km: f64,
    model: &CostModel,
) -> SequencedRoute {
    let total_distance_km = round_to(distance_km, 2);
    let minutes = estimate_minutes(total_distance_km, order.len(), model);
    let ordered = order.iter().map(|&i| stops[i].clone()).collect();
    SequencedRoute::new(ordered, total_distance_km, minutes)
}
