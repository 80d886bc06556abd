//! Multi-seed nearest-neighbor.
//!
//! Runs the nearest-neighbor construction once from every stop and keeps
//! the shortest tour, removing the dependence on which stop happens to be
//! listed first.

use log::debug;

use super::nearest_neighbor::{build_route, greedy_order, sequence_with};
use crate::config::CostModel;
use crate::models::{SequencedRoute, Stop};

/// Orders stops by trying every stop as the starting point.
///
/// Each stop in turn seeds a nearest-neighbor tour; the tour with the
/// smallest unrounded distance wins, ties going to the earliest seed.
/// Inputs with fewer than two stops behave exactly like [`sequence_with`].
///
/// # Examples
///
/// ```
/// use route_sequencer::config::CostModel;
/// use route_sequencer::models::{Coordinate, Stop};
/// use route_sequencer::constructive::{sequence, sequence_best_seed};
///
/// // The first stop sits in the middle of the line, forcing a backtrack.
/// let stops = vec![
///     Stop::new(1, 1, "mid", Coordinate::new(0.0, 0.02)),
///     Stop::new(2, 2, "west", Coordinate::new(0.0, 0.0)),
///     Stop::new(3, 3, "east", Coordinate::new(0.0, 0.05)),
/// ];
/// let first = sequence(&stops, None);
/// let best = sequence_best_seed(&stops, &CostModel::default());
/// assert!(best.total_distance_km() < first.total_distance_km());
/// ```
pub fn sequence_best_seed(stops: &[Stop], model: &CostModel) -> SequencedRoute {
    if stops.len() < 2 {
        return sequence_with(stops, None, model);
    }

    let mut best: Option<(usize, Vec<usize>, f64)> = None;
    for (seed, stop) in stops.iter().enumerate() {
        let (order, distance) = greedy_order(stops, stop.location);
        let shorter = best.as_ref().map_or(true, |(_, _, d)| distance < *d);
        if shorter {
            best = Some((seed, order, distance));
        }
    }

    match best {
        Some((seed, order, distance)) => {
            debug!(
                "best seed for {} stops is stop {}: {:.3} km",
                stops.len(),
                stops[seed].id,
                distance
            );
            build_route(stops, &order, distance, model)
        }
        None => SequencedRoute::empty(),
    }
}
