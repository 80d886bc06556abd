//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions i < j, compute the change in length from
//! reversing the segment `path[i..=j]`. Only the edge entering position i and
//! the edge leaving position j change; at the ends of an open path one or
//! both edges are absent.
//!
//! ```text
//! delta = d(prev, p[j]) + d(p[i], next) - d(prev, p[i]) - d(p[j], next)
//! ```
//!
//! If delta < 0, reverse the segment and keep scanning (first-improvement).
//! Repeat until a full pass finds nothing.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::debug;

use crate::config::CostModel;
use crate::constructive::build_route;
use crate::distance::DistanceMatrix;
use crate::models::{Coordinate, SequencedRoute};

const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt to an open path of matrix indices.
///
/// `anchor`, if given, is a fixed location visited before `path[0]`; it is
/// never moved and not included in the returned sequence. Returns the
/// improved sequence and its length including the anchor leg.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
/// use route_sequencer::distance::DistanceMatrix;
/// use route_sequencer::local_search::two_opt_open;
///
/// let points = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 0.01),
///     Coordinate::new(0.0, 0.02),
///     Coordinate::new(0.0, 0.03),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&points);
///
/// // Anchored at 0, the order 2, 1, 3 backtracks; 2-opt straightens it.
/// let (improved, dist) = two_opt_open(&[2, 1, 3], Some(0), &dm);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert!((dist - dm.get(0, 3)).abs() < 1e-9);
/// ```
pub fn two_opt_open(
    path: &[usize],
    anchor: Option<usize>,
    distances: &DistanceMatrix,
) -> (Vec<usize>, f64) {
    let mut current = path.to_vec();
    let n = current.len();

    if n >= 2 {
        let mut improved = true;
        while improved {
            improved = false;
            for i in 0..n - 1 {
                for j in i + 1..n {
                    if reversal_delta(&current, anchor, distances, i, j) < -IMPROVEMENT_EPS {
                        current[i..=j].reverse();
                        improved = true;
                    }
                }
            }
        }
    }

    let dist = anchored_length(&current, anchor, distances);
    (current, dist)
}

/// Improves a sequenced route with open-path 2-opt.
///
/// `start` should be the start point the route was sequenced from, if any;
/// it stays fixed in front of the path. Without it, either end of the path
/// may move. Distance and minutes are recomputed; the original route is
/// returned unchanged when no shorter order exists.
///
/// # Examples
///
/// ```
/// use route_sequencer::config::CostModel;
/// use route_sequencer::models::{Coordinate, Stop};
/// use route_sequencer::constructive::sequence;
/// use route_sequencer::local_search::refine;
///
/// let stops = vec![
///     Stop::new(1, 1, "A", Coordinate::new(0.0, 0.0)),
///     Stop::new(2, 2, "B", Coordinate::new(0.01, 0.0)),
///     Stop::new(3, 3, "C", Coordinate::new(0.01, 0.01)),
///     Stop::new(4, 4, "D", Coordinate::new(0.0, 0.01)),
/// ];
/// let route = sequence(&stops, None);
/// let refined = refine(&route, None, &CostModel::default());
/// assert!(refined.total_distance_km() <= route.total_distance_km());
/// assert_eq!(refined.len(), 4);
/// ```
pub fn refine(route: &SequencedRoute, start: Option<Coordinate>, model: &CostModel) -> SequencedRoute {
    let stops = route.stops();
    if stops.len() < 2 {
        return route.clone();
    }

    let offset = usize::from(start.is_some());
    let points: Vec<Coordinate> = start
        .into_iter()
        .chain(stops.iter().map(|s| s.location))
        .collect();
    let dm = DistanceMatrix::from_coordinates(&points);
    let anchor = start.map(|_| 0);
    let path: Vec<usize> = (offset..points.len()).collect();

    let before = anchored_length(&path, anchor, &dm);
    let (improved, after) = two_opt_open(&path, anchor, &dm);
    if after >= before - IMPROVEMENT_EPS {
        return route.clone();
    }

    debug!(
        "2-opt shortened {} stops: {:.3} km -> {:.3} km",
        stops.len(),
        before,
        after
    );
    let order: Vec<usize> = improved.iter().map(|&i| i - offset).collect();
    build_route(stops, &order, after, model)
}

fn reversal_delta(
    path: &[usize],
    anchor: Option<usize>,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let prev = if i == 0 { anchor } else { Some(path[i - 1]) };
    let next = path.get(j + 1).copied();

    let mut delta = 0.0;
    if let Some(p) = prev {
        delta += distances.get(p, path[j]) - distances.get(p, path[i]);
    }
    if let Some(q) = next {
        delta += distances.get(path[i], q) - distances.get(path[j], q);
    }
    delta
}

fn anchored_length(path: &[usize], anchor: Option<usize>, distances: &DistanceMatrix) -> f64 {
    let lead = match (anchor, path.first()) {
        (Some(a), Some(&first)) => distances.get(a, first),
        _ => 0.0,
    };
    lead + distances.path_length(path)
}
