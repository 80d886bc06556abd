//! Constructive heuristics for ordering delivery stops.
//!
//! - [`sequence`] — Greedy nearest-neighbor tour from a start point, O(n²)
//! - [`sequence_best_seed`] — Nearest-neighbor repeated from every stop, O(n³)

mod multi_start;
mod nearest_neighbor;

pub use multi_start::sequence_best_seed;
pub use nearest_neighbor::{sequence, sequence_with};

pub(crate) use nearest_neighbor::build_route;
