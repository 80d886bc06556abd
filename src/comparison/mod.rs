//! Savings comparison between two orderings of the same stops.

mod comparator;

pub use comparator::{compare, compare_distances, compare_with};
