//! Great-circle distance and distance matrices.
//!
//! Provides the haversine distance, the centroid helper, and a dense
//! distance matrix over stop coordinates.

mod haversine;
mod matrix;

pub use haversine::{centroid, haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
