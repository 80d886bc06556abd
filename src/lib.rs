//! # route-sequencer
//!
//! Delivery stop sequencing for a single vehicle: orders geocoded stops with
//! a nearest-neighbor heuristic over great-circle distances, estimates
//! driving plus service time, and compares two orderings in distance, time,
//! fuel, and money.
//!
//! All operations are pure and stateless.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Stop, SequencedRoute, Comparison)
//! - [`distance`] — Haversine distance, centroid, distance matrix
//! - [`config`] — Speed, service time, and fuel policy constants
//! - [`evaluation`] — Time, path length, and fuel cost estimates
//! - [`constructive`] — Nearest-neighbor sequencing (single and multi-seed)
//! - [`local_search`] — Open-path 2-opt refinement
//! - [`comparison`] — Savings of one ordering over another
//! - `json` — JSON adapter (feature `json`)

pub mod comparison;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
#[cfg(feature = "json")]
pub mod json;
pub mod local_search;
pub mod models;

pub use comparison::compare;
pub use constructive::sequence;
pub use distance::{centroid, haversine_km};
pub use error::{Error, Result};
