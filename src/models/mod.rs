//! Domain model types for stop sequencing.
//!
//! Provides coordinates, delivery stops, sequenced routes as ordered stop
//! lists with their metrics, and the savings comparison between two orders.

mod comparison;
mod coordinate;
mod route;
mod stop;

pub use comparison::Comparison;
pub use coordinate::Coordinate;
pub use route::SequencedRoute;
pub use stop::Stop;
