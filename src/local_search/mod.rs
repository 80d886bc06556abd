//! Local search for improving stop orders.
//!
//! - [`two_opt`] — Open-path 2-opt segment reversal

mod two_opt;

pub use two_opt::{refine, two_opt_open};
