//! Crate error type.

use thiserror::Error;

/// Errors raised while validating configuration or decoding requests.
///
/// The sequencing and comparison operations themselves never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid cost model: {field} = {value}")]
    InvalidCostModel { field: &'static str, value: f64 },
    #[cfg(feature = "json")]
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
