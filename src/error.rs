//! Error types for the loading and configuration boundary
//!
//! The calculators themselves never fail; only reading assumptions or
//! property batches from disk can.

use thiserror::Error;

/// Result alias used by the loaders
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown strategy '{0}' (expected brrr, flip or hold)")]
    UnknownStrategy(String),

    #[error("Unknown assumption field '{field}' for strategy '{strategy}'")]
    UnknownField { strategy: String, field: String },

    #[error("'{field}' = {value} is out of range ({expected})")]
    OutOfRange {
        field: String,
        value: f64,
        expected: &'static str,
    },

    #[error("Could not parse '{value}' for '{field}'")]
    InvalidValue { field: String, value: String },

    #[error("Unsupported assumptions file '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}
