//! Error types for distmatch

use thiserror::Error;

/// Load and validation errors.
///
/// Per-tick sampling and prediction never fail; only authored data does.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON serialize error: {0}")]
    RonSerialize(#[from] ron::Error),

    #[error("Curve '{name}' has {keys} key(s), need at least 2")]
    CurveTooShort { name: String, keys: usize },

    #[error("Curve '{name}' is not sorted by value at key {index}")]
    CurveNotSorted { name: String, index: usize },

    #[error("Curve '{name}' repeats a value at key {index}")]
    CurveDuplicateValue { name: String, index: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
