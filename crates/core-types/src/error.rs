// In crates/core-types/src/error.rs

use thiserror::Error;

/// Violations of the input contract shared by every signal component.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Series is not in chronological order at index {index}")]
    OrderingViolation { index: usize },

    #[error("{field} is outside its domain [{min}, {max}]: {value}")]
    DomainError {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid fusion weights: {0}")]
    InvalidWeights(String),

    #[error("Indicator period must be positive, got {period}")]
    InvalidPeriod { period: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
