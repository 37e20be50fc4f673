//! Error types for the calculator

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// The requested start year has no multiplier in the return table.
    /// Surfaces as a warning, never aborts a render.
    #[error("Data not available for that year.")]
    UnknownYear(i32),

    #[error("Invalid investment amount {amount}: must be at least {minimum}")]
    InvalidAmount { amount: f64, minimum: f64 },

    #[error("Invalid as-of year {year}: must be between {earliest} and {latest}")]
    InvalidAsOfYear { year: i32, earliest: i32, latest: i32 },

    #[error("Invalid return table: {0}")]
    InvalidTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CalculatorError {
    /// Whether this error should be shown as a warning instead of failing the request
    pub fn is_warning(&self) -> bool {
        matches!(self, CalculatorError::UnknownYear(_))
    }

    /// Whether the caller supplied a bad input (as opposed to a data or I/O failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CalculatorError::InvalidAmount { .. } | CalculatorError::InvalidAsOfYear { .. }
        )
    }
}
