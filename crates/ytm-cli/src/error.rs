//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Invalid yield.
    #[error("Invalid yield: {0}. Must be above -100.")]
    InvalidYield(f64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
