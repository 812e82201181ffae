//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm hit its iteration cap before meeting tolerance.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute residual at the last iterate.
        residual: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e} at iteration {iteration}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
        /// Iteration at which the value was observed.
        iteration: u32,
    },

    /// The objective or the iterate stopped being a finite number.
    #[error("Non-finite value encountered at iteration {iteration}")]
    NonFinite {
        /// Iteration at which the value was observed.
        iteration: u32,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(iteration: u32) -> Self {
        Self::NonFinite { iteration }
    }
}
