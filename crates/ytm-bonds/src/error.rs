//! Error types for bond valuation.

use thiserror::Error;
use ytm_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while pricing a schedule or solving for its yield.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// The schedule has no principal to express a price against.
    #[error("Degenerate schedule: total principal is {total_principal}")]
    DegenerateSchedule {
        /// Total principal of the schedule.
        total_principal: f64,
    },

    /// Yield solving stopped without meeting the residual tolerance.
    #[error("Yield did not converge after {iterations} iterations: {reason}")]
    NonConvergence {
        /// Newton steps completed before giving up.
        iterations: u32,
        /// Why the solver stopped.
        reason: String,
    },

    /// Pricing produced NaN or an infinity.
    #[error("Non-finite price: {value}")]
    NonFinite {
        /// The offending value.
        value: f64,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] ytm_core::CoreError),
}

impl BondError {
    /// Creates a degenerate schedule error.
    #[must_use]
    pub fn degenerate_schedule(total_principal: f64) -> Self {
        Self::DegenerateSchedule { total_principal }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, reason: impl Into<String>) -> Self {
        Self::NonConvergence {
            iterations,
            reason: reason.into(),
        }
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::non_convergence(
                iterations,
                format!("iteration limit reached (residual {residual:.3e})"),
            ),
            MathError::DivisionByZero { value, iteration } => {
                Self::non_convergence(iteration, format!("derivative vanished ({value:.3e})"))
            }
            MathError::NonFinite { iteration } => {
                Self::non_convergence(iteration, "residual is not finite")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_display() {
        let err = BondError::degenerate_schedule(0.0);
        assert_eq!(err.to_string(), "Degenerate schedule: total principal is 0");
    }

    #[test]
    fn test_from_convergence_failed() {
        let err: BondError = MathError::convergence_failed(100, 12.5).into();
        match err {
            BondError::NonConvergence { iterations, reason } => {
                assert_eq!(iterations, 100);
                assert!(reason.contains("iteration limit"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_from_division_by_zero() {
        let err: BondError = MathError::DivisionByZero {
            value: 0.0,
            iteration: 2,
        }
        .into();
        assert!(matches!(
            err,
            BondError::NonConvergence { iterations: 2, .. }
        ));
        assert!(err.to_string().contains("derivative vanished"));
    }
}
