//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence when an analytic derivative is
//!   available
//!
//! The solver never loops unbounded: every call is limited by
//! [`SolverConfig::max_iterations`] and refuses to divide by a derivative
//! smaller than [`MIN_DERIVATIVE`]. Steps that leave the domain of the
//! objective or fail to reduce the residual are halved at most
//! [`MAX_STEP_HALVINGS`] times.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use ytm_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Zero coupon: 100 paid in 5 years, price 78.35
//! let f = |y: f64| 78.35 - 100.0 * (1.0 + y).powf(-5.0);
//! let df = |y: f64| 5.0 * 100.0 * (1.0 + y).powf(-6.0);
//!
//! let result = newton_raphson(f, df, 0.04, &SolverConfig::new(1e-10, 50)).unwrap();
//! assert!((result.root - 0.05).abs() < 1e-4);
//! ```

mod newton;

pub use newton::newton_raphson;

/// Default absolute residual tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivatives smaller than this in absolute value are treated as zero.
pub const MIN_DERIVATIVE: f64 = 1e-15;

/// Maximum number of times a Newton step is halved before it is taken.
pub const MAX_STEP_HALVINGS: u32 = 60;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence is reached once `|f(x)| <= tolerance`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of update steps taken.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert_relative_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_relative_eq!(config.tolerance, 0.001);
        assert_eq!(config.max_iterations, 100);
    }

    // ============ YTM-like Financial Tests ============

    /// Annual-pay bond price per 100 face.
    fn bond_price(yield_rate: f64, coupon: f64, years: i32) -> f64 {
        let mut pv = 0.0;
        for t in 1..=years {
            pv += coupon / (1.0 + yield_rate).powi(t);
        }
        pv + 100.0 / (1.0 + yield_rate).powi(years)
    }

    fn bond_price_derivative(yield_rate: f64, coupon: f64, years: i32) -> f64 {
        let mut dpv = 0.0;
        for t in 1..=years {
            dpv -= f64::from(t) * coupon / (1.0 + yield_rate).powi(t + 1);
        }
        dpv - f64::from(years) * 100.0 / (1.0 + yield_rate).powi(years + 1)
    }

    #[test]
    fn test_ytm_par_bond() {
        let f = |y: f64| bond_price(y, 5.0, 10) - 100.0;
        let df = |y: f64| bond_price_derivative(y, 5.0, 10);

        let result = newton_raphson(f, df, 0.04, &SolverConfig::new(1e-10, 50)).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_ytm_discount_bond() {
        let f = |y: f64| bond_price(y, 5.0, 5) - 95.0;
        let df = |y: f64| bond_price_derivative(y, 5.0, 5);

        let result = newton_raphson(f, df, 0.05, &SolverConfig::new(1e-10, 50)).unwrap();

        assert!(result.root > 0.05);
        assert!(f(result.root).abs() <= 1e-10);
    }
}
