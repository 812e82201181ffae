//! # ytm Math
//!
//! Numerical utilities for the ytm bond yield toolkit.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root-finding with a bounded iteration count,
//!   a zero-derivative guard and non-finite iterate detection
//!
//! ## Example
//!
//! ```rust
//! use ytm_math::solvers::{newton_raphson, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let result = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-12, 50)).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
