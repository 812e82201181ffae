//! # ytm Bonds
//!
//! Bond valuation over an arbitrary [`CashFlowSchedule`](ytm_core::CashFlowSchedule).
//!
//! This crate provides:
//!
//! - **Pricing**: present value and price as a percentage of par at a given yield
//! - **Yield**: yield-to-maturity from a price via bounded Newton-Raphson
//!
//! ## Example
//!
//! ```rust
//! use ytm_bonds::prelude::*;
//! use ytm_core::prelude::*;
//!
//! let mut schedule = CashFlowSchedule::new();
//! schedule.append(Date::from_ymd(2027, 3, 27).unwrap(), 0.0, 50_000.0);
//! schedule.append(Date::from_ymd(2028, 3, 27).unwrap(), 1_000_000.0, 50_000.0);
//!
//! let pricing_date = Date::from_ymd(2026, 3, 27).unwrap();
//! let pct_of_par = price(&schedule, pricing_date, 0.05).unwrap();
//!
//! let result = YieldSolver::default().solve(&schedule, pricing_date, pct_of_par / 100.0).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-4);
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
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        present_value, price, price_with_day_count, pricing_residual, residual_derivative,
        solve_yield, YieldResult, YieldSolver,
    };
}

pub use error::{BondError, BondResult};
