//! # ytm Core
//!
//! Core types for the ytm bond yield toolkit.
//!
//! This crate provides the building blocks the valuation engine operates on:
//!
//! - **Types**: [`Date`], [`CashFlow`](types::CashFlow) and the ordered
//!   [`CashFlowSchedule`](types::CashFlowSchedule)
//! - **Day Count Conventions**: Actual/365 year fractions, real-valued or
//!   truncated to whole years
//!
//! ## Example
//!
//! ```rust
//! use ytm_core::prelude::*;
//!
//! let mut schedule = CashFlowSchedule::new();
//! schedule.append(Date::from_ymd(2027, 5, 20).unwrap(), 0.0, 22_750.0);
//! schedule.append(Date::from_ymd(2027, 11, 20).unwrap(), 1_000_000.0, 22_750.0);
//!
//! assert_eq!(schedule.len(), 2);
//! assert_eq!(schedule.total_principal(), 1_000_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, Date};
