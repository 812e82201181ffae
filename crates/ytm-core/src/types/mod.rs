//! Domain types for bond cash flow modelling.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`CashFlow`]: A dated principal and coupon payment
//! - [`CashFlowSchedule`]: Ordered collection of cash flows

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowSchedule};
pub use date::Date;
