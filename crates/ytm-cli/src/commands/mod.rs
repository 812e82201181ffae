//! CLI command implementations.

pub mod demo;
pub mod price;
pub mod ytm;

pub use demo::DemoArgs;
pub use price::PriceArgs;
pub use ytm::YieldArgs;

use ytm_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Validates a price in percent of par.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Validates a yield in percent.
pub fn validate_yield(yield_pct: f64) -> CliResult<f64> {
    if !yield_pct.is_finite() || yield_pct <= -100.0 {
        return Err(CliError::InvalidYield(yield_pct));
    }
    Ok(yield_pct)
}
