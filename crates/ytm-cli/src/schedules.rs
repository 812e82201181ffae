//! The sample cash flow schedules the CLI prices.

use ytm_core::types::{CashFlowSchedule, Date};

use crate::error::{CliError, CliResult};

/// Semiannual coupon of 4.55% on 1,000,000.
pub const COUPON: f64 = 22_750.0;

/// Bullet principal repaid at maturity.
pub const PRINCIPAL: f64 = 1_000_000.0;

fn date(year: i32, month: u32, day: u32) -> CliResult<Date> {
    Date::from_ymd(year, month, day).map_err(|e| CliError::InvalidDate(e.to_string()))
}

/// Eight coupons from 2024-05-20 to 2027-11-20, then principal and the final
/// coupon on 2028-05-20.
pub fn base_schedule() -> CliResult<CashFlowSchedule> {
    let mut schedule = CashFlowSchedule::with_capacity(9);
    for year in 2024..=2027 {
        schedule.append(date(year, 5, 20)?, 0.0, COUPON);
        schedule.append(date(year, 11, 20)?, 0.0, COUPON);
    }
    schedule.append(date(2028, 5, 20)?, PRINCIPAL, COUPON);
    Ok(schedule)
}

/// The base schedule plus six earlier coupons, 2021-05-20 to 2023-11-20.
///
/// The additions are appended after maturity; the engine never sorts.
pub fn extended_schedule(base: &CashFlowSchedule) -> CliResult<CashFlowSchedule> {
    let mut schedule = base.clone();
    for year in 2021..=2023 {
        schedule.append(date(year, 5, 20)?, 0.0, COUPON);
        schedule.append(date(year, 11, 20)?, 0.0, COUPON);
    }
    Ok(schedule)
}

/// Picks the base or extended schedule.
pub fn select(extended: bool) -> CliResult<CashFlowSchedule> {
    let base = base_schedule()?;
    if extended {
        extended_schedule(&base)
    } else {
        Ok(base)
    }
}
