//! Bond pricing calculations.
//!
//! This module provides:
//! - [`price`]: price as a percentage of par at a given yield
//! - [`present_value`]: undivided discounted cash flow sum
//! - [`pricing_residual`] and [`residual_derivative`]: the objective and slope
//!   the yield solver drives to zero
//! - [`YieldSolver`]: yield-to-maturity from a target price
//!
//! Every formula discounts annually, `(1 + y)^(-t)`, with `t` the year fraction
//! from the pricing date to the payment date under a single
//! [`DayCountConvention`] (ACT/365F unless chosen otherwise). Payments dated
//! before the pricing date have negative `t` and are compounded forward rather
//! than discounted.

mod discounting;
mod yield_solver;

pub use yield_solver::{solve_yield, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};

use ytm_core::daycounts::DayCountConvention;
use ytm_core::types::{CashFlowSchedule, Date};

use crate::error::{BondError, BondResult};

pub(crate) use discounting::TimedCashFlows;

/// Principal totals below this in absolute value have no par to price against.
pub(crate) const MIN_TOTAL_PRINCIPAL: f64 = f64::EPSILON;

/// Prices a schedule at `yield_rate` as a percentage of total principal,
/// using ACT/365F year fractions.
///
/// `100 × Σ (principal + coupon) × (1 + yield)^(-t) / total_principal`
///
/// # Errors
///
/// - [`BondError::DegenerateSchedule`] if the total principal is zero
/// - [`BondError::NonFinite`] if the result is NaN or infinite (e.g. a yield
///   at or below -100%)
///
/// # Example
///
/// ```rust
/// use ytm_bonds::pricing::price;
/// use ytm_core::types::{CashFlowSchedule, Date};
///
/// let mut schedule = CashFlowSchedule::new();
/// schedule.append(Date::from_ymd(2026, 1, 1).unwrap(), 100.0, 0.0);
///
/// let at_zero = price(&schedule, Date::from_ymd(2021, 1, 1).unwrap(), 0.0).unwrap();
/// assert!((at_zero - 100.0).abs() < 1e-12);
/// ```
pub fn price(schedule: &CashFlowSchedule, pricing_date: Date, yield_rate: f64) -> BondResult<f64> {
    price_with_day_count(
        schedule,
        pricing_date,
        yield_rate,
        DayCountConvention::default(),
    )
}

/// Prices a schedule at `yield_rate` as a percentage of total principal under
/// an explicit day count convention.
///
/// # Errors
///
/// Same as [`price`].
pub fn price_with_day_count(
    schedule: &CashFlowSchedule,
    pricing_date: Date,
    yield_rate: f64,
    day_count: DayCountConvention,
) -> BondResult<f64> {
    let timed = TimedCashFlows::new(schedule, pricing_date, day_count);
    price_timed(&timed, yield_rate)
}

pub(crate) fn price_timed(timed: &TimedCashFlows, yield_rate: f64) -> BondResult<f64> {
    let par = timed.total_principal();
    if par.abs() < MIN_TOTAL_PRINCIPAL {
        return Err(BondError::degenerate_schedule(par));
    }

    let pct = 100.0 * timed.present_value(yield_rate) / par;
    if !pct.is_finite() {
        return Err(BondError::NonFinite { value: pct });
    }

    log::debug!("priced {} cash flows at {yield_rate}: {pct}", timed.len());
    Ok(pct)
}

/// Present value of every cash flow at `yield_rate`, in the schedule's
/// currency units.
///
/// Unlike [`price`] this is not normalised by par and therefore does not fail
/// for a schedule without principal.
pub fn present_value(
    schedule: &CashFlowSchedule,
    pricing_date: Date,
    yield_rate: f64,
    day_count: DayCountConvention,
) -> f64 {
    TimedCashFlows::new(schedule, pricing_date, day_count).present_value(yield_rate)
}

/// Signed gap between the target value and the model value at `rate`:
///
/// `target_fraction × total_principal − Σ (principal + coupon) × (1 + rate)^(-t)`
pub fn pricing_residual(
    schedule: &CashFlowSchedule,
    rate: f64,
    pricing_date: Date,
    target_fraction: f64,
    day_count: DayCountConvention,
) -> f64 {
    TimedCashFlows::new(schedule, pricing_date, day_count).residual(rate, target_fraction)
}

/// Derivative of [`pricing_residual`] with respect to `rate`:
///
/// `Σ t × (principal + coupon) × (1 + rate)^(-(1 + t))`
pub fn residual_derivative(
    schedule: &CashFlowSchedule,
    rate: f64,
    pricing_date: Date,
    day_count: DayCountConvention,
) -> f64 {
    TimedCashFlows::new(schedule, pricing_date, day_count).residual_derivative(rate)
}
