//! Year-fraction weighted cash flows shared by every pricing formula.

use ytm_core::daycounts::{DayCount, DayCountConvention};
use ytm_core::types::{CashFlowSchedule, Date};

/// A schedule resolved against a pricing date.
///
/// Each entry is `(years, amount)` where `years` is the year fraction from the
/// pricing date to the payment date under one day count convention and
/// `amount` is principal plus coupon. Pricing, the solver residual and its
/// derivative all evaluate over the same resolved flows, so they always agree
/// on the time axis.
#[derive(Debug, Clone)]
pub(crate) struct TimedCashFlows {
    flows: Vec<(f64, f64)>,
    total_principal: f64,
}

impl TimedCashFlows {
    pub(crate) fn new(
        schedule: &CashFlowSchedule,
        pricing_date: Date,
        day_count: DayCountConvention,
    ) -> Self {
        let flows = schedule
            .iter()
            .map(|cf| {
                (
                    day_count.year_fraction(pricing_date, cf.payment_date()),
                    cf.total_amount(),
                )
            })
            .collect();

        Self {
            flows,
            total_principal: schedule.total_principal(),
        }
    }

    pub(crate) fn total_principal(&self) -> f64 {
        self.total_principal
    }

    pub(crate) fn len(&self) -> usize {
        self.flows.len()
    }

    /// `Σ amount × (1 + r)^(-years)`, NaN for `r <= -1`.
    pub(crate) fn present_value(&self, rate: f64) -> f64 {
        self.flows
            .iter()
            .map(|(years, amount)| amount * growth_power(rate, -years))
            .sum()
    }

    /// `target_fraction × total_principal − present_value(r)`
    pub(crate) fn residual(&self, rate: f64, target_fraction: f64) -> f64 {
        target_fraction * self.total_principal - self.present_value(rate)
    }

    /// `Σ years × amount × (1 + r)^(-(1 + years))`, the derivative of
    /// [`residual`](Self::residual) with respect to `r`.
    pub(crate) fn residual_derivative(&self, rate: f64) -> f64 {
        self.flows
            .iter()
            .map(|(years, amount)| years * amount * growth_power(rate, -(1.0 + years)))
            .sum()
    }
}

/// `(1 + rate)^exponent`, defined only for `1 + rate > 0`.
///
/// `powf` of a negative base is finite for whole exponents, which would let
/// the solver settle on a mirror root below -100%.
fn growth_power(rate: f64, exponent: f64) -> f64 {
    let base = 1.0 + rate;
    if base > 0.0 {
        base.powf(exponent)
    } else {
        f64::NAN
    }
}
