//! Yield-to-maturity solver.
//!
//! Finds the annual yield `r` at which the discounted cash flows of a schedule
//! equal a target price, expressed as a fraction of par (1.02 for 102%).
//!
//! # Example
//!
//! ```rust
//! use ytm_bonds::pricing::YieldSolver;
//! use ytm_core::types::{CashFlowSchedule, Date};
//!
//! let mut schedule = CashFlowSchedule::new();
//! schedule.append(Date::from_ymd(2028, 5, 20).unwrap(), 1_000_000.0, 22_750.0);
//!
//! let solver = YieldSolver::new().with_max_iterations(50);
//! let result = solver
//!     .solve(&schedule, Date::from_ymd(2021, 3, 27).unwrap(), 0.98)
//!     .unwrap();
//! println!("YTM: {:.6}% in {} iterations", result.yield_value * 100.0, result.iterations);
//! ```

use serde::{Deserialize, Serialize};

use ytm_core::daycounts::DayCountConvention;
use ytm_core::types::{CashFlowSchedule, Date};
use ytm_math::solvers::{newton_raphson, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use super::{price_timed, TimedCashFlows, MIN_TOTAL_PRINCIPAL};
use crate::error::{BondError, BondResult};

/// Starting yield for the Newton-Raphson iteration (4%).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.04;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// Final residual in currency units (at most the tolerance in magnitude).
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// Newton-Raphson on
/// `target × total_principal − Σ (principal + coupon) × (1 + r)^(-t)`
/// starting from 4%. The loop stops once the absolute residual is at most
/// the tolerance (0.001 currency units by default) and is bounded by an
/// iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
    day_count: DayCountConvention,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 0.001
    /// Default max iterations: 100
    /// Default initial guess: 0.04
    /// Default day count: ACT/365F
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: DEFAULT_INITIAL_GUESS,
            day_count: DayCountConvention::default(),
        }
    }

    /// Sets the absolute residual tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting yield.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the day count convention used for every year fraction.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the starting yield.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Returns the day count convention.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Solves for the yield at which the schedule is worth `target_fraction`
    /// of its total principal on `pricing_date`.
    ///
    /// # Errors
    ///
    /// - [`BondError::DegenerateSchedule`] if the total principal is zero
    /// - [`BondError::NonConvergence`] if the iteration cap is reached, the
    ///   derivative vanishes, or the residual stops being finite
    pub fn solve(
        &self,
        schedule: &CashFlowSchedule,
        pricing_date: Date,
        target_fraction: f64,
    ) -> BondResult<YieldResult> {
        let timed = TimedCashFlows::new(schedule, pricing_date, self.day_count);

        let par = timed.total_principal();
        if par.abs() < MIN_TOTAL_PRINCIPAL {
            return Err(BondError::degenerate_schedule(par));
        }

        log::debug!(
            "solving yield for {} cash flows as of {pricing_date}: target {target_fraction} of par {par}",
            timed.len()
        );

        let objective = |r: f64| timed.residual(r, target_fraction);
        let derivative = |r: f64| timed.residual_derivative(r);

        match newton_raphson(objective, derivative, self.initial_guess, &self.config) {
            Ok(result) => Ok(YieldResult {
                yield_value: result.root,
                iterations: result.iterations,
                residual: result.residual,
            }),
            Err(err) => {
                log::warn!("yield solve as of {pricing_date} failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Prices the schedule under this solver's day count convention, so a
    /// price computed here and a yield solved here share one time axis.
    ///
    /// # Errors
    ///
    /// Same as [`price`](super::price).
    pub fn price(
        &self,
        schedule: &CashFlowSchedule,
        pricing_date: Date,
        yield_rate: f64,
    ) -> BondResult<f64> {
        price_timed(
            &TimedCashFlows::new(schedule, pricing_date, self.day_count),
            yield_rate,
        )
    }
}

/// Solves for yield-to-maturity with the default [`YieldSolver`].
///
/// # Errors
///
/// Same as [`YieldSolver::solve`].
pub fn solve_yield(
    schedule: &CashFlowSchedule,
    pricing_date: Date,
    target_fraction: f64,
) -> BondResult<YieldResult> {
    YieldSolver::default().solve(schedule, pricing_date, target_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{present_value, price, residual_derivative};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_schedule() -> CashFlowSchedule {
        let mut schedule = CashFlowSchedule::new();
        let mut payment = date(2024, 5, 20);
        for _ in 0..8 {
            schedule.append(payment, 0.0, 22_750.0);
            payment = payment.add_months(6).unwrap();
        }
        schedule.append(payment, 1_000_000.0, 22_750.0);
        schedule
    }

    #[test]
    fn test_solver_defaults() {
        let solver = YieldSolver::default();
        assert_relative_eq!(solver.config().tolerance, 0.001);
        assert_eq!(solver.config().max_iterations, 100);
        assert_relative_eq!(solver.initial_guess(), 0.04);
        assert_eq!(solver.day_count(), DayCountConvention::Act365Fixed);
    }

    #[test]
    fn test_premium_bond() {
        let result = solve_yield(&sample_schedule(), date(2021, 3, 27), 1.02).unwrap();

        assert_relative_eq!(result.yield_value, 0.024_772_5, epsilon = 1e-6);
        assert_eq!(result.iterations, 3);
        assert!(result.residual.abs() <= 0.001);
    }

    #[test]
    fn test_discount_bond() {
        let result = solve_yield(&sample_schedule(), date(2021, 3, 27), 0.98).unwrap();

        assert_relative_eq!(result.yield_value, 0.030_828_7, epsilon = 1e-6);
        assert!(result.iterations <= 10);
    }

    #[test]
    fn test_later_pricing_date() {
        let result = solve_yield(&sample_schedule(), date(2021, 4, 7), 1.02).unwrap();

        assert_relative_eq!(result.yield_value, 0.024_884_3, epsilon = 1e-6);
    }

    #[test]
    fn test_whole_years_convention() {
        let solver = YieldSolver::new().with_day_count(DayCountConvention::Act365WholeYears);
        let result = solver
            .solve(&sample_schedule(), date(2021, 3, 27), 1.02)
            .unwrap();

        assert_relative_eq!(result.yield_value, 0.025_505_9, epsilon = 1e-6);

        // Price and solve share the same time axis
        let pct = solver
            .price(&sample_schedule(), date(2021, 3, 27), result.yield_value)
            .unwrap();
        assert_relative_eq!(pct, 102.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_iterations_when_guess_is_exact() {
        let schedule = sample_schedule();
        let pricing_date = date(2021, 3, 27);
        let target = price(&schedule, pricing_date, 0.04).unwrap() / 100.0;

        let result = solve_yield(&schedule, pricing_date, target).unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.yield_value, 0.04);
    }

    #[test]
    fn test_custom_initial_guess() {
        let result = YieldSolver::new()
            .with_initial_guess(0.025)
            .solve(&sample_schedule(), date(2021, 3, 27), 1.02)
            .unwrap();

        assert_relative_eq!(result.yield_value, 0.024_772_5, epsilon = 1e-6);
    }

    #[test]
    fn test_tighter_tolerance_refines_yield() {
        let result = YieldSolver::new()
            .with_tolerance(1e-6)
            .solve(&sample_schedule(), date(2021, 3, 27), 1.02)
            .unwrap();

        assert!(result.residual.abs() <= 1e-6);
        assert_relative_eq!(result.yield_value, 0.024_772_509_9, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let err = solve_yield(&CashFlowSchedule::new(), date(2021, 3, 27), 1.0).unwrap_err();
        assert!(matches!(err, BondError::DegenerateSchedule { .. }));
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let err = YieldSolver::new()
            .with_max_iterations(1)
            .solve(&sample_schedule(), date(2021, 3, 27), 1.02)
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::NonConvergence { iterations: 1, .. }
        ));
    }

    #[test]
    fn test_vanishing_derivative_reports_non_convergence() {
        // Every payment falls on the pricing date: t = 0, so the slope is zero
        let pricing_date = date(2021, 3, 27);
        let mut schedule = CashFlowSchedule::new();
        schedule.append(pricing_date, 100.0, 5.0);

        let err = solve_yield(&schedule, pricing_date, 0.5).unwrap_err();

        assert!(matches!(
            err,
            BondError::NonConvergence { iterations: 0, .. }
        ));
    }

    #[test]
    fn test_unreachable_target_reports_non_convergence() {
        // A positive cash flow can never be worth a negative amount
        let mut schedule = CashFlowSchedule::new();
        schedule.append(date(2026, 3, 27), 1_000_000.0, 0.0);

        let result = solve_yield(&schedule, date(2021, 3, 27), -0.5);

        assert!(matches!(result, Err(BondError::NonConvergence { .. })));
    }

    #[test]
    fn test_long_bond_at_deep_negative_yield() {
        // The first full step from 4% lands just above -100%, finite but far off
        let pricing_date = date(2021, 3, 27);
        let mut schedule = CashFlowSchedule::new();
        schedule.append(date(2071, 3, 27), 100.0, 0.0);

        let target = price(&schedule, pricing_date, -0.3).unwrap() / 100.0;
        let result = solve_yield(&schedule, pricing_date, target).unwrap();

        assert_relative_eq!(result.yield_value, -0.3, epsilon = 1e-6);
        assert!(result.iterations < 20);
    }

    proptest! {
        // The residual tolerance is absolute (0.001 currency units), so it pins
        // the yield only to about tolerance / |dPV/dr|, and f64 resolves a
        // present value only to about 1e-16 of its size. Cases where either
        // limit is coarser than the 1e-4 yield accuracy are skipped.
        #[test]
        fn prop_round_trip_single_zero_coupon(
            rate in -0.49f64..0.99,
            years in 1i32..=50,
        ) {
            let pricing_date = date(2021, 3, 27);
            let mut schedule = CashFlowSchedule::new();
            schedule.append(date(2021 + years, 3, 27), 1_000_000.0, 0.0);

            let day_count = DayCountConvention::Act365Fixed;
            let pv = present_value(&schedule, pricing_date, rate, day_count);
            let sensitivity = residual_derivative(&schedule, rate, pricing_date, day_count);
            prop_assume!(pv <= 1.0e11 && sensitivity >= 100.0);

            let target = price(&schedule, pricing_date, rate).unwrap() / 100.0;
            let result = solve_yield(&schedule, pricing_date, target).unwrap();

            prop_assert!((result.yield_value - rate).abs() < 1e-4);
        }
    }
}
