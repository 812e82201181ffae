//! Actual/365 day count conventions.

use super::DayCount;
use crate::types::Date;

/// Days in the fixed year basis.
const YEAR_BASIS: f64 = 365.0;

/// Actual/365 Fixed day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / YEAR_BASIS
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 truncated to whole years.
///
/// Integer division of the actual day count by 365, truncating toward zero:
/// 729 days is one year, -400 days is minus one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365WholeYears;

impl DayCount for Act365WholeYears {
    fn name(&self) -> &'static str {
        "ACT/365 WHOLE YEARS"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        (self.day_count(start, end) / 365) as f64
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
