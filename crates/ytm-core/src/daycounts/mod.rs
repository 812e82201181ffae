//! Day count conventions used to turn calendar gaps into year fractions.
//!
//! Both conventions count actual calendar days over a fixed 365-day year:
//!
//! - [`Act365Fixed`]: real-valued `days / 365`
//! - [`Act365WholeYears`]: `days / 365` truncated toward zero to whole years
//!
//! Whichever convention is selected is applied to every cash flow of a
//! valuation, for pricing and yield solving alike.
//!
//! # Usage
//!
//! ```rust
//! use ytm_core::daycounts::{DayCount, DayCountConvention};
//! use ytm_core::types::Date;
//!
//! let start = Date::from_ymd(2021, 3, 27).unwrap();
//! let end = Date::from_ymd(2028, 5, 20).unwrap();
//!
//! let exact = DayCountConvention::Act365Fixed.year_fraction(start, end);
//! let whole = DayCountConvention::Act365WholeYears.year_fraction(start, end);
//! assert!(exact > 7.0 && exact < 7.2);
//! assert_eq!(whole, 7.0);
//! ```

mod act365;

pub use act365::{Act365Fixed, Act365WholeYears};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction from `start` to `end`.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count from `start` to `end`.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountConvention {
    /// Actual/365 Fixed, real-valued year fractions.
    #[default]
    Act365Fixed,

    /// Actual/365 truncated to whole years.
    Act365WholeYears,
}

impl DayCountConvention {
    /// Returns every supported convention.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365WholeYears,
        ]
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.name(),
            DayCountConvention::Act365WholeYears => Act365WholeYears.name(),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Act365WholeYears => Act365WholeYears.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.day_count(start, end),
            DayCountConvention::Act365WholeYears => Act365WholeYears.day_count(start, end),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
