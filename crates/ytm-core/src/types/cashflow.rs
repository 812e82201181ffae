//! Cash flow types for bond valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A single dated payment: a principal component and a coupon component
/// paid together on `payment_date`.
///
/// Amounts are not validated; negative principal or coupon values are
/// carried through the pricing formulas as given.
///
/// # Example
///
/// ```rust
/// use ytm_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(Date::from_ymd(2028, 5, 20).unwrap(), 1_000_000.0, 22_750.0);
/// assert_eq!(cf.total_amount(), 1_022_750.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    payment_date: Date,
    principal_amount: f64,
    coupon_amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(payment_date: Date, principal_amount: f64, coupon_amount: f64) -> Self {
        Self {
            payment_date,
            principal_amount,
            coupon_amount,
        }
    }

    /// Creates a coupon-only cash flow.
    #[must_use]
    pub fn coupon(payment_date: Date, coupon_amount: f64) -> Self {
        Self::new(payment_date, 0.0, coupon_amount)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the principal component.
    #[must_use]
    pub fn principal_amount(&self) -> f64 {
        self.principal_amount
    }

    /// Returns the coupon component.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_amount
    }

    /// Returns principal plus coupon.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.principal_amount + self.coupon_amount
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: principal {:.2}, coupon {:.2}",
            self.payment_date, self.principal_amount, self.coupon_amount
        )
    }
}

/// An ordered schedule of cash flows.
///
/// Insertion order is preserved and never re-sorted; chronological ordering is
/// the caller's responsibility. Entries are only ever appended.
///
/// Cloning produces an independent schedule, which is how an extended variant
/// of an existing schedule is built without touching the original:
///
/// ```rust
/// use ytm_core::types::{CashFlowSchedule, Date};
///
/// let mut base = CashFlowSchedule::new();
/// base.append(Date::from_ymd(2028, 5, 20).unwrap(), 100.0, 2.0);
///
/// let mut extended = base.clone();
/// extended.append(Date::from_ymd(2021, 5, 20).unwrap(), 0.0, 2.0);
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(extended.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSchedule {
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Appends a payment of `principal` and `coupon` on `date`.
    pub fn append(&mut self, date: Date, principal: f64, coupon: f64) -> &mut Self {
        self.push(CashFlow::new(date, principal, coupon))
    }

    /// Appends an already constructed cash flow.
    pub fn push(&mut self, cf: CashFlow) -> &mut Self {
        log::trace!("appending cash flow {cf}");
        self.cash_flows.push(cf);
        self
    }

    /// Sum of the principal components of every entry.
    ///
    /// This is the par amount used as the 100% reference when pricing. Zero for
    /// an empty schedule.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.cash_flows.iter().map(CashFlow::principal_amount).sum()
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.cash_flows.iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

impl Extend<CashFlow> for CashFlowSchedule {
    fn extend<I: IntoIterator<Item = CashFlow>>(&mut self, iter: I) {
        self.cash_flows.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_cashflow_creation() {
        let cf = CashFlow::coupon(date(2024, 5, 20), 22_750.0);

        assert_eq!(cf.payment_date(), date(2024, 5, 20));
        assert_eq!(cf.principal_amount(), 0.0);
        assert_eq!(cf.coupon_amount(), 22_750.0);
        assert_eq!(cf.total_amount(), 22_750.0);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = CashFlowSchedule::new();

        assert!(schedule.is_empty());
        assert_eq!(schedule.total_principal(), 0.0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut schedule = CashFlowSchedule::new();
        schedule
            .append(date(2028, 5, 20), 1_000_000.0, 22_750.0)
            .append(date(2021, 5, 20), 0.0, 22_750.0);

        let dates: Vec<Date> = schedule.iter().map(CashFlow::payment_date).collect();
        assert_eq!(dates, vec![date(2028, 5, 20), date(2021, 5, 20)]);
    }

    #[test]
    fn test_total_principal_amortizing() {
        let mut schedule = CashFlowSchedule::new();
        schedule.append(date(2025, 1, 1), 250.0, 10.0);
        schedule.append(date(2026, 1, 1), 250.0, 7.5);
        schedule.append(date(2027, 1, 1), 500.0, 5.0);

        assert_eq!(schedule.total_principal(), 1000.0);
    }

    #[test]
    fn test_negative_amounts_accepted() {
        let mut schedule = CashFlowSchedule::new();
        schedule.append(date(2025, 1, 1), -50.0, -1.0);
        schedule.append(date(2026, 1, 1), 100.0, 1.0);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_principal(), 50.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut base = CashFlowSchedule::new();
        base.append(date(2028, 5, 20), 100.0, 2.0);

        let mut extended = base.clone();
        extended.append(date(2021, 5, 20), 0.0, 2.0);

        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.as_slice()[0], base.as_slice()[0]);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut schedule: CashFlowSchedule = (1..=3)
            .map(|i| CashFlow::coupon(date(2024 + i, 1, 1), 5.0))
            .collect();
        schedule.extend([CashFlow::new(date(2028, 1, 1), 100.0, 5.0)]);

        assert_eq!(schedule.len(), 4);
        assert_eq!((&schedule).into_iter().count(), 4);
        assert_eq!(schedule.total_principal(), 100.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut schedule = CashFlowSchedule::new();
        schedule.append(date(2028, 5, 20), 100.0, 2.0);

        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(
            json,
            r#"[{"payment_date":"2028-05-20","principal_amount":100.0,"coupon_amount":2.0}]"#
        );
    }

    proptest! {
        #[test]
        fn prop_total_principal_is_sum(principals in proptest::collection::vec(0u32..1_000_000, 0..32)) {
            let mut schedule = CashFlowSchedule::new();
            for (i, p) in principals.iter().enumerate() {
                schedule.append(date(2025, 1, 1).add_days(i as i64), f64::from(*p), 1.0);
            }

            let expected: u64 = principals.iter().map(|p| u64::from(*p)).sum();
            prop_assert_eq!(schedule.total_principal(), expected as f64);
            prop_assert_eq!(schedule.len(), principals.len());
        }
    }
}
