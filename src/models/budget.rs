//! Monthly budget caps
//!
//! At most one cap per month of year. A month without an entry has no cap,
//! which is different from a cap of zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::MonthOfYear;

/// Mapping from month of year to spending cap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyBudgets(BTreeMap<MonthOfYear, Money>);

impl MonthlyBudgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cap for a month, returning the cap it replaced
    pub fn set(&mut self, month: MonthOfYear, cap: Money) -> Option<Money> {
        self.0.insert(month, cap)
    }

    pub fn get(&self, month: MonthOfYear) -> Option<Money> {
        self.0.get(&month).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Budgeted months in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (MonthOfYear, Money)> + '_ {
        self.0.iter().map(|(month, cap)| (*month, *cap))
    }
}

/// Result of comparing a month's spending against its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetCheck {
    pub month: MonthOfYear,
    /// Sum of all expenses dated in this month (any year)
    pub total: Money,
    pub cap: Option<Money>,
    /// True only when a cap exists and the total is strictly greater
    pub exceeded: bool,
}

impl BudgetCheck {
    pub fn evaluate(month: MonthOfYear, total: Money, cap: Option<Money>) -> Self {
        Self {
            month,
            total,
            cap,
            exceeded: cap.is_some_and(|cap| total > cap),
        }
    }

    /// Amount left before the cap is reached (negative once exceeded)
    ///
    /// `None` without a cap, or when the difference is out of range.
    pub fn remaining(&self) -> Option<Money> {
        self.cap.and_then(|cap| cap.checked_sub(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(n: u32) -> MonthOfYear {
        MonthOfYear::new(n).unwrap()
    }

    #[test]
    fn test_set_replaces() {
        let mut budgets = MonthlyBudgets::new();
        assert_eq!(budgets.set(month(5), Money::from_cents(100_000)), None);
        assert_eq!(
            budgets.set(month(5), Money::from_cents(50_000)),
            Some(Money::from_cents(100_000))
        );
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets.get(month(5)), Some(Money::from_cents(50_000)));
        assert_eq!(budgets.get(month(6)), None);
    }

    #[test]
    fn test_check_boundary_is_strict() {
        let cap = Some(Money::from_cents(1000));
        assert!(!BudgetCheck::evaluate(month(1), Money::from_cents(1000), cap).exceeded);
        assert!(BudgetCheck::evaluate(month(1), Money::from_cents(1001), cap).exceeded);
        assert!(!BudgetCheck::evaluate(month(1), Money::from_cents(999), cap).exceeded);
    }

    #[test]
    fn test_no_cap_never_exceeded() {
        let check = BudgetCheck::evaluate(month(2), Money::from_cents(1_000_000), None);
        assert!(!check.exceeded);
        assert_eq!(check.remaining(), None);
    }

    #[test]
    fn test_zero_cap_is_a_cap() {
        let check = BudgetCheck::evaluate(month(2), Money::from_cents(1), Some(Money::zero()));
        assert!(check.exceeded);
        assert_eq!(check.remaining(), Some(Money::from_cents(-1)));
    }

    #[test]
    fn test_remaining_out_of_range() {
        let check = BudgetCheck::evaluate(
            month(3),
            Money::from_cents(i64::MIN),
            Some(Money::from_cents(1)),
        );
        assert_eq!(check.remaining(), None);
    }
}
