//! Budget operations on the ledger
//!
//! Caps are keyed by month of year and live only as long as the ledger value;
//! they are never written to the expense file.

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetCheck, Money, MonthOfYear};

use super::ledger::{total_of, Ledger};

impl Ledger {
    /// Set (or replace) the cap for a month
    pub fn set_budget(&mut self, month: MonthOfYear, amount: &str) -> LedgerResult<Money> {
        let cap = Money::parse(amount)
            .map_err(|e| LedgerError::BudgetFormat(e.to_string()))?;

        if cap.is_negative() {
            return Err(LedgerError::BudgetFormat(format!(
                "budget for {} cannot be negative ({})",
                month, cap
            )));
        }

        if let Some(previous) = self.budgets.set(month, cap) {
            debug!("replaced {} budget {} with {}", month, previous, cap);
        }
        Ok(cap)
    }

    /// Sum of expenses dated in `month` of any year
    pub fn month_total(&self, month: MonthOfYear) -> LedgerResult<Money> {
        total_of(
            self.expenses().iter().filter(|e| month.contains(e.date)),
            &month.to_string(),
        )
    }

    /// Compare a month's spending with its cap
    ///
    /// A month without a cap is never exceeded; at exactly the cap it is not
    /// exceeded either.
    pub fn check_budget(&self, month: MonthOfYear) -> LedgerResult<BudgetCheck> {
        Ok(BudgetCheck::evaluate(
            month,
            self.month_total(month)?,
            self.budgets.get(month),
        ))
    }
}
