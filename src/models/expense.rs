//! Expense model
//!
//! One recorded monetary event. The field set and order here is the on-disk
//! record layout: `id, amount, description, date, category`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Amount spent; negative for refunds or corrections
    pub amount: Money,

    /// Free-form description
    pub description: String,

    /// Date of the expense (stored as YYYY-MM-DD)
    pub date: NaiveDate,

    #[serde(default)]
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(amount: Money, description: impl Into<String>, category: ExpenseCategory) -> Self {
        Self::with_date(
            amount,
            description,
            chrono::Local::now().date_naive(),
            category,
        )
    }

    /// Create a new expense on a given date
    pub fn with_date(
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            date,
            category,
        }
    }

    /// Replace the mutable fields; id and date are left alone
    pub fn revise(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        category: Option<ExpenseCategory>,
    ) {
        self.amount = amount;
        self.description = description.into();
        if let Some(category) = category {
            self.category = category;
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}
