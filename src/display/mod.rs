//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_line, format_expense_table};
pub use report::{
    format_budget_check, format_category_listing, format_month_summary, format_summary,
};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// User-facing formatting preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
