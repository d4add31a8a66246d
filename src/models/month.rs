//! Month-of-year representation
//!
//! Expenses are bucketed, and budgets keyed, by calendar month without a year:
//! March 2024 and March 2025 fall in the same bucket.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// A calendar month, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthOfYear(u32);

impl MonthOfYear {
    /// Create a month from its number, rejecting values outside 1-12
    pub fn new(number: u32) -> Result<Self, LedgerError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LedgerError::MonthFormat(number.to_string()))
        }
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month())
    }

    /// The current local month
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Upper-case English name ("MARCH")
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// Whether a date falls in this month of any year
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.0
    }

    /// Iterate over all twelve months
    pub fn all() -> impl Iterator<Item = MonthOfYear> {
        (1..=12).map(Self)
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MonthOfYear {
    type Err = LedgerError;

    /// Accepts "3", "03", "march", "MAR"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(number) = token.parse::<u32>() {
            return Self::new(number).map_err(|_| LedgerError::MonthFormat(token.to_string()));
        }

        let upper = token.to_ascii_uppercase();
        MONTH_NAMES
            .iter()
            .position(|name| *name == upper || (upper.len() == 3 && name.starts_with(&upper)))
            .map(|idx| Self(idx as u32 + 1))
            .ok_or_else(|| LedgerError::MonthFormat(token.to_string()))
    }
}

impl TryFrom<u32> for MonthOfYear {
    type Error = LedgerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthOfYear> for u32 {
    fn from(month: MonthOfYear) -> Self {
        month.0
    }
}
