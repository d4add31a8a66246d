//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger domain:
//! expenses, their identifiers and categories, money amounts, months and
//! monthly budget caps.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::{BudgetCheck, MonthlyBudgets};
pub use category::ExpenseCategory;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::MonthOfYear;
