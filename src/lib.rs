//! expense-ledger - Personal expense tracking from the command line
//!
//! This library provides the core functionality for the `expense` binary:
//! recording expenses, reporting totals by month and category, and comparing
//! monthly spending against budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months, budgets)
//! - `storage`: JSON file persistence for the expense sequence
//! - `services`: The ledger engine
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Argument parsing and operation dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::services::Ledger;
//! use expense_ledger::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.json");
//! let mut ledger = Ledger::from_expenses(store.load().expenses);
//! ledger.add("12.50", "Lunch", None, Some("food"))?;
//! store.save(ledger.expenses())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
