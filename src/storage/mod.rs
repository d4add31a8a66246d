//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in one file that is read at start-up and
//! rewritten in full on save. There is no locking: two invocations that
//! overlap resolve as last writer wins.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome, LoadWarning};
pub use file_io::{read_json_or_default, write_json_atomic};
