//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the ledger engine.

pub mod args;
pub mod operations;

pub use args::Cli;
pub use operations::{run_operations, Console, Operation};
