//! JSON Export functionality
//!
//! Exports the ledger snapshot, including the current run's budgets, as one
//! versioned document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, MonthlyBudgets};
use crate::services::ledger::total_of;
use crate::services::Ledger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    /// Budgets set during the exporting run, keyed by month number
    pub budgets: MonthlyBudgets,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts, in cents
    pub total: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl LedgerExport {
    /// Build an export from the current snapshot
    pub fn from_ledger(ledger: &Ledger) -> LedgerResult<Self> {
        let expenses = ledger.expenses().to_vec();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: total_of(&expenses, "export total")?,
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            budgets: ledger.budgets().clone(),
            metadata,
        })
    }
}

/// Export the ledger to pretty-printed JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
}
