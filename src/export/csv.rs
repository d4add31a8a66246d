//! CSV Export functionality
//!
//! One row per expense, amounts as plain decimals, for spreadsheets.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let err = |e: ::csv::Error| LedgerError::Export(e.to_string());

    csv_writer
        .write_record(["ID", "Date", "Category", "Amount", "Description"])
        .map_err(err)?;

    for expense in ledger.expenses() {
        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.to_string(),
                expense.amount.to_decimal_string(),
                expense.description.clone(),
            ])
            .map_err(err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
