//! YAML Export functionality
//!
//! Same document as the JSON export, for human reading.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::services::Ledger;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger)?;
    let err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Expense Ledger Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}
