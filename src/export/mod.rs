//! Export module for the expense ledger
//!
//! Provides data export in multiple formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable snapshot including budgets
//! - YAML: human-readable snapshot including budgets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Write the ledger in this format
    pub fn write<W: Write>(&self, ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
        match self {
            Self::Csv => export_expenses_csv(ledger, writer),
            Self::Json => export_json(ledger, writer),
            Self::Yaml => export_yaml(ledger, writer),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerError::Export(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}
