//! Expense store for JSON storage
//!
//! Translates the ledger's expense sequence to and from a single JSON file.
//! The file holds a bare array of expense records in insertion order.
//! Budgets are not part of the file.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

use super::file_io::{preserve_copy, read_json_or_default, write_json_atomic};

/// Problem encountered while loading that did not stop the load
#[derive(Debug)]
pub struct LoadWarning {
    /// Why the file could not be used
    pub error: LedgerError,
    /// Where the unreadable file was copied to, if the copy succeeded
    pub preserved_at: Option<PathBuf>,
}

/// Outcome of loading the durable store
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub expenses: Vec<Expense>,
    pub warning: Option<LoadWarning>,
}

/// Reads and writes the expense file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses
    ///
    /// A missing or empty file is an empty ledger. A file that cannot be read
    /// or parsed also yields an empty ledger, with a warning attached and the
    /// file copied to `<name>.corrupt` so the next save cannot destroy it.
    pub fn load(&self) -> LoadOutcome {
        match read_json_or_default::<Vec<Expense>, _>(&self.path) {
            Ok(expenses) => {
                debug!(
                    "loaded {} expenses from {}",
                    expenses.len(),
                    self.path.display()
                );
                LoadOutcome {
                    expenses,
                    warning: None,
                }
            }
            Err(error) => {
                warn!("ledger file {} is unreadable: {}", self.path.display(), error);
                let preserved_at = match preserve_copy(&self.path) {
                    Ok(copy) => Some(copy),
                    Err(copy_err) => {
                        warn!("{}", copy_err);
                        None
                    }
                };
                LoadOutcome {
                    expenses: Vec::new(),
                    warning: Some(LoadWarning {
                        error,
                        preserved_at,
                    }),
                }
            }
        }
    }

    /// Overwrite the file with the full expense sequence
    pub fn save(&self, expenses: &[Expense]) -> LedgerResult<()> {
        write_json_atomic(&self.path, expenses)?;
        debug!("saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}
