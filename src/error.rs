//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount input that does not parse as a decimal number
    #[error("Invalid amount format: '{0}'")]
    AmountFormat(String),

    /// Category input that is not a member of the category enumeration
    #[error("Invalid category: '{0}'")]
    CategoryFormat(String),

    /// Budget amount that is unparseable or negative
    #[error("Invalid budget amount: {0}")]
    BudgetFormat(String),

    /// Month input outside 1-12 or not a month name
    #[error("Invalid month: '{0}'. Use 1-12 or a month name")]
    MonthFormat(String),

    /// Date input that is not YYYY-MM-DD
    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    DateFormat(String),

    /// A total that does not fit in the money representation
    #[error("Total out of range: {0}")]
    Overflow(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Business errors that are reported to the user without aborting the run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AmountFormat(_)
                | Self::CategoryFormat(_)
                | Self::BudgetFormat(_)
                | Self::MonthFormat(_)
                | Self::DateFormat(_)
                | Self::Overflow(_)
                | Self::NotFound { .. }
                | Self::Validation(_)
                | Self::Export(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::AmountFormat("abc".into());
        assert_eq!(err.to_string(), "Invalid amount format: 'abc'");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(LedgerError::CategoryFormat("x".into()).is_recoverable());
        assert!(LedgerError::expense_not_found("x").is_recoverable());
        assert!(LedgerError::Overflow("summary".into()).is_recoverable());
        assert!(!LedgerError::Storage("disk full".into()).is_recoverable());
        assert!(!LedgerError::Io("denied".into()).is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
