//! Expense categories
//!
//! Categories are a closed set. Parsing is case-insensitive; callers decide
//! what to do with an unrecognized token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Category assigned to an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Health,
    /// Catch-all, also the fallback for unrecognized input on add
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Health,
        Self::Other,
    ];

    /// Upper-case token used for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Utilities => "UTILITIES",
            Self::Health => "HEALTH",
            Self::Other => "OTHER",
        }
    }

    /// Comma-separated list of valid tokens, for error hints
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| LedgerError::CategoryFormat(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!("Food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " HEALTH ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Health
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "groceries".parse::<ExpenseCategory>().unwrap_err();
        assert!(matches!(err, LedgerError::CategoryFormat(ref s) if s == "groceries"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Entertainment).unwrap();
        assert_eq!(json, "\"ENTERTAINMENT\"");
        let back: ExpenseCategory = serde_json::from_str("\"UTILITIES\"").unwrap();
        assert_eq!(back, ExpenseCategory::Utilities);
    }

    #[test]
    fn test_display_matches_storage_token() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
