//! Service layer for the expense ledger
//!
//! The service layer holds the business rules: identity, CRUD, filtering,
//! aggregation and budget evaluation, all applied to an in-memory snapshot.

pub mod budget;
pub mod ledger;

pub use ledger::{AddOutcome, CategoryListing, Ledger, ListFilter, MonthSummary, Summary};
