//! Report formatting for terminal output
//!
//! Totals, month summaries and budget checks.

use crate::models::BudgetCheck;
use crate::services::{CategoryListing, MonthSummary, Summary};

use super::expense::format_expense_table;
use super::DisplayOptions;

/// Format the whole-ledger total
///
/// An empty ledger is reported as such rather than as a zero total.
pub fn format_summary(summary: &Summary, options: &DisplayOptions) -> String {
    match summary {
        Summary::Empty => "No expenses recorded.\n".to_string(),
        Summary::Total { count, total } => format!(
            "Expense Summary\n{}\nExpenses: {}\nTotal: {}\n",
            separator(15),
            count,
            options.money(*total)
        ),
    }
}

/// Format the expenses and total for one month of year
pub fn format_month_summary(summary: &MonthSummary<'_>, options: &DisplayOptions) -> String {
    if summary.expenses.is_empty() {
        return format!("No recorded expenses for month: {}\n", summary.month);
    }

    let mut output = format!("Expense Summary for {}:\n", summary.month);
    output.push_str(&format_expense_table(
        summary.expenses.iter().copied(),
        options,
    ));
    output.push_str(&format!(
        "Total Expenses for {}: {}\n",
        summary.month,
        options.money(summary.total)
    ));
    output
}

/// Format the result of a category filter
pub fn format_category_listing(listing: &CategoryListing<'_>, options: &DisplayOptions) -> String {
    let mut output = format!("Filtered expenses by category '{}':\n", listing.category);
    output.push_str(&format_expense_table(
        listing.expenses.iter().copied(),
        options,
    ));
    output
}

/// Format one budget comparison
pub fn format_budget_check(check: &BudgetCheck, options: &DisplayOptions) -> String {
    match (check.cap, check.remaining()) {
        (None, _) => format!(
            "No budget set for {} ({} spent)",
            check.month,
            options.money(check.total)
        ),
        (Some(cap), _) if check.exceeded => format!(
            "Warning: You have exceeded your budget for {} ({} spent of {})",
            check.month,
            options.money(check.total),
            options.money(cap)
        ),
        (Some(cap), Some(remaining)) => format!(
            "Budget for {}: {} spent of {} ({} remaining)",
            check.month,
            options.money(check.total),
            options.money(cap),
            options.money(remaining)
        ),
        (Some(cap), None) => format!(
            "Budget for {}: {} spent of {}",
            check.month,
            options.money(check.total),
            options.money(cap)
        ),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
