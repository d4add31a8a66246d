//! Expense display formatting
//!
//! Renders expenses as a table for `--all` and filtered listings, and as a
//! single line for add/update/delete confirmations.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::DisplayOptions;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, options: &DisplayOptions) -> Self {
        Self {
            id: expense.id.to_string(),
            date: options.date(expense.date),
            category: expense.category.to_string(),
            amount: options.money(expense.amount),
            description: expense.description.clone(),
        }
    }
}

/// Format expenses as a table, or a placeholder line when there are none
pub fn format_expense_table<'a, I>(expenses: I, options: &DisplayOptions) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow::new(e, options))
        .collect();

    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// One-line description of an expense
pub fn format_expense_line(expense: &Expense, options: &DisplayOptions) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        expense.id,
        options.date(expense.date),
        expense.category,
        options.money(expense.amount),
        expense.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::with_date(
            Money::from_cents(1250),
            "Lunch",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            ExpenseCategory::Food,
        )
    }

    #[test]
    fn test_format_expense_line() {
        let expense = lunch();
        let line = format_expense_line(&expense, &DisplayOptions::default());
        assert_eq!(
            line,
            format!("{} | 2025-01-15 | FOOD | $12.50 | Lunch", expense.id)
        );
    }

    #[test]
    fn test_format_expense_table() {
        let expenses = vec![lunch()];
        let table = format_expense_table(&expenses, &DisplayOptions::default());
        assert!(table.contains("Description"));
        assert!(table.contains("Lunch"));
        assert!(table.contains("$12.50"));
        assert!(table.contains(&expenses[0].id.to_string()));
    }

    #[test]
    fn test_format_empty_table() {
        let none: Vec<Expense> = Vec::new();
        let table = format_expense_table(&none, &DisplayOptions::default());
        assert_eq!(table, "No expenses found.\n");
    }

    #[test]
    fn test_custom_symbol_and_date_format() {
        let options = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
        };
        let line = format_expense_line(&lunch(), &options);
        assert!(line.contains("15/01/2025"));
        assert!(line.contains("€12.50"));
    }
}
