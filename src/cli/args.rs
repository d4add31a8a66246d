//! Command-line arguments
//!
//! Every operation is a flag, so one invocation can combine several of them
//! (for example `--add 12.50 Lunch food --summary`). They run against a single
//! loaded ledger in the order given by [`Cli::operations`].

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::error::LedgerError;
use crate::export::ExportFormat;
use crate::models::MonthOfYear;

use super::operations::Operation;

#[derive(Parser, Debug, Default)]
#[command(
    name = "expense",
    version,
    about = "Record expenses, set monthly budgets and report totals",
    long_about = "A personal expense ledger. Expenses are kept in a single JSON file \
                  that is loaded on every run and rewritten when something changes. \
                  Budgets apply to a month of any year and last for the current run only."
)]
pub struct Cli {
    /// Add an expense: AMOUNT DESCRIPTION [CATEGORY]
    #[arg(
        short,
        long,
        num_args = 2..=3,
        value_names = ["AMOUNT", "DESCRIPTION", "CATEGORY"],
        allow_negative_numbers = true
    )]
    pub add: Option<Vec<String>>,

    /// Date for the added expense (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "add", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Update an expense: ID AMOUNT DESCRIPTION [CATEGORY]
    #[arg(
        short,
        long,
        num_args = 3..=4,
        value_names = ["ID", "AMOUNT", "DESCRIPTION", "CATEGORY"],
        allow_negative_numbers = true
    )]
    pub update: Option<Vec<String>>,

    /// Delete an expense by ID
    #[arg(short, long, value_name = "ID")]
    pub delete: Option<String>,

    /// Show the total of all expenses
    #[arg(short, long)]
    pub summary: bool,

    /// List all recorded expenses
    #[arg(short = 'l', long = "all")]
    pub all: bool,

    /// Show expenses and total for a month (1-12 or a month name)
    #[arg(short, long = "month-summary", value_name = "MONTH")]
    pub month_summary: Option<MonthOfYear>,

    /// List expenses in a category
    #[arg(short, long = "category-filter", value_name = "CATEGORY")]
    pub category_filter: Option<String>,

    /// Set a budget for a month: MONTH AMOUNT
    #[arg(
        short = 'b',
        long = "set-budget",
        num_args = 2,
        value_names = ["MONTH", "AMOUNT"],
        allow_negative_numbers = true
    )]
    pub set_budget: Option<Vec<String>>,

    /// Compare a month's spending with its budget
    #[arg(long = "check-budget", value_name = "MONTH")]
    pub check_budget: Option<MonthOfYear>,

    /// Export the ledger (csv, json or yaml)
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<ExportFormat>,

    /// Write the export to a file instead of standard output
    #[arg(short, long, requires = "export", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Ledger file to use
    #[arg(short, long, env = "EXPENSE_LEDGER_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// The requested operations in execution order
    ///
    /// Mutations come first so that every report in the same run sees them.
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::new();

        if let Some(values) = &self.add {
            ops.push(Operation::Add {
                amount: values[0].clone(),
                description: values[1].clone(),
                category: values.get(2).cloned(),
                date: self.date,
            });
        }

        if let Some(values) = &self.update {
            ops.push(Operation::Update {
                id: values[0].clone(),
                amount: values[1].clone(),
                description: values[2].clone(),
                category: values.get(3).cloned(),
            });
        }

        if let Some(id) = &self.delete {
            ops.push(Operation::Delete { id: id.clone() });
        }

        if let Some(values) = &self.set_budget {
            ops.push(Operation::SetBudget {
                month: values[0].clone(),
                amount: values[1].clone(),
            });
        }

        if self.summary {
            ops.push(Operation::Summary);
        }

        if self.all {
            ops.push(Operation::List);
        }

        if let Some(month) = self.month_summary {
            ops.push(Operation::MonthSummary(month));
        }

        if let Some(category) = &self.category_filter {
            ops.push(Operation::FilterByCategory(category.clone()));
        }

        if let Some(month) = self.check_budget {
            ops.push(Operation::CheckBudget(month));
        }

        if let Some(format) = self.export {
            ops.push(Operation::Export {
                format,
                output: self.output.clone(),
            });
        }

        ops
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::DateFormat(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("expense").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_with_and_without_category() {
        let cli = parse(&["--add", "12.50", "Lunch at the diner", "food"]);
        assert_eq!(
            cli.operations(),
            vec![Operation::Add {
                amount: "12.50".into(),
                description: "Lunch at the diner".into(),
                category: Some("food".into()),
                date: None,
            }]
        );

        let cli = parse(&["-a", "-5", "Refund", "--date", "2024-03-09"]);
        assert_eq!(
            cli.operations(),
            vec![Operation::Add {
                amount: "-5".into(),
                description: "Refund".into(),
                category: None,
                date: NaiveDate::from_ymd_opt(2024, 3, 9),
            }]
        );
    }

    #[test]
    fn test_operations_run_in_fixed_order() {
        let cli = parse(&[
            "--summary",
            "--delete",
            "abcd1234",
            "--set-budget",
            "may",
            "100",
            "--add",
            "1",
            "Gum",
            "-l",
        ]);
        let ops = cli.operations();
        assert!(matches!(ops[0], Operation::Add { .. }));
        assert!(matches!(ops[1], Operation::Delete { ref id } if id == "abcd1234"));
        assert!(matches!(ops[2], Operation::SetBudget { .. }));
        assert_eq!(ops[3], Operation::Summary);
        assert_eq!(ops[4], Operation::List);
        assert_eq!(ops.len(), 5);
    }

    #[test]
    fn test_month_arguments_are_parsed() {
        let cli = parse(&["-m", "3", "--check-budget", "December"]);
        assert_eq!(
            cli.operations(),
            vec![
                Operation::MonthSummary(MonthOfYear::new(3).unwrap()),
                Operation::CheckBudget(MonthOfYear::new(12).unwrap()),
            ]
        );
    }

    #[test]
    fn test_argument_errors() {
        let bad: [&[&str]; 6] = [
            &["--add", "12.50"],
            &["--update", "id", "1"],
            &["--month-summary", "13"],
            &["--date", "2024-01-01"],
            &["--add", "1", "x", "--date", "01/02/2024"],
            &["--export", "xml"],
        ];
        for args in bad {
            assert!(
                Cli::try_parse_from(std::iter::once("expense").chain(args.iter().copied()))
                    .is_err(),
                "{:?} should be rejected",
                args
            );
        }
    }

    #[test]
    fn test_no_flags_means_no_operations() {
        assert!(parse(&[]).operations().is_empty());
    }
}
