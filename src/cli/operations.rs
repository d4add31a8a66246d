//! Operations requested on the command line and their execution
//!
//! Each operation runs against the shared ledger. Business errors (bad
//! amounts, unknown ids, ...) are written to the error stream and the batch
//! carries on; only I/O failures on the output streams abort it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::display::{
    format_budget_check, format_category_listing, format_expense_line, format_expense_table,
    format_month_summary, format_summary, DisplayOptions,
};
use crate::error::{LedgerError, LedgerResult};
use crate::export::ExportFormat;
use crate::models::{ExpenseCategory, MonthOfYear};
use crate::services::{Ledger, ListFilter};

/// One requested operation with its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add {
        amount: String,
        description: String,
        category: Option<String>,
        date: Option<NaiveDate>,
    },
    Update {
        id: String,
        amount: String,
        description: String,
        category: Option<String>,
    },
    Delete {
        id: String,
    },
    SetBudget {
        month: String,
        amount: String,
    },
    Summary,
    List,
    MonthSummary(MonthOfYear),
    FilterByCategory(String),
    CheckBudget(MonthOfYear),
    Export {
        format: ExportFormat,
        output: Option<PathBuf>,
    },
}

/// Output and error streams for a batch
pub struct Console<'a, O: Write, E: Write> {
    pub out: &'a mut O,
    pub err: &'a mut E,
    pub options: &'a DisplayOptions,
}

impl<'a, O: Write, E: Write> Console<'a, O, E> {
    fn print(&mut self, text: &str) -> LedgerResult<()> {
        write!(self.out, "{}", text)?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn error(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.err, "{}", text)?;
        Ok(())
    }
}

/// Run every operation against the ledger, then warn if this month is over budget
///
/// The closing warning is skipped when the batch already checked the current
/// month explicitly. Returns the number of operations that reported an error.
pub fn run_operations<O: Write, E: Write>(
    operations: &[Operation],
    ledger: &mut Ledger,
    console: &mut Console<'_, O, E>,
) -> LedgerResult<usize> {
    let mut failures = 0;

    for operation in operations {
        if !report(run_operation(operation, ledger, console), console)? {
            failures += 1;
        }
    }

    let current = MonthOfYear::current();
    if !operations.contains(&Operation::CheckBudget(current)) {
        let warning = match ledger.check_budget(current) {
            Ok(check) if check.exceeded => {
                console.print(&format_budget_check(&check, console.options))
            }
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        };
        if !report(warning, console)? {
            failures += 1;
        }
    }

    Ok(failures)
}

/// Write a recoverable error to the error stream; `Ok(false)` if there was one
fn report<O: Write, E: Write>(
    result: LedgerResult<()>,
    console: &mut Console<'_, O, E>,
) -> LedgerResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.is_recoverable() => {
            console.error(&format!("Error: {}", e))?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn run_operation<O: Write, E: Write>(
    operation: &Operation,
    ledger: &mut Ledger,
    console: &mut Console<'_, O, E>,
) -> LedgerResult<()> {
    let options = console.options;

    match operation {
        Operation::Add {
            amount,
            description,
            category,
            date,
        } => {
            let outcome = ledger.add(amount, description.as_str(), *date, category.as_deref())?;
            if let Some(warning) = &outcome.category_warning {
                console.error(&format!("Warning: {}. Defaulting to OTHER.", warning))?;
            }
            console.print(&format!(
                "Added {}",
                format_expense_line(&outcome.expense, options)
            ))
        }
        Operation::Update {
            id,
            amount,
            description,
            category,
        } => {
            let id = ledger.resolve_id(id)?;
            let updated = ledger.update(id, amount, description.as_str(), category.as_deref())?;
            console.print(&format!("Updated {}", format_expense_line(&updated, options)))
        }
        Operation::Delete { id } => {
            let id = ledger.resolve_id(id)?;
            let removed = ledger.delete(id)?;
            console.print(&format!("Deleted {}", format_expense_line(&removed, options)))
        }
        Operation::SetBudget { month, amount } => {
            let month: MonthOfYear = month.parse()?;
            let cap = ledger.set_budget(month, amount)?;
            console.print(&format!("Budget set for {}: {}", month, options.money(cap)))
        }
        Operation::Summary => console.print(&format_summary(&ledger.summarize()?, options)),
        Operation::List => {
            if ledger.is_empty() {
                return console.print("No recorded expenses.");
            }
            let mut text = String::from("All Recorded Expenses:\n");
            text.push_str(&format_expense_table(ledger.list(ListFilter::All), options));
            console.print(&text)
        }
        Operation::MonthSummary(month) => {
            console.print(&format_month_summary(&ledger.summarize_by_month(*month)?, options))
        }
        Operation::FilterByCategory(token) => {
            let listing = ledger.filter_by_category(token).map_err(|e| {
                LedgerError::Validation(format!(
                    "{}. Valid categories: {}. No expenses filtered",
                    e,
                    ExpenseCategory::valid_names()
                ))
            })?;
            console.print(&format_category_listing(&listing, options))
        }
        Operation::CheckBudget(month) => {
            console.print(&format_budget_check(&ledger.check_budget(*month)?, options))
        }
        Operation::Export { format, output } => match output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                format.write(ledger, &mut writer)?;
                writer
                    .flush()
                    .map_err(|e| LedgerError::Export(e.to_string()))?;
                console.print(&format!(
                    "Exported {} expenses as {} to {}",
                    ledger.len(),
                    format,
                    path.display()
                ))
            }
            None => format.write(ledger, &mut *console.out),
        },
    }
}
