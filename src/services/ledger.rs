//! Ledger engine
//!
//! Holds the in-memory snapshot for one invocation and implements every
//! expense operation against it. The ledger is built from whatever the store
//! loaded, mutated in place, and handed back to the store only if it is dirty.

use chrono::NaiveDate;
use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, MonthOfYear, MonthlyBudgets};

/// Shortest hex prefix accepted when looking an expense up by partial id
pub const MIN_ID_PREFIX: usize = 4;

/// Which expenses `list` yields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Category(ExpenseCategory),
}

impl ListFilter {
    fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => expense.category == *category,
        }
    }
}

/// Total over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// No expenses recorded at all (distinct from a zero total)
    Empty,
    Total { count: usize, total: Money },
}

/// Expenses falling in one month of any year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary<'a> {
    pub month: MonthOfYear,
    pub expenses: Vec<&'a Expense>,
    pub total: Money,
}

/// Expenses in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing<'a> {
    pub category: ExpenseCategory,
    pub expenses: Vec<&'a Expense>,
}

/// Result of a successful add
#[derive(Debug)]
pub struct AddOutcome {
    pub expense: Expense,
    /// Set when the requested category was unrecognized and OTHER was used
    pub category_warning: Option<LedgerError>,
}

/// In-memory ledger snapshot
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    pub(crate) budgets: MonthlyBudgets,
    dirty: bool,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from loaded expenses, keeping their order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            budgets: MonthlyBudgets::new(),
            dirty: false,
        }
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Whether the expense sequence changed since load
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn budgets(&self) -> &MonthlyBudgets {
        &self.budgets
    }

    /// Record a new expense
    ///
    /// An unparseable amount fails the add. An unrecognized category does not:
    /// the expense is filed under OTHER and the problem is returned alongside it.
    pub fn add(
        &mut self,
        amount: &str,
        description: impl Into<String>,
        date: Option<NaiveDate>,
        category: Option<&str>,
    ) -> LedgerResult<AddOutcome> {
        let amount = parse_amount(amount)?;

        let (category, category_warning) = match category.map(str::parse::<ExpenseCategory>) {
            None => (ExpenseCategory::Other, None),
            Some(Ok(category)) => (category, None),
            Some(Err(e)) => (ExpenseCategory::Other, Some(e)),
        };

        let expense = match date {
            Some(date) => Expense::with_date(amount, description, date, category),
            None => Expense::new(amount, description, category),
        };

        debug!("adding expense {}", expense.id);
        self.expenses.push(expense.clone());
        self.dirty = true;

        Ok(AddOutcome {
            expense,
            category_warning,
        })
    }

    /// Change the amount, description and optionally category of an expense
    ///
    /// Nothing is modified unless every argument is valid and the id exists.
    pub fn update(
        &mut self,
        id: ExpenseId,
        amount: &str,
        description: impl Into<String>,
        category: Option<&str>,
    ) -> LedgerResult<Expense> {
        let amount = parse_amount(amount)?;
        let category = category
            .map(str::parse::<ExpenseCategory>)
            .transpose()?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        expense.revise(amount, description, category);
        debug!("updated expense {}", id);
        self.dirty = true;

        Ok(expense.clone())
    }

    /// Remove an expense, returning it
    pub fn delete(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        debug!("deleted expense {}", id);
        self.dirty = true;

        Ok(removed)
    }

    /// Turn user input into an expense id
    ///
    /// Accepts a full UUID (optionally `exp-` prefixed) or the leading hex
    /// digits of an existing id, as shown by `list`.
    pub fn resolve_id(&self, identifier: &str) -> LedgerResult<ExpenseId> {
        if let Ok(id) = ExpenseId::parse(identifier) {
            return Ok(id);
        }

        let trimmed = identifier.trim();
        let prefix = trimmed
            .strip_prefix("exp-")
            .unwrap_or(trimmed)
            .replace('-', "")
            .to_ascii_lowercase();

        if prefix.len() < MIN_ID_PREFIX || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LedgerError::Validation(format!(
                "Invalid expense id: '{}'",
                trimmed
            )));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.simple().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id),
            (None, _) => Err(LedgerError::expense_not_found(trimmed)),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Expense id '{}' is ambiguous; use more characters",
                trimmed
            ))),
        }
    }

    /// Enumerate expenses in insertion order
    pub fn list(&self, filter: ListFilter) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| filter.matches(e))
    }

    /// Total of every expense
    pub fn summarize(&self) -> LedgerResult<Summary> {
        if self.expenses.is_empty() {
            return Ok(Summary::Empty);
        }

        Ok(Summary::Total {
            count: self.expenses.len(),
            total: total_of(self.expenses.iter(), "summary")?,
        })
    }

    /// Expenses dated in `month` of any year, with their total
    pub fn summarize_by_month(&self, month: MonthOfYear) -> LedgerResult<MonthSummary<'_>> {
        let expenses: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .collect();
        let total = total_of(expenses.iter().copied(), &month.to_string())?;

        Ok(MonthSummary {
            month,
            expenses,
            total,
        })
    }

    /// Expenses in a category given as a case-insensitive token
    ///
    /// Unlike `add`, an unknown token is an error and yields nothing.
    pub fn filter_by_category(&self, token: &str) -> LedgerResult<CategoryListing<'_>> {
        let category: ExpenseCategory = token.parse()?;
        Ok(CategoryListing {
            category,
            expenses: self.list(ListFilter::Category(category)).collect(),
        })
    }
}

fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|_| LedgerError::AmountFormat(input.to_string()))
}

/// Checked sum of expense amounts; `what` names the total in the error
pub(crate) fn total_of<'a, I>(expenses: I, what: &str) -> LedgerResult<Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    Money::checked_sum(expenses.into_iter().map(|e| e.amount))
        .ok_or_else(|| LedgerError::Overflow(format!("{} exceeds the supported range", what)))
}
