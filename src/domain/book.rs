use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Expense, IncomeRecord, Investment, MonthKey};
use crate::engine::aggregate::{self, MonthlyBudget};
use crate::engine::valuation::{self, PortfolioTotals};
use crate::errors::{Result, TrackerError};

/// Owning session state: the three flat record collections plus bookkeeping
/// timestamps. The engine never holds one of these; callers pass slices of
/// the collections into engine functions and the `Book` merely forwards for
/// convenience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<IncomeRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            investments: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_investment(&mut self, investment: Investment) {
        self.investments.push(investment);
        self.touch();
    }

    pub fn add_expense(&mut self, expense: Expense) {
        tracing::debug!(id = %expense.id, "expense added");
        self.expenses.push(expense);
        self.touch();
    }

    pub fn add_income(&mut self, income: IncomeRecord) {
        tracing::debug!(id = %income.id, "income added");
        self.incomes.push(income);
        self.touch();
    }

    /// Removes the expense identified by `id`, returning the removed record.
    pub fn remove_expense(&mut self, id: &str) -> Result<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(|| TrackerError::RecordNotFound(format!("expense {id}")))?;
        let removed = self.expenses.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Removes the income record identified by `id`, returning it.
    pub fn remove_income(&mut self, id: &str) -> Result<IncomeRecord> {
        let index = self
            .incomes
            .iter()
            .position(|income| income.id == id)
            .ok_or_else(|| TrackerError::RecordNotFound(format!("income {id}")))?;
        let removed = self.incomes.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn clear_investments(&mut self) {
        tracing::debug!(count = self.investments.len(), "clearing investments");
        self.investments.clear();
        self.touch();
    }

    pub fn clear_expenses(&mut self) {
        tracing::debug!(count = self.expenses.len(), "clearing expenses");
        self.expenses.clear();
        self.touch();
    }

    pub fn clear_incomes(&mut self) {
        tracing::debug!(count = self.incomes.len(), "clearing incomes");
        self.incomes.clear();
        self.touch();
    }

    /// Monthly budget summary for the selected month.
    pub fn budget_for_month(&self, month: MonthKey) -> MonthlyBudget {
        aggregate::budget_for_month(&self.incomes, &self.expenses, &self.investments, month)
    }

    /// Portfolio-wide invested/current/maturity totals as of `now`.
    pub fn portfolio_totals(&self, now: NaiveDate) -> PortfolioTotals {
        valuation::portfolio_totals(&self.investments, now)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cadence;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_expense(id: &str) -> Expense {
        Expense::new(
            id,
            "Food & Dining",
            "groceries",
            450.0,
            sample_date(2024, 3, 10),
            Cadence::OneTime,
        )
    }

    #[test]
    fn remove_expense_returns_the_deleted_record() {
        let mut book = Book::new();
        book.add_expense(sample_expense("e-1"));
        book.add_expense(sample_expense("e-2"));

        let removed = book.remove_expense("e-1").expect("expense exists");
        assert_eq!(removed.id, "e-1");
        assert_eq!(book.expenses.len(), 1);
        assert_eq!(book.expenses[0].id, "e-2");
    }

    #[test]
    fn remove_fails_for_unknown_id() {
        let mut book = Book::new();
        let err = book.remove_expense("missing").expect_err("must fail");
        assert!(
            matches!(err, TrackerError::RecordNotFound(ref message) if message.contains("missing")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn mutations_advance_the_updated_timestamp() {
        let mut book = Book::new();
        let before = book.updated_at;
        book.add_expense(sample_expense("e-1"));
        assert!(book.updated_at >= before);
    }

    #[test]
    fn clear_empties_a_single_collection_only() {
        let mut book = Book::new();
        book.add_expense(sample_expense("e-1"));
        book.add_income(IncomeRecord::new(
            "i-1",
            "Salary",
            "",
            5000.0,
            sample_date(2024, 1, 15),
            Cadence::Recurring,
        ));
        book.clear_expenses();
        assert!(book.expenses.is_empty());
        assert_eq!(book.incomes.len(), 1);
    }
}
