//! Predicate filtering over the expense collection.

use std::collections::BTreeMap;

use crate::domain::{Cadence, Expense, MonthKey};
use crate::engine::aggregate::totals_by_label;

/// Conjunction of up to three expense predicates. An absent field disables
/// that predicate entirely; present fields are exact-match. Month semantics
/// are the shared [`MonthKey`] predicates: a recurring expense matches every
/// month from its start month onward, a one-time expense only its own month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub month: Option<MonthKey>,
    pub category: Option<String>,
    pub cadence: Option<Cadence>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = Some(cadence);
        self
    }

    /// The matching subset, preserving the input's relative order.
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .collect()
    }

    fn matches(&self, expense: &Expense) -> bool {
        let month_match = match self.month {
            None => true,
            Some(month) => match expense.cadence {
                Cadence::Recurring => month.includes_recurring(expense.date),
                Cadence::OneTime => month.matches_one_time(expense.date),
            },
        };
        let category_match = self
            .category
            .as_deref()
            .map_or(true, |category| expense.category == category);
        let cadence_match = self
            .cadence
            .map_or(true, |cadence| expense.cadence == cadence);
        month_match && category_match && cadence_match
    }

    /// Per-category totals over the matching subset.
    pub fn totals_by_category(&self, expenses: &[Expense]) -> BTreeMap<String, f64> {
        totals_by_label(self.apply(expenses))
    }

    /// Grand total of the matching subset.
    pub fn total(&self, expenses: &[Expense]) -> f64 {
        self.apply(expenses)
            .iter()
            .map(|expense| expense.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(s: &str) -> MonthKey {
        s.parse().expect("valid month key")
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(
                "e-1",
                "Rent/EMI",
                "rent",
                2000.0,
                sample_date(2024, 1, 5),
                Cadence::Recurring,
            ),
            Expense::new(
                "e-2",
                "Food & Dining",
                "groceries",
                450.0,
                sample_date(2024, 3, 10),
                Cadence::OneTime,
            ),
            Expense::new(
                "e-3",
                "Food & Dining",
                "restaurant",
                120.0,
                sample_date(2024, 4, 2),
                Cadence::OneTime,
            ),
        ]
    }

    #[test]
    fn no_predicates_pass_everything_through_in_order() {
        let expenses = sample_expenses();
        let filtered = ExpenseFilter::new().apply(&expenses);
        let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e-1", "e-2", "e-3"]);
    }

    #[test]
    fn month_filter_keeps_active_recurring_and_exact_one_time() {
        let expenses = sample_expenses();
        let filtered = ExpenseFilter::new().with_month(month("2024-03")).apply(&expenses);
        let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        // The recurring rent started earlier, the March one-time matches,
        // the April one-time does not.
        assert_eq!(ids, ["e-1", "e-2"]);
    }

    #[test]
    fn month_before_every_record_matches_nothing() {
        let expenses = sample_expenses();
        let filtered = ExpenseFilter::new().with_month(month("2023-12")).apply(&expenses);
        assert!(filtered.is_empty());
    }

    #[test]
    fn category_and_cadence_are_exact_match_conjuncts() {
        let expenses = sample_expenses();
        let filtered = ExpenseFilter::new()
            .with_month(month("2024-03"))
            .with_category("Food & Dining")
            .with_cadence(Cadence::OneTime)
            .apply(&expenses);
        let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e-2"]);
    }

    #[test]
    fn empty_optional_predicates_equal_month_only_filtering() {
        // Absent category and cadence reduce the filter to the month subset.
        let expenses = sample_expenses();
        let month_only = ExpenseFilter::new().with_month(month("2024-04"));
        let ids: Vec<_> = month_only.apply(&expenses).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e-1", "e-3"]);
    }

    #[test]
    fn filtered_totals_cover_only_the_subset() {
        let expenses = sample_expenses();
        let filter = ExpenseFilter::new().with_month(month("2024-03"));
        assert_eq!(filter.total(&expenses), 2450.0);
        let totals = filter.totals_by_category(&expenses);
        assert_eq!(totals["Rent/EMI"], 2000.0);
        assert_eq!(totals["Food & Dining"], 450.0);
    }
}
