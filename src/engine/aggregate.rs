//! Calendar-month aggregation of income, expense, and investment records.
//!
//! Every function here is a pure fold over caller-owned slices: totals are
//! returned as fresh values rather than maintained in shared state, so a
//! summary can never go stale relative to its inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Cadence, CashFlow, Expense, IncomeRecord, Investment, MonthKey};
use crate::engine::periods::maturity_date;

/// Budget summary for one observation month. `remaining` may go negative;
/// clamping for display is the presentation layer's concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBudget {
    pub income: f64,
    pub expenses: f64,
    pub investments: f64,
    pub remaining: f64,
}

/// Income applying to `month`: recurring records started on or before it
/// plus one-time records dated exactly inside it.
pub fn monthly_income(incomes: &[IncomeRecord], month: MonthKey) -> f64 {
    monthly_cash_total(incomes, month)
}

/// Expenses applying to `month`, under the same rule as [`monthly_income`].
pub fn monthly_expenses(expenses: &[Expense], month: MonthKey) -> f64 {
    monthly_cash_total(expenses, month)
}

fn monthly_cash_total<T: CashFlow>(records: &[T], month: MonthKey) -> f64 {
    records
        .iter()
        .filter(|record| applies_to_month(*record, month))
        .map(CashFlow::amount)
        .sum()
}

fn applies_to_month<T: CashFlow>(record: &T, month: MonthKey) -> bool {
    match record.cadence() {
        Cadence::Recurring => month.includes_recurring(record.date()),
        Cadence::OneTime => month.matches_one_time(record.date()),
    }
}

/// Monthly contribution outflow: the summed amounts of periodic instruments
/// whose `[start, maturity]` interval contains the first day of `month`.
/// Lump-sum and savings instruments are one-time and never contribute.
///
/// The first-day test point means a periodic instrument started mid-month
/// does not count for its own start month; its first counted month is the
/// next one.
pub fn monthly_investments(investments: &[Investment], month: MonthKey) -> f64 {
    let reference = month.first_day();
    investments
        .iter()
        .filter(|investment| {
            investment.is_periodic()
                && reference >= investment.start_date
                && reference <= maturity_date(investment.start_date, investment.duration_months)
        })
        .map(|investment| investment.amount)
        .sum()
}

/// Full budget tuple for `month`.
pub fn budget_for_month(
    incomes: &[IncomeRecord],
    expenses: &[Expense],
    investments: &[Investment],
    month: MonthKey,
) -> MonthlyBudget {
    let income = monthly_income(incomes, month);
    let expense_total = monthly_expenses(expenses, month);
    let investment_total = monthly_investments(investments, month);
    MonthlyBudget {
        income,
        expenses: expense_total,
        investments: investment_total,
        remaining: income - expense_total - investment_total,
    }
}

/// Combined expense and contribution outflow for `month`.
pub fn monthly_spend(expenses: &[Expense], investments: &[Investment], month: MonthKey) -> f64 {
    monthly_expenses(expenses, month) + monthly_investments(investments, month)
}

/// Amount totals grouped by record label (category or source), built fresh
/// by fold. Accepts any iterator of records so it serves both whole
/// collections and filtered subsets.
pub fn totals_by_label<'a, T, I>(records: I) -> BTreeMap<String, f64>
where
    T: CashFlow + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().fold(BTreeMap::new(), |mut totals, record| {
        *totals.entry(record.label().to_string()).or_insert(0.0) += record.amount();
        totals
    })
}

/// Expense totals per category.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    totals_by_label(expenses)
}

/// Income totals per source.
pub fn totals_by_source(incomes: &[IncomeRecord]) -> BTreeMap<String, f64> {
    totals_by_label(incomes)
}

/// Sum of all record amounts regardless of month.
pub fn grand_total<T: CashFlow>(records: &[T]) -> f64 {
    records.iter().map(CashFlow::amount).sum()
}

/// Sum of record amounts with the given cadence.
pub fn cadence_total<T: CashFlow>(records: &[T], cadence: Cadence) -> f64 {
    records
        .iter()
        .filter(|record| record.cadence() == cadence)
        .map(CashFlow::amount)
        .sum()
}
