//! Per-period contribution ledger for recurring instruments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Investment;
use crate::engine::periods::{elapsed_months, shift_month};

/// One historical periodic contribution: the period's month label (`Jan 24`
/// form) and the amount deposited in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributionEntry {
    pub label: String,
    pub amount: f64,
}

/// Chronological list of contributions made between the instrument's start
/// and the most recently completed period as of `now` (same due-day test as
/// the period calculator).
///
/// Only recurring-deposit and provident-fund instruments contribute
/// periodically; every other kind yields an empty ledger, as does a start
/// date whose first period has not yet completed. The sequence is recomputed
/// fresh on every call and deliberately does not stop at the instrument's
/// term, projecting an ongoing contribution habit.
pub fn contribution_ledger(investment: &Investment, now: NaiveDate) -> Vec<ContributionEntry> {
    if !investment.is_periodic() {
        return Vec::new();
    }
    let periods = elapsed_months(investment.start_date, now);
    (0..periods)
        .map(|offset| {
            let month = shift_month(investment.start_date, offset as i32);
            ContributionEntry {
                label: month.format("%b %y").to_string(),
                amount: investment.amount,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstrumentKind;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recurring_deposit(start: NaiveDate) -> Investment {
        Investment::new(InstrumentKind::RecurringDeposit, 1000.0, start, 12, 6.0)
    }

    #[test]
    fn one_shot_kinds_have_no_ledger() {
        let now = sample_date(2025, 1, 1);
        for kind in [InstrumentKind::LumpSum, InstrumentKind::Savings] {
            let investment = Investment::new(kind, 1000.0, sample_date(2024, 1, 1), 12, 6.0);
            assert!(contribution_ledger(&investment, now).is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn empty_before_the_first_period_completes() {
        let investment = recurring_deposit(sample_date(2024, 3, 15));
        assert!(contribution_ledger(&investment, sample_date(2024, 3, 14)).is_empty());
    }

    #[test]
    fn one_entry_per_completed_period_in_order() {
        let investment = recurring_deposit(sample_date(2024, 1, 15));
        // Elapsed is 3 on the March anniversary.
        let ledger = contribution_ledger(&investment, sample_date(2024, 3, 15));
        let labels: Vec<_> = ledger.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Jan 24", "Feb 24", "Mar 24"]);
        assert!(ledger.iter().all(|entry| entry.amount == 1000.0));
    }

    #[test]
    fn ledger_crosses_year_boundaries() {
        let investment = recurring_deposit(sample_date(2023, 11, 1));
        let ledger = contribution_ledger(&investment, sample_date(2024, 2, 1));
        let labels: Vec<_> = ledger.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Nov 23", "Dec 23", "Jan 24", "Feb 24"]);
    }

    #[test]
    fn day_31_start_does_not_drift_through_short_months() {
        // Month stepping clamps inside February instead of sliding to March,
        // so every month appears exactly once.
        let investment = recurring_deposit(sample_date(2024, 1, 31));
        let ledger = contribution_ledger(&investment, sample_date(2024, 4, 30));
        let labels: Vec<_> = ledger.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Jan 24", "Feb 24", "Mar 24"]);
    }

    #[test]
    fn provident_fund_ledger_matches_elapsed_periods() {
        let ppf = Investment::new(
            InstrumentKind::ProvidentFund,
            2000.0,
            sample_date(2024, 1, 1),
            180,
            7.1,
        );
        let now = sample_date(2024, 6, 10);
        let ledger = contribution_ledger(&ppf, now);
        assert_eq!(ledger.len() as u32, elapsed_months(ppf.start_date, now));
    }
}
