//! Instrument valuation under kind-specific compounding rules, plus the
//! portfolio rollups the presentation layer charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{InstrumentKind, Investment};
use crate::engine::periods::elapsed_months;

/// Valuation triple for one instrument at a given observation date. All
/// figures are non-negative and rounded to the nearest whole currency unit;
/// the internal math runs on unrounded values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Valuation {
    pub invested_so_far: f64,
    pub current_value: f64,
    pub maturity_value: f64,
}

/// Portfolio-wide sums of the three valuation figures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioTotals {
    pub invested: f64,
    pub current_value: f64,
    pub maturity_value: f64,
}

/// Values one instrument as of `now`.
///
/// Performs no validation: zero amounts, rates, or durations yield zero or
/// otherwise degenerate-but-defined figures rather than errors.
pub fn value(investment: &Investment, now: NaiveDate) -> Valuation {
    let rate = investment.interest_rate / 100.0;
    let elapsed = elapsed_months(investment.start_date, now);
    let total = investment.total_months();
    let amount = investment.amount;

    let (invested, current, maturity) = match investment.kind {
        InstrumentKind::LumpSum => {
            let current = amount * (1.0 + rate).powf(elapsed as f64 / 12.0);
            let maturity = amount * (1.0 + rate).powf(total as f64 / 12.0);
            (amount, current, maturity)
        }
        InstrumentKind::RecurringDeposit => {
            let invested = amount * elapsed as f64;
            let current = deposit_series(amount, rate, elapsed);
            let maturity = deposit_series(amount, rate, total);
            (invested, current, maturity)
        }
        InstrumentKind::ProvidentFund => {
            let elapsed = elapsed.min(total);
            let invested = amount * elapsed as f64;
            let full_years = elapsed / 12;
            let remainder_months = elapsed % 12;
            // Partial-year contributions sit at face value until their first
            // annual compounding event.
            let current =
                yearly_block_series(amount, rate, full_years) + amount * remainder_months as f64;
            // Maturity is always the whole 15-year projection, no remainder.
            let maturity = yearly_block_series(amount, rate, total / 12);
            (invested, current, maturity)
        }
        InstrumentKind::Savings => {
            let current = amount * (1.0 + rate * elapsed as f64 / 12.0);
            let maturity = amount * (1.0 + rate * total as f64 / 12.0);
            (amount, current, maturity)
        }
    };

    Valuation {
        invested_so_far: invested.round(),
        current_value: current.round(),
        maturity_value: maturity.round(),
    }
}

/// Value of `months` monthly deposits, each compounding monthly for the
/// periods remaining after it was made: Σ amount·(1+r/12)^(months−m).
fn deposit_series(amount: f64, rate: f64, months: u32) -> f64 {
    let monthly_rate = 1.0 + rate / 12.0;
    (1..=months)
        .map(|m| amount * monthly_rate.powi((months - m) as i32))
        .sum()
}

/// Value of `years` annual contribution blocks of `amount * 12`, each
/// compounding annually from the year it closed through the last year:
/// Σ yearly·(1+r)^(years−y+1).
fn yearly_block_series(amount: f64, rate: f64, years: u32) -> f64 {
    let yearly_contribution = amount * 12.0;
    (1..=years)
        .map(|y| yearly_contribution * (1.0 + rate).powi((years - y + 1) as i32))
        .sum()
}

/// Sums the valuation triple across a portfolio as of `now`.
pub fn portfolio_totals(investments: &[Investment], now: NaiveDate) -> PortfolioTotals {
    investments.iter().fold(
        PortfolioTotals::default(),
        |mut totals, investment| {
            let valuation = value(investment, now);
            totals.invested += valuation.invested_so_far;
            totals.current_value += valuation.current_value;
            totals.maturity_value += valuation.maturity_value;
            totals
        },
    )
}

/// Invested-so-far totals grouped by instrument kind.
pub fn invested_by_kind(
    investments: &[Investment],
    now: NaiveDate,
) -> BTreeMap<InstrumentKind, f64> {
    fold_by_kind(investments, now, |valuation| valuation.invested_so_far)
}

/// Maturity-value totals grouped by instrument kind.
pub fn maturity_by_kind(
    investments: &[Investment],
    now: NaiveDate,
) -> BTreeMap<InstrumentKind, f64> {
    fold_by_kind(investments, now, |valuation| valuation.maturity_value)
}

fn fold_by_kind(
    investments: &[Investment],
    now: NaiveDate,
    pick: impl Fn(&Valuation) -> f64,
) -> BTreeMap<InstrumentKind, f64> {
    investments.iter().fold(BTreeMap::new(), |mut totals, investment| {
        let valuation = value(investment, now);
        *totals.entry(investment.kind).or_insert(0.0) += pick(&valuation);
        totals
    })
}
