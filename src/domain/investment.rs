use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of supported instrument kinds, each with its own compounding
/// rule in the valuation engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstrumentKind {
    /// Single deposit, annually-compounded growth (fixed deposit).
    LumpSum,
    /// Fixed amount contributed every month, monthly-compounded.
    RecurringDeposit,
    /// Fixed 15-year recurring-contribution instrument with annual
    /// compounding on accumulated yearly blocks.
    ProvidentFund,
    /// Single deposit, simple (non-compounding) interest.
    Savings,
}

/// Provident fund terms are fixed at 15 years regardless of requested input.
pub const PROVIDENT_FUND_MONTHS: u32 = 180;

/// An investment instrument. Immutable once created; replaced wholesale on
/// edits. For periodic kinds `amount` is the per-month contribution, for
/// one-shot kinds it is the single deposit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub kind: InstrumentKind,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub duration_months: u32,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
}

impl Investment {
    pub fn new(
        kind: InstrumentKind,
        amount: f64,
        start_date: NaiveDate,
        duration_months: u32,
        interest_rate: f64,
    ) -> Self {
        let duration_months = match kind {
            InstrumentKind::ProvidentFund => PROVIDENT_FUND_MONTHS,
            _ => duration_months,
        };
        Self {
            kind,
            amount,
            start_date,
            duration_months,
            interest_rate,
        }
    }

    /// Effective term in months. `duration_months` already carries the
    /// provident-fund normalization, so this is a plain accessor kept for
    /// readability at call sites.
    pub fn total_months(&self) -> u32 {
        self.duration_months
    }

    /// Kinds that contribute every month rather than once up front.
    pub fn is_periodic(&self) -> bool {
        matches!(
            self.kind,
            InstrumentKind::RecurringDeposit | InstrumentKind::ProvidentFund
        )
    }
}
