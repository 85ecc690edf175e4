use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinguishes records that repeat every month from ones that happen once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Cadence {
    Recurring,
    OneTime,
}

/// Common read-only surface of expense and income records.
///
/// The aggregator and the summary folds are generic over this trait so that
/// the month-matching and grouping logic exists exactly once for both record
/// kinds.
pub trait CashFlow {
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
    fn cadence(&self) -> Cadence;
    /// Grouping label: an expense's category, an income's source.
    fn label(&self) -> &str;
}
