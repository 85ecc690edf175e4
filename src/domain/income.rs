use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Cadence, CashFlow};

/// An income record, shaped like [`crate::domain::Expense`] but grouped by
/// source rather than category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeRecord {
    pub id: String,
    pub source: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub cadence: Cadence,
}

impl IncomeRecord {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        cadence: Cadence,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            description: description.into(),
            amount,
            date,
            cadence,
        }
    }
}

impl CashFlow for IncomeRecord {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn cadence(&self) -> Cadence {
        self.cadence
    }

    fn label(&self) -> &str {
        &self.source
    }
}
