use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Cadence, CashFlow};

/// A spending record. The `id` is an opaque unique string assigned by the
/// layer that creates the record; the engine never generates identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub cadence: Cadence,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        cadence: Cadence,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            description: description.into(),
            amount,
            date,
            cadence,
        }
    }
}

impl CashFlow for Expense {
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
        &self.category
    }
}
