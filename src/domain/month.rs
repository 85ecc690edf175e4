use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// A `(year, month)` pair selecting the observation month for aggregation
/// and filtering. Canonical string form is `YYYY-MM`.
///
/// Ordering is lexicographic on `(year, month)`, which is exactly the
/// "recurring record active on or before" comparison both the aggregator and
/// the filter engine rely on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, TrackerError> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::InvalidMonthKey(format!(
                "month {month} out of range"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a calendar date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month, the reference point for instrument activity.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated month")
    }

    /// True when a recurring record dated `date` has already started by this
    /// month. Day-of-month is deliberately ignored: a record dated anywhere
    /// inside the selected month counts as active for it.
    pub fn includes_recurring(&self, date: NaiveDate) -> bool {
        MonthKey::from_date(date) <= *self
    }

    /// True when a one-time record dated `date` falls exactly in this month.
    pub fn matches_one_time(&self, date: NaiveDate) -> bool {
        MonthKey::from_date(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidMonthKey(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month).map_err(|_| invalid())
    }
}
