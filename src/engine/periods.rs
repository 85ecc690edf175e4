//! Calendar arithmetic shared by the valuation, ledger, and aggregation
//! paths: elapsed whole contribution periods and month-shifted dates.

use chrono::{Datelike, Duration, NaiveDate};

/// Whole monthly periods completed between `start` and `now`.
///
/// A period completes on its monthly anniversary day-of-month, not at the
/// month boundary: the raw year/month difference is incremented once the
/// due day has passed (`now.day >= start.day`). Never negative, and
/// monotonically non-decreasing as `now` advances.
pub fn elapsed_months(start: NaiveDate, now: NaiveDate) -> u32 {
    let mut months =
        (now.year() - start.year()) * 12 + (now.month() as i32 - start.month() as i32);
    if now.day() >= start.day() {
        months += 1;
    }
    months.max(0) as u32
}

/// Nominal end date of an instrument: its start advanced by the whole term.
pub fn maturity_date(start: NaiveDate, duration_months: u32) -> NaiveDate {
    shift_month(start, duration_months as i32)
}

/// Shifts a date by whole calendar months, clamping the day-of-month to the
/// target month's length (Jan 31 + 1 month = Feb 28/29). Clamping keeps
/// month stepping from drifting through short months.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).expect("clamped day is valid")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).expect("day 28 always valid"));
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
