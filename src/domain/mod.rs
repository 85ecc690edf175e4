//! Domain record types and the shared calendar-month selector.

pub mod book;
pub mod common;
pub mod expense;
pub mod income;
pub mod investment;
pub mod month;

pub use book::Book;
pub use common::{Cadence, CashFlow};
pub use expense::Expense;
pub use income::IncomeRecord;
pub use investment::{InstrumentKind, Investment};
pub use month::MonthKey;
