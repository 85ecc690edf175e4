//! Projection and aggregation engine: pure functions over caller-owned
//! record collections and an explicit observation date.

pub mod aggregate;
pub mod contributions;
pub mod filter;
pub mod periods;
pub mod valuation;

pub use aggregate::MonthlyBudget;
pub use contributions::ContributionEntry;
pub use filter::ExpenseFilter;
pub use valuation::{PortfolioTotals, Valuation};
