//! Dashboard aggregation engine.
//!
//! Read-only projections over settled (PAID) transactions:
//! - Period summary with POSITIVE/NEGATIVE/NEUTRAL classification
//! - Expense breakdown by category with percentages
//! - Multi-period evolution series
//!
//! Reads may run concurrently with mutations; they see whatever the last
//! committed unit of work left behind.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::DashboardError;
pub use service::DashboardService;
pub use types::{
    BalanceStatus, CategoryExpense, CategoryExpenseSummary, CompetenceAmountSummary,
    MonthlyEvolution, PeriodSummary,
};
