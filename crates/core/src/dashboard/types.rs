//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saldo_shared::types::{CompetenceId, Money};

use crate::ledger::TransactionType;

/// Classification of a period balance by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceStatus {
    /// Balance is strictly positive.
    Positive,
    /// Balance is strictly negative.
    Negative,
    /// Balance is exactly zero.
    Neutral,
}

impl BalanceStatus {
    /// Classifies a balance by its sign.
    #[must_use]
    pub fn from_balance(balance: Money) -> Self {
        match balance.cmp(&Money::zero()) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Neutral,
        }
    }
}

/// Summary of a single competence period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Total settled revenue.
    pub total_revenue: Money,
    /// Total settled expenses.
    pub total_expenses: Money,
    /// `total_revenue - total_expenses`.
    pub balance: Money,
    /// Sign classification of the balance.
    pub status: BalanceStatus,
}

/// One row of the expense-by-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category display name.
    pub category_name: String,
    /// Category display color.
    pub color_hex: String,
    /// Settled expense total for the category.
    pub total_amount: Money,
    /// Share of the period's total expenses, scale-2 percent.
    pub percentage: Decimal,
}

/// One point of the multi-period evolution series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyEvolution {
    /// Month in `[1, 12]`.
    pub month: u32,
    /// Year.
    pub year: i32,
    /// Period label, `"MM/YYYY"`.
    pub label: String,
    /// Total settled revenue for the period.
    pub total_revenue: Money,
    /// Total settled expenses for the period.
    pub total_expenses: Money,
    /// `total_revenue - total_expenses`.
    pub balance: Money,
}

/// Store projection: settled expense total per category. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExpenseSummary {
    /// Category display name.
    pub category_name: String,
    /// Category display color.
    pub color_hex: String,
    /// Raw settled expense total.
    pub total_amount: Decimal,
}

/// Store projection: settled total per (competence, type). Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetenceAmountSummary {
    /// Competence period.
    pub competence_id: CompetenceId,
    /// Revenue or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Raw settled total.
    pub total_amount: Decimal,
}
