//! Transaction entity and inputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saldo_shared::types::{AccountId, CategoryId, CompetenceId, Money, TransactionId, UserId};

use crate::ledger::{TransactionStatus, TransactionType};

/// A categorized financial transaction attributed to a competence period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Account the transaction settles against.
    pub account_id: AccountId,
    /// Category classifying the transaction.
    pub category_id: CategoryId,
    /// Competence period the transaction is attributed to.
    pub competence_id: CompetenceId,
    /// Owning user.
    pub owner_id: UserId,
    /// Non-owning back-reference to another transaction (e.g., the first of
    /// an installment series). Never traversed for balance logic.
    pub parent_id: Option<TransactionId>,
    /// Free-form description.
    pub description: String,
    /// Positive amount at scale 2.
    pub amount: Money,
    /// When the transaction happened (independent of the competence).
    pub date_time: DateTime<Utc>,
    /// Revenue or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Settlement status.
    pub status: TransactionStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a new transaction, forcing the amount to scale 2.
    #[must_use]
    pub fn create(
        input: &CreateTransactionInput,
        kind: TransactionType,
        status: TransactionStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id: input.account_id,
            category_id: input.category_id,
            competence_id: input.competence_id,
            owner_id: input.owner_id,
            parent_id: input.parent_id,
            description: input.description.clone(),
            amount: Money::new(input.amount),
            date_time: input.date_time,
            kind,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the transaction's effect is settled into the balance.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}

/// Input for creating a new transaction.
///
/// `kind` and `status` arrive as raw tokens and are parsed case-insensitively
/// by the manager, the single parse path for external input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionInput {
    /// Account to settle against.
    pub account_id: AccountId,
    /// Category to classify under.
    pub category_id: CategoryId,
    /// Competence period to attribute to.
    pub competence_id: CompetenceId,
    /// Owning user.
    pub owner_id: UserId,
    /// Optional installment-series back-reference.
    pub parent_id: Option<TransactionId>,
    /// Free-form description.
    pub description: String,
    /// Positive amount; rounded to scale 2 on creation.
    pub amount: Decimal,
    /// When the transaction happened.
    pub date_time: DateTime<Utc>,
    /// Type token: `REVENUE` or `EXPENSE`, any case.
    #[serde(rename = "type")]
    pub kind: String,
    /// Status token: `PENDING` or `PAID`, any case.
    pub status: String,
}
