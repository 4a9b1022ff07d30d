//! Account entity and inputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saldo_shared::types::{AccountId, Money, UserId};

use crate::ledger::TransactionType;

/// A personal financial account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Owning user.
    pub owner_id: UserId,
    /// Display name (e.g., "Checking").
    pub name: String,
    /// Current balance: sum of all settled transaction effects, scale 2.
    pub balance: Money,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Opens a new account, rounding the initial balance to scale 2.
    #[must_use]
    pub fn open(
        owner_id: UserId,
        name: String,
        initial_balance: Decimal,
        currency: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            owner_id,
            name,
            balance: Money::new(initial_balance),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a settled amount to the balance.
    ///
    /// EXPENSE subtracts, REVENUE adds; the result is re-rounded to scale 2
    /// half-to-even. Callers must go through
    /// [`crate::ledger::LedgerService`], which guards the PAID precondition.
    pub fn update_balance(&mut self, amount: Money, kind: TransactionType) {
        self.balance = match kind {
            TransactionType::Expense => self.balance.subtract(amount),
            TransactionType::Revenue => self.balance.add(amount),
        };
    }
}

/// Input for opening a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAccountInput {
    /// Display name.
    pub name: String,
    /// Starting balance; rounded to scale 2 on open.
    pub initial_balance: Decimal,
    /// Currency code; falls back to the configured default when absent.
    pub currency: Option<String>,
}
