//! Collaborator contracts for persistence.
//!
//! The core never opens connections or manages schemas: it reaches storage
//! only through these traits, passed in by construction. The traits are
//! synchronous because the core is blocking, request-scoped logic; an async
//! adapter can wrap the calls.
//!
//! Unit-of-work contract: mutating operations in the services pair a
//! transaction write with an account write. Implementations must commit
//! such pairs atomically and serialize concurrent mutations on the same
//! account. Aggregation reads carry no such requirement.

use rust_decimal::Decimal;
use thiserror::Error;

use saldo_shared::types::{AccountId, CategoryId, CompetenceId, TransactionId, UserId};

use crate::account::Account;
use crate::category::Category;
use crate::competence::Competence;
use crate::dashboard::{CategoryExpenseSummary, CompetenceAmountSummary};
use crate::ledger::TransactionType;
use crate::transaction::Transaction;

pub mod memory;

pub use memory::MemoryStore;

/// Storage collaborator failure, surfaced unchanged to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

/// Persistence contract for accounts.
pub trait AccountStore: Send + Sync {
    /// Finds an account by id.
    fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Lists the accounts belonging to an owner.
    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Account>, StoreError>;

    /// Inserts or updates an account.
    fn save(&self, account: &Account) -> Result<(), StoreError>;

    /// Sums the balances of all accounts belonging to an owner.
    fn sum_balance_by_owner(&self, owner_id: UserId) -> Result<Decimal, StoreError>;
}

/// Persistence contract for transactions.
///
/// The aggregate queries cover PAID transactions only: dashboard reads are
/// projections over settled money.
pub trait TransactionStore: Send + Sync {
    /// Finds a transaction by id.
    fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;

    /// Lists the transactions belonging to an owner.
    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Transaction>, StoreError>;

    /// Lists the transactions settling against an account.
    fn find_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, StoreError>;

    /// Lists the transactions attributed to a competence period.
    fn find_by_competence(&self, competence_id: CompetenceId)
    -> Result<Vec<Transaction>, StoreError>;

    /// Inserts or updates a transaction.
    fn save(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Deletes a transaction row.
    fn delete(&self, id: TransactionId) -> Result<(), StoreError>;

    /// Sums PAID amounts of the given type within a competence period.
    fn sum_by_competence_and_type(
        &self,
        competence_id: CompetenceId,
        kind: TransactionType,
    ) -> Result<Decimal, StoreError>;

    /// Sums PAID expenses within a competence period, grouped by category.
    fn sum_expenses_by_category(
        &self,
        competence_id: CompetenceId,
    ) -> Result<Vec<CategoryExpenseSummary>, StoreError>;

    /// Sums PAID amounts per (competence, type) for the given competences,
    /// in one aggregate query. Periods without settled transactions produce
    /// no rows.
    fn sum_by_competence_ids(
        &self,
        competence_ids: &[CompetenceId],
    ) -> Result<Vec<CompetenceAmountSummary>, StoreError>;
}

/// Persistence contract for competences.
pub trait CompetenceStore: Send + Sync {
    /// Finds a competence by id.
    fn find_by_id(&self, id: CompetenceId) -> Result<Option<Competence>, StoreError>;

    /// Lists the competences belonging to an owner, unordered.
    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Competence>, StoreError>;

    /// Lists the competences belonging to an owner, ordered by
    /// (year desc, month desc).
    fn find_by_owner_ordered_desc(&self, owner_id: UserId)
    -> Result<Vec<Competence>, StoreError>;

    /// Finds the unique competence for (owner, month, year).
    fn find_by_owner_month_year(
        &self,
        owner_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Option<Competence>, StoreError>;

    /// Inserts or updates a competence.
    fn save(&self, competence: &Competence) -> Result<(), StoreError>;
}

/// Persistence contract for categories (existence checks and lookups only;
/// the core never mutates categories).
pub trait CategoryStore: Send + Sync {
    /// Finds a category by id.
    fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;
}
