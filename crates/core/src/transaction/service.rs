//! Transaction lifecycle manager.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use saldo_shared::types::{AccountId, CompetenceId, TransactionId, UserId};

use super::types::{CreateTransactionInput, Transaction};
use crate::ledger::{LedgerError, LedgerService, TransactionStatus, TransactionType};
use crate::store::{AccountStore, CategoryStore, CompetenceStore, TransactionStore};

/// Manager for the PENDING↔PAID transaction lifecycle.
///
/// Every mutating operation writes the transaction and, when a settled
/// effect is involved, the account balance. The two writes form a single
/// unit of work: the storage adapter must commit them atomically and
/// serialize concurrent mutations on the same account (row locking or
/// optimistic versioning); the core itself takes no locks.
pub struct TransactionManager<A, T, C, K>
where
    A: AccountStore,
    T: TransactionStore,
    C: CategoryStore,
    K: CompetenceStore,
{
    accounts: Arc<A>,
    transactions: Arc<T>,
    categories: Arc<C>,
    competences: Arc<K>,
}

impl<A, T, C, K> TransactionManager<A, T, C, K>
where
    A: AccountStore,
    T: TransactionStore,
    C: CategoryStore,
    K: CompetenceStore,
{
    /// Creates a new transaction manager.
    #[must_use]
    pub fn new(accounts: Arc<A>, transactions: Arc<T>, categories: Arc<C>, competences: Arc<K>) -> Self {
        Self {
            accounts,
            transactions,
            categories,
            competences,
        }
    }

    /// Creates a transaction after validating every referenced entity.
    ///
    /// The amount is forced to scale 2. When the initial status is PAID the
    /// ledger effect is applied immediately and the account persisted; a
    /// PENDING transaction leaves the balance untouched.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the account, category, or competence
    /// is missing, before any write occurs, and
    /// [`LedgerError::InvalidType`] / [`LedgerError::InvalidStatus`] for
    /// unrecognized tokens.
    pub fn create(&self, input: CreateTransactionInput) -> Result<Transaction, LedgerError> {
        let mut account = self
            .accounts
            .find_by_id(input.account_id)?
            .ok_or(LedgerError::AccountNotFound(input.account_id))?;

        self.categories
            .find_by_id(input.category_id)?
            .ok_or(LedgerError::CategoryNotFound(input.category_id))?;

        self.competences
            .find_by_id(input.competence_id)?
            .ok_or(LedgerError::CompetenceNotFound(input.competence_id))?;

        let kind = TransactionType::parse(&input.kind)?;
        let status = TransactionStatus::parse(&input.status)?;

        let transaction = Transaction::create(&input, kind, status, Utc::now());
        self.transactions.save(&transaction)?;

        LedgerService::apply_effect(&transaction, &mut account);
        self.accounts.save(&account)?;

        info!(
            transaction_id = %transaction.id,
            account_id = %account.id,
            kind = %kind,
            status = %status,
            "Transaction created"
        );
        Ok(transaction)
    }

    /// Transitions a transaction between PENDING and PAID.
    ///
    /// A same-state update is a silent no-op returning the current record.
    /// PENDING→PAID applies the ledger effect; PAID→PENDING reverses the
    /// effect using the pre-change state. No other transitions exist.
    pub fn update_status(
        &self,
        id: TransactionId,
        status_token: &str,
    ) -> Result<Transaction, LedgerError> {
        let mut transaction = self
            .transactions
            .find_by_id(id)?
            .ok_or(LedgerError::TransactionNotFound(id))?;

        let mut account = self
            .accounts
            .find_by_id(transaction.account_id)?
            .ok_or(LedgerError::AccountNotFound(transaction.account_id))?;

        let new_status = TransactionStatus::parse(status_token)?;
        let old_status = transaction.status;

        if old_status == new_status {
            return Ok(transaction);
        }

        if new_status.is_paid() {
            transaction.status = TransactionStatus::Paid;
            LedgerService::apply_effect(&transaction, &mut account);
        } else {
            // Reverse while the transaction still reads as PAID.
            LedgerService::reverse_effect(&transaction, &mut account);
            transaction.status = TransactionStatus::Pending;
        }
        transaction.updated_at = Utc::now();

        self.transactions.save(&transaction)?;
        self.accounts.save(&account)?;

        info!(
            transaction_id = %transaction.id,
            from = %old_status,
            to = %new_status,
            "Transaction status updated"
        );
        Ok(transaction)
    }

    /// Deletes a transaction.
    ///
    /// A PAID transaction has its effect reversed and the account persisted
    /// before the row is removed. Deleting a PENDING transaction leaves the
    /// balance untouched.
    pub fn delete(&self, id: TransactionId) -> Result<(), LedgerError> {
        let transaction = self
            .transactions
            .find_by_id(id)?
            .ok_or(LedgerError::TransactionNotFound(id))?;

        if transaction.is_paid() {
            let mut account = self
                .accounts
                .find_by_id(transaction.account_id)?
                .ok_or(LedgerError::AccountNotFound(transaction.account_id))?;

            LedgerService::reverse_effect(&transaction, &mut account);
            self.accounts.save(&account)?;
        }

        self.transactions.delete(id)?;

        info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    /// Returns the transaction with the given id.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.transactions
            .find_by_id(id)?
            .ok_or(LedgerError::TransactionNotFound(id))
    }

    /// Lists all transactions belonging to the owner.
    pub fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.find_by_owner(owner_id)?)
    }

    /// Lists the transactions settling against an account.
    pub fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.find_by_account(account_id)?)
    }

    /// Lists the transactions attributed to a competence period.
    pub fn list_by_competence(
        &self,
        competence_id: CompetenceId,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.find_by_competence(competence_id)?)
    }
}
