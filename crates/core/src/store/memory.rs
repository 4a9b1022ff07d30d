//! In-memory store for tests and demos.
//!
//! Backed by `Vec`s behind mutexes so that grouped aggregates keep insertion
//! order, which is what the stable tie-breaking in the dashboard relies on.
//! Not a storage engine: single-process, no durability.

use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;

use saldo_shared::types::{AccountId, CategoryId, CompetenceId, TransactionId, UserId};

use super::{
    AccountStore, CategoryStore, CompetenceStore, StoreError, TransactionStore,
};
use crate::account::Account;
use crate::category::Category;
use crate::competence::Competence;
use crate::dashboard::{CategoryExpenseSummary, CompetenceAmountSummary};
use crate::ledger::TransactionType;
use crate::transaction::Transaction;

/// In-memory implementation of all four store contracts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
    transactions: Mutex<Vec<Transaction>>,
    competences: Mutex<Vec<Competence>>,
    categories: Mutex<Vec<Category>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Database("poisoned lock".to_string()))
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a category. Categories are reference data the core never
    /// writes, so they enter the store out of band.
    pub fn put_category(&self, category: Category) -> Result<(), StoreError> {
        let mut categories = lock(&self.categories)?;
        if let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            categories.push(category);
        }
        Ok(())
    }
}

impl AccountStore for MemoryStore {
    fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(lock(&self.accounts)?.iter().find(|a| a.id == id).cloned())
    }

    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Account>, StoreError> {
        Ok(lock(&self.accounts)?
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn save(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = lock(&self.accounts)?;
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        } else {
            accounts.push(account.clone());
        }
        Ok(())
    }

    fn sum_balance_by_owner(&self, owner_id: UserId) -> Result<Decimal, StoreError> {
        Ok(lock(&self.accounts)?
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .map(|a| a.balance.amount())
            .sum())
    }
}

impl TransactionStore for MemoryStore {
    fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(lock(&self.transactions)?
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        Ok(lock(&self.transactions)?
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn find_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, StoreError> {
        Ok(lock(&self.transactions)?
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    fn find_by_competence(
        &self,
        competence_id: CompetenceId,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(lock(&self.transactions)?
            .iter()
            .filter(|t| t.competence_id == competence_id)
            .cloned()
            .collect())
    }

    fn save(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let mut transactions = lock(&self.transactions)?;
        if let Some(existing) = transactions.iter_mut().find(|t| t.id == transaction.id) {
            *existing = transaction.clone();
        } else {
            transactions.push(transaction.clone());
        }
        Ok(())
    }

    fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        lock(&self.transactions)?.retain(|t| t.id != id);
        Ok(())
    }

    fn sum_by_competence_and_type(
        &self,
        competence_id: CompetenceId,
        kind: TransactionType,
    ) -> Result<Decimal, StoreError> {
        Ok(lock(&self.transactions)?
            .iter()
            .filter(|t| t.competence_id == competence_id && t.kind == kind && t.is_paid())
            .map(|t| t.amount.amount())
            .sum())
    }

    fn sum_expenses_by_category(
        &self,
        competence_id: CompetenceId,
    ) -> Result<Vec<CategoryExpenseSummary>, StoreError> {
        let transactions = lock(&self.transactions)?;
        let categories = lock(&self.categories)?;

        // Group in first-seen order, the insertion order of the ledger.
        let mut groups: Vec<(CategoryId, Decimal)> = Vec::new();
        for t in transactions.iter().filter(|t| {
            t.competence_id == competence_id && t.kind == TransactionType::Expense && t.is_paid()
        }) {
            match groups.iter_mut().find(|(id, _)| *id == t.category_id) {
                Some((_, total)) => *total += t.amount.amount(),
                None => groups.push((t.category_id, t.amount.amount())),
            }
        }

        Ok(groups
            .into_iter()
            .filter_map(|(category_id, total_amount)| {
                categories
                    .iter()
                    .find(|c| c.id == category_id)
                    .map(|category| CategoryExpenseSummary {
                        category_name: category.name.clone(),
                        color_hex: category.color_hex.clone(),
                        total_amount,
                    })
            })
            .collect())
    }

    fn sum_by_competence_ids(
        &self,
        competence_ids: &[CompetenceId],
    ) -> Result<Vec<CompetenceAmountSummary>, StoreError> {
        let transactions = lock(&self.transactions)?;

        let mut groups: Vec<CompetenceAmountSummary> = Vec::new();
        for t in transactions.iter().filter(|t| {
            competence_ids.contains(&t.competence_id) && t.is_paid()
        }) {
            match groups
                .iter_mut()
                .find(|g| g.competence_id == t.competence_id && g.kind == t.kind)
            {
                Some(group) => group.total_amount += t.amount.amount(),
                None => groups.push(CompetenceAmountSummary {
                    competence_id: t.competence_id,
                    kind: t.kind,
                    total_amount: t.amount.amount(),
                }),
            }
        }

        Ok(groups)
    }
}

impl CompetenceStore for MemoryStore {
    fn find_by_id(&self, id: CompetenceId) -> Result<Option<Competence>, StoreError> {
        Ok(lock(&self.competences)?
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Competence>, StoreError> {
        Ok(lock(&self.competences)?
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn find_by_owner_ordered_desc(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<Competence>, StoreError> {
        let mut competences: Vec<Competence> = lock(&self.competences)?
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        competences.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        Ok(competences)
    }

    fn find_by_owner_month_year(
        &self,
        owner_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Option<Competence>, StoreError> {
        Ok(lock(&self.competences)?
            .iter()
            .find(|c| c.owner_id == owner_id && c.month == month && c.year == year)
            .cloned())
    }

    fn save(&self, competence: &Competence) -> Result<(), StoreError> {
        let mut competences = lock(&self.competences)?;
        if let Some(existing) = competences.iter_mut().find(|c| c.id == competence.id) {
            *existing = competence.clone();
        } else {
            competences.push(competence.clone());
        }
        Ok(())
    }
}

impl CategoryStore for MemoryStore {
    fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(lock(&self.categories)?.iter().find(|c| c.id == id).cloned())
    }
}
