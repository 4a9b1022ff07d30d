//! Account service implementation.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use saldo_shared::types::{AccountId, Money, UserId};

use super::error::AccountError;
use super::types::{Account, OpenAccountInput};
use crate::store::AccountStore;

/// Service for opening accounts and reading balances.
pub struct AccountService<A: AccountStore> {
    accounts: Arc<A>,
    default_currency: String,
}

impl<A: AccountStore> AccountService<A> {
    /// Creates a new account service.
    ///
    /// `default_currency` is assigned to accounts opened without an explicit
    /// currency (`AppConfig.account.default_currency` at composition time).
    #[must_use]
    pub fn new(accounts: Arc<A>, default_currency: impl Into<String>) -> Self {
        Self {
            accounts,
            default_currency: default_currency.into(),
        }
    }

    /// Opens a new account for the owner.
    pub fn open(&self, input: OpenAccountInput, owner_id: UserId) -> Result<Account, AccountError> {
        let currency = input
            .currency
            .unwrap_or_else(|| self.default_currency.clone());

        let account = Account::open(owner_id, input.name, input.initial_balance, currency, Utc::now());
        self.accounts.save(&account)?;

        info!(account_id = %account.id, owner_id = %owner_id, "Account opened");
        Ok(account)
    }

    /// Returns the account with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] if the account does not exist.
    pub fn get(&self, id: AccountId) -> Result<Account, AccountError> {
        self.accounts
            .find_by_id(id)?
            .ok_or(AccountError::NotFound(id))
    }

    /// Lists all accounts belonging to the owner.
    pub fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Account>, AccountError> {
        Ok(self.accounts.find_by_owner(owner_id)?)
    }

    /// Returns the owner's total balance across all accounts, at scale 2.
    pub fn total_balance(&self, owner_id: UserId) -> Result<Money, AccountError> {
        let total = self.accounts.sum_balance_by_owner(owner_id)?;
        Ok(Money::new(total))
    }
}
