//! Error types for ledger and transaction lifecycle operations.
//!
//! All variants are terminal business errors surfaced to the caller; the
//! core performs no internal retries. Transient storage failures pass
//! through unchanged as [`StoreError`].

use thiserror::Error;

use saldo_shared::types::{AccountId, CategoryId, CompetenceId, TransactionId};

use crate::store::StoreError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Referenced account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Referenced category does not exist.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Referenced competence does not exist.
    #[error("Competence not found: {0}")]
    CompetenceNotFound(CompetenceId),

    /// Referenced transaction does not exist.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Unrecognized transaction type token.
    #[error("Invalid transaction type: {0}. Must be REVENUE or EXPENSE")]
    InvalidType(String),

    /// Unrecognized transaction status token.
    #[error("Invalid transaction status: {0}. Must be PENDING or PAID")]
    InvalidStatus(String),

    /// Storage collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            Self::CompetenceNotFound(_) => "COMPETENCE_NOT_FOUND",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::InvalidType(_) | Self::InvalidStatus(_) => "INVALID_TRANSACTION",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::AccountNotFound(_)
            | Self::CategoryNotFound(_)
            | Self::CompetenceNotFound(_)
            | Self::TransactionNotFound(_) => 404,

            Self::InvalidType(_) | Self::InvalidStatus(_) => 400,

            Self::Store(_) => 500,
        }
    }
}
