//! Error types for account operations.

use thiserror::Error;

use saldo_shared::types::AccountId;

use crate::store::StoreError;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Referenced account does not exist.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// Storage collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Store(_) => 500,
        }
    }
}
