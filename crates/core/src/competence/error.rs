//! Error types for competence operations.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during competence operations.
#[derive(Debug, Error)]
pub enum CompetenceError {
    /// Month outside `[1, 12]`.
    #[error("Invalid competence month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),

    /// Year before 2000.
    #[error("Invalid competence year: {0}. Must be 2000 or later")]
    InvalidYear(i32),

    /// Storage collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CompetenceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) | Self::InvalidYear(_) => "INVALID_COMPETENCE",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidMonth(_) | Self::InvalidYear(_) => 400,
            Self::Store(_) => 500,
        }
    }
}
