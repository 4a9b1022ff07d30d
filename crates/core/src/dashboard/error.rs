//! Error types for dashboard reads.

use thiserror::Error;

use saldo_shared::types::CompetenceId;

use crate::store::StoreError;

/// Errors that can occur during dashboard aggregation.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Referenced competence does not exist.
    #[error("Competence not found: {0}")]
    CompetenceNotFound(CompetenceId),

    /// Storage collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DashboardError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CompetenceNotFound(_) => "COMPETENCE_NOT_FOUND",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::CompetenceNotFound(_) => 404,
            Self::Store(_) => 500,
        }
    }
}
