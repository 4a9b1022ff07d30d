//! Competence (accounting period) resolution.
//!
//! A competence is the month/year bucket a transaction is attributed to,
//! independent of the transaction's actual timestamp. Competences are
//! created lazily and are unique per (owner, month, year); creating a
//! duplicate is never an error and returns the pre-existing record.

pub mod error;
pub mod service;
pub mod types;

pub use error::CompetenceError;
pub use service::CompetenceService;
pub use types::Competence;
