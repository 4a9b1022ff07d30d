//! Competence entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use saldo_shared::types::{CompetenceId, UserId};

/// An accounting period (month + year) owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competence {
    /// Unique identifier.
    pub id: CompetenceId,
    /// Owning user.
    pub owner_id: UserId,
    /// Month in `[1, 12]`.
    pub month: u32,
    /// Year, `>= 2000`.
    pub year: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Competence {
    /// Creates a new competence for the given period.
    #[must_use]
    pub fn new(owner_id: UserId, month: u32, year: i32, now: DateTime<Utc>) -> Self {
        Self {
            id: CompetenceId::new(),
            owner_id,
            month,
            year,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the period label as `"MM/YYYY"`, month zero-padded.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}
