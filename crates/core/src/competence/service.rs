//! Competence service: find-or-create accounting periods.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use tracing::info;

use saldo_shared::types::UserId;

use super::error::CompetenceError;
use super::types::Competence;
use crate::store::CompetenceStore;

/// Service resolving accounting periods for an owner.
pub struct CompetenceService<C: CompetenceStore> {
    competences: Arc<C>,
}

impl<C: CompetenceStore> CompetenceService<C> {
    /// Creates a new competence service.
    #[must_use]
    pub fn new(competences: Arc<C>) -> Self {
        Self { competences }
    }

    /// Returns the competence for an explicit month/year, creating it if it
    /// does not exist yet.
    ///
    /// Creating is never an error path: a duplicate request is idempotent
    /// and returns the pre-existing record.
    ///
    /// # Errors
    ///
    /// Returns [`CompetenceError::InvalidMonth`] / [`CompetenceError::InvalidYear`]
    /// when the period is out of range.
    pub fn create_or_return(
        &self,
        owner_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Competence, CompetenceError> {
        if !(1..=12).contains(&month) {
            return Err(CompetenceError::InvalidMonth(month));
        }
        if year < 2000 {
            return Err(CompetenceError::InvalidYear(year));
        }

        if let Some(existing) = self.competences.find_by_owner_month_year(owner_id, month, year)? {
            return Ok(existing);
        }

        let competence = Competence::new(owner_id, month, year, Utc::now());
        self.competences.save(&competence)?;

        info!(
            competence_id = %competence.id,
            owner_id = %owner_id,
            period = %competence.label(),
            "Competence created"
        );
        Ok(competence)
    }

    /// Returns the competence for the caller's current month, creating it if
    /// needed. The wall clock is caller-supplied.
    pub fn get_or_create_current(
        &self,
        owner_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<Competence, CompetenceError> {
        self.create_or_return(owner_id, now.month(), now.year())
    }

    /// Lists the owner's competences ordered by (year desc, month desc).
    pub fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Competence>, CompetenceError> {
        Ok(self.competences.find_by_owner_ordered_desc(owner_id)?)
    }
}
