//! Dashboard aggregation service.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use saldo_shared::types::{CompetenceId, Money, UserId};

use super::error::DashboardError;
use super::types::{
    BalanceStatus, CategoryExpense, MonthlyEvolution, PeriodSummary,
};
use crate::ledger::TransactionType;
use crate::store::{CompetenceStore, TransactionStore};

/// Default number of competence periods in the evolution series.
pub const DEFAULT_EVOLUTION_WINDOW: usize = 6;

/// Service computing read-only dashboard projections.
pub struct DashboardService<T, C>
where
    T: TransactionStore,
    C: CompetenceStore,
{
    transactions: Arc<T>,
    competences: Arc<C>,
    evolution_window: usize,
}

impl<T, C> DashboardService<T, C>
where
    T: TransactionStore,
    C: CompetenceStore,
{
    /// Creates a dashboard service with the default evolution window.
    #[must_use]
    pub fn new(transactions: Arc<T>, competences: Arc<C>) -> Self {
        Self::with_window(transactions, competences, DEFAULT_EVOLUTION_WINDOW)
    }

    /// Creates a dashboard service with an explicit evolution window
    /// (`AppConfig.dashboard.evolution_window` at composition time).
    #[must_use]
    pub fn with_window(transactions: Arc<T>, competences: Arc<C>, evolution_window: usize) -> Self {
        Self {
            transactions,
            competences,
            evolution_window,
        }
    }

    fn require_competence(&self, competence_id: CompetenceId) -> Result<(), DashboardError> {
        self.competences
            .find_by_id(competence_id)?
            .map(|_| ())
            .ok_or(DashboardError::CompetenceNotFound(competence_id))
    }

    /// Summarizes a competence period: settled revenue, settled expenses,
    /// their difference, and the sign classification.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::CompetenceNotFound`] when the competence
    /// does not exist.
    pub fn summary(&self, competence_id: CompetenceId) -> Result<PeriodSummary, DashboardError> {
        self.require_competence(competence_id)?;

        let total_revenue = Money::new(
            self.transactions
                .sum_by_competence_and_type(competence_id, TransactionType::Revenue)?,
        );
        let total_expenses = Money::new(
            self.transactions
                .sum_by_competence_and_type(competence_id, TransactionType::Expense)?,
        );
        let balance = total_revenue.subtract(total_expenses);

        debug!(competence_id = %competence_id, %balance, "Computed period summary");
        Ok(PeriodSummary {
            total_revenue,
            total_expenses,
            balance,
            status: BalanceStatus::from_balance(balance),
        })
    }

    /// Breaks the period's settled expenses down by category.
    ///
    /// Rows are ordered by descending total; ties keep the store's order
    /// (stable sort). Each percentage is the category's share of the total
    /// expense sum; a zero total yields all-zero percentages.
    pub fn expenses_by_category(
        &self,
        competence_id: CompetenceId,
    ) -> Result<Vec<CategoryExpense>, DashboardError> {
        self.require_competence(competence_id)?;

        let mut rows: Vec<(String, String, Money)> = self
            .transactions
            .sum_expenses_by_category(competence_id)?
            .into_iter()
            .map(|row| (row.category_name, row.color_hex, Money::new(row.total_amount)))
            .collect();
        rows.sort_by(|a, b| b.2.cmp(&a.2));

        let total: Money = rows.iter().map(|(_, _, amount)| *amount).sum();

        Ok(rows
            .into_iter()
            .map(|(category_name, color_hex, total_amount)| CategoryExpense {
                category_name,
                color_hex,
                percentage: total_amount.percentage_of(total),
                total_amount,
            })
            .collect())
    }

    /// Computes the owner's settled revenue/expense evolution over the most
    /// recent competence periods (at most the configured window).
    ///
    /// Returns an empty series when the owner has no competences, without
    /// touching the transaction store. Per-period sums are bulk-fetched in
    /// one aggregate call; periods without settled transactions default to
    /// zero.
    pub fn evolution(&self, owner_id: UserId) -> Result<Vec<MonthlyEvolution>, DashboardError> {
        let mut periods = self.competences.find_by_owner_ordered_desc(owner_id)?;
        periods.truncate(self.evolution_window);

        if periods.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<CompetenceId> = periods.iter().map(|c| c.id).collect();
        let mut revenue: HashMap<CompetenceId, Money> = HashMap::new();
        let mut expenses: HashMap<CompetenceId, Money> = HashMap::new();

        for row in self.transactions.sum_by_competence_ids(&ids)? {
            let amount = Money::new(row.total_amount);
            match row.kind {
                TransactionType::Revenue => revenue.insert(row.competence_id, amount),
                TransactionType::Expense => expenses.insert(row.competence_id, amount),
            };
        }

        Ok(periods
            .into_iter()
            .map(|competence| {
                let total_revenue = revenue.get(&competence.id).copied().unwrap_or_default();
                let total_expenses = expenses.get(&competence.id).copied().unwrap_or_default();
                MonthlyEvolution {
                    month: competence.month,
                    year: competence.year,
                    label: competence.label(),
                    total_revenue,
                    total_expenses,
                    balance: total_revenue.subtract(total_expenses),
                }
            })
            .collect())
    }
}
