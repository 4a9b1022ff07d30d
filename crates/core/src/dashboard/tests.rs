//! Aggregation scenario tests for the dashboard service.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use saldo_shared::types::{
    AccountId, CategoryId, CompetenceId, Money, TransactionId, UserId,
};

use super::service::DashboardService;
use super::types::BalanceStatus;
use crate::category::Category;
use crate::competence::Competence;
use crate::ledger::{TransactionStatus, TransactionType};
use crate::store::{CompetenceStore, MemoryStore, TransactionStore};
use crate::transaction::Transaction;

struct Fixture {
    store: Arc<MemoryStore>,
    service: DashboardService<MemoryStore, MemoryStore>,
    owner: UserId,
}

fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let service = DashboardService::new(store.clone(), store.clone());
    Fixture {
        store,
        service,
        owner: UserId::new(),
    }
}

fn competence(fx: &Fixture, month: u32, year: i32) -> Competence {
    let c = Competence::new(fx.owner, month, year, Utc::now());
    CompetenceStore::save(&*fx.store, &c).unwrap();
    c
}

fn category(fx: &Fixture, name: &str, color: &str) -> Category {
    let c = Category::new(fx.owner, name.to_string(), color.to_string());
    fx.store.put_category(c.clone()).unwrap();
    c
}

fn record(
    fx: &Fixture,
    competence_id: CompetenceId,
    category_id: CategoryId,
    amount: Decimal,
    kind: TransactionType,
    status: TransactionStatus,
) {
    let now = Utc::now();
    let tx = Transaction {
        id: TransactionId::new(),
        account_id: AccountId::new(),
        category_id,
        competence_id,
        owner_id: fx.owner,
        parent_id: None,
        description: "test".to_string(),
        amount: Money::new(amount),
        date_time: now,
        kind,
        status,
        created_at: now,
        updated_at: now,
    };
    TransactionStore::save(&*fx.store, &tx).unwrap();
}

#[test]
fn test_summary_classifies_positive_period() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    let cat = category(&fx, "Salary", "#112233");

    record(&fx, period.id, cat.id, dec!(5000.00), TransactionType::Revenue, TransactionStatus::Paid);
    record(&fx, period.id, cat.id, dec!(3250.00), TransactionType::Expense, TransactionStatus::Paid);

    let summary = fx.service.summary(period.id).unwrap();
    assert_eq!(summary.total_revenue, Money::new(dec!(5000.00)));
    assert_eq!(summary.total_expenses, Money::new(dec!(3250.00)));
    assert_eq!(summary.balance, Money::new(dec!(1750.00)));
    assert_eq!(summary.status, BalanceStatus::Positive);
}

#[test]
fn test_summary_ignores_pending_transactions() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    let cat = category(&fx, "Misc", "#445566");

    record(&fx, period.id, cat.id, dec!(100.00), TransactionType::Revenue, TransactionStatus::Paid);
    record(&fx, period.id, cat.id, dec!(999.99), TransactionType::Expense, TransactionStatus::Pending);

    let summary = fx.service.summary(period.id).unwrap();
    assert_eq!(summary.total_expenses, Money::zero());
    assert_eq!(summary.balance, Money::new(dec!(100.00)));
}

#[test]
fn test_summary_of_empty_period_is_neutral() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);

    let summary = fx.service.summary(period.id).unwrap();
    assert_eq!(summary.balance, Money::zero());
    assert_eq!(summary.status, BalanceStatus::Neutral);
}

#[test]
fn test_summary_classifies_negative_period() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    let cat = category(&fx, "Rent", "#778899");

    record(&fx, period.id, cat.id, dec!(1200.00), TransactionType::Expense, TransactionStatus::Paid);

    let summary = fx.service.summary(period.id).unwrap();
    assert_eq!(summary.balance, Money::new(dec!(-1200.00)));
    assert_eq!(summary.status, BalanceStatus::Negative);
}

#[test]
fn test_summary_requires_existing_competence() {
    let fx = fixture();
    let err = fx.service.summary(CompetenceId::new()).unwrap_err();
    assert_eq!(err.error_code(), "COMPETENCE_NOT_FOUND");
    assert_eq!(err.http_status_code(), 404);
}

#[test]
fn test_expenses_by_category_orders_and_computes_percentages() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    let food = category(&fx, "Food", "#FF0000");
    let rent = category(&fx, "Rent", "#00FF00");

    record(&fx, period.id, food.id, dec!(250.00), TransactionType::Expense, TransactionStatus::Paid);
    record(&fx, period.id, rent.id, dec!(750.00), TransactionType::Expense, TransactionStatus::Paid);
    // Revenue and pending expenses never show up in the breakdown.
    record(&fx, period.id, food.id, dec!(5000.00), TransactionType::Revenue, TransactionStatus::Paid);
    record(&fx, period.id, food.id, dec!(123.45), TransactionType::Expense, TransactionStatus::Pending);

    let rows = fx.service.expenses_by_category(period.id).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].category_name, "Rent");
    assert_eq!(rows[0].total_amount, Money::new(dec!(750.00)));
    assert_eq!(rows[0].percentage, dec!(75.00));

    assert_eq!(rows[1].category_name, "Food");
    assert_eq!(rows[1].total_amount, Money::new(dec!(250.00)));
    assert_eq!(rows[1].percentage, dec!(25.00));
}

#[test]
fn test_expenses_by_category_breaks_ties_by_store_order() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    let first = category(&fx, "First", "#111111");
    let second = category(&fx, "Second", "#222222");

    record(&fx, period.id, first.id, dec!(100.00), TransactionType::Expense, TransactionStatus::Paid);
    record(&fx, period.id, second.id, dec!(100.00), TransactionType::Expense, TransactionStatus::Paid);

    let rows = fx.service.expenses_by_category(period.id).unwrap();
    assert_eq!(rows[0].category_name, "First");
    assert_eq!(rows[1].category_name, "Second");
}

#[test]
fn test_expense_percentages_sum_to_one_hundred_within_tolerance() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);

    for (name, amount) in [("A", dec!(33.33)), ("B", dec!(33.33)), ("C", dec!(33.34))] {
        let cat = category(&fx, name, "#ABCDEF");
        record(&fx, period.id, cat.id, amount, TransactionType::Expense, TransactionStatus::Paid);
    }

    let rows = fx.service.expenses_by_category(period.id).unwrap();
    let total: Decimal = rows.iter().map(|r| r.percentage).sum();

    // Tolerance: one cent of percentage per category.
    let tolerance = dec!(0.01) * Decimal::from(rows.len());
    assert!((total - dec!(100.00)).abs() <= tolerance, "sum was {total}");
}

#[test]
fn test_expenses_by_category_of_empty_period() {
    let fx = fixture();
    let period = competence(&fx, 8, 2026);
    assert!(fx.service.expenses_by_category(period.id).unwrap().is_empty());
}

#[test]
fn test_expenses_by_category_requires_existing_competence() {
    let fx = fixture();
    let err = fx.service.expenses_by_category(CompetenceId::new()).unwrap_err();
    assert!(matches!(err, super::error::DashboardError::CompetenceNotFound(_)));
}

#[test]
fn test_evolution_returns_most_recent_periods_first() {
    let fx = fixture();
    let cat = category(&fx, "Misc", "#000000");

    let jan = competence(&fx, 1, 2026);
    let feb = competence(&fx, 2, 2026);
    let dec_2025 = competence(&fx, 12, 2025);

    record(&fx, jan.id, cat.id, dec!(1000.00), TransactionType::Revenue, TransactionStatus::Paid);
    record(&fx, jan.id, cat.id, dec!(400.00), TransactionType::Expense, TransactionStatus::Paid);
    record(&fx, feb.id, cat.id, dec!(200.00), TransactionType::Expense, TransactionStatus::Paid);
    let _ = dec_2025; // no settled transactions: defaults to zero

    let series = fx.service.evolution(fx.owner).unwrap();
    assert_eq!(series.len(), 3);

    assert_eq!(series[0].label, "02/2026");
    assert_eq!(series[0].total_revenue, Money::zero());
    assert_eq!(series[0].balance, Money::new(dec!(-200.00)));

    assert_eq!(series[1].label, "01/2026");
    assert_eq!(series[1].balance, Money::new(dec!(600.00)));

    assert_eq!(series[2].label, "12/2025");
    assert_eq!(series[2].total_revenue, Money::zero());
    assert_eq!(series[2].total_expenses, Money::zero());
    assert_eq!(series[2].balance, Money::zero());
}

#[test]
fn test_evolution_caps_at_window() {
    let fx = fixture();
    for month in 1..=9 {
        competence(&fx, month, 2026);
    }

    let series = fx.service.evolution(fx.owner).unwrap();
    assert_eq!(series.len(), 6);
    assert_eq!(series[0].label, "09/2026");
    assert_eq!(series[5].label, "04/2026");
}

#[test]
fn test_evolution_honors_configured_window() {
    let fx = fixture();
    let service = DashboardService::with_window(fx.store.clone(), fx.store.clone(), 2);
    for month in 1..=5 {
        competence(&fx, month, 2026);
    }

    let series = service.evolution(fx.owner).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "05/2026");
}

#[test]
fn test_evolution_is_empty_for_owner_without_competences() {
    let fx = fixture();
    assert!(fx.service.evolution(fx.owner).unwrap().is_empty());
}
