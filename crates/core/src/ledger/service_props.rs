//! Property-based tests for ledger effect application.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use saldo_shared::types::{AccountId, CategoryId, CompetenceId, Money, TransactionId, UserId};

use super::service::LedgerService;
use super::types::{TransactionStatus, TransactionType};
use crate::account::Account;
use crate::transaction::Transaction;

/// Strategy for positive scale-2 transaction amounts.
fn amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 2)))
}

/// Strategy for starting balances (can be negative).
fn balance_strategy() -> impl Strategy<Value = Money> {
    (-10_000_000i64..10_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 2)))
}

fn kind_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Revenue),
        Just(TransactionType::Expense)
    ]
}

fn account(balance: Money) -> Account {
    let now = Utc::now();
    Account {
        id: AccountId::new(),
        owner_id: UserId::new(),
        name: "prop".to_string(),
        balance,
        currency: "BRL".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn paid_transaction(amount: Money, kind: TransactionType) -> Transaction {
    let now = Utc::now();
    Transaction {
        id: TransactionId::new(),
        account_id: AccountId::new(),
        category_id: CategoryId::new(),
        competence_id: CompetenceId::new(),
        owner_id: UserId::new(),
        parent_id: None,
        description: "prop".to_string(),
        amount,
        date_time: now,
        kind,
        status: TransactionStatus::Paid,
        created_at: now,
        updated_at: now,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Applying then reversing the same transaction returns the account to
    /// its pre-apply balance.
    #[test]
    fn prop_apply_then_reverse_is_identity(
        balance in balance_strategy(),
        amount in amount_strategy(),
        kind in kind_strategy(),
    ) {
        let mut acct = account(balance);
        let tx = paid_transaction(amount, kind);

        LedgerService::apply_effect(&tx, &mut acct);
        LedgerService::reverse_effect(&tx, &mut acct);

        prop_assert_eq!(acct.balance, balance);
    }

    /// Reversing then applying is also an identity on the balance.
    #[test]
    fn prop_reverse_then_apply_is_identity(
        balance in balance_strategy(),
        amount in amount_strategy(),
        kind in kind_strategy(),
    ) {
        let mut acct = account(balance);
        let tx = paid_transaction(amount, kind);

        LedgerService::reverse_effect(&tx, &mut acct);
        LedgerService::apply_effect(&tx, &mut acct);

        prop_assert_eq!(acct.balance, balance);
    }

    /// The resulting balance is always expressed at scale 2.
    #[test]
    fn prop_balance_stays_at_scale_2(
        balance in balance_strategy(),
        amount in amount_strategy(),
        kind in kind_strategy(),
    ) {
        let mut acct = account(balance);
        let tx = paid_transaction(amount, kind);

        LedgerService::apply_effect(&tx, &mut acct);

        prop_assert_eq!(acct.balance.amount().scale(), 2);
    }

    /// Applying a revenue and an expense of the same amount cancels out.
    #[test]
    fn prop_opposite_effects_cancel(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let mut acct = account(balance);
        let revenue = paid_transaction(amount, TransactionType::Revenue);
        let expense = paid_transaction(amount, TransactionType::Expense);

        LedgerService::apply_effect(&revenue, &mut acct);
        LedgerService::apply_effect(&expense, &mut acct);

        prop_assert_eq!(acct.balance, balance);
    }
}
