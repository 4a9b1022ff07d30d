//! Ledger service applying settlement effects to account balances.

use crate::account::Account;
use crate::transaction::Transaction;

/// Applies and reverses the monetary effect of transactions on accounts.
///
/// This service contains pure functions with no persistence: it mutates the
/// in-memory account snapshot only, and the caller owns the unit of work
/// that commits the account together with the transaction write. PENDING
/// transactions are always a no-op, which guarantees the balance reflects
/// settled money only.
pub struct LedgerService;

impl LedgerService {
    /// Applies the effect of a PAID transaction to the account balance.
    ///
    /// EXPENSE subtracts the amount, REVENUE adds it; the result is
    /// re-rounded to scale 2 half-to-even. Does nothing when the
    /// transaction is not PAID.
    pub fn apply_effect(transaction: &Transaction, account: &mut Account) {
        if transaction.is_paid() {
            account.update_balance(transaction.amount, transaction.kind);
        }
    }

    /// Reverses the effect of a PAID transaction on the account balance.
    ///
    /// The caller passes the transaction in its pre-mutation state: the
    /// reversal of an EXPENSE behaves as a REVENUE of the same amount and
    /// vice versa. Does nothing when the transaction is not PAID.
    pub fn reverse_effect(transaction: &Transaction, account: &mut Account) {
        if transaction.is_paid() {
            account.update_balance(transaction.amount, transaction.kind.opposite());
        }
    }
}
