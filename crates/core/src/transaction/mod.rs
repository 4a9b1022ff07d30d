//! Transaction lifecycle management.
//!
//! The lifecycle is a two-state machine over PENDING and PAID with no
//! automatic transitions: creation, status changes, and deletion are always
//! caller-driven, and every mutation that touches a settled effect goes
//! through [`crate::ledger::LedgerService`] so the account balance stays
//! equal to the sum of PAID effects.

pub mod service;
pub mod types;


pub use service::TransactionManager;
pub use types::{CreateTransactionInput, Transaction};
