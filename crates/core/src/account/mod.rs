//! Account management.
//!
//! Accounts hold a scale-2 balance that always equals the sum of settled
//! (PAID) transaction effects since the account was opened. The balance is
//! only ever mutated through [`crate::ledger::LedgerService`].

pub mod error;
pub mod service;
pub mod types;

pub use error::AccountError;
pub use service::AccountService;
pub use types::{Account, OpenAccountInput};
