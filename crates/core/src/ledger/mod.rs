//! Settlement ledger logic.
//!
//! This module implements the effect of transactions on account balances:
//! - Closed `TransactionType` / `TransactionStatus` enums with a single
//!   case-insensitive parse path
//! - `LedgerService` applying and reversing PAID effects
//! - Error types for ledger operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{TransactionStatus, TransactionType};
