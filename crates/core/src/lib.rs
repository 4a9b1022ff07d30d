//! Core business logic for Saldo.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, the settlement ledger, and the dashboard
//! calculations live here; persistence is reached only through the traits in
//! [`store`].
//!
//! # Modules
//!
//! - `ledger` - PENDING/PAID settlement effects on account balances
//! - `transaction` - Transaction lifecycle (create, status transitions, delete)
//! - `dashboard` - Period summaries, category breakdowns, evolution series
//! - `competence` - Accounting period (month/year) resolution
//! - `account` - Account management and owner-wide balances
//! - `category` - Category reference data
//! - `store` - Collaborator contracts for persistence

pub mod account;
pub mod category;
pub mod competence;
pub mod dashboard;
pub mod ledger;
pub mod store;
pub mod transaction;
