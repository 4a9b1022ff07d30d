//! Shared types and configuration for Saldo.
//!
//! This crate provides common types used across all other crates:
//! - Money type with scale-2, half-even decimal arithmetic
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::Money;
