//! Category reference data.
//!
//! Categories classify transactions for the dashboard breakdowns. The core
//! consumes them (existence checks, name/color lookups) but never mutates
//! them.

use serde::{Deserialize, Serialize};

use saldo_shared::types::{CategoryId, UserId};

/// A transaction category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Owning user.
    pub owner_id: UserId,
    /// Display name (e.g., "Groceries").
    pub name: String,
    /// Display color as a hex string (e.g., "#FF8800").
    pub color_hex: String,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(owner_id: UserId, name: String, color_hex: String) -> Self {
        Self {
            id: CategoryId::new(),
            owner_id,
            name,
            color_hex,
        }
    }
}
