//! Closed enumerations for transaction classification.
//!
//! Both enums are two-valued by design: the lifecycle state machine defines
//! no other states, and the only transitions are PENDING↔PAID. Unknown
//! tokens are rejected at the boundary through the `parse` functions, the
//! single error path for string input.

use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Transaction type: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money received; a PAID revenue increases the account balance.
    Revenue,
    /// Money spent; a PAID expense decreases the account balance.
    Expense,
}

impl TransactionType {
    /// Parses a type token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidType`] for any token other than
    /// `REVENUE` or `EXPENSE`.
    pub fn parse(token: &str) -> Result<Self, LedgerError> {
        match token.to_uppercase().as_str() {
            "REVENUE" => Ok(Self::Revenue),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(LedgerError::InvalidType(token.to_string())),
        }
    }

    /// Returns the opposite type, used to reverse a settled effect.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Revenue => Self::Expense,
            Self::Expense => Self::Revenue,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revenue => write!(f, "REVENUE"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// Transaction settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Recorded but not yet affecting the account balance.
    Pending,
    /// Settled into the account balance.
    Paid,
}

impl TransactionStatus {
    /// Parses a status token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidStatus`] for any token other than
    /// `PENDING` or `PAID`.
    pub fn parse(token: &str) -> Result<Self, LedgerError> {
        match token.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            _ => Err(LedgerError::InvalidStatus(token.to_string())),
        }
    }

    /// Returns true if the transaction's effect is settled.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Paid => write!(f, "PAID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("REVENUE", TransactionType::Revenue)]
    #[case("revenue", TransactionType::Revenue)]
    #[case("Expense", TransactionType::Expense)]
    #[case("EXPENSE", TransactionType::Expense)]
    fn test_type_parse_is_case_insensitive(#[case] token: &str, #[case] expected: TransactionType) {
        assert_eq!(TransactionType::parse(token).unwrap(), expected);
    }

    #[test]
    fn test_type_parse_rejects_unknown_token() {
        let err = TransactionType::parse("TRANSFER").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transaction type: TRANSFER. Must be REVENUE or EXPENSE"
        );
    }

    #[test]
    fn test_type_opposite() {
        assert_eq!(TransactionType::Revenue.opposite(), TransactionType::Expense);
        assert_eq!(TransactionType::Expense.opposite(), TransactionType::Revenue);
    }

    #[rstest]
    #[case("PENDING", TransactionStatus::Pending)]
    #[case("pending", TransactionStatus::Pending)]
    #[case("Paid", TransactionStatus::Paid)]
    #[case("PAID", TransactionStatus::Paid)]
    fn test_status_parse_is_case_insensitive(
        #[case] token: &str,
        #[case] expected: TransactionStatus,
    ) {
        assert_eq!(TransactionStatus::parse(token).unwrap(), expected);
    }

    #[test]
    fn test_status_parse_rejects_unknown_token() {
        let err = TransactionStatus::parse("POSTED").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transaction status: POSTED. Must be PENDING or PAID"
        );
    }

    #[test]
    fn test_status_is_paid() {
        assert!(TransactionStatus::Paid.is_paid());
        assert!(!TransactionStatus::Pending.is_paid());
    }

    #[test]
    fn test_display_matches_wire_tokens() {
        assert_eq!(TransactionType::Revenue.to_string(), "REVENUE");
        assert_eq!(TransactionType::Expense.to_string(), "EXPENSE");
        assert_eq!(TransactionStatus::Pending.to_string(), "PENDING");
        assert_eq!(TransactionStatus::Paid.to_string(), "PAID");
    }
}
