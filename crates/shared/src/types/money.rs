//! Money type with scale-2 decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` and keeps every value at exactly
//! two fractional digits, rounding half-to-even (banker's rounding) after
//! every operation to avoid systematic rounding bias.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds to two decimal places half-to-even, then pads the scale to 2.
///
/// The rounding step never loses a tie to `rescale` because the fractional
/// part is already at most two digits when the scale is padded.
fn to_scale_2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}

/// A monetary amount, always expressed at scale 2.
///
/// Construction and every arithmetic operation re-round the result
/// half-to-even to two decimal places, never before the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a monetary amount, rounding the input to scale 2.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(to_scale_2(amount))
    }

    /// The zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Adds two amounts, rounding the result to scale 2.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self(to_scale_2(self.0 + other.0))
    }

    /// Subtracts `other` from this amount, rounding the result to scale 2.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self(to_scale_2(self.0 - other.0))
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Computes `self * 100 / total` as a scale-2 percentage.
    ///
    /// A zero `total` yields `0.00` rather than an error so that dashboard
    /// rendering stays total-safe.
    #[must_use]
    pub fn percentage_of(self, total: Self) -> Decimal {
        if total.0.is_zero() {
            return to_scale_2(Decimal::ZERO);
        }
        to_scale_2(self.0 * Decimal::ONE_HUNDRED / total.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
