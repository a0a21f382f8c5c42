//! Monetary amounts.

use rust_decimal::Decimal;

/// Money represented as a Decimal for precision.
pub type Money = Decimal;

/// Subtract without going below zero.
#[must_use]
pub fn saturating_sub(amount: Money, less: Money) -> Money {
    (amount - less).max(Decimal::ZERO)
}
