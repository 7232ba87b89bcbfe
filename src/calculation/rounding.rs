//! Ceiling rounding and monthly scaling.
//!
//! Every derived amount rounds up to cent precision before it is reported,
//! and monthly figures derive from the already-rounded annual value. The
//! direction is always toward positive infinity, never to-nearest.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value up to two decimal places.
///
/// Cent-exact values pass through unchanged; everything else moves to the
/// next cent toward positive infinity.
///
/// # Examples
///
/// ```
/// use support_engine::calculation::round_up_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s| Decimal::from_str(s).unwrap();
/// assert_eq!(round_up_cents(d("100.001")), d("100.01"));
/// assert_eq!(round_up_cents(d("100.00")), d("100.00"));
/// ```
pub fn round_up_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
    // Reported amounts always carry exactly two decimals on the wire.
    rounded.rescale(2);
    rounded
}

/// Derives the monthly figure paired with a rounded annual value: one
/// twelfth, rounded up to two decimal places.
pub fn monthly_from_annual(annual: Decimal) -> Decimal {
    round_up_cents(annual / Decimal::from(12))
}
