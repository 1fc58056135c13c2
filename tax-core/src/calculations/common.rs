//! Common utility functions for tax calculations.
//!
//! # Rounding policy
//!
//! Money is rounded to whole naira and percentages to two decimal places,
//! both with midpoint-away-from-zero. For the non-negative amounts the engine
//! works with this is the same as round-half-up, so `0.5` becomes `1` and
//! `2.345%` becomes `2.35%`.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Rounds a money amount to the nearest whole naira using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_naira;
///
/// assert_eq!(round_to_naira(dec!(1600.49)), dec!(1600));
/// assert_eq!(round_to_naira(dec!(1600.5)), dec!(1601));
/// assert_eq!(round_to_naira(dec!(-0.5)), dec!(-1)); // Away from zero
/// ```
pub fn round_to_naira(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to exactly two decimal places using half-up rounding.
///
/// The result always carries two decimal places, so `3.4` displays as `3.40`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_percentage;
///
/// assert_eq!(round_percentage(dec!(13.776)), dec!(13.78));
/// assert_eq!(round_percentage(dec!(3.365)), dec!(3.37));
/// assert_eq!(round_percentage(dec!(3.4)).to_string(), "3.40");
/// ```
pub fn round_percentage(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(10000), dec!(200000)), dec!(200000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),
}

/// Parses a user-supplied money amount.
///
/// Surrounding whitespace, a leading `₦` or `NGN`, and comma thousands
/// separators are ignored, so `"₦1,250,000.50"` parses to `1250000.50`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::parse_money;
///
/// assert_eq!(parse_money("₦1,000,000").unwrap(), dec!(1000000));
/// assert_eq!(parse_money(" NGN 2500.75 ").unwrap(), dec!(2500.75));
/// assert!(parse_money("lots").is_err());
/// ```
pub fn parse_money(s: &str) -> Result<Decimal, ParseMoneyError> {
    let trimmed = s.trim();
    let unprefixed = trimmed
        .strip_prefix('₦')
        .or_else(|| trimmed.strip_prefix("NGN"))
        .unwrap_or(trimmed);
    let normalized = unprefixed.trim().replace(',', "");

    if normalized.is_empty() {
        return Err(ParseMoneyError::Empty);
    }

    normalized.parse::<Decimal>().map_err(|e| {
        tracing::debug!(input = %s, "invalid money amount: {}", e);
        ParseMoneyError::Invalid(s.to_string())
    })
}
