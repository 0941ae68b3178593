//! Shared rounding helpers.
//!
//! Every monetary component is rounded to whole dollars at the point it
//! is computed, never accumulated in fractional form across calls.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to whole dollars, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(1332.01)), dec!(1332));
/// assert_eq!(round_to_dollar(dec!(5213.75)), dec!(5214));
/// assert_eq!(round_to_dollar(dec!(6547.5)), dec!(6548));
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(21.425)), dec!(21.43));
/// assert_eq!(round_rate(dec!(21.424)), dec!(21.42));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
