//! Common utility functions for tax calculations.
//!
//! Rounding, clamping, and overflow-safe sums shared by the bracket,
//! deduction, credit, and return calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to the nearest whole dollar using half-up rounding.
///
/// Values at exactly 0.50 are rounded away from zero, matching how tax is
/// reported on the return.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(6307.49)), dec!(6307));
/// assert_eq!(round_to_dollar(dec!(6307.50)), dec!(6308));
/// assert_eq!(round_to_dollar(dec!(-6307.50)), dec!(-6308)); // Away from zero
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value to zero from below.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-12.50)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(12.50)), dec!(12.50));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Sums decimal values, saturating at [`Decimal::MAX`] and [`Decimal::MIN`]
/// instead of panicking on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::saturating_sum;
///
/// assert_eq!(saturating_sum([dec!(60000), dec!(500)]), dec!(60500));
/// assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
/// ```
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
