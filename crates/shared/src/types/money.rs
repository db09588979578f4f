//! Money rounding helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` stored to 2 decimal places.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Number of decimal places stored for every monetary amount.
pub const CENT_PRECISION: u32 = 2;

/// Rounds an amount to cents using Banker's Rounding.
///
/// Uses `RoundingStrategy::MidpointNearestEven` which:
/// - Rounds 2.525 → 2.52 (to nearest even cent)
/// - Rounds 2.535 → 2.54 (to nearest even cent)
///
/// The result always carries exactly two decimal places, so amounts
/// serialize as `"250.00"` rather than `"250"`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tresor_shared::types::money::round_cents;
///
/// assert_eq!(round_cents(dec!(10.005)), dec!(10.00));
/// assert_eq!(round_cents(dec!(10.015)), dec!(10.02));
/// assert_eq!(round_cents(dec!(250)).to_string(), "250.00");
/// ```
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CENT_PRECISION, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CENT_PRECISION);
    rounded
}

/// Returns true if the amount is strictly positive.
#[must_use]
pub fn is_positive(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), dec!(100.00))]
    #[case(dec!(100.004), dec!(100.00))]
    #[case(dec!(100.006), dec!(100.01))]
    #[case(dec!(2.525), dec!(2.52))]
    #[case(dec!(2.535), dec!(2.54))]
    fn test_round_cents(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_cents(input), expected);
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(dec!(0.01)));
        assert!(!is_positive(Decimal::ZERO));
        assert!(!is_positive(dec!(-1)));
    }
}
