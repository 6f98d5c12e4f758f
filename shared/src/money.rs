//! Money helpers using rust_decimal for precision
//!
//! Monetary values are `Decimal` everywhere in the domain and INTEGER minor
//! units (cents) in the database and on payment-provider wires.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary values are rounded to 2 decimal places, half away from zero.
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary amount to 2 decimal places.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a major-unit amount to minor units (`round(amount * 100)`).
///
/// `None` when the scaled amount does not fit an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Convert minor units back to a 2-dp decimal amount.
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn minor_unit_conversion_rounds_half_up() {
        let amount = Decimal::from_str("25.50").unwrap();
        assert_eq!(to_minor_units(amount), Some(2550));

        // 10.005 -> 1001, not banker's 1000
        let amount = Decimal::from_str("10.005").unwrap();
        assert_eq!(to_minor_units(amount), Some(1001));
    }

    #[test]
    fn minor_unit_conversion_refuses_out_of_range_amounts() {
        assert_eq!(to_minor_units(Decimal::MAX), None);
        assert_eq!(to_minor_units(Decimal::MIN), None);
    }

    #[test]
    fn minor_unit_round_trip() {
        assert_eq!(from_minor_units(2550), Decimal::from_str("25.50").unwrap());
        assert_eq!(from_minor_units(0), Decimal::from_str("0.00").unwrap());
    }

    #[test]
    fn round_money_two_places() {
        let amount = Decimal::from_str("3.333").unwrap() * Decimal::from(3);
        assert_eq!(round_money(amount), Decimal::from_str("10.00").unwrap());
    }
}
