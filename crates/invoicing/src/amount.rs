use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use billpad_core::ValueObject;

/// A derived money amount (line total, subtotal, total).
///
/// Always finite: construction maps `NaN`, infinities and `-0.0` to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        // `-0.0 == 0.0`, so this also drops the sign of zero.
        if value.is_finite() && value != 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `₦30.00`-style rendering with the given currency symbol.
    pub fn with_symbol(self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl ValueObject for Amount {}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::new(self.0 + rhs.0)
    }
}

impl Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        Amount::new(self.0 * rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

/// Exactly two decimal places, with halfway cents rounded away from zero
/// (`10.125` shows as `10.13`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_half_cents(self.0))
    }
}

/// `{:.2}` breaks exact ties to even. A value exactly halfway between two cents
/// is an odd multiple of 1/8, where scaling by 8 and by 100 is exact.
fn round_half_cents(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// Lenient numeric reading of a quantity or price field.
///
/// Surrounding whitespace is ignored; empty text, anything that is not a
/// decimal literal, and literals that overflow to infinity all read as `0.0`.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_reads_plain_decimals() {
        assert_eq!(coerce_number("3"), 3.0);
        assert_eq!(coerce_number("10.50"), 10.5);
        assert_eq!(coerce_number(" 2 "), 2.0);
        assert_eq!(coerce_number("-4.25"), -4.25);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn coerce_treats_garbage_as_zero() {
        for text in ["", "   ", "abc", "3 apples", "1,000", "NaN", "inf", "-infinity", "1e999"] {
            assert_eq!(coerce_number(text), 0.0, "input {text:?}");
        }
    }

    #[test]
    fn amount_normalizes_non_finite_and_negative_zero() {
        assert_eq!(Amount::new(f64::NAN), Amount::ZERO);
        assert_eq!(Amount::new(f64::INFINITY), Amount::ZERO);
        assert_eq!(Amount::new(-0.0).to_string(), "0.00");
        assert_eq!((Amount::new(-1.0) * Amount::ZERO).to_string(), "0.00");
    }

    #[test]
    fn amount_overflowing_product_is_zero() {
        assert_eq!(Amount::new(1e200) * Amount::new(1e200), Amount::ZERO);
    }

    #[test]
    fn amount_displays_two_decimals() {
        assert_eq!(Amount::new(30.0).to_string(), "30.00");
        assert_eq!(Amount::new(41.5).with_symbol("₦"), "₦41.50");
        assert_eq!(Amount::new(0.1 + 0.2).to_string(), "0.30");
    }

    #[test]
    fn halfway_cents_round_away_from_zero() {
        assert_eq!(Amount::new(10.125).to_string(), "10.13");
        assert_eq!(Amount::new(0.625).to_string(), "0.63");
        assert_eq!(Amount::new(2.375).to_string(), "2.38");
        assert_eq!(Amount::new(-10.125).to_string(), "-10.13");
    }

    #[test]
    fn near_halfway_values_keep_their_binary_rounding() {
        // 1.005 and 2.675 sit just below the tie in binary.
        assert_eq!(Amount::new(1.005).to_string(), "1.00");
        assert_eq!(Amount::new(2.675).to_string(), "2.67");
        assert_eq!(Amount::new(10.5).to_string(), "10.50");
    }

    #[test]
    fn amounts_sum_in_order() {
        let total: Amount = [1.25, 2.5, 3.0].into_iter().map(Amount::new).sum();
        assert_eq!(total, Amount::new(6.75));
    }
}
