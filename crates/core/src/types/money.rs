//! Exact decimal money amounts.
//!
//! Receipt totals and item prices arrive as decimal strings (`"35.35"`). They
//! are parsed into [`Decimal`] rather than floating point so that checks like
//! "is a multiple of 0.25" are exact.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Error returned when a string is not a decimal amount.
#[derive(thiserror::Error, Debug)]
pub enum MoneyError {
    /// The input is not an optionally signed run of digits with an optional
    /// fractional part.
    #[error("{0:?} is not a decimal amount")]
    Malformed(String),

    /// The input has the right shape but does not fit a decimal.
    #[error("{value:?} is out of range: {source}")]
    OutOfRange {
        /// The rejected input.
        value: String,
        /// Underlying decimal parse failure.
        #[source]
        source: rust_decimal::Error,
    },
}

impl MoneyError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Malformed(value) | Self::OutOfRange { value, .. } => value,
        }
    }
}

/// Whether `s` looks like `[+-]digits[.digits]`.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

/// A monetary amount in the currency's standard unit (dollars, not cents).
///
/// ```
/// use receipt_processor_core::Money;
/// use rust_decimal::Decimal;
///
/// let total = Money::parse("100.50").unwrap();
/// assert!(!total.is_whole());
/// assert!(total.is_multiple_of(Decimal::new(25, 2)));
///
/// assert!(Money::parse("ten dollars").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Parse an amount from a plain decimal string such as `"12.25"`.
    ///
    /// Only an optional sign, digits, and an optional `.` followed by digits
    /// are accepted. Surrounding whitespace, currency symbols, digit
    /// separators (`1_000`, `1,000`) and exponent notation are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError`] if the input is not a decimal number.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        if !is_plain_decimal(s) {
            return Err(MoneyError::Malformed(s.to_owned()));
        }

        Decimal::from_str(s)
            .map(Self)
            .map_err(|source| MoneyError::OutOfRange {
                value: s.to_owned(),
                source,
            })
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount has no fractional part.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Whether the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    #[must_use]
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        self.0.checked_rem(step).is_some_and(|r| r.is_zero())
    }

    /// `ceil(amount * factor)` as an integer.
    ///
    /// Returns `None` if the product does not fit in an `i64`.
    #[must_use]
    pub fn scaled_ceil(&self, factor: Decimal) -> Option<i64> {
        self.0.checked_mul(factor)?.ceil().to_i64()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quarter() -> Decimal {
        Decimal::new(25, 2)
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(Money::parse("35.35").unwrap().amount(), Decimal::new(3535, 2));
        assert_eq!(Money::parse("100").unwrap().amount(), Decimal::new(100, 0));
        assert_eq!(Money::parse("0.00").unwrap().amount(), Decimal::ZERO);
        assert!(Money::parse("-1.25").is_ok());
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("$1.00").is_err());
        assert!(Money::parse(" 1.00").is_err());
        assert!(Money::parse("1.0.0").is_err());
        assert!(Money::parse("1_000").is_err());
        assert!(Money::parse("1e2").is_err());
        assert!(Money::parse("1E2").is_err());
        assert!(Money::parse("1_0.25").is_err());
        assert!(Money::parse("1.").is_err());
        assert!(Money::parse(".5").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("١٢").is_err());
    }

    #[test]
    fn test_parse_accepts_signs() {
        assert_eq!(Money::parse("+2.50").unwrap().amount(), Decimal::new(250, 2));
        assert_eq!(Money::parse("-2.50").unwrap().amount(), Decimal::new(-250, 2));
    }

    #[test]
    fn test_error_names_value() {
        let err = Money::parse("12,50").unwrap_err();
        assert!(matches!(err, MoneyError::Malformed(_)));
        assert_eq!(err.value(), "12,50");
        assert!(err.to_string().contains("\"12,50\""));
    }

    #[test]
    fn test_is_whole() {
        assert!(Money::parse("100").unwrap().is_whole());
        assert!(Money::parse("100.00").unwrap().is_whole());
        assert!(!Money::parse("100.50").unwrap().is_whole());
        assert!(!Money::parse("0.01").unwrap().is_whole());
    }

    #[test]
    fn test_is_multiple_of_quarter() {
        assert!(Money::parse("100.50").unwrap().is_multiple_of(quarter()));
        assert!(Money::parse("9.00").unwrap().is_multiple_of(quarter()));
        assert!(Money::parse("0.75").unwrap().is_multiple_of(quarter()));
        assert!(!Money::parse("100.40").unwrap().is_multiple_of(quarter()));
        assert!(!Money::parse("35.35").unwrap().is_multiple_of(quarter()));
    }

    #[test]
    fn test_is_multiple_of_zero_step() {
        assert!(!Money::parse("1.00").unwrap().is_multiple_of(Decimal::ZERO));
    }

    #[test]
    fn test_scaled_ceil() {
        let fifth = Decimal::new(2, 1);
        assert_eq!(Money::parse("12.25").unwrap().scaled_ceil(fifth), Some(3));
        assert_eq!(Money::parse("12.00").unwrap().scaled_ceil(fifth), Some(3));
        assert_eq!(Money::parse("2.25").unwrap().scaled_ceil(fifth), Some(1));
        assert_eq!(Money::parse("0").unwrap().scaled_ceil(fifth), Some(0));
        assert_eq!(Money::parse("-5.00").unwrap().scaled_ceil(fifth), Some(-1));
    }

    #[test]
    fn test_parse_too_many_digits_is_out_of_range() {
        let err = Money::parse("792281625142643375935439503350").unwrap_err();
        assert!(matches!(err, MoneyError::OutOfRange { .. }));
    }

    #[test]
    fn test_scaled_ceil_out_of_range() {
        let huge = Money::parse("79228162514264337593543950335").unwrap();
        assert_eq!(huge.scaled_ceil(Decimal::ONE), None);
    }
}
