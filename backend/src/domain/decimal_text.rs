//! Exact decimal values carried as JSON strings.
//!
//! Capacities, investments and emissions are never floats. They arrive as
//! text such as `"2245"` or `"10.75"`, are held as [`Decimal`], and are
//! written back as text with their scale preserved.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decimal number with a textual wire form.
///
/// Accepted text is an optional sign, one or more digits and an optional
/// fractional part of one or more digits: `12`, `-3.5`, `0.25`. Exponents,
/// underscores, bare points and surrounding whitespace are rejected.
///
/// # Examples
/// ```
/// use backend::domain::DecimalText;
///
/// let value: DecimalText = "2245.50".parse().unwrap();
/// assert_eq!(value.to_string(), "2245.50");
/// assert!("12e3".parse::<DecimalText>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalText(Decimal);

/// Error returned when decimal arithmetic leaves the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("decimal arithmetic overflowed")]
pub struct DecimalOverflowError;

/// Precision and scale of a fixed-point `NUMERIC(precision, scale)` column.
///
/// # Examples
/// ```
/// use backend::domain::{DecimalText, NumericBounds};
///
/// let fits: DecimalText = "99999999.99".parse().unwrap();
/// let too_large: DecimalText = "100000000".parse().unwrap();
/// let too_precise: DecimalText = "1.005".parse().unwrap();
/// assert!(NumericBounds::MEASURE.admits(fits));
/// assert!(!NumericBounds::MEASURE.admits(too_large));
/// assert!(!NumericBounds::MEASURE.admits(too_precise));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericBounds {
    /// Total significant digits.
    pub precision: u32,
    /// Digits after the point.
    pub scale: u32,
}

impl NumericBounds {
    /// Capacities and emissions: `NUMERIC(10, 2)`.
    pub const MEASURE: Self = Self::new(10, 2);
    /// Investment amounts: `NUMERIC(15, 2)`.
    pub const AMOUNT: Self = Self::new(15, 2);

    /// Bounds for a `NUMERIC(precision, scale)` column.
    pub const fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }

    /// Whether `value` can be stored without rounding or overflow.
    ///
    /// Trailing fractional zeros do not count against the scale.
    pub fn admits(self, value: DecimalText) -> bool {
        if value.0.normalize().scale() > self.scale {
            return false;
        }
        let whole_digits = self.precision.saturating_sub(self.scale);
        match 10_u64.checked_pow(whole_digits) {
            Some(limit) => value.0.abs() < Decimal::from(limit),
            None => true,
        }
    }
}

/// Error returned when text is not a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a decimal number")]
pub struct ParseDecimalTextError {
    /// The rejected text.
    pub input: String,
}

impl DecimalText {
    /// Zero with no fractional digits.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The wrapped decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Round half away from zero to `places` fractional digits.
    ///
    /// The result always carries exactly `places` digits, so `7` rounded to
    /// one place renders as `7.0`.
    #[must_use]
    pub fn round_to(self, places: u32) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(places);
        Self(rounded)
    }

    /// Add `values`, failing instead of overflowing.
    ///
    /// # Errors
    /// Returns [`DecimalOverflowError`] when the running total leaves the
    /// range of [`Decimal`].
    pub fn checked_sum(
        values: impl IntoIterator<Item = Self>,
    ) -> Result<Self, DecimalOverflowError> {
        values.into_iter().try_fold(Self::ZERO, |total, value| {
            total
                .0
                .checked_add(value.0)
                .map(Self)
                .ok_or(DecimalOverflowError)
        })
    }
}

impl From<Decimal> for DecimalText {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<DecimalText> for Decimal {
    fn from(value: DecimalText) -> Self {
        value.0
    }
}

impl From<i64> for DecimalText {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    digits(whole) && fraction.is_none_or(digits)
}

impl FromStr for DecimalText {
    type Err = ParseDecimalTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalTextError {
            input: s.to_owned(),
        };
        if !is_decimal_literal(s) {
            return Err(invalid());
        }
        Decimal::from_str_exact(s).map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for DecimalText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", "0")]
    #[case("2245", "2245")]
    #[case("10.75", "10.75")]
    #[case("100.00", "100.00")]
    #[case("-3.5", "-3.5")]
    fn accepts_plain_decimals(#[case] input: &str, #[case] rendered: &str) {
        let value: DecimalText = input.parse().expect("valid decimal");
        assert_eq!(value.to_string(), rendered);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1e5")]
    #[case("1_000")]
    #[case(" 12")]
    #[case("1.2.3")]
    #[case(".5")]
    #[case("7.")]
    #[case(".")]
    #[case("-")]
    #[case("99999999999999999999999999999999")]
    fn rejects_non_decimals(#[case] input: &str) {
        let err = input.parse::<DecimalText>().expect_err("invalid decimal");
        assert_eq!(err.input, input);
    }

    #[rstest]
    #[case("80.44", 1, "80.4")]
    #[case("80.45", 1, "80.5")]
    #[case("7", 1, "7.0")]
    #[case("2.005", 2, "2.01")]
    fn round_to_fixes_scale(#[case] input: &str, #[case] places: u32, #[case] expected: &str) {
        let value: DecimalText = input.parse().expect("valid decimal");
        assert_eq!(value.round_to(places).to_string(), expected);
    }

    #[rstest]
    fn serde_uses_strings() {
        let value: DecimalText = serde_json::from_str("\"12.50\"").expect("string decimal");
        assert_eq!(serde_json::to_string(&value).expect("serialize"), "\"12.50\"");
        assert!(serde_json::from_str::<DecimalText>("12.5").is_err());
    }

    fn dec(text: &str) -> DecimalText {
        text.parse().expect("valid decimal")
    }

    #[rstest]
    fn sums_preserve_exactness() {
        let total = DecimalText::checked_sum(["0.1", "0.2"].map(dec)).expect("in range");
        assert_eq!(total.to_string(), "0.3");
    }

    #[rstest]
    fn sum_of_nothing_is_zero() {
        assert_eq!(DecimalText::checked_sum([]), Ok(DecimalText::ZERO));
    }

    #[rstest]
    fn sums_report_overflow() {
        let max = dec("79228162514264337593543950335");
        assert_eq!(
            DecimalText::checked_sum([max, max]),
            Err(DecimalOverflowError)
        );
    }

    #[rstest]
    #[case(NumericBounds::MEASURE, "99999999.99", true)]
    #[case(NumericBounds::MEASURE, "-99999999.99", true)]
    #[case(NumericBounds::MEASURE, "0.5", true)]
    #[case(NumericBounds::MEASURE, "100000000", false)]
    #[case(NumericBounds::MEASURE, "1.005", false)]
    #[case(NumericBounds::MEASURE, "1.500", true)]
    #[case(NumericBounds::MEASURE, "79228162514264337593543950335", false)]
    #[case(NumericBounds::AMOUNT, "9999999999999.99", true)]
    #[case(NumericBounds::AMOUNT, "10000000000000", false)]
    fn bounds_follow_column_precision(
        #[case] bounds: NumericBounds,
        #[case] input: &str,
        #[case] admitted: bool,
    ) {
        assert_eq!(bounds.admits(dec(input)), admitted);
    }
}
