//! Input validation for counter names, targets and increments.
//!
//! Every validator runs its checks in a fixed order and stops at the first
//! failure, so a given input always maps to exactly one [`ValidationError`].
//!
//! # Numeric input
//!
//! Targets and increments arrive either as numbers (steppers, templates) or as
//! raw text (keyboard entry). Both are folded into a single `f64` by
//! [`NumericInput::resolve`] before any check runs:
//!
//! * **`Number`** keeps its fractional part, so `5.5` is rejected as not whole.
//! * **`Text`** is read as a decimal integer prefix: leading whitespace, an
//!   optional sign, then digits up to the first non-digit. `"10.7"` becomes
//!   `10` and passes; `"abc"` has no digits and resolves to NaN.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, de::Visitor};

use crate::error::ValidationError;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_TARGET: f64 = 999_999.0;
pub const MAX_INCREMENT: f64 = 10_000.0;

// ── Name ───────────────────────────────────────────────────────────────────────

/// Trim with the host text field's notion of whitespace: Unicode White_Space
/// minus NEL (U+0085), plus the BOM.
fn trim_host(s: &str) -> &str {
    s.trim_matches(is_host_whitespace)
}

fn is_host_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Check a counter name.
///
/// Emptiness is judged on the trimmed name, length on the raw one. Length is
/// counted in UTF-16 code units, which is what the text field reports.
pub fn validate_counter_name(name: &str) -> Result<(), ValidationError> {
    if trim_host(name).is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.encode_utf16().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// [`validate_counter_name`] for a field that may be absent altogether.
pub fn validate_counter_name_opt(name: Option<&str>) -> Result<(), ValidationError> {
    name.map_or(Err(ValidationError::NameEmpty), validate_counter_name)
}

/// Strip leading and trailing whitespace. Interior whitespace and case are
/// left alone.
pub fn sanitize_counter_name(name: &str) -> String {
    trim_host(name).to_owned()
}

// ── NumericInput ───────────────────────────────────────────────────────────────

/// A number as typed or as stored.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Fold the input into a single value; `NaN` when text has no digits.
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_int_prefix(s),
        }
    }
}

/// Decimal integer-prefix parse. Returns `NaN` when no digit is found.
fn parse_int_prefix(s: &str) -> f64 {
    let s = trim_host(s);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value * 10.0 + f64::from(b - b'0');
        seen = true;
    }

    match (seen, negative) {
        (false, _) => f64::NAN,
        (true, true) => -value,
        (true, false) => value,
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for NumericInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

// JSON carries either `8` or `"8"`; keep whichever arrived.

struct NumericInputVisitor;

impl Visitor<'_> for NumericInputVisitor {
    type Value = NumericInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string containing a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(NumericInput::Number(v))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
        Ok(NumericInput::Text(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
        Ok(NumericInput::Text(s))
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

// ── Target / increment ─────────────────────────────────────────────────────────

/// Bounds and messages for one numeric field.
struct NumericRule {
    /// Zero itself is rejected when `true`.
    exclusive_zero: bool,
    max: f64,
    not_a_number: ValidationError,
    below_min: ValidationError,
    too_large: ValidationError,
    not_whole: ValidationError,
}

const TARGET_RULE: NumericRule = NumericRule {
    exclusive_zero: false,
    max: MAX_TARGET,
    not_a_number: ValidationError::TargetNotANumber,
    below_min: ValidationError::TargetNegative,
    too_large: ValidationError::TargetTooLarge,
    not_whole: ValidationError::TargetNotWhole,
};

const INCREMENT_RULE: NumericRule = NumericRule {
    exclusive_zero: true,
    max: MAX_INCREMENT,
    not_a_number: ValidationError::IncrementNotANumber,
    below_min: ValidationError::IncrementNotPositive,
    too_large: ValidationError::IncrementTooLarge,
    not_whole: ValidationError::IncrementNotWhole,
};

impl NumericRule {
    fn check(&self, input: &NumericInput) -> Result<(), ValidationError> {
        let value = input.resolve();

        if value.is_nan() {
            return Err(self.not_a_number);
        }
        let below = if self.exclusive_zero {
            value <= 0.0
        } else {
            value < 0.0
        };
        if below {
            return Err(self.below_min);
        }
        if value > self.max {
            return Err(self.too_large);
        }
        if value.fract() != 0.0 {
            return Err(self.not_whole);
        }
        Ok(())
    }
}

/// Check a counter target: a whole number in `0..=999_999`.
pub fn validate_target(target: impl Into<NumericInput>) -> Result<(), ValidationError> {
    TARGET_RULE.check(&target.into())
}

/// Check a custom increment: a whole number in `1..=10_000`.
pub fn validate_increment(increment: impl Into<NumericInput>) -> Result<(), ValidationError> {
    INCREMENT_RULE.check(&increment.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_stops_at_first_non_digit() {
        assert_eq!(parse_int_prefix("10.7"), 10.0);
        assert_eq!(parse_int_prefix("42abc"), 42.0);
        assert_eq!(parse_int_prefix("  \t7"), 7.0);
        assert_eq!(parse_int_prefix("+12"), 12.0);
        assert_eq!(parse_int_prefix("-3"), -3.0);
        assert_eq!(parse_int_prefix("0x10"), 0.0);
    }

    #[test]
    fn int_prefix_without_digits_is_nan() {
        assert!(parse_int_prefix("").is_nan());
        assert!(parse_int_prefix("abc").is_nan());
        assert!(parse_int_prefix("-").is_nan());
        assert!(parse_int_prefix(".5").is_nan());
        assert!(parse_int_prefix("- 5").is_nan());
    }

    #[test]
    fn trim_host_drops_bom() {
        assert_eq!(trim_host("\u{feff} Water \u{a0}"), "Water");
    }

    #[test]
    fn trim_host_keeps_next_line() {
        assert_eq!(trim_host("\u{85}Water\u{85}"), "\u{85}Water\u{85}");
        assert!(parse_int_prefix("\u{85}5").is_nan());
        assert_eq!(parse_int_prefix("\u{2028}5"), 5.0);
    }
}
