//! Numeric codecs
//!
//! Integer and decimal parsing/rendering, and display formatting with a
//! fixed precision and optional thousands separator.

use crate::{Error, Result};
use tracing::trace;
use vt_core::{Combine, Transformer, combine};

/// Parse a decimal integer string
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToInt;

impl Transformer for StringToInt {
    type Value = String;
    type Transformed = i64;
    type Error = Error;

    fn transform(&self, value: String) -> Result<i64> {
        value.parse::<i64>().map_err(|error| {
            trace!("Rejecting integer input {:?}: {}", value, error);
            Error::parse(value, "integer")
        })
    }
}

/// Render an integer in decimal
#[derive(Debug, Clone, Copy, Default)]
pub struct IntToString;

impl Transformer for IntToString {
    type Value = i64;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }
}

/// Parse a finite decimal number
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToDecimal;

impl Transformer for StringToDecimal {
    type Value = String;
    type Transformed = f64;
    type Error = Error;

    fn transform(&self, value: String) -> Result<f64> {
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            Ok(_) => Err(Error::out_of_range(format!("non-finite number: {value}"))),
            Err(error) => {
                trace!("Rejecting decimal input {:?}: {}", value, error);
                Err(Error::parse(value, "decimal"))
            }
        }
    }
}

/// Render a finite decimal number
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalToString;

impl Transformer for DecimalToString {
    type Value = f64;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: f64) -> Result<String> {
        if value.is_finite() {
            Ok(value.to_string())
        } else {
            Err(Error::out_of_range(format!("non-finite number: {value}")))
        }
    }
}

/// `String -> i64`
#[must_use]
pub fn string_to_int() -> StringToInt {
    StringToInt
}

/// `i64 -> String`
#[must_use]
pub fn int_to_string() -> IntToString {
    IntToString
}

/// `String <-> i64`
#[must_use]
pub fn string_int() -> Combine<StringToInt, IntToString> {
    combine(StringToInt, IntToString)
}

/// `String <-> f64`
#[must_use]
pub fn string_decimal() -> Combine<StringToDecimal, DecimalToString> {
    combine(StringToDecimal, DecimalToString)
}

/// Format a number with fixed decimals and an optional thousands separator
///
/// With a separator, trailing fractional zeros are dropped.
#[derive(Debug, Clone, Default)]
pub struct NumberFormat {
    decimals: usize,
    thousands_sep: Option<String>,
}

impl NumberFormat {
    /// Fixed precision, no grouping
    #[must_use]
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            thousands_sep: None,
        }
    }

    /// Group the integer part with `sep`
    #[must_use]
    pub fn with_thousands_sep(mut self, sep: impl Into<String>) -> Self {
        self.thousands_sep = Some(sep.into());
        self
    }
}

impl Transformer for NumberFormat {
    type Value = f64;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::out_of_range(format!("non-finite number: {value}")));
        }
        let precision = self.decimals;
        let fixed = format!("{value:.precision$}");
        let Some(sep) = self.thousands_sep.as_deref() else {
            return Ok(fixed);
        };

        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let (sign, digits) = match whole.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", whole),
        };
        let mut grouped = format!("{sign}{}", group_digits(digits, sep));
        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            grouped.push('.');
            grouped.push_str(fraction);
        }
        Ok(grouped)
    }
}

/// `f64 -> String` with `decimals` fraction digits, grouped by `thousands_sep`
/// when given
#[must_use]
pub fn number_format(decimals: usize, thousands_sep: Option<&str>) -> NumberFormat {
    let format = NumberFormat::new(decimals);
    match thousands_sep {
        Some(sep) => format.with_thousands_sep(sep),
        None => format,
    }
}

/// Join groups of three ASCII digits, counted from the right, with `sep`
fn group_digits(digits: &str, sep: &str) -> String {
    let head = digits.len() % 3;
    let (lead, rest) = digits.split_at(head);
    let groups = rest
        .as_bytes()
        .chunks(3)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok());

    std::iter::once(lead)
        .filter(|lead| !lead.is_empty())
        .chain(groups)
        .collect::<Vec<_>>()
        .join(sep)
}
