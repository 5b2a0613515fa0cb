//! Date codecs
//!
//! Calendar dates travel as strings in a handful of fixed layouts. [`DateCodec`]
//! parses one layout into a [`NaiveDate`] and renders it back;
//! [`date_format`] chains two of them to reformat a date string.

use crate::{Error, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use tracing::trace;
use vt_core::{Compose, Flip, ReversibleTransformer, Transformer, compose, flip};

/// Supported date layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `20240115`
    Yyyymmdd,

    /// `2024-01-15`
    IsoDate,

    /// `15012024`
    Ddmmyyyy,
}

impl DateFormat {
    /// chrono format string for this layout
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Yyyymmdd => "%Y%m%d",
            DateFormat::IsoDate => "%Y-%m-%d",
            DateFormat::Ddmmyyyy => "%d%m%Y",
        }
    }

    /// Layout name as written in configuration
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DateFormat::Yyyymmdd => "YYYYMMDD",
            DateFormat::IsoDate => "YYYY-MM-DD",
            DateFormat::Ddmmyyyy => "DDMMYYYY",
        }
    }

    /// Character layout: `9` is a digit, anything else a literal separator
    fn shape(self) -> &'static [u8] {
        match self {
            DateFormat::Yyyymmdd | DateFormat::Ddmmyyyy => b"99999999",
            DateFormat::IsoDate => b"9999-99-99",
        }
    }

    fn matches_shape(self, input: &str) -> bool {
        let shape = self.shape();
        input.len() == shape.len()
            && input.bytes().zip(shape).all(|(byte, &slot)| match slot {
                b'9' => byte.is_ascii_digit(),
                separator => byte == separator,
            })
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "YYYYMMDD" => Ok(DateFormat::Yyyymmdd),
            "YYYY-MM-DD" | "ISO8601" => Ok(DateFormat::IsoDate),
            "DDMMYYYY" => Ok(DateFormat::Ddmmyyyy),
            _ => Err(Error::config(format!("Unsupported date format: {s}"))),
        }
    }
}

/// `String <-> NaiveDate` in one layout
#[derive(Debug, Clone, Copy)]
pub struct DateCodec {
    format: DateFormat,
}

impl DateCodec {
    /// Layout this codec reads and writes
    #[must_use]
    pub fn format(&self) -> DateFormat {
        self.format
    }
}

impl Transformer for DateCodec {
    type Value = String;
    type Transformed = NaiveDate;
    type Error = Error;

    fn transform(&self, value: String) -> Result<NaiveDate> {
        let target = format!("date ({})", self.format);
        // chrono tolerates padding, signs and short fields; the wire layouts do not
        if !self.format.matches_shape(&value) {
            trace!("Rejecting date input {:?} for {}: wrong shape", value, self.format);
            return Err(Error::parse(value, target));
        }
        NaiveDate::parse_from_str(&value, self.format.pattern()).map_err(|error| {
            trace!("Rejecting date input {:?} for {}: {}", value, self.format, error);
            Error::parse(value, target)
        })
    }
}

impl ReversibleTransformer for DateCodec {
    fn reverse_transform(&self, value: NaiveDate) -> Result<String> {
        Ok(value.format(self.format.pattern()).to_string())
    }
}

/// `String <-> NaiveDate` in `format`
#[must_use]
pub fn date(format: DateFormat) -> DateCodec {
    DateCodec { format }
}

/// Reformat a date string from one layout to another, reversibly.
#[must_use]
pub fn date_format(from: DateFormat, to: DateFormat) -> Compose<DateCodec, Flip<DateCodec>> {
    compose(date(from), flip(date(to)))
}
