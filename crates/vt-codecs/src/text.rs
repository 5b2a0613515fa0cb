//! Text codecs
//!
//! One-way string clean-up steps. They slot into a composition before a
//! parsing codec.

use crate::{Error, Result};
use vt_core::Transformer;

/// Strip leading and trailing whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Transformer for Trim {
    type Value = String;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: String) -> Result<String> {
        Ok(value.trim().to_string())
    }
}

/// Convert to uppercase
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Transformer for Uppercase {
    type Value = String;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: String) -> Result<String> {
        Ok(value.to_uppercase())
    }
}

/// Convert to lowercase
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Transformer for Lowercase {
    type Value = String;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: String) -> Result<String> {
        Ok(value.to_lowercase())
    }
}

/// Split by a delimiter and keep one part
#[derive(Debug, Clone)]
pub struct Split {
    delimiter: String,
    index: usize,
}

impl Transformer for Split {
    type Value = String;
    type Transformed = String;
    type Error = Error;

    fn transform(&self, value: String) -> Result<String> {
        let parts: Vec<&str> = value.split(self.delimiter.as_str()).collect();

        parts.get(self.index).map(|part| (*part).to_string()).ok_or_else(|| {
            Error::out_of_range(format!(
                "Split index {} out of bounds ({} parts)",
                self.index,
                parts.len()
            ))
        })
    }
}

/// Whitespace stripper
#[must_use]
pub fn trim() -> Trim {
    Trim
}

/// Uppercase converter
#[must_use]
pub fn uppercase() -> Uppercase {
    Uppercase
}

/// Lowercase converter
#[must_use]
pub fn lowercase() -> Lowercase {
    Lowercase
}

/// Keep the `index`-th part of the input split on `delimiter`
pub fn split(delimiter: impl Into<String>, index: usize) -> Split {
    Split {
        delimiter: delimiter.into(),
        index,
    }
}
