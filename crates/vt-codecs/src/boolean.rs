//! Boolean codecs

use crate::{Error, Result};
use tracing::trace;
use vt_core::{ReversibleTransformer, Transformer};

/// `String <-> bool`
///
/// Accepts `true`/`false`, `yes`/`no` and `1`/`0` in any case; always renders
/// `true` or `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringBool;

impl Transformer for StringBool {
    type Value = String;
    type Transformed = bool;
    type Error = Error;

    fn transform(&self, value: String) -> Result<bool> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => {
                trace!("Rejecting boolean input {:?}", value);
                Err(Error::parse(value, "boolean"))
            }
        }
    }
}

impl ReversibleTransformer for StringBool {
    fn reverse_transform(&self, value: bool) -> Result<String> {
        Ok(value.to_string())
    }
}

/// `String <-> bool`
#[must_use]
pub fn string_bool() -> StringBool {
    StringBool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_bool_accepts_variants() {
        for input in ["true", "TRUE", "Yes", "1"] {
            assert_eq!(string_bool().transform(input.to_string()), Ok(true));
        }
        for input in ["false", "No", "0"] {
            assert_eq!(string_bool().transform(input.to_string()), Ok(false));
        }
    }

    #[test]
    fn test_string_bool_rejects_other_input() {
        assert_eq!(
            string_bool().transform("maybe".to_string()),
            Err(Error::parse("maybe", "boolean"))
        );
    }

    #[test]
    fn test_string_bool_renders_canonical_form() {
        assert_eq!(string_bool().reverse_transform(true), Ok("true".to_string()));
        assert_eq!(string_bool().reverse_transform(false), Ok("false".to_string()));
    }
}
