#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vt-codecs
//!
//! Wire value model, leaf codecs, code lists and a codec registry built on
//! the `vt-core` transformer algebra.
//!
//! Leaf codecs convert between wire representations (strings, numbers,
//! booleans, dates, maps) and domain values. They are ordinary
//! [`vt_core::Transformer`]s, so they compose, flip and lift like any other.

/// Adapters between [`Value`] and plain Rust types.
pub mod adapters;
/// Boolean codecs.
pub mod boolean;
/// YAML-configured code lists backed by the keyed-mapping lift.
pub mod codelist;
/// Calendar date codecs.
pub mod date;
/// Integer and decimal codecs plus number formatting.
pub mod numeric;
/// Named, type-erased codecs shared across threads.
pub mod registry;
/// String clean-up codecs.
pub mod text;
/// Wire value model.
pub mod value;

pub use codelist::{CodeEntry, CodeList, CodeListSet};
pub use date::DateFormat;
pub use registry::{CodecRegistry, ValueCodec};
pub use value::Value;

use thiserror::Error;

/// Errors produced by the codecs in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot parse '{input}' as {target}")]
    Parse { input: String, target: String },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown codec: {0}")]
    UnknownCodec(String),
}

impl Error {
    /// Build a parse error naming the input and the type it should have become.
    pub fn parse(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            target: target.into(),
        }
    }

    /// Build a type-mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build an out-of-range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Build a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;
