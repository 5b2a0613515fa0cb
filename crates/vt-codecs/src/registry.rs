//! Codec registry
//!
//! Named `Value <-> Value` codecs behind type erasure, shared across threads.
//! Cloning a registry shares the same table.

use crate::adapters::{nullable, value_bool, value_decimal, value_int, value_string};
use crate::boolean::string_bool;
use crate::codelist::CodeListSet;
use crate::date::{DateFormat, date_format};
use crate::numeric::{string_decimal, string_int};
use crate::value::Value;
use crate::{Error, Result};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};
use vt_core::{BoxReversibleTransformer, ReversibleTransformer, Transformer, compose, flip};

/// A type-erased `Value <-> Value` codec
pub type ValueCodec = BoxReversibleTransformer<Value, Value, Error>;

/// Registry for looking up codecs by name
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    codecs: Arc<DashMap<String, ValueCodec>>,
}

impl CodecRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in scalar codecs:
    ///
    /// - `integer`: string <-> integer
    /// - `decimal`: string <-> decimal
    /// - `boolean`: string <-> bool
    /// - `date:<FROM>:<TO>` for every pair of distinct [`DateFormat`]s
    ///
    /// All of them pass `Null` through untouched.
    #[must_use]
    pub fn with_builtin_codecs() -> Self {
        let registry = Self::new();

        registry.register(
            "integer",
            nullable(compose(compose(value_string(), string_int()), flip(value_int()))),
        );
        registry.register(
            "decimal",
            nullable(compose(
                compose(value_string(), string_decimal()),
                flip(value_decimal()),
            )),
        );
        registry.register(
            "boolean",
            nullable(compose(compose(value_string(), string_bool()), flip(value_bool()))),
        );

        let formats = [DateFormat::Yyyymmdd, DateFormat::IsoDate, DateFormat::Ddmmyyyy];
        for from in formats {
            for to in formats.into_iter().filter(|to| *to != from) {
                registry.register(
                    format!("date:{from}:{to}"),
                    nullable(compose(
                        compose(value_string(), date_format(from, to)),
                        flip(value_string()),
                    )),
                );
            }
        }

        registry
    }

    /// Register a codec, returning the one it replaces
    pub fn register<R>(&self, name: impl Into<String>, codec: R) -> Option<ValueCodec>
    where
        R: ReversibleTransformer<Value = Value, Transformed = Value, Error = Error>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        debug!("Registering codec: {}", name);
        self.codecs.insert(name, codec.boxed_reversible())
    }

    /// Register every list in `set` under `codelist:<name>`, passing `Null`
    /// through
    pub fn register_code_lists(&self, set: &CodeListSet) {
        for list in set.iter() {
            self.register(format!("codelist:{}", list.name), nullable(list.value_codec()));
        }
    }

    /// Get a codec by name.
    ///
    /// The returned handle is independent of the registry; later changes to
    /// the registry do not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCodec`] if no codec has this name.
    pub fn get(&self, name: &str) -> Result<ValueCodec> {
        trace!("Looking up codec: {}", name);
        self.codecs
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::UnknownCodec(name.to_string()))
    }

    /// Remove a codec
    pub fn remove(&self, name: &str) -> Option<ValueCodec> {
        self.codecs.remove(name).map(|(_, codec)| codec)
    }

    /// Check if a codec exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .codecs
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered codecs
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether no codec is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Run the named codec forwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCodec`] for an unknown name, or the codec's own
    /// error.
    pub fn transform(&self, name: &str, value: Value) -> Result<Value> {
        self.get(name)?.transform(value)
    }

    /// Run the named codec backwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCodec`] for an unknown name, or the codec's own
    /// error.
    pub fn reverse_transform(&self, name: &str, value: Value) -> Result<Value> {
        self.get(name)?.reverse_transform(value)
    }
}
