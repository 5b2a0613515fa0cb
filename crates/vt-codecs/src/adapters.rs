//! Value adapters
//!
//! Reversible codecs that move between [`Value`] and plain Rust types, plus
//! map field extraction and null pass-through.

use crate::value::Value;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use vt_core::{
    Compose, Flip, Optional, ReversibleTransformer, Transformer, compose, flip, lift_optional,
};

/// A Rust type with a canonical [`Value`] representation.
pub trait ValueKind: Sized {
    /// Name used in type-mismatch errors
    const KIND: &'static str;

    /// Extract from a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the value has another shape.
    fn from_value(value: Value) -> Result<Self>;

    /// Wrap into a value
    fn into_value(self) -> Value;
}

impl ValueKind for String {
    const KIND: &'static str = "string";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl ValueKind for i64 {
    const KIND: &'static str = "integer";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

/// Largest integer magnitude an `f64` holds exactly
const MAX_EXACT_INTEGER: u64 = 1 << f64::MANTISSA_DIGITS;

impl ValueKind for f64 {
    const KIND: &'static str = "decimal";

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(d) => Ok(d),
            // exact only up to 2^53
            Value::Integer(i) if i.unsigned_abs() <= MAX_EXACT_INTEGER => Ok(i as f64),
            Value::Integer(i) => Err(Error::out_of_range(format!(
                "integer {i} has no exact decimal representation"
            ))),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::Decimal(self)
    }
}

impl ValueKind for bool {
    const KIND: &'static str = "bool";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ValueKind for Vec<Value> {
    const KIND: &'static str = "list";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::List(self)
    }
}

impl ValueKind for BTreeMap<String, Value> {
    const KIND: &'static str = "map";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(Error::type_mismatch(Self::KIND, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::Map(self)
    }
}

/// Reversible `Value <-> X` codec
pub struct ValueAs<X> {
    marker: PhantomData<fn() -> X>,
}

impl<X> ValueAs<X> {
    /// Create the adapter
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<X> Default for ValueAs<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> Clone for ValueAs<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X> Copy for ValueAs<X> {}

impl<X> std::fmt::Debug for ValueAs<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ValueAs")
            .field(&std::any::type_name::<X>())
            .finish()
    }
}

impl<X: ValueKind> Transformer for ValueAs<X> {
    type Value = Value;
    type Transformed = X;
    type Error = Error;

    fn transform(&self, value: Value) -> Result<X> {
        X::from_value(value)
    }
}

impl<X: ValueKind> ReversibleTransformer for ValueAs<X> {
    fn reverse_transform(&self, value: X) -> Result<Value> {
        Ok(value.into_value())
    }
}

/// `Value::String <-> String`
#[must_use]
pub fn value_string() -> ValueAs<String> {
    ValueAs::new()
}

/// `Value::Integer <-> i64`
#[must_use]
pub fn value_int() -> ValueAs<i64> {
    ValueAs::new()
}

/// `Value::Decimal <-> f64`
///
/// Integers are accepted and widened as long as the conversion is exact, that
/// is up to 2^53 in magnitude. Larger integers fail with
/// [`Error::OutOfRange`].
#[must_use]
pub fn value_decimal() -> ValueAs<f64> {
    ValueAs::new()
}

/// `Value::Bool <-> bool`
#[must_use]
pub fn value_bool() -> ValueAs<bool> {
    ValueAs::new()
}

/// `Value::List <-> Vec<Value>`
#[must_use]
pub fn value_list() -> ValueAs<Vec<Value>> {
    ValueAs::new()
}

/// `Value::Map <-> BTreeMap<String, Value>`
#[must_use]
pub fn value_map() -> ValueAs<BTreeMap<String, Value>> {
    ValueAs::new()
}

/// `Value <-> Option<Value>`, with `Null` as the absent case
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAsNone;

impl Transformer for NullAsNone {
    type Value = Value;
    type Transformed = Option<Value>;
    type Error = Error;

    fn transform(&self, value: Value) -> Result<Option<Value>> {
        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }
}

impl ReversibleTransformer for NullAsNone {
    fn reverse_transform(&self, value: Option<Value>) -> Result<Value> {
        Ok(value.unwrap_or(Value::Null))
    }
}

/// A `Value <-> Value` codec that lets `Null` through untouched in both
/// directions.
pub type Nullable<R> = Compose<NullAsNone, Compose<Optional<R>, Flip<NullAsNone>>>;

/// Wrap a `Value <-> Value` codec so that `Null` passes through without
/// reaching it.
pub fn nullable<R>(codec: R) -> Nullable<R>
where
    R: ReversibleTransformer<Value = Value, Transformed = Value, Error = Error>,
{
    compose(NullAsNone, compose(lift_optional(codec), flip(NullAsNone)))
}

/// Extract a required field from a map value (one-way)
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
}

impl Transformer for Field {
    type Value = Value;
    type Transformed = Value;
    type Error = Error;

    fn transform(&self, value: Value) -> Result<Value> {
        match value {
            Value::Map(mut map) => map
                .remove(&self.name)
                .ok_or_else(|| Error::MissingField(self.name.clone())),
            other => Err(Error::type_mismatch("map", other.kind())),
        }
    }
}

/// Extract an optional field from a map value; absent and null both yield
/// `None` (one-way)
#[derive(Debug, Clone)]
pub struct OptionalField {
    name: String,
}

impl Transformer for OptionalField {
    type Value = Value;
    type Transformed = Option<Value>;
    type Error = Error;

    fn transform(&self, value: Value) -> Result<Option<Value>> {
        match value {
            Value::Map(mut map) => Ok(map.remove(&self.name).filter(|v| !v.is_null())),
            other => Err(Error::type_mismatch("map", other.kind())),
        }
    }
}

/// Required field extractor
pub fn field(name: impl Into<String>) -> Field {
    Field { name: name.into() }
}

/// Optional field extractor
pub fn optional_field(name: impl Into<String>) -> OptionalField {
    OptionalField { name: name.into() }
}
