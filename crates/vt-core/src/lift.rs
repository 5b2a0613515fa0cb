//! Lifting transformers over containers
//!
//! Each lift adapts a transformer to work on a container built around its
//! value types: an optional source, an optional target, both, a sequence, or
//! a fixed key to value table. A lift is reversible whenever the transformer
//! it wraps is.

use crate::reversible::{Combine, Flip, ReversibleTransformer, combine};
use crate::transformer::Transformer;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Lift over an optional source, substituting a default for absent input.
pub struct OptionalValue<T: Transformer> {
    inner: T,
    default_transformed: T::Transformed,
}

impl<T> Transformer for OptionalValue<T>
where
    T: Transformer,
    T::Transformed: Clone,
{
    type Value = Option<T::Value>;
    type Transformed = T::Transformed;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        match value {
            Some(value) => self.inner.transform(value),
            None => Ok(self.default_transformed.clone()),
        }
    }
}

impl<T> ReversibleTransformer for OptionalValue<T>
where
    T: ReversibleTransformer,
    T::Transformed: Clone,
{
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.inner.reverse_transform(value).map(Some)
    }
}

impl<T> Clone for OptionalValue<T>
where
    T: Transformer + Clone,
    T::Transformed: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            default_transformed: self.default_transformed.clone(),
        }
    }
}

impl<T> fmt::Debug for OptionalValue<T>
where
    T: Transformer + fmt::Debug,
    T::Transformed: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalValue")
            .field("inner", &self.inner)
            .field("default_transformed", &self.default_transformed)
            .finish()
    }
}

/// Lift over an optional target. Success is always wrapped as present.
#[derive(Debug, Clone)]
pub struct OptionalTransformed<T> {
    inner: T,
}

impl<T: Transformer> Transformer for OptionalTransformed<T> {
    type Value = T::Value;
    type Transformed = Option<T::Transformed>;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.inner.transform(value).map(Some)
    }
}

/// Reversible lift over an optional target.
///
/// Reversing an absent value yields the default without touching the wrapped
/// transformer.
pub type ReversibleOptionalTransformed<R> = Flip<OptionalValue<Flip<R>>>;

/// Lift over an optional source and target. Absent maps to absent.
#[derive(Debug, Clone)]
pub struct Optional<T> {
    inner: T,
}

impl<T: Transformer> Transformer for Optional<T> {
    type Value = Option<T::Value>;
    type Transformed = Option<T::Transformed>;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        match value {
            Some(value) => self.inner.transform(value).map(Some),
            None => Ok(None),
        }
    }
}

impl<T: ReversibleTransformer> ReversibleTransformer for Optional<T> {
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        match value {
            Some(value) => self.inner.reverse_transform(value).map(Some),
            None => Ok(None),
        }
    }
}

/// Lift over a sequence, element by element.
///
/// Output order matches input order. The first failing element aborts the
/// whole conversion and its error is returned as is.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    inner: T,
}

impl<T: Transformer> Transformer for Sequence<T> {
    type Value = Vec<T::Value>;
    type Transformed = Vec<T::Transformed>;
    type Error = T::Error;

    fn transform(&self, values: Self::Value) -> Result<Self::Transformed, Self::Error> {
        values
            .into_iter()
            .map(|value| self.inner.transform(value))
            .collect()
    }
}

impl<T: ReversibleTransformer> ReversibleTransformer for Sequence<T> {
    fn reverse_transform(&self, values: Self::Transformed) -> Result<Self::Value, Self::Error> {
        values
            .into_iter()
            .map(|value| self.inner.reverse_transform(value))
            .collect()
    }
}

/// A fixed key to value table. Never fails; unknown keys resolve to the
/// default.
pub struct Dictionary<K, V, E = Infallible> {
    table: HashMap<K, V>,
    default_transformed: V,
    marker: PhantomData<fn() -> E>,
}

impl<K, V, E> Dictionary<K, V, E>
where
    K: Eq + Hash,
{
    /// Look up a key without going through [`Transformer::transform`]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    /// Value produced for unknown keys
    pub fn default_transformed(&self) -> &V {
        &self.default_transformed
    }

    /// Number of mapped keys
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no keys are mapped
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<K, V, E> Transformer for Dictionary<K, V, E>
where
    K: Eq + Hash,
    V: Clone,
{
    type Value = K;
    type Transformed = V;
    type Error = E;

    fn transform(&self, key: K) -> Result<V, E> {
        Ok(self
            .table
            .get(&key)
            .unwrap_or(&self.default_transformed)
            .clone())
    }
}

impl<K: Clone, V: Clone, E> Clone for Dictionary<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            default_transformed: self.default_transformed.clone(),
            marker: PhantomData,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E> fmt::Debug for Dictionary<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("table", &self.table)
            .field("default_transformed", &self.default_transformed)
            .finish()
    }
}

/// Reversible fixed table: a forward [`Dictionary`] paired with its reverse.
pub type ReversibleDictionary<K, V, E = Infallible> =
    Combine<Dictionary<K, V, E>, Dictionary<V, K, E>>;

/// Lift over an optional source.
///
/// Absent input yields `default_transformed` without invoking `transformer`.
/// When `transformer` is reversible, the reverse direction always produces a
/// present value.
pub fn lift_optional_value<T>(
    transformer: T,
    default_transformed: T::Transformed,
) -> OptionalValue<T>
where
    T: Transformer,
{
    OptionalValue {
        inner: transformer,
        default_transformed,
    }
}

/// Lift over an optional target (one-way).
pub fn lift_optional_transformed<T: Transformer>(transformer: T) -> OptionalTransformed<T> {
    OptionalTransformed { inner: transformer }
}

/// Lift a reversible transformer over an optional target.
///
/// Forward results are wrapped as present. Reversing an absent value yields
/// `default_reverse_transformed`.
pub fn lift_optional_transformed_reversible<R>(
    reversible: R,
    default_reverse_transformed: R::Value,
) -> ReversibleOptionalTransformed<R>
where
    R: ReversibleTransformer,
    R::Value: Clone,
{
    Flip::new(lift_optional_value(
        Flip::new(reversible),
        default_reverse_transformed,
    ))
}

/// Lift over an optional source and target; absent stays absent.
pub fn lift_optional<T: Transformer>(transformer: T) -> Optional<T> {
    Optional { inner: transformer }
}

/// Lift over a sequence.
pub fn lift_sequence<T: Transformer>(transformer: T) -> Sequence<T> {
    Sequence { inner: transformer }
}

/// Lift a fixed key to value table into a transformer that never fails.
///
/// When a key appears more than once, the last pair wins.
pub fn lift_dictionary<K, V, E>(
    pairs: impl IntoIterator<Item = (K, V)>,
    default_transformed: V,
) -> Dictionary<K, V, E>
where
    K: Eq + Hash,
{
    Dictionary {
        table: pairs.into_iter().collect(),
        default_transformed,
        marker: PhantomData,
    }
}

/// Lift a fixed key to value table into a reversible transformer.
///
/// The reverse table is derived from the same pairs. When several keys share
/// a value, the last pair wins the reverse lookup.
pub fn lift_dictionary_reversible<K, V, E>(
    pairs: impl IntoIterator<Item = (K, V)>,
    default_transformed: V,
    default_reverse_transformed: K,
) -> ReversibleDictionary<K, V, E>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    let pairs: Vec<(K, V)> = pairs.into_iter().collect();
    let reversed: Vec<(V, K)> = pairs
        .iter()
        .map(|(key, value)| (value.clone(), key.clone()))
        .collect();

    combine(
        lift_dictionary(pairs, default_transformed),
        lift_dictionary(reversed, default_reverse_transformed),
    )
}
