//! One-way transformers
//!
//! A [`Transformer`] is a pure, fallible conversion from one value type to
//! another. Everything else in this crate is built out of it.

use crate::boxed::BoxTransformer;
use crate::compose::Compose;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A pure conversion from [`Value`](Transformer::Value) to
/// [`Transformed`](Transformer::Transformed) that may fail with
/// [`Error`](Transformer::Error).
///
/// Implementations must be referentially transparent: the same input always
/// produces the same output and nothing observable happens on the side.
pub trait Transformer {
    /// Source type
    type Value;

    /// Target type
    type Transformed;

    /// Failure type
    type Error;

    /// Convert a value.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error when the value cannot be converted.
    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error>;

    /// Feed the output of this transformer into `next`.
    ///
    /// Method form of [`compose`](crate::compose()).
    fn and_then<R>(self, next: R) -> Compose<Self, R>
    where
        Self: Sized,
        R: Transformer<Value = Self::Transformed, Error = Self::Error>,
    {
        Compose::new(self, next)
    }

    /// Erase the concrete type behind a shared pointer.
    fn boxed(self) -> BoxTransformer<Self::Value, Self::Transformed, Self::Error>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxTransformer::new(self)
    }
}

impl<T: Transformer + ?Sized> Transformer for &T {
    type Value = T::Value;
    type Transformed = T::Transformed;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        (**self).transform(value)
    }
}

impl<T: Transformer + ?Sized> Transformer for Box<T> {
    type Value = T::Value;
    type Transformed = T::Transformed;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        (**self).transform(value)
    }
}

impl<T: Transformer + ?Sized> Transformer for Arc<T> {
    type Value = T::Value;
    type Transformed = T::Transformed;
    type Error = T::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        (**self).transform(value)
    }
}

/// A transformer backed by a closure.
pub struct ValueTransformer<V, T, E, F> {
    transform: F,
    marker: PhantomData<fn(V) -> Result<T, E>>,
}

impl<V, T, E, F> ValueTransformer<V, T, E, F>
where
    F: Fn(V) -> Result<T, E>,
{
    /// Wrap a conversion function
    pub fn new(transform: F) -> Self {
        Self {
            transform,
            marker: PhantomData,
        }
    }
}

impl<V, T, E, F> Transformer for ValueTransformer<V, T, E, F>
where
    F: Fn(V) -> Result<T, E>,
{
    type Value = V;
    type Transformed = T;
    type Error = E;

    fn transform(&self, value: V) -> Result<T, E> {
        (self.transform)(value)
    }
}

impl<V, T, E, F: Clone> Clone for ValueTransformer<V, T, E, F> {
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            marker: PhantomData,
        }
    }
}

impl<V, T, E, F> fmt::Debug for ValueTransformer<V, T, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueTransformer")
            .field("value", &std::any::type_name::<V>())
            .field("transformed", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
