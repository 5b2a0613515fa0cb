//! Reversible transformers
//!
//! A [`ReversibleTransformer`] can run in both directions. The two directions
//! are supplied independently: nothing here checks or assumes that
//! `reverse_transform(transform(v)) == v`.

use crate::boxed::BoxReversibleTransformer;
use crate::transformer::{Transformer, ValueTransformer};
use std::sync::Arc;

/// A [`Transformer`] that also converts from
/// [`Transformed`](Transformer::Transformed) back to
/// [`Value`](Transformer::Value).
pub trait ReversibleTransformer: Transformer {
    /// Convert a transformed value back.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error when the value cannot be converted.
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error>;

    /// Swap the two directions. Method form of [`flip`].
    fn flip(self) -> Flip<Self>
    where
        Self: Sized,
    {
        Flip::new(self)
    }

    /// Erase the concrete type behind a shared pointer.
    fn boxed_reversible(
        self,
    ) -> BoxReversibleTransformer<Self::Value, Self::Transformed, Self::Error>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxReversibleTransformer::new(self)
    }
}

impl<T: ReversibleTransformer + ?Sized> ReversibleTransformer for &T {
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        (**self).reverse_transform(value)
    }
}

impl<T: ReversibleTransformer + ?Sized> ReversibleTransformer for Box<T> {
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        (**self).reverse_transform(value)
    }
}

impl<T: ReversibleTransformer + ?Sized> ReversibleTransformer for Arc<T> {
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        (**self).reverse_transform(value)
    }
}

/// Two one-way transformers running in opposite directions.
///
/// Built by [`combine`].
#[derive(Debug, Clone)]
pub struct Combine<F, B> {
    forward: F,
    backward: B,
}

impl<F, B> Combine<F, B> {
    /// Split back into both halves
    pub fn into_parts(self) -> (F, B) {
        (self.forward, self.backward)
    }
}

impl<F, B> Transformer for Combine<F, B>
where
    F: Transformer,
    B: Transformer<Value = F::Transformed, Transformed = F::Value, Error = F::Error>,
{
    type Value = F::Value;
    type Transformed = F::Transformed;
    type Error = F::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.forward.transform(value)
    }
}

impl<F, B> ReversibleTransformer for Combine<F, B>
where
    F: Transformer,
    B: Transformer<Value = F::Transformed, Transformed = F::Value, Error = F::Error>,
{
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.backward.transform(value)
    }
}

/// Package two unrelated one-way transformers into a reversible pair.
///
/// The pair is stored as given; the caller is responsible for any inverse
/// relationship between them.
pub fn combine<F, B>(forward: F, backward: B) -> Combine<F, B>
where
    F: Transformer,
    B: Transformer<Value = F::Transformed, Transformed = F::Value, Error = F::Error>,
{
    Combine { forward, backward }
}

/// A reversible transformer backed by two closures.
pub type ReversibleValueTransformer<V, T, E, F, B> =
    Combine<ValueTransformer<V, T, E, F>, ValueTransformer<T, V, E, B>>;

/// Build a reversible transformer straight from two conversion functions.
pub fn reversible<V, T, E, F, B>(
    forward: F,
    backward: B,
) -> ReversibleValueTransformer<V, T, E, F, B>
where
    F: Fn(V) -> Result<T, E>,
    B: Fn(T) -> Result<V, E>,
{
    combine(ValueTransformer::new(forward), ValueTransformer::new(backward))
}

/// A reversible transformer with its directions swapped.
///
/// Built by [`flip`].
#[derive(Debug, Clone)]
pub struct Flip<R> {
    inner: R,
}

impl<R> Flip<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Undo the flip
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: ReversibleTransformer> Transformer for Flip<R> {
    type Value = R::Transformed;
    type Transformed = R::Value;
    type Error = R::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.inner.reverse_transform(value)
    }
}

impl<R: ReversibleTransformer> ReversibleTransformer for Flip<R> {
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.inner.transform(value)
    }
}

/// Swap the two directions of a reversible transformer.
///
/// `flip(flip(r))` behaves exactly like `r`.
pub fn flip<R: ReversibleTransformer>(reversible: R) -> Flip<R> {
    Flip::new(reversible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_int()
    -> impl ReversibleTransformer<Value = String, Transformed = i64, Error = String> + Clone {
        reversible(
            |value: String| {
                value
                    .parse::<i64>()
                    .map_err(|_| format!("not an integer: {value}"))
            },
            |value: i64| Ok(value.to_string()),
        )
    }

    #[test]
    fn test_combine_forwards_both_directions() {
        let forward = ValueTransformer::new(|value: String| value.parse::<i64>().map_err(|_| ()));
        let backward = ValueTransformer::new(|value: i64| Ok::<_, ()>(value.to_string()));
        let combined = combine(forward.clone(), backward.clone());

        assert_eq!(combined.transform("1".to_string()), forward.transform("1".to_string()));
        assert_eq!(combined.reverse_transform(2), backward.transform(2));
        assert!(combined.transform("1.5".to_string()).is_err());
    }

    #[test]
    fn test_combine_does_not_require_inverses() {
        let lossy = reversible(
            |value: i64| Ok::<_, ()>(value / 10),
            |value: i64| Ok(value * 10),
        );

        assert_eq!(lossy.transform(42), Ok(4));
        assert_eq!(lossy.reverse_transform(4), Ok(40));
    }

    #[test]
    fn test_flip_swaps_directions() {
        let flipped = flip(string_int());

        assert_eq!(flipped.transform(3), Ok("3".to_string()));
        assert_eq!(flipped.reverse_transform("4".to_string()), Ok(4));
        assert!(flipped.reverse_transform("4.5".to_string()).is_err());
    }

    #[test]
    fn test_flip_twice_restores_behavior() {
        let original = string_int();
        let twice = original.clone().flip().flip();

        for input in ["0", "-17", "x", "9.5"] {
            assert_eq!(
                twice.transform(input.to_string()),
                original.transform(input.to_string())
            );
        }
        assert_eq!(twice.reverse_transform(5), original.reverse_transform(5));
    }

    #[test]
    fn test_flip_into_inner() {
        let inner = flip(string_int()).into_inner();
        assert_eq!(inner.transform("8".to_string()), Ok(8));
    }

    #[test]
    fn test_combine_into_parts() {
        let (forward, backward) = string_int_parts().into_parts();
        assert_eq!(forward.transform("6".to_string()), Ok(6));
        assert_eq!(backward.transform(6), Ok("6".to_string()));
    }

    fn string_int_parts() -> ReversibleValueTransformer<
        String,
        i64,
        (),
        impl Fn(String) -> Result<i64, ()>,
        impl Fn(i64) -> Result<String, ()>,
    > {
        reversible(
            |value: String| value.parse::<i64>().map_err(|_| ()),
            |value: i64| Ok(value.to_string()),
        )
    }
}
