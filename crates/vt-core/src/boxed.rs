//! Type-erased transformers
//!
//! Statically composed transformers have long, unnameable types. The wrappers
//! here hide them behind an `Arc` so that transformers with the same value
//! types can live side by side in a collection.

use crate::reversible::ReversibleTransformer;
use crate::transformer::Transformer;
use std::fmt;
use std::sync::Arc;

type DynTransformer<V, T, E> = dyn Transformer<Value = V, Transformed = T, Error = E> + Send + Sync;

type DynReversibleTransformer<V, T, E> =
    dyn ReversibleTransformer<Value = V, Transformed = T, Error = E> + Send + Sync;

/// A shared, type-erased [`Transformer`]
pub struct BoxTransformer<V, T, E> {
    inner: Arc<DynTransformer<V, T, E>>,
}

impl<V, T, E> BoxTransformer<V, T, E> {
    /// Erase a transformer
    pub fn new<X>(transformer: X) -> Self
    where
        X: Transformer<Value = V, Transformed = T, Error = E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(transformer),
        }
    }
}

impl<V, T, E> Transformer for BoxTransformer<V, T, E> {
    type Value = V;
    type Transformed = T;
    type Error = E;

    fn transform(&self, value: V) -> Result<T, E> {
        self.inner.transform(value)
    }
}

impl<V, T, E> Clone for BoxTransformer<V, T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, T, E> fmt::Debug for BoxTransformer<V, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxTransformer")
            .field("value", &std::any::type_name::<V>())
            .field("transformed", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A shared, type-erased [`ReversibleTransformer`]
pub struct BoxReversibleTransformer<V, T, E> {
    inner: Arc<DynReversibleTransformer<V, T, E>>,
}

impl<V, T, E> BoxReversibleTransformer<V, T, E> {
    /// Erase a reversible transformer
    pub fn new<X>(transformer: X) -> Self
    where
        X: ReversibleTransformer<Value = V, Transformed = T, Error = E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(transformer),
        }
    }
}

impl<V, T, E> Transformer for BoxReversibleTransformer<V, T, E> {
    type Value = V;
    type Transformed = T;
    type Error = E;

    fn transform(&self, value: V) -> Result<T, E> {
        self.inner.transform(value)
    }
}

impl<V, T, E> ReversibleTransformer for BoxReversibleTransformer<V, T, E> {
    fn reverse_transform(&self, value: T) -> Result<V, E> {
        self.inner.reverse_transform(value)
    }
}

impl<V, T, E> Clone for BoxReversibleTransformer<V, T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, T, E> fmt::Debug for BoxReversibleTransformer<V, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxReversibleTransformer")
            .field("value", &std::any::type_name::<V>())
            .field("transformed", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::lift::lift_sequence;
    use crate::reversible::{flip, reversible};
    use crate::transformer::ValueTransformer;

    fn string_int() -> BoxReversibleTransformer<String, i64, String> {
        reversible(
            |value: String| value.parse::<i64>().map_err(|_| value.clone()),
            |value: i64| Ok(value.to_string()),
        )
        .boxed_reversible()
    }

    #[test]
    fn test_boxed_keeps_behavior() {
        let parse = ValueTransformer::new(|value: String| value.parse::<i64>().map_err(|_| ()));
        let boxed = parse.clone().boxed();

        for input in ["1", "-2", "three"] {
            assert_eq!(
                boxed.transform(input.to_string()),
                parse.transform(input.to_string())
            );
        }
    }

    #[test]
    fn test_boxed_reversible_keeps_both_directions() {
        let boxed = string_int();

        assert_eq!(boxed.transform("1".to_string()), Ok(1));
        assert_eq!(boxed.transform("1.5".to_string()), Err("1.5".to_string()));
        assert_eq!(boxed.reverse_transform(2), Ok("2".to_string()));
    }

    #[test]
    fn test_heterogeneous_collection() {
        let doublers: Vec<BoxTransformer<i64, i64, String>> = vec![
            ValueTransformer::new(|value: i64| Ok::<_, String>(value * 2)).boxed(),
            compose(
                ValueTransformer::new(|value: i64| Ok::<_, String>(value + 1)),
                ValueTransformer::new(|value: i64| Ok::<_, String>(value * 2)),
            )
            .boxed(),
            flip(string_int()).and_then(string_int()).boxed(),
        ];

        let results: Vec<_> = doublers.iter().map(|t| t.transform(5)).collect();
        assert_eq!(results, vec![Ok(10), Ok(12), Ok(5)]);
    }

    #[test]
    fn test_boxed_shares_across_threads() {
        let lifted = lift_sequence(string_int()).boxed_reversible();
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let lifted = lifted.clone();
                std::thread::spawn(move || lifted.transform(vec![n.to_string(), "7".to_string()]))
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let expected = vec![i64::try_from(n).unwrap(), 7];
            assert_eq!(handle.join().unwrap(), Ok(expected));
        }
    }
}
