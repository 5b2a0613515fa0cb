#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vt-core
//!
//! Composable one-way and reversible value transformers.
//!
//! A [`Transformer`] wraps a pure, fallible conversion `V -> Result<T, E>`.
//! A [`ReversibleTransformer`] adds an independent conversion back,
//! `T -> Result<V, E>`. Free combinator functions build new transformers out
//! of existing ones without mutating them:
//!
//! - [`compose()`] / [`compose_after`] chain transformers end-to-end
//! - [`combine`] pairs two one-way transformers into a reversible one
//! - [`flip`] swaps the directions of a reversible transformer
//! - the `lift_*` family adapts a transformer to optional values, sequences
//!   and fixed key tables
//!
//! Errors are never created, wrapped or recovered here: the first failure
//! from a wrapped transformer is returned unchanged.
//!
//! ```
//! use vt_core::{ReversibleTransformer, Transformer, compose, flip, reversible};
//!
//! let string_int = reversible(
//!     |value: String| value.parse::<i64>().map_err(|_| format!("not an integer: {value}")),
//!     |value: i64| Ok(value.to_string()),
//! );
//!
//! assert_eq!(string_int.transform("1".to_string()), Ok(1));
//! assert!(string_int.transform("1.5".to_string()).is_err());
//! assert_eq!(string_int.reverse_transform(2), Ok("2".to_string()));
//!
//! let round_trip = compose(&string_int, flip(&string_int));
//! assert_eq!(round_trip.transform("3".to_string()), Ok("3".to_string()));
//! ```

/// Type-erased wrappers for heterogeneous collections.
pub mod boxed;
/// End-to-end composition.
pub mod compose;
/// Lifts over optional values, sequences and fixed tables.
pub mod lift;
/// Reversible transformers, `combine` and `flip`.
pub mod reversible;
/// The one-way transformer trait and its closure-backed implementation.
pub mod transformer;

pub use boxed::{BoxReversibleTransformer, BoxTransformer};
pub use compose::{Compose, compose, compose_after};
pub use lift::{
    Dictionary, Optional, OptionalTransformed, OptionalValue, ReversibleDictionary,
    ReversibleOptionalTransformed, Sequence, lift_dictionary, lift_dictionary_reversible,
    lift_optional, lift_optional_transformed, lift_optional_transformed_reversible,
    lift_optional_value, lift_sequence,
};
pub use reversible::{
    Combine, Flip, ReversibleTransformer, ReversibleValueTransformer, combine, flip, reversible,
};
pub use transformer::{Transformer, ValueTransformer};
