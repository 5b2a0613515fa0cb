//! Composition
//!
//! [`Compose`] chains two transformers end-to-end. It is one-way when its
//! constituents are one-way and reversible when both are reversible.

use crate::reversible::ReversibleTransformer;
use crate::transformer::Transformer;

/// Two transformers chained end-to-end.
///
/// Built by [`compose`] and [`compose_after`].
#[derive(Debug, Clone)]
pub struct Compose<L, R> {
    left: L,
    right: R,
}

impl<L, R> Compose<L, R> {
    pub(crate) fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Transformer for Compose<L, R>
where
    L: Transformer,
    R: Transformer<Value = L::Transformed, Error = L::Error>,
{
    type Value = L::Value;
    type Transformed = R::Transformed;
    type Error = L::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.left
            .transform(value)
            .and_then(|intermediate| self.right.transform(intermediate))
    }
}

impl<L, R> ReversibleTransformer for Compose<L, R>
where
    L: ReversibleTransformer,
    R: ReversibleTransformer<Value = L::Transformed, Error = L::Error>,
{
    // right's backward half runs first
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.right
            .reverse_transform(value)
            .and_then(|intermediate| self.left.reverse_transform(intermediate))
    }
}

/// Apply `left`, then feed its output into `right`.
///
/// The first failure is returned unchanged and `right` is skipped when `left`
/// fails. For reversible constituents the reverse direction runs `right`
/// backwards first, then `left`.
pub fn compose<L, R>(left: L, right: R) -> Compose<L, R>
where
    L: Transformer,
    R: Transformer<Value = L::Transformed, Error = L::Error>,
{
    Compose::new(left, right)
}

/// Right-to-left composition: apply `right` first, then `left`.
pub fn compose_after<L, R>(left: L, right: R) -> Compose<R, L>
where
    R: Transformer,
    L: Transformer<Value = R::Transformed, Error = R::Error>,
{
    Compose::new(right, left)
}
