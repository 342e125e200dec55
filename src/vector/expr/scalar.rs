use crate::vector::atomic::Atomic;
use crate::vector::coercion::CommonNum;

use super::VectorLike;

/// A vector-like scaled by a scalar, `source[i] * scalar`
#[derive(Debug, Clone, Copy)]
pub struct ScalarMul<S, V> {
    scalar: S,
    source: V,
}

impl<S, V> ScalarMul<S, V> {
    pub fn new(scalar: S, source: V) -> Self {
        ScalarMul { scalar, source }
    }
}

impl<S, V, C, O> VectorLike for ScalarMul<S, V>
where
    S: Atomic,
    V: VectorLike,
    (V::Elem, S): CommonNum<Common = C>,
    C: std::ops::Mul<Output = O>,
    O: Atomic,
{
    type Elem = O;

    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> O {
        let (elem, scalar) = (self.source.element_at(index), self.scalar).as_common();
        elem * scalar
    }
}

/// A vector-like divided by a scalar, `source[i] / scalar`
#[derive(Debug, Clone, Copy)]
pub struct ScalarDiv<S, V> {
    scalar: S,
    source: V,
}

impl<S, V> ScalarDiv<S, V> {
    pub fn new(scalar: S, source: V) -> Self {
        ScalarDiv { scalar, source }
    }
}

impl<S, V, C, O> VectorLike for ScalarDiv<S, V>
where
    S: Atomic,
    V: VectorLike,
    (V::Elem, S): CommonNum<Common = C>,
    C: std::ops::Div<Output = O>,
    O: Atomic,
{
    type Elem = O;

    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> O {
        let (elem, scalar) = (self.source.element_at(index), self.scalar).as_common();
        elem / scalar
    }
}
