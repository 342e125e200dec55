use crate::vector::atomic::Atomic;

use super::VectorLike;

/// Element-wise negation, `-source[i]`
#[derive(Debug, Clone, Copy)]
pub struct Neg<V> {
    source: V,
}

impl<V> Neg<V> {
    pub fn new(source: V) -> Self {
        Neg { source }
    }
}

impl<V, O> VectorLike for Neg<V>
where
    V: VectorLike,
    V::Elem: std::ops::Neg<Output = O>,
    O: Atomic,
{
    type Elem = O;

    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> O {
        -self.source.element_at(index)
    }
}
