use crate::error::{check_size, Result};
use crate::vector::atomic::Atomic;
use crate::vector::coercion::CommonNum;

use super::VectorLike;

/// Element-wise sum of two equally sized vector-likes
#[derive(Debug, Clone, Copy)]
pub struct Add<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: VectorLike, R: VectorLike> Add<L, R> {
    /// Fails with [crate::error::Error::SizeMismatch] unless both operands
    /// have the same size. This is the only size check; element access is
    /// never re-validated.
    pub fn try_new(lhs: L, rhs: R) -> Result<Self> {
        check_size(lhs.size(), rhs.size())?;
        Ok(Add { lhs, rhs })
    }
}

impl<L, R, C, O> VectorLike for Add<L, R>
where
    L: VectorLike,
    R: VectorLike,
    (L::Elem, R::Elem): CommonNum<Common = C>,
    C: std::ops::Add<Output = O>,
    O: Atomic,
{
    type Elem = O;

    #[inline]
    fn size(&self) -> usize {
        self.lhs.size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> O {
        let (l, r) = (self.lhs.element_at(index), self.rhs.element_at(index)).as_common();
        l + r
    }
}

/// Element-wise difference of two equally sized vector-likes
#[derive(Debug, Clone, Copy)]
pub struct Sub<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: VectorLike, R: VectorLike> Sub<L, R> {
    /// See [Add::try_new]
    pub fn try_new(lhs: L, rhs: R) -> Result<Self> {
        check_size(lhs.size(), rhs.size())?;
        Ok(Sub { lhs, rhs })
    }
}

impl<L, R, C, O> VectorLike for Sub<L, R>
where
    L: VectorLike,
    R: VectorLike,
    (L::Elem, R::Elem): CommonNum<Common = C>,
    C: std::ops::Sub<Output = O>,
    O: Atomic,
{
    type Elem = O;

    #[inline]
    fn size(&self) -> usize {
        self.lhs.size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> O {
        let (l, r) = (self.lhs.element_at(index), self.rhs.element_at(index)).as_common();
        l - r
    }
}
