//! Lazy Expression Nodes
//!
//! Each arithmetic operator over vectors returns one of the nodes in this
//! module rather than a freshly computed vector. A node records the operation
//! and its operands, and computes an element only when it is asked for one.
//! Nodes are themselves [VectorLike], so they nest arbitrarily:
//!
//! ```
//! use lazyvec::vector;
//! use lazyvec::vector::{Vector, VectorLike};
//!
//! let v1 = vector![1_f64, 2., 3.];
//! let v2 = vector![6_f64, 3., 1.];
//!
//! // no arithmetic has happened yet, `expr` only borrows `v1` and `v2`
//! let expr = -3_f64 * (&v1 + 2_f64 * &v2)?.slice(0, 2)? / 2_f64;
//! assert_eq!(expr.size(), 2);
//!
//! // materialization walks the tree once per element
//! let v3: Vector<f64> = expr.materialize();
//! assert_eq!(v3, vector![-19.5, -12.0]);
//! # Ok::<(), lazyvec::error::Error>(())
//! ```
//!
//! Leaves are borrowed as `&Vector<T>` (it is the reference, not the
//! vector, that implements [VectorLike]), so a node can never outlive the
//! storage it reads from. Inner nodes are moved into their parents; they hold
//! nothing but borrows and scalars, so this never copies element data.
//!

mod binary;
pub use binary::*;

mod neg;
pub use neg::*;

mod scalar;
pub use scalar::*;

mod slice;
pub use slice::*;

use crate::error::{Error, Result};
use crate::vector::atomic::Atomic;
use crate::vector::Vector;

/// Vector-like
///
/// Anything exposing a logical size and on-demand element access, whether it
/// is storage-backed or a lazy expression.
///
/// Implementors may assume `index < self.size()` in [VectorLike::element_at];
/// every implementation in this crate panics (rather than reading past the
/// end of its source) when that does not hold. Use [VectorLike::get] for a
/// checked read.
///
/// Elements are computed with the element type's own arithmetic. For integer
/// types that means Rust's rules: overflow panics in debug builds and wraps in
/// release builds, and integer division by zero panics.
///
pub trait VectorLike {
    type Elem: Atomic;

    /// Logical element count
    fn size(&self) -> usize;

    /// Compute the element at `index`
    ///
    /// Pure: calling this repeatedly yields the same value and never mutates
    /// the node. Nothing is cached, so each call recomputes.
    ///
    fn element_at(&self, index: usize) -> Self::Elem;

    /// Checked element access
    fn get(&self, index: usize) -> Result<Self::Elem> {
        let size = self.size();
        if index < size {
            Ok(self.element_at(index))
        } else {
            Err(Error::IndexOutOfRange { index, size })
        }
    }

    /// Lazily view a contiguous sub-range `[start, start + length)`
    ///
    /// Fails with [Error::InvalidSlice] if the range extends past the end of
    /// `self`.
    ///
    fn slice(self, start: usize, length: usize) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::try_new(self, start, length)
    }

    /// Iterate over computed elements in order
    fn elements(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements::new(self)
    }

    /// Evaluate every element into new storage
    fn materialize(&self) -> Vector<Self::Elem> {
        Vector::from_expr(self)
    }
}

impl<V: VectorLike + ?Sized> VectorLike for Box<V> {
    type Elem = V::Elem;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Elem {
        (**self).element_at(index)
    }
}

/// Iterator over the elements of a vector-like
#[derive(Debug, Clone)]
pub struct Elements<'a, V: ?Sized> {
    source: &'a V,
    index: usize,
    size: usize,
}

impl<'a, V: VectorLike + ?Sized> Elements<'a, V> {
    pub fn new(source: &'a V) -> Self {
        Elements {
            source,
            index: 0,
            size: source.size(),
        }
    }
}

impl<'a, V: VectorLike + ?Sized> Iterator for Elements<'a, V> {
    type Item = V::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.size {
            let elem = self.source.element_at(self.index);
            self.index += 1;
            Some(elem)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, V: VectorLike + ?Sized> ExactSizeIterator for Elements<'a, V> {}
