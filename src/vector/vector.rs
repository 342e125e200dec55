use std::fmt::Display;
use std::ops::{Index, IndexMut};

use tracing::trace;

use super::atomic::Atomic;
use super::expr::VectorLike;
use crate::error::{check_size, Result};

/// Build a [Vector] from a list of elements
///
/// ```
/// use lazyvec::vector;
///
/// let v = vector![1_f64, 2., 3.];
/// assert_eq!(v.len(), 3);
/// ```
///
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::vector::Vector::from(vec![$($x),*])
    };
}

/// Vector
///
/// The only type that owns element storage. Arithmetic on `&Vector<T>`
/// produces lazy expression nodes (see [crate::vector::expr]), which are
/// written back into storage through [Vector::from_expr], [Vector::assign]
/// or [Vector::assign_resize].
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector<T: Atomic> {
    data: Vec<T>,
}

impl<T: Atomic> Vector<T> {
    /// Create an empty vector
    pub fn new() -> Self {
        Vector { data: Vec::new() }
    }

    /// Create a vector of `size` default (zero) elements
    pub fn with_size(size: usize) -> Self {
        Vector {
            data: vec![T::default(); size],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Element count, as reported by [VectorLike::size] for `&Vector<T>`
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of elements the current allocation can hold
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Access the internal vector
    pub fn inner(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Materialize a vector-like into new storage
    ///
    /// Allocates exactly `source.size()` elements and writes each element of
    /// `source` once, in increasing index order.
    ///
    pub fn from_expr<V>(source: &V) -> Self
    where
        V: VectorLike<Elem = T> + ?Sized,
    {
        let size = source.size();
        trace!(size, "materializing into new vector");

        let mut data = Vec::with_capacity(size);
        data.extend((0..size).map(|i| source.element_at(i)));
        Vector { data }
    }

    /// Assign a vector-like into existing storage
    ///
    /// The destination keeps its size: assigning a source of a different
    /// size fails with [crate::error::Error::SizeMismatch] and leaves `self`
    /// untouched.
    ///
    /// The source cannot alias the destination. `source` borrows each of its
    /// leaves for as long as it lives, so a tree reading from `self` cannot
    /// be passed alongside `&mut self`:
    ///
    /// ```compile_fail
    /// use lazyvec::vector;
    ///
    /// let mut v = vector![1_f64, 2., 3.];
    /// v.assign(&(2_f64 * &v)).unwrap();
    /// ```
    ///
    pub fn assign<V>(&mut self, source: &V) -> Result<()>
    where
        V: VectorLike<Elem = T> + ?Sized,
    {
        check_size(self.len(), source.size())?;
        trace!(size = self.len(), "assigning into existing vector");

        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = source.element_at(i);
        }
        Ok(())
    }

    /// Assign a vector-like, resizing to fit
    ///
    /// Reuses the existing allocation where its capacity allows.
    ///
    pub fn assign_resize<V>(&mut self, source: &V)
    where
        V: VectorLike<Elem = T> + ?Sized,
    {
        let size = source.size();
        trace!(from = self.len(), to = size, "resizing assignment");

        self.data.clear();
        self.data.extend((0..size).map(|i| source.element_at(i)));
    }
}

impl<'a, T: Atomic> VectorLike for &'a Vector<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Atomic> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Atomic> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Atomic> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector { data }
    }
}

impl<T: Atomic> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Atomic> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: Atomic> Display for Vector<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")?;

        Ok(())
    }
}
