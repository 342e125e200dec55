use std::any::TypeId;

use super::expr::VectorLike;

/// Test whether two types are identical
pub fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Query the precision of a vector-like
///
/// Primarily useful for testing, to assert which element type a nested
/// expression was promoted to.
///
/// ```
/// use lazyvec::vector;
/// use lazyvec::vector::utils::SameElem;
///
/// let x = vector![1_i32, 2, 3];
/// let y = vector![0.5_f64, 0.5, 0.5];
/// let z = (&x + &y).unwrap();
/// assert!(z.has_elem::<f64>());
/// ```
///
pub trait SameElem {
    fn has_elem<T: 'static>(&self) -> bool;
}

impl<V: VectorLike> SameElem for V {
    fn has_elem<T: 'static>(&self) -> bool {
        same_type::<V::Elem, T>()
    }
}
