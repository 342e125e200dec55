use crate::error::{Error, Result};

use super::VectorLike;

/// A contiguous view `[start, start + length)` of a vector-like
///
/// Slices never copy. The range is validated once, when the slice is built,
/// so a slice always lies within its source.
///
#[derive(Debug, Clone, Copy)]
pub struct Slice<V> {
    start: usize,
    length: usize,
    source: V,
}

impl<V: VectorLike> Slice<V> {
    pub fn try_new(source: V, start: usize, length: usize) -> Result<Self> {
        let size = source.size();
        match start.checked_add(length) {
            Some(end) if end <= size => Ok(Slice { start, length, source }),
            _ => Err(Error::InvalidSlice { start, length, size }),
        }
    }
}

impl<V: VectorLike> VectorLike for Slice<V> {
    type Elem = V::Elem;

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    #[inline]
    fn element_at(&self, index: usize) -> V::Elem {
        // the source may be longer than the view, so its own bounds check
        // would not catch reads past the slice end
        if index >= self.length {
            panic!("{}", Error::IndexOutOfRange { index, size: self.length });
        }
        self.source.element_at(self.start + index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vector;

    #[test]
    fn slice_views_subrange() {
        let v = vector![10_i32, 11, 12, 13, 14];
        let s = v.slice(1, 3).unwrap();
        assert_eq!(s.size(), 3);
        assert_eq!(s.materialize(), vector![11, 12, 13]);
    }

    #[test]
    fn empty_and_full_slices() {
        let v = vector![10_i32, 11, 12];
        assert_eq!(v.slice(3, 0).unwrap().size(), 0);
        assert_eq!(v.slice(0, 3).unwrap().materialize(), v);
    }

    #[test]
    fn slice_out_of_range_is_rejected() {
        let v = vector![1_f64, 2., 3.];
        assert_eq!(
            v.slice(0, 4).err(),
            Some(Error::InvalidSlice { start: 0, length: 4, size: 3 })
        );
        assert!(v.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn nested_slices() {
        let v = vector![0_i32, 1, 2, 3, 4, 5];
        let s = v.slice(1, 4).unwrap().slice(2, 2).unwrap();
        assert_eq!(s.materialize(), vector![3, 4]);
        assert!(v.slice(1, 4).unwrap().slice(2, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for a vector of size 2")]
    fn reads_past_slice_end_panic() {
        let v = vector![1_i32, 2, 3];
        let s = v.slice(0, 2).unwrap();
        s.element_at(2);
    }

    #[test]
    fn checked_reads_past_slice_end() {
        let v = vector![1_i32, 2, 3];
        let s = v.slice(0, 2).unwrap();
        assert_eq!(s.get(2), Err(Error::IndexOutOfRange { index: 2, size: 2 }));
    }
}
