use crate::error::Result;
use crate::vector::atomic::Atomic;
use crate::vector::expr::{self, ScalarDiv, ScalarMul, Slice, VectorLike};
use crate::vector::Vector;

/// Fallible element-wise addition
///
/// Equivalent to the `+` operator, which already returns a [Result] because
/// building the sum checks operand sizes.
///
pub trait TryAdd<Rhs> {
    type Output;

    fn try_add(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Fallible element-wise subtraction, see [TryAdd]
pub trait TrySub<Rhs> {
    type Output;

    fn try_sub(self, rhs: Rhs) -> Result<Self::Output>;
}

impl<L, R> TryAdd<R> for L
where
    L: VectorLike,
    R: VectorLike,
    expr::Add<L, R>: VectorLike,
{
    type Output = expr::Add<L, R>;
    fn try_add(self, rhs: R) -> Result<Self::Output> {
        expr::Add::try_new(self, rhs)
    }
}

impl<L, R> TrySub<R> for L
where
    L: VectorLike,
    R: VectorLike,
    expr::Sub<L, R>: VectorLike,
{
    type Output = expr::Sub<L, R>;
    fn try_sub(self, rhs: R) -> Result<Self::Output> {
        expr::Sub::try_new(self, rhs)
    }
}

// Operators with a vector-like on the left hand side. Each entry is a list
// of generics followed by the vector-like type they parameterize.
macro_rules! impl_vector_ops {
    ( $( [$($gen:tt)*] $ty:ty ),* $(,)? ) => { $(
        impl<$($gen)*, Rhs> std::ops::Add<Rhs> for $ty
        where
            Self: VectorLike,
            Rhs: VectorLike,
            expr::Add<Self, Rhs>: VectorLike,
        {
            type Output = Result<expr::Add<Self, Rhs>>;
            fn add(self, rhs: Rhs) -> Self::Output {
                expr::Add::try_new(self, rhs)
            }
        }

        impl<$($gen)*, Rhs> std::ops::Sub<Rhs> for $ty
        where
            Self: VectorLike,
            Rhs: VectorLike,
            expr::Sub<Self, Rhs>: VectorLike,
        {
            type Output = Result<expr::Sub<Self, Rhs>>;
            fn sub(self, rhs: Rhs) -> Self::Output {
                expr::Sub::try_new(self, rhs)
            }
        }

        impl<$($gen)*> std::ops::Neg for $ty
        where
            Self: VectorLike,
            expr::Neg<Self>: VectorLike,
        {
            type Output = expr::Neg<Self>;
            fn neg(self) -> Self::Output {
                expr::Neg::new(self)
            }
        }

        impl<$($gen)*, S> std::ops::Mul<S> for $ty
        where
            S: Atomic,
            Self: VectorLike,
            ScalarMul<S, Self>: VectorLike,
        {
            type Output = ScalarMul<S, Self>;
            fn mul(self, scalar: S) -> Self::Output {
                ScalarMul::new(scalar, self)
            }
        }

        impl<$($gen)*, S> std::ops::Div<S> for $ty
        where
            S: Atomic,
            Self: VectorLike,
            ScalarDiv<S, Self>: VectorLike,
        {
            type Output = ScalarDiv<S, Self>;
            fn div(self, scalar: S) -> Self::Output {
                ScalarDiv::new(scalar, self)
            }
        }
    )* };
}

// Scalar multiplication with the scalar on the left hand side. Coherence
// requires naming each scalar type explicitly.
macro_rules! impl_scalar_lhs_ops {
    ( @scalar $s:ty; { $( [$($gen:tt)*] $ty:ty ),* $(,)? } ) => { $(
        impl<$($gen)*> std::ops::Mul<$ty> for $s
        where
            $ty: VectorLike,
            ScalarMul<$s, $ty>: VectorLike,
        {
            type Output = ScalarMul<$s, $ty>;
            fn mul(self, rhs: $ty) -> Self::Output {
                ScalarMul::new(self, rhs)
            }
        }
    )* };

    ( $types:tt; $($s:ty),* $(,)? ) => {
        $( impl_scalar_lhs_ops!(@scalar $s; $types); )*
    };
}

impl_vector_ops!(
    ['a, T: Atomic] &'a Vector<T>,
    [V] Slice<V>,
    [A, V] ScalarMul<A, V>,
    [A, V] ScalarDiv<A, V>,
    [V] expr::Neg<V>,
    [L, R] expr::Add<L, R>,
    [L, R] expr::Sub<L, R>,
);

impl_scalar_lhs_ops!(
    {
        ['a, T: Atomic] &'a Vector<T>,
        [V] Slice<V>,
        [A, V] ScalarMul<A, V>,
        [A, V] ScalarDiv<A, V>,
        [V] expr::Neg<V>,
        [L, R] expr::Add<L, R>,
        [L, R] expr::Sub<L, R>,
    };
    i8, i16, i32, i64, i128, f32, f64
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::vector;
    use crate::vector::utils::SameElem;
    use proptest::prelude::*;

    #[test]
    fn worked_example() {
        let v1 = vector![1_f64, 2., 3.];
        let v2 = vector![6_f64, 3., 1.];

        assert_eq!((&v1 + &v2).unwrap().element_at(0), 7.);
        assert_eq!((&v1 + &v2).unwrap().materialize(), vector![7., 5., 4.]);

        let v3 = (-3_i32 * (&v1 + 2_i32 * &v2).unwrap().slice(0, 2).unwrap() / 2_i32).materialize();
        assert_eq!(v3, vector![-19.5, -12.0]);
    }

    #[test]
    fn size_mismatch() {
        let a = vector![1_f64, 2., 3.];
        let b = vector![1_f64, 2.];

        assert_eq!((&a + &b).err(), Some(Error::SizeMismatch { lhs: 3, rhs: 2 }));
        assert_eq!((&a - &b).err(), Some(Error::SizeMismatch { lhs: 3, rhs: 2 }));
        assert!((&b).try_add(&a).is_err());
        assert!((&b).try_sub(&a).is_err());

        // nested operands report the size of the node, not of its leaves
        let sliced = a.slice(0, 1).unwrap();
        assert_eq!((sliced - &b).err(), Some(Error::SizeMismatch { lhs: 1, rhs: 2 }));
    }

    #[test]
    fn slice_past_end() {
        let v1 = vector![1_f64, 2., 3.];
        assert_eq!(
            v1.slice(0, 4).err(),
            Some(Error::InvalidSlice { start: 0, length: 4, size: 3 })
        );
    }

    #[test]
    fn operators_on_nodes() {
        let a = vector![1_i32, 2, 3];
        let b = vector![3_i32, 2, 1];

        let e = ((&a + &b).unwrap() - (&a * 2_i32)).unwrap();
        assert_eq!(e.materialize(), vector![2, 0, -2]);

        let e = -(-&a) / 2_i32 * 3_i32;
        assert_eq!(e.materialize(), vector![0, 3, 3]);

        let e = (-&a + a.slice(0, 3).unwrap()).unwrap();
        assert_eq!(e.materialize(), vector![0, 0, 0]);
    }

    #[test]
    fn precision_flows_through_operators() {
        let ints = vector![1_i32, 2, 3];
        let floats = vector![0.5_f32, 0.5, 0.5];

        assert!((&ints * 2_i64).has_elem::<i64>());
        assert!((2_f64 * &floats).has_elem::<f64>());
        assert!((&ints + &floats).unwrap().has_elem::<f32>());
        assert!((-&ints / 2_f32).has_elem::<f32>());
    }

    #[test]
    fn reads_are_idempotent() {
        let v1 = vector![1_f64, 2., 3.];
        let v2 = vector![6_f64, 3., 1.];
        let e = (&v1 - 0.1_f64 * &v2).unwrap();
        for i in 0..e.size() {
            assert_eq!(e.element_at(i), e.element_at(i));
        }
        assert_eq!(e.materialize(), e.materialize());
    }

    fn same_size_pair(max: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1..max).prop_flat_map(|n| {
            (
                prop::collection::vec(-1e3..1e3f64, n),
                prop::collection::vec(-1e3..1e3f64, n),
            )
        })
    }

    fn nonzero() -> impl Strategy<Value = f64> {
        prop_oneof![-100.0..-0.5f64, 0.5..100.0f64]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn add_is_elementwise((a, b) in same_size_pair(64)) {
            let (va, vb) = (Vector::from(a.clone()), Vector::from(b.clone()));
            let sum = (&va + &vb).unwrap();
            prop_assert_eq!(sum.size(), a.len());
            for i in 0..a.len() {
                prop_assert_eq!(sum.element_at(i), a[i] + b[i]);
            }
        }

        #[test]
        fn sub_is_elementwise((a, b) in same_size_pair(64)) {
            let (va, vb) = (Vector::from(a.clone()), Vector::from(b.clone()));
            let diff = (&va - &vb).unwrap();
            prop_assert_eq!(diff.size(), a.len());
            for i in 0..a.len() {
                prop_assert_eq!(diff.element_at(i), a[i] - b[i]);
            }
        }

        #[test]
        fn unequal_sizes_never_combine(
            a in prop::collection::vec(-1e3..1e3f64, 0..32),
            b in prop::collection::vec(-1e3..1e3f64, 0..32),
        ) {
            prop_assume!(a.len() != b.len());
            let (va, vb) = (Vector::from(a.clone()), Vector::from(b.clone()));
            let expected = Error::SizeMismatch { lhs: a.len(), rhs: b.len() };
            prop_assert_eq!((&va + &vb).err(), Some(expected.clone()));
            prop_assert_eq!((&va - &vb).err(), Some(expected));
        }

        #[test]
        fn scalar_ops_are_elementwise(
            v in prop::collection::vec(-1e3..1e3f64, 0..64),
            s in nonzero(),
        ) {
            let vv = Vector::from(v.clone());
            let (lhs, rhs, div, neg) = (s * &vv, &vv * s, &vv / s, -&vv);
            for i in 0..v.len() {
                prop_assert_eq!(lhs.element_at(i), v[i] * s);
                prop_assert_eq!(rhs.element_at(i), v[i] * s);
                prop_assert_eq!(div.element_at(i), v[i] / s);
                prop_assert_eq!(neg.element_at(i), -v[i]);
            }
        }

        #[test]
        fn slices_view_their_source(
            v in prop::collection::vec(-1e3..1e3f64, 0..64),
            start in 0..80usize,
            length in 0..80usize,
        ) {
            let vv = Vector::from(v.clone());
            match vv.slice(start, length) {
                Ok(s) => {
                    prop_assert!(start + length <= v.len());
                    prop_assert_eq!(s.size(), length);
                    for i in 0..length {
                        prop_assert_eq!(s.element_at(i), v[start + i]);
                    }
                }
                Err(e) => {
                    prop_assert!(start + length > v.len());
                    prop_assert_eq!(e, Error::InvalidSlice { start, length, size: v.len() });
                }
            }
        }

        #[test]
        fn lazy_matches_eager(
            (a, b, k) in (1..64usize).prop_flat_map(|n| (
                prop::collection::vec(-1e3..1e3f64, n),
                prop::collection::vec(-1e3..1e3f64, n),
                0..=n,
            ))
        ) {
            let (v1, v2) = (Vector::from(a.clone()), Vector::from(b.clone()));
            let lazy = (-3_f64 * (&v1 + 2.4_f64 * &v2).unwrap().slice(0, k).unwrap() / 2_f64)
                .materialize();

            // the same computation with a temporary at every step
            let scaled: Vec<f64> = b.iter().map(|x| x * 2.4).collect();
            let summed: Vec<f64> = a.iter().zip(&scaled).map(|(x, y)| x + y).collect();
            let sliced: Vec<f64> = summed[..k].to_vec();
            let negated: Vec<f64> = sliced.iter().map(|x| x * -3.).collect();
            let eager: Vec<f64> = negated.iter().map(|x| x / 2.).collect();

            prop_assert_eq!(lazy.inner(), eager);
        }
    }
}
