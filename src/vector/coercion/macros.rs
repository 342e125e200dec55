/// Register a promotion between two distinct element types
///
/// Registers the unification in both operand orders, so that
/// `register!(CommonNum: (i32, f64) => f64)` covers `(i32, f64)` and
/// `(f64, i32)`.
///
#[macro_export]
macro_rules! register {
    ( $trait:ident: ($lty:ty , $rty:ty) => $target:ty ) => {
        // register unification into RHS
        impl $trait for ($lty, $rty)
        where
            $lty: $crate::vector::coercion::CoerceInto<$target>,
            $rty: $crate::vector::coercion::CoerceInto<$target>,
        {
            type Common = $target;
            #[inline]
            fn as_common(self) -> (Self::Common, Self::Common) {
                (
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.0),
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.1),
                )
            }
        }

        // register unification into LHS
        impl $trait for ($rty, $lty)
        where
            $lty: $crate::vector::coercion::CoerceInto<$target>,
            $rty: $crate::vector::coercion::CoerceInto<$target>,
        {
            type Common = $target;
            #[inline]
            fn as_common(self) -> (Self::Common, Self::Common) {
                (
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.0),
                    $crate::vector::coercion::CoerceInto::<Self::Common>::coerce(self.1),
                )
            }
        }
    };
}
