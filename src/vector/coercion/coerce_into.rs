/// CoerceInto
///
/// A coercion trait often equivalent to [Into]. Unlike [Into], it is
/// implemented for lossy-but-conventional numeric widenings such as
/// `i64 -> f64`, mirroring what `as` casts would do.
///
pub trait CoerceInto<T> {
    fn coerce(self) -> T;
}

impl<T> CoerceInto<T> for T {
    #[inline]
    fn coerce(self) -> T {
        self
    }
}

// bool
impl CoerceInto<i8> for bool { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for bool { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for bool { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for bool { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<i128> for bool { #[inline] fn coerce(self) -> i128 { self as i128 } }
impl CoerceInto<f32> for bool { #[inline] fn coerce(self) -> f32 { self as i32 as f32 } }
impl CoerceInto<f64> for bool { #[inline] fn coerce(self) -> f64 { self as i32 as f64 } }

// i8
impl CoerceInto<i16> for i8 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for i8 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for i8 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<i128> for i8 { #[inline] fn coerce(self) -> i128 { self as i128 } }
impl CoerceInto<f32> for i8 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i8 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i16
impl CoerceInto<i32> for i16 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for i16 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<i128> for i16 { #[inline] fn coerce(self) -> i128 { self as i128 } }
impl CoerceInto<f32> for i16 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i16 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i32
impl CoerceInto<i64> for i32 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<i128> for i32 { #[inline] fn coerce(self) -> i128 { self as i128 } }
impl CoerceInto<f32> for i32 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i32 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i64
impl CoerceInto<i128> for i64 { #[inline] fn coerce(self) -> i128 { self as i128 } }
impl CoerceInto<f32> for i64 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i64 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i128
impl CoerceInto<f32> for i128 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i128 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// f32
impl CoerceInto<f64> for f32 { #[inline] fn coerce(self) -> f64 { self as f64 } }
