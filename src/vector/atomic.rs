//! Atomic
//!
//! A trait for all vector-able elements. Elements are plain `Copy` values,
//! so expression nodes hand them out by value from `element_at` without
//! borrowing from storage.
//!

use std::fmt::Debug;

pub trait Atomic: Copy + Default + Debug + PartialEq + 'static {}

impl Atomic for bool {}
impl Atomic for i8 {}
impl Atomic for i16 {}
impl Atomic for i32 {}
impl Atomic for i64 {}
impl Atomic for i128 {}
impl Atomic for f32 {}
impl Atomic for f64 {}
