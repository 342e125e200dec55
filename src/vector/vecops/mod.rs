//! Vector Operations
//!
//! This module implements the arithmetic operators over vectors and lazy
//! expression nodes. None of them compute anything; each returns a new node
//! wrapping its operands.
//!

mod math;
pub use math::*;
