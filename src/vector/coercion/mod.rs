//! Precision promotion between element types
//!
//! The primary workhorse of this implementation is [CoerceInto], which
//! provides unilateral widening mappings between element types.
//!
//! For binary operations, [CommonNum] maps a pair of element types to the
//! precision both are promoted to before computing. Expression nodes use
//! this relation to derive their own element type at compile time, so
//! adding a `Vector<i32>` to a `Vector<f64>` produces `f64` elements without
//! either operand being converted up front.
//!

mod macros;

mod coerce_into;
pub use coerce_into::*;

mod common_num;
pub use common_num::*;
