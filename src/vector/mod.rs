//! Vectors
//!
//! This module implements a concrete, storage-owning [Vector] and a family of
//! lazy expression nodes over it. Arithmetic on vectors does not compute
//! anything up front: `&a + &b`, `2.0 * &a`, `-&a`, `&a / 2.0` and
//! `a.slice(start, length)` each return a lightweight node recording the
//! operation, which is itself [VectorLike] and may be combined further.
//!
//! Laziness is discharged only when a node is materialized into storage,
//! which evaluates the whole tree once per destination element without
//! allocating intermediate vectors.
//!
mod vector;
pub use vector::*;

pub mod atomic;
pub mod coercion;
pub mod expr;
pub mod utils;
pub mod vecops;

pub use expr::VectorLike;
pub use vecops::{TryAdd, TrySub};
