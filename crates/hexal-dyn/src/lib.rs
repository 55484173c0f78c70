//! hexal-dyn: runtime-sized companion to `hexal`
//!
//! Heap-allocated vectors and matrices whose dimensions are chosen at
//! run time. Unlike the fixed types, shape agreement cannot be proven by
//! the type system, so the binary operations return
//! `Result<_, DimensionMismatch>` and check shapes before touching any
//! element.
//!
//! Element types are the same [`hexal::Scalar`] family as the fixed
//! kernel, so code can move between the two layers without conversion.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod dmat;
mod dvec;
mod error;

pub use dmat::DMat;
pub use dvec::DVec;
pub use error::DimensionMismatch;
