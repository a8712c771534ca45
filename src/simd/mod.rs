//! Fixed-lane vector values and the two backends that operate on them.
//!
//! - [`neon`]: reference semantics of the emulated NEON operations.
//! - [`rvv`]: the same operations composed from RVV primitives under an
//!   explicit effective length.
//!
//! Both backends expose identically named and typed translation units and
//! implement [`traits::SimdBackend`] for loading and storing.

pub mod neon;
pub mod rvv;
pub mod shape;
pub mod traits;
pub mod vector;
