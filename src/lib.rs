//! # neonrvv
//!
//! Fixed-width ARM NEON integer arithmetic re-expressed on the RISC-V vector
//! extension.
//!
//! Each NEON intrinsic in the catalog (`vhadd_u16`, `vqaddq_u8`, `vsubw_u32`,
//! `vrsubhn_u16`, ...) is a *translation unit*: a pure function from typed
//! fixed-lane vectors to a typed fixed-lane vector. The scalable backend
//! ([`simd::rvv`]) builds every unit from RVV primitives, each invoked with an
//! explicit effective length ([`VLEN_4`], [`VLEN_8`], ...) equal to the NEON
//! lane count. The reference backend ([`simd::neon`]) evaluates the Arm
//! pseudo-code of the same instruction and is what the scalable units are
//! checked against.
//!
//! ## Backend selection
//!
//! Exactly one of the Cargo features `rvv` (default) or `neon` must be enabled.
//! It selects the module re-exported as [`backend`] and the load/store adapter
//! [`Active`]. Both backends are always compiled so they can be compared
//! in-process.
//!
//! ```
//! use neonrvv::{simd::rvv, Uint16x4};
//!
//! let a = Uint16x4::from_array([65535, 65535, 1, 0]);
//! let b = Uint16x4::from_array([65535, 65534, 2, 0]);
//! assert_eq!(rvv::vhadd_u16(a, b).to_array(), [65535, 65534, 1, 0]);
//! ```

#[cfg(not(any(feature = "rvv", feature = "neon")))]
compile_error!(
    "no backend selected: enable exactly one of the `rvv` or `neon` features \
     (e.g. `--features rvv`)"
);

#[cfg(all(feature = "rvv", feature = "neon"))]
compile_error!(
    "the `rvv` and `neon` backends are mutually exclusive: enable only one \
     (use `--no-default-features --features neon` for the reference backend)"
);

pub mod error;
pub mod harness;
pub mod simd;

pub use error::{Error, Result};
pub use simd::{
    shape::{LaneShape, Vl, VLEN_1, VLEN_16, VLEN_2, VLEN_4, VLEN_8},
    traits::{Element, SimdBackend},
    vector::*,
};

/// Vector ISA found on the build host (`rvv`, `neon`, `asimd` or `none`).
pub const HOST_VECTOR_ISA: &str = env!("NEONRVV_HOST_VECTOR_ISA");

/// Translation units of the selected backend.
#[cfg(feature = "rvv")]
pub use simd::rvv as backend;

/// Load/store adapters of the selected backend.
#[cfg(feature = "rvv")]
pub type Active = simd::rvv::Rvv;

/// Translation units of the selected backend.
#[cfg(all(feature = "neon", not(feature = "rvv")))]
pub use simd::neon as backend;

/// Load/store adapters of the selected backend.
#[cfg(all(feature = "neon", not(feature = "rvv")))]
pub type Active = simd::neon::Neon;
