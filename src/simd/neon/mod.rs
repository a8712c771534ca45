//! Reference backend: the fixed-width NEON operations themselves.
//!
//! Each unit evaluates the Arm pseudo-code of its instruction lane by lane
//! (see [`pseudocode`]), so it runs on any host and serves as the ground truth
//! the scalable backend is compared against. Signatures are identical to the
//! ones in [`crate::simd::rvv`], which lets the harness and the callers switch
//! backends with a single path change.
//!
//! On AArch64 hosts the integration tests additionally check these units
//! against the `core::arch::aarch64` intrinsics of the same name.

use crate::simd::{
    traits::{Element, SimdBackend},
    vector::Vector,
};

pub mod pseudocode;

/// One unit per line: `name(args) -> output = pseudo-code helper;`.
macro_rules! reference_units {
    ($($name:ident($($arg:ident: $ty:ty),+) -> $out:ty = $op:path;)*) => {
        $(
            #[inline]
            pub fn $name($($arg: $ty),+) -> $out {
                $op($($arg),+)
            }
        )*
    };
}

mod add;
mod narrow;
mod sub;

pub use add::*;
pub use narrow::*;
pub use sub::*;

/// The reference backend's load and store adapters (`vld1` / `vst1` with an
/// explicit lane count).
#[derive(Debug, Clone, Copy, Default)]
pub struct Neon;

impl SimdBackend for Neon {
    const NAME: &'static str = "neon";

    #[inline]
    fn load<T: Element, const N: usize>(src: &[T], count: usize) -> Vector<T, N> {
        assert!(
            count <= N,
            "cannot load {count} lanes into {}",
            Vector::<T, N>::SHAPE
        );
        assert!(
            src.len() >= count,
            "vld1: {count} elements requested, {} available",
            src.len()
        );
        Vector::from_array(std::array::from_fn(|i| {
            if i < count {
                src[i]
            } else {
                T::zero()
            }
        }))
    }

    #[inline]
    fn store<T: Element, const N: usize>(dst: &mut [T], v: Vector<T, N>, count: usize) {
        assert!(
            count <= N,
            "cannot store {count} lanes from {}",
            Vector::<T, N>::SHAPE
        );
        assert!(
            dst.len() >= count,
            "vst1: {count} elements requested, {} available",
            dst.len()
        );
        dst[..count].copy_from_slice(&v.as_slice()[..count]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::vector::{Int8x16, Uint32x2};

    #[test]
    fn test_load_and_store_round_trip_partial() {
        let v: Int8x16 = Neon::load(&[-1, -2, -3], 3);
        assert_eq!(&v.to_array()[..4], &[-1, -2, -3, 0]);

        let mut dst = [7i8; 4];
        Neon::store(&mut dst, v, 2);
        assert_eq!(dst, [-1, -2, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "vld1: 2 elements requested, 1 available")]
    fn test_load_never_reads_past_source() {
        let _: Uint32x2 = Neon::load(&[1], 2);
    }

    #[test]
    #[should_panic(expected = "cannot store 3 lanes from uint32x2")]
    fn test_store_rejects_count_past_shape() {
        let mut dst = [0u32; 8];
        Neon::store(&mut dst, Uint32x2::splat(1), 3);
    }
}
