//! Scalable backend: NEON operations re-expressed with RVV primitives.
//!
//! Every translation unit follows the same three steps as the C shim it mirrors:
//! place the NEON operands in their LMUL=1 register groups, run one or more RVV
//! primitives with the `VLEN_*` token of the NEON shape, and read the low lanes
//! of the result group back out. The token is the only thing that makes a
//! vector-length-agnostic instruction behave like a fixed-width one, so each
//! unit spells it out explicitly.
//!
//! Unit names match the NEON intrinsic they replace (`rvv::vhadd_u16` stands in
//! for `vhadd_u16`).

use crate::simd::{
    shape::Vl,
    traits::{Element, SimdBackend},
    vector::Vector,
};

pub mod fixed_point;
pub mod intrinsics;
pub mod register;

use intrinsics::{vle_v_tu, vmv_v_x, vse_v};
use register::Vreg;

/// Single-width `op(a, b)` on the operands' own register group.
macro_rules! single_width_units {
    ($($(#[$meta:meta])* $name:ident($vec:ty) => $reg:ty, $vl:expr, $prim:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(a: $vec, b: $vec) -> $vec {
                let (a, b): ($reg, $reg) = (a.into_reg(), b.into_reg());
                $prim(a, b, $vl).into_vector()
            }
        )*
    };
}

/// Averaging primitive with round-to-nearest-up.
macro_rules! averaging_units {
    ($($name:ident($vec:ty) => $reg:ty, $vl:expr, $prim:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec, b: $vec) -> $vec {
                let (a, b): ($reg, $reg) = (a.into_reg(), b.into_reg());
                $prim(a, b, Vxrm::Rnu, $vl).into_vector()
            }
        )*
    };
}

/// Widening op, then a narrowing shift right by one back to the operand width.
macro_rules! halving_units {
    ($($name:ident($vec:ty) => $reg:ty, $wide:ty, $vl:expr, $widen:ident, $narrow:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec, b: $vec) -> $vec {
                let (a, b): ($reg, $reg) = (a.into_reg(), b.into_reg());
                let wide: $wide = $widen(a, b, $vl);
                $narrow(wide, 1, $vl).into_vector()
            }
        )*
    };
}

/// Widening op on two narrow operands; the wide result is truncated to LMUL=1.
macro_rules! long_units {
    ($($name:ident($vec:ty) -> $out:ty => $reg:ty, $wide:ty, $wide_m1:ty, $vl:expr, $widen:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec, b: $vec) -> $out {
                let (a, b): ($reg, $reg) = (a.into_reg(), b.into_reg());
                let wide: $wide = $widen(a, b, $vl);
                let wide: $wide_m1 = vlmul_trunc(wide);
                wide.into_vector()
            }
        )*
    };
}

/// Wide operand combined with an extended narrow operand at the wide width.
macro_rules! wide_units {
    ($($name:ident($wvec:ty, $nvec:ty) => $wreg:ty, $nreg:ty, $ext:ty, $vl:expr, $extend:ident, $prim:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $wvec, b: $nvec) -> $wvec {
                let (a, b): ($wreg, $nreg) = (a.into_reg(), b.into_reg());
                let b: $ext = $extend(b, $vl);
                let b: $wreg = vlmul_trunc(b);
                $prim(a, b, $vl).into_vector()
            }
        )*
    };
}

/// High half of a wrapping wide op, optionally rounded by `bias` first.
macro_rules! high_narrow_units {
    ($($name:ident($vec:ty) -> $out:ty => $reg:ty, $vl:expr, $prim:ident, $shift:expr, $narrow:ident $(, $bias:expr)?;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec, b: $vec) -> $out {
                let (a, b): ($reg, $reg) = (a.into_reg(), b.into_reg());
                let wide = $prim(a, b, $vl);
                $(let wide = vadd_vx(wide, $bias, $vl);)?
                $narrow(wide, $shift, $vl).into_vector()
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

/// The scalable backend's load and store adapters.
///
/// Loads go through `vle_v_tu` over a zeroed group so that lanes past `count`
/// read as zero; stores write exactly `count` lanes with `vse_v`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rvv;

impl SimdBackend for Rvv {
    const NAME: &'static str = "rvv";

    #[inline]
    fn load<T: Element, const N: usize>(src: &[T], count: usize) -> Vector<T, N> {
        assert!(
            count <= N,
            "cannot load {count} lanes into {}",
            Vector::<T, N>::SHAPE
        );
        let zero: Vreg<T, N> = vmv_v_x(T::zero(), Vl::from_avl(N));
        vle_v_tu(zero, src, Vl::from_avl(count)).into_vector()
    }

    #[inline]
    fn store<T: Element, const N: usize>(dst: &mut [T], v: Vector<T, N>, count: usize) {
        assert!(
            count <= N,
            "cannot store {count} lanes from {}",
            Vector::<T, N>::SHAPE
        );
        let reg: Vreg<T, N> = v.into_reg();
        vse_v(dst, reg, Vl::from_avl(count));
    }
}
