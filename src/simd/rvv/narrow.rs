//! Narrowing moves: truncating (`vmovn`) and saturating (`vqmovn`).

use crate::simd::{
    rvv::{
        fixed_point::Vxrm,
        intrinsics::{vnclip_wx, vnclipu_wx, vnsra_wx, vnsrl_wx},
        register::*,
    },
    shape::{VLEN_2, VLEN_4, VLEN_8},
    vector::*,
};

/// A narrowing shift by zero keeps the low half of every lane.
macro_rules! truncating_units {
    ($($name:ident($vec:ty) -> $out:ty => $reg:ty, $narrow:ty, $vl:expr, $prim:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec) -> $out {
                let a: $reg = a.into_reg();
                let low: $narrow = $prim(a, 0, $vl);
                low.into_vector()
            }
        )*
    };
}

/// `vnclip` by zero never rounds, so only its saturation is observable.
macro_rules! saturating_units {
    ($($name:ident($vec:ty) -> $out:ty => $reg:ty, $narrow:ty, $vl:expr, $prim:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $vec) -> $out {
                let a: $reg = a.into_reg();
                let clipped: $narrow = $prim(a, 0, Vxrm::Rdn, $vl);
                clipped.into_vector()
            }
        )*
    };
}

truncating_units! {
    vmovn_s16(Int16x8) -> Int8x8 => VInt16M1, VInt8MF2, VLEN_8, vnsra_wx;
    vmovn_s32(Int32x4) -> Int16x4 => VInt32M1, VInt16MF2, VLEN_4, vnsra_wx;
    vmovn_s64(Int64x2) -> Int32x2 => VInt64M1, VInt32MF2, VLEN_2, vnsra_wx;
    vmovn_u16(Uint16x8) -> Uint8x8 => VUint16M1, VUint8MF2, VLEN_8, vnsrl_wx;
    vmovn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VUint16MF2, VLEN_4, vnsrl_wx;
    vmovn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VUint32MF2, VLEN_2, vnsrl_wx;
}

saturating_units! {
    vqmovn_s16(Int16x8) -> Int8x8 => VInt16M1, VInt8MF2, VLEN_8, vnclip_wx;
    vqmovn_s32(Int32x4) -> Int16x4 => VInt32M1, VInt16MF2, VLEN_4, vnclip_wx;
    vqmovn_s64(Int64x2) -> Int32x2 => VInt64M1, VInt32MF2, VLEN_2, vnclip_wx;
    vqmovn_u16(Uint16x8) -> Uint8x8 => VUint16M1, VUint8MF2, VLEN_8, vnclipu_wx;
    vqmovn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VUint16MF2, VLEN_4, vnclipu_wx;
    vqmovn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VUint32MF2, VLEN_2, vnclipu_wx;
}
