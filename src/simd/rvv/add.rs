//! Addition family: wrapping, saturating, halving, rounding-halving, long,
//! wide and high-narrowing forms.

use crate::simd::{
    rvv::{
        fixed_point::Vxrm,
        intrinsics::{
            vaadd_vv, vaaddu_vv, vadd_vv, vadd_vx, vlmul_trunc, vnsra_wx, vnsrl_wx, vsadd_vv,
            vsaddu_vv, vsext_vf2, vwadd_vv, vwaddu_vv, vzext_vf2,
        },
        register::*,
    },
    shape::{VLEN_1, VLEN_16, VLEN_2, VLEN_4, VLEN_8},
    vector::*,
};

/// `vaddq_u32`: lane-wise wrapping add of four `u32` lanes.
///
/// One `vadd.vv` on the `u32m1` group with `vl = 4`.
#[inline]
pub fn vaddq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 {
    let (a, b): (VUint32M1, VUint32M1) = (a.into_reg(), b.into_reg());
    vadd_vv(a, b, VLEN_4).into_vector()
}

single_width_units! {
    vadd_s8(Int8x8) => VInt8M1, VLEN_8, vadd_vv;
    vadd_s16(Int16x4) => VInt16M1, VLEN_4, vadd_vv;
    vadd_s32(Int32x2) => VInt32M1, VLEN_2, vadd_vv;
    vadd_s64(Int64x1) => VInt64M1, VLEN_1, vadd_vv;
    vadd_u8(Uint8x8) => VUint8M1, VLEN_8, vadd_vv;
    vadd_u16(Uint16x4) => VUint16M1, VLEN_4, vadd_vv;
    vadd_u32(Uint32x2) => VUint32M1, VLEN_2, vadd_vv;
    vadd_u64(Uint64x1) => VUint64M1, VLEN_1, vadd_vv;
    vaddq_s8(Int8x16) => VInt8M1, VLEN_16, vadd_vv;
    vaddq_s16(Int16x8) => VInt16M1, VLEN_8, vadd_vv;
    vaddq_s32(Int32x4) => VInt32M1, VLEN_4, vadd_vv;
    vaddq_s64(Int64x2) => VInt64M1, VLEN_2, vadd_vv;
    vaddq_u8(Uint8x16) => VUint8M1, VLEN_16, vadd_vv;
    vaddq_u16(Uint16x8) => VUint16M1, VLEN_8, vadd_vv;
    vaddq_u64(Uint64x2) => VUint64M1, VLEN_2, vadd_vv;
}

/// `vqaddq_u8`: unsigned saturating add of sixteen `u8` lanes.
///
/// Saturation is a property of `vsaddu.vv` itself, so there is no separate
/// overflow check: `250 + 10` is `255`, not `4`.
#[inline]
pub fn vqaddq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 {
    let (a, b): (VUint8M1, VUint8M1) = (a.into_reg(), b.into_reg());
    vsaddu_vv(a, b, VLEN_16).into_vector()
}

single_width_units! {
    vqadd_s8(Int8x8) => VInt8M1, VLEN_8, vsadd_vv;
    vqadd_s16(Int16x4) => VInt16M1, VLEN_4, vsadd_vv;
    vqadd_s32(Int32x2) => VInt32M1, VLEN_2, vsadd_vv;
    vqadd_s64(Int64x1) => VInt64M1, VLEN_1, vsadd_vv;
    vqadd_u8(Uint8x8) => VUint8M1, VLEN_8, vsaddu_vv;
    vqadd_u16(Uint16x4) => VUint16M1, VLEN_4, vsaddu_vv;
    vqadd_u32(Uint32x2) => VUint32M1, VLEN_2, vsaddu_vv;
    vqadd_u64(Uint64x1) => VUint64M1, VLEN_1, vsaddu_vv;
    vqaddq_s8(Int8x16) => VInt8M1, VLEN_16, vsadd_vv;
    vqaddq_s16(Int16x8) => VInt16M1, VLEN_8, vsadd_vv;
    vqaddq_s32(Int32x4) => VInt32M1, VLEN_4, vsadd_vv;
    vqaddq_s64(Int64x2) => VInt64M1, VLEN_2, vsadd_vv;
    vqaddq_u16(Uint16x8) => VUint16M1, VLEN_8, vsaddu_vv;
    vqaddq_u32(Uint32x4) => VUint32M1, VLEN_4, vsaddu_vv;
    vqaddq_u64(Uint64x2) => VUint64M1, VLEN_2, vsaddu_vv;
}

/// `vhadd_u16`: `(a + b) >> 1` on four `u16` lanes.
///
/// The sum is formed at 32 bits with `vwaddu.vv` and shifted back down with
/// `vnsrl.wx`, so `65535 + 65535` halves to `65535` instead of overflowing.
/// Adding at 16 bits first would lose the carry.
#[inline]
pub fn vhadd_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 {
    let (a, b): (VUint16M1, VUint16M1) = (a.into_reg(), b.into_reg());
    let sum: VUint32M2 = vwaddu_vv(a, b, VLEN_4);
    vnsrl_wx(sum, 1, VLEN_4).into_vector()
}

halving_units! {
    vhadd_s8(Int8x8) => VInt8M1, VInt16M2, VLEN_8, vwadd_vv, vnsra_wx;
    vhadd_s16(Int16x4) => VInt16M1, VInt32M2, VLEN_4, vwadd_vv, vnsra_wx;
    vhadd_s32(Int32x2) => VInt32M1, VInt64M2, VLEN_2, vwadd_vv, vnsra_wx;
    vhadd_u8(Uint8x8) => VUint8M1, VUint16M2, VLEN_8, vwaddu_vv, vnsrl_wx;
    vhadd_u32(Uint32x2) => VUint32M1, VUint64M2, VLEN_2, vwaddu_vv, vnsrl_wx;
    vhaddq_s8(Int8x16) => VInt8M1, VInt16M2, VLEN_16, vwadd_vv, vnsra_wx;
    vhaddq_s16(Int16x8) => VInt16M1, VInt32M2, VLEN_8, vwadd_vv, vnsra_wx;
    vhaddq_s32(Int32x4) => VInt32M1, VInt64M2, VLEN_4, vwadd_vv, vnsra_wx;
    vhaddq_u8(Uint8x16) => VUint8M1, VUint16M2, VLEN_16, vwaddu_vv, vnsrl_wx;
    vhaddq_u16(Uint16x8) => VUint16M1, VUint32M2, VLEN_8, vwaddu_vv, vnsrl_wx;
    vhaddq_u32(Uint32x4) => VUint32M1, VUint64M2, VLEN_4, vwaddu_vv, vnsrl_wx;
}

// vaadd computes (a + b) >> 1 at unbounded precision; rnu supplies the +1.
averaging_units! {
    vrhadd_s8(Int8x8) => VInt8M1, VLEN_8, vaadd_vv;
    vrhadd_s16(Int16x4) => VInt16M1, VLEN_4, vaadd_vv;
    vrhadd_s32(Int32x2) => VInt32M1, VLEN_2, vaadd_vv;
    vrhadd_u8(Uint8x8) => VUint8M1, VLEN_8, vaaddu_vv;
    vrhadd_u16(Uint16x4) => VUint16M1, VLEN_4, vaaddu_vv;
    vrhadd_u32(Uint32x2) => VUint32M1, VLEN_2, vaaddu_vv;
    vrhaddq_s8(Int8x16) => VInt8M1, VLEN_16, vaadd_vv;
    vrhaddq_s16(Int16x8) => VInt16M1, VLEN_8, vaadd_vv;
    vrhaddq_s32(Int32x4) => VInt32M1, VLEN_4, vaadd_vv;
    vrhaddq_u8(Uint8x16) => VUint8M1, VLEN_16, vaaddu_vv;
    vrhaddq_u16(Uint16x8) => VUint16M1, VLEN_8, vaaddu_vv;
    vrhaddq_u32(Uint32x4) => VUint32M1, VLEN_4, vaaddu_vv;
}

long_units! {
    vaddl_s8(Int8x8) -> Int16x8 => VInt8M1, VInt16M2, VInt16M1, VLEN_8, vwadd_vv;
    vaddl_s16(Int16x4) -> Int32x4 => VInt16M1, VInt32M2, VInt32M1, VLEN_4, vwadd_vv;
    vaddl_s32(Int32x2) -> Int64x2 => VInt32M1, VInt64M2, VInt64M1, VLEN_2, vwadd_vv;
    vaddl_u8(Uint8x8) -> Uint16x8 => VUint8M1, VUint16M2, VUint16M1, VLEN_8, vwaddu_vv;
    vaddl_u16(Uint16x4) -> Uint32x4 => VUint16M1, VUint32M2, VUint32M1, VLEN_4, vwaddu_vv;
    vaddl_u32(Uint32x2) -> Uint64x2 => VUint32M1, VUint64M2, VUint64M1, VLEN_2, vwaddu_vv;
}

wide_units! {
    vaddw_s8(Int16x8, Int8x8) => VInt16M1, VInt8M1, VInt16M2, VLEN_8, vsext_vf2, vadd_vv;
    vaddw_s16(Int32x4, Int16x4) => VInt32M1, VInt16M1, VInt32M2, VLEN_4, vsext_vf2, vadd_vv;
    vaddw_s32(Int64x2, Int32x2) => VInt64M1, VInt32M1, VInt64M2, VLEN_2, vsext_vf2, vadd_vv;
    vaddw_u8(Uint16x8, Uint8x8) => VUint16M1, VUint8M1, VUint16M2, VLEN_8, vzext_vf2, vadd_vv;
    vaddw_u16(Uint32x4, Uint16x4) => VUint32M1, VUint16M1, VUint32M2, VLEN_4, vzext_vf2, vadd_vv;
    vaddw_u32(Uint64x2, Uint32x2) => VUint64M1, VUint32M1, VUint64M2, VLEN_2, vzext_vf2, vadd_vv;
}

high_narrow_units! {
    vaddhn_s16(Int16x8) -> Int8x8 => VInt16M1, VLEN_8, vadd_vv, 8, vnsra_wx;
    vaddhn_s32(Int32x4) -> Int16x4 => VInt32M1, VLEN_4, vadd_vv, 16, vnsra_wx;
    vaddhn_s64(Int64x2) -> Int32x2 => VInt64M1, VLEN_2, vadd_vv, 32, vnsra_wx;
    vaddhn_u16(Uint16x8) -> Uint8x8 => VUint16M1, VLEN_8, vadd_vv, 8, vnsrl_wx;
    vaddhn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VLEN_4, vadd_vv, 16, vnsrl_wx;
    vaddhn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VLEN_2, vadd_vv, 32, vnsrl_wx;
}

// The bias is added with a wrapping vadd, not through vnclip rounding, because
// the rounded sum must wrap at the wide width before the high half is taken.
high_narrow_units! {
    vraddhn_s16(Int16x8) -> Int8x8 => VInt16M1, VLEN_8, vadd_vv, 8, vnsra_wx, 0x80;
    vraddhn_s32(Int32x4) -> Int16x4 => VInt32M1, VLEN_4, vadd_vv, 16, vnsra_wx, 0x8000;
    vraddhn_s64(Int64x2) -> Int32x2 => VInt64M1, VLEN_2, vadd_vv, 32, vnsra_wx, 0x8000_0000;
    vraddhn_u16(Uint16x8) -> Uint8x8 => VUint16M1, VLEN_8, vadd_vv, 8, vnsrl_wx, 0x80;
    vraddhn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VLEN_4, vadd_vv, 16, vnsrl_wx, 0x8000;
    vraddhn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VLEN_2, vadd_vv, 32, vnsrl_wx, 0x8000_0000;
}
