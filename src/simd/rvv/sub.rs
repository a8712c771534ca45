//! Subtraction family: wrapping, saturating, halving, long, wide and
//! high-narrowing forms.

use crate::simd::{
    rvv::{
        intrinsics::{
            vadd_vx, vlmul_trunc, vnsra_wx, vnsrl_wx, vsext_vf2, vssub_vv, vssubu_vv, vsub_vv,
            vwsub_vv, vwsubu_vv, vwsubu_vx,
        },
        register::*,
    },
    shape::{VLEN_1, VLEN_16, VLEN_2, VLEN_4, VLEN_8},
    vector::*,
};

/// `vsub_s64`: wrapping subtract on a single `i64` lane.
#[inline]
pub fn vsub_s64(a: Int64x1, b: Int64x1) -> Int64x1 {
    let (a, b): (VInt64M1, VInt64M1) = (a.into_reg(), b.into_reg());
    vsub_vv(a, b, VLEN_1).into_vector()
}

single_width_units! {
    vsub_s8(Int8x8) => VInt8M1, VLEN_8, vsub_vv;
    vsub_s16(Int16x4) => VInt16M1, VLEN_4, vsub_vv;
    vsub_s32(Int32x2) => VInt32M1, VLEN_2, vsub_vv;
    vsub_u8(Uint8x8) => VUint8M1, VLEN_8, vsub_vv;
    vsub_u16(Uint16x4) => VUint16M1, VLEN_4, vsub_vv;
    vsub_u32(Uint32x2) => VUint32M1, VLEN_2, vsub_vv;
    vsub_u64(Uint64x1) => VUint64M1, VLEN_1, vsub_vv;
    vsubq_s8(Int8x16) => VInt8M1, VLEN_16, vsub_vv;
    vsubq_s16(Int16x8) => VInt16M1, VLEN_8, vsub_vv;
    vsubq_s32(Int32x4) => VInt32M1, VLEN_4, vsub_vv;
    vsubq_s64(Int64x2) => VInt64M1, VLEN_2, vsub_vv;
    vsubq_u8(Uint8x16) => VUint8M1, VLEN_16, vsub_vv;
    vsubq_u16(Uint16x8) => VUint16M1, VLEN_8, vsub_vv;
    vsubq_u32(Uint32x4) => VUint32M1, VLEN_4, vsub_vv;
    vsubq_u64(Uint64x2) => VUint64M1, VLEN_2, vsub_vv;
}

single_width_units! {
    vqsub_s8(Int8x8) => VInt8M1, VLEN_8, vssub_vv;
    vqsub_s16(Int16x4) => VInt16M1, VLEN_4, vssub_vv;
    vqsub_s32(Int32x2) => VInt32M1, VLEN_2, vssub_vv;
    vqsub_s64(Int64x1) => VInt64M1, VLEN_1, vssub_vv;
    vqsub_u8(Uint8x8) => VUint8M1, VLEN_8, vssubu_vv;
    vqsub_u16(Uint16x4) => VUint16M1, VLEN_4, vssubu_vv;
    vqsub_u32(Uint32x2) => VUint32M1, VLEN_2, vssubu_vv;
    vqsub_u64(Uint64x1) => VUint64M1, VLEN_1, vssubu_vv;
    vqsubq_s8(Int8x16) => VInt8M1, VLEN_16, vssub_vv;
    vqsubq_s16(Int16x8) => VInt16M1, VLEN_8, vssub_vv;
    vqsubq_s32(Int32x4) => VInt32M1, VLEN_4, vssub_vv;
    vqsubq_s64(Int64x2) => VInt64M1, VLEN_2, vssub_vv;
    vqsubq_u8(Uint8x16) => VUint8M1, VLEN_16, vssubu_vv;
    vqsubq_u16(Uint16x8) => VUint16M1, VLEN_8, vssubu_vv;
    vqsubq_u32(Uint32x4) => VUint32M1, VLEN_4, vssubu_vv;
    vqsubq_u64(Uint64x2) => VUint64M1, VLEN_2, vssubu_vv;
}

// The difference is taken at double width; its low bits are exact even when
// it is negative, so the narrowing shift yields NEON's truncated half.
halving_units! {
    vhsub_s8(Int8x8) => VInt8M1, VInt16M2, VLEN_8, vwsub_vv, vnsra_wx;
    vhsub_s16(Int16x4) => VInt16M1, VInt32M2, VLEN_4, vwsub_vv, vnsra_wx;
    vhsub_s32(Int32x2) => VInt32M1, VInt64M2, VLEN_2, vwsub_vv, vnsra_wx;
    vhsub_u8(Uint8x8) => VUint8M1, VUint16M2, VLEN_8, vwsubu_vv, vnsrl_wx;
    vhsub_u16(Uint16x4) => VUint16M1, VUint32M2, VLEN_4, vwsubu_vv, vnsrl_wx;
    vhsub_u32(Uint32x2) => VUint32M1, VUint64M2, VLEN_2, vwsubu_vv, vnsrl_wx;
    vhsubq_s8(Int8x16) => VInt8M1, VInt16M2, VLEN_16, vwsub_vv, vnsra_wx;
    vhsubq_s16(Int16x8) => VInt16M1, VInt32M2, VLEN_8, vwsub_vv, vnsra_wx;
    vhsubq_s32(Int32x4) => VInt32M1, VInt64M2, VLEN_4, vwsub_vv, vnsra_wx;
    vhsubq_u8(Uint8x16) => VUint8M1, VUint16M2, VLEN_16, vwsubu_vv, vnsrl_wx;
    vhsubq_u16(Uint16x8) => VUint16M1, VUint32M2, VLEN_8, vwsubu_vv, vnsrl_wx;
    vhsubq_u32(Uint32x4) => VUint32M1, VUint64M2, VLEN_4, vwsubu_vv, vnsrl_wx;
}

long_units! {
    vsubl_s8(Int8x8) -> Int16x8 => VInt8M1, VInt16M2, VInt16M1, VLEN_8, vwsub_vv;
    vsubl_s16(Int16x4) -> Int32x4 => VInt16M1, VInt32M2, VInt32M1, VLEN_4, vwsub_vv;
    vsubl_s32(Int32x2) -> Int64x2 => VInt32M1, VInt64M2, VInt64M1, VLEN_2, vwsub_vv;
    vsubl_u8(Uint8x8) -> Uint16x8 => VUint8M1, VUint16M2, VUint16M1, VLEN_8, vwsubu_vv;
    vsubl_u16(Uint16x4) -> Uint32x4 => VUint16M1, VUint32M2, VUint32M1, VLEN_4, vwsubu_vv;
    vsubl_u32(Uint32x2) -> Uint64x2 => VUint32M1, VUint64M2, VUint64M1, VLEN_2, vwsubu_vv;
}

/// `vsubw_u32`: `a - zext(b)` with `a` already 64 bits wide.
///
/// `b` is zero-extended with `vwsubu.vx b, 0` before the subtraction, so the
/// narrow operand never takes part in 32-bit arithmetic. The extension lands
/// in a `u64m2` group that is truncated back to `u64m1` to match `a`.
#[inline]
pub fn vsubw_u32(a: Uint64x2, b: Uint32x2) -> Uint64x2 {
    let (a, b): (VUint64M1, VUint32M1) = (a.into_reg(), b.into_reg());
    let b: VUint64M2 = vwsubu_vx(b, 0, VLEN_2);
    let b: VUint64M1 = vlmul_trunc(b);
    vsub_vv(a, b, VLEN_2).into_vector()
}

#[inline]
pub fn vsubw_u16(a: Uint32x4, b: Uint16x4) -> Uint32x4 {
    let (a, b): (VUint32M1, VUint16M1) = (a.into_reg(), b.into_reg());
    let b: VUint32M2 = vwsubu_vx(b, 0, VLEN_4);
    let b: VUint32M1 = vlmul_trunc(b);
    vsub_vv(a, b, VLEN_4).into_vector()
}

#[inline]
pub fn vsubw_u8(a: Uint16x8, b: Uint8x8) -> Uint16x8 {
    let (a, b): (VUint16M1, VUint8M1) = (a.into_reg(), b.into_reg());
    let b: VUint16M2 = vwsubu_vx(b, 0, VLEN_8);
    let b: VUint16M1 = vlmul_trunc(b);
    vsub_vv(a, b, VLEN_8).into_vector()
}

/// `vsubw_s8`: `a - sext(b)` on eight `i16` lanes.
///
/// `vsext.vf2` sign-extends the eight `i8` lanes into an `i16m2` group; only
/// its low `m1` half is needed.
#[inline]
pub fn vsubw_s8(a: Int16x8, b: Int8x8) -> Int16x8 {
    let (a, b): (VInt16M1, VInt8M1) = (a.into_reg(), b.into_reg());
    let b: VInt16M2 = vsext_vf2(b, VLEN_8);
    let b: VInt16M1 = vlmul_trunc(b);
    vsub_vv(a, b, VLEN_8).into_vector()
}

wide_units! {
    vsubw_s16(Int32x4, Int16x4) => VInt32M1, VInt16M1, VInt32M2, VLEN_4, vsext_vf2, vsub_vv;
    vsubw_s32(Int64x2, Int32x2) => VInt64M1, VInt32M1, VInt64M2, VLEN_2, vsext_vf2, vsub_vv;
}

high_narrow_units! {
    vsubhn_s16(Int16x8) -> Int8x8 => VInt16M1, VLEN_8, vsub_vv, 8, vnsra_wx;
    vsubhn_s32(Int32x4) -> Int16x4 => VInt32M1, VLEN_4, vsub_vv, 16, vnsra_wx;
    vsubhn_s64(Int64x2) -> Int32x2 => VInt64M1, VLEN_2, vsub_vv, 32, vnsra_wx;
    vsubhn_u16(Uint16x8) -> Uint8x8 => VUint16M1, VLEN_8, vsub_vv, 8, vnsrl_wx;
    vsubhn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VLEN_4, vsub_vv, 16, vnsrl_wx;
    vsubhn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VLEN_2, vsub_vv, 32, vnsrl_wx;
}

/// `vrsubhn_u16`: rounded high half of `a - b`, eight `u16` lanes to `u8`.
///
/// The difference wraps at 16 bits, the rounding constant `1 << 7` is added
/// with another wrapping add, and `vnsrl.wx 8` keeps the high byte. `vnclipu`
/// would round without wrapping and saturate instead, which disagrees with
/// NEON whenever the rounded difference crosses `2^16`: `65535 - 1 + 0x80`
/// must give `0`, not `255`.
#[inline]
pub fn vrsubhn_u16(a: Uint16x8, b: Uint16x8) -> Uint8x8 {
    let (a, b): (VUint16M1, VUint16M1) = (a.into_reg(), b.into_reg());
    let diff = vsub_vv(a, b, VLEN_8);
    let rounded = vadd_vx(diff, 0x80, VLEN_8);
    let high: VUint8MF2 = vnsrl_wx(rounded, 8, VLEN_8);
    high.into_vector()
}

high_narrow_units! {
    vrsubhn_s16(Int16x8) -> Int8x8 => VInt16M1, VLEN_8, vsub_vv, 8, vnsra_wx, 0x80;
    vrsubhn_s32(Int32x4) -> Int16x4 => VInt32M1, VLEN_4, vsub_vv, 16, vnsra_wx, 0x8000;
    vrsubhn_s64(Int64x2) -> Int32x2 => VInt64M1, VLEN_2, vsub_vv, 32, vnsra_wx, 0x8000_0000;
    vrsubhn_u32(Uint32x4) -> Uint16x4 => VUint32M1, VLEN_4, vsub_vv, 16, vnsrl_wx, 0x8000;
    vrsubhn_u64(Uint64x2) -> Uint32x2 => VUint64M1, VLEN_2, vsub_vv, 32, vnsrl_wx, 0x8000_0000;
}
