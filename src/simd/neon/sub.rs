//! Subtraction family, reference semantics.

use crate::simd::{neon::pseudocode, vector::*};

reference_units! {
    vsub_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::sub;
    vsub_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::sub;
    vsub_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::sub;
    vsub_s64(a: Int64x1, b: Int64x1) -> Int64x1 = pseudocode::sub;
    vsub_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::sub;
    vsub_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::sub;
    vsub_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::sub;
    vsub_u64(a: Uint64x1, b: Uint64x1) -> Uint64x1 = pseudocode::sub;
    vsubq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::sub;
    vsubq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::sub;
    vsubq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::sub;
    vsubq_s64(a: Int64x2, b: Int64x2) -> Int64x2 = pseudocode::sub;
    vsubq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::sub;
    vsubq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::sub;
    vsubq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::sub;
    vsubq_u64(a: Uint64x2, b: Uint64x2) -> Uint64x2 = pseudocode::sub;
}

reference_units! {
    vqsub_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::saturating_sub;
    vqsub_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::saturating_sub;
    vqsub_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::saturating_sub;
    vqsub_s64(a: Int64x1, b: Int64x1) -> Int64x1 = pseudocode::saturating_sub;
    vqsub_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::saturating_sub;
    vqsub_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::saturating_sub;
    vqsub_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::saturating_sub;
    vqsub_u64(a: Uint64x1, b: Uint64x1) -> Uint64x1 = pseudocode::saturating_sub;
    vqsubq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::saturating_sub;
    vqsubq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::saturating_sub;
    vqsubq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::saturating_sub;
    vqsubq_s64(a: Int64x2, b: Int64x2) -> Int64x2 = pseudocode::saturating_sub;
    vqsubq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::saturating_sub;
    vqsubq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::saturating_sub;
    vqsubq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::saturating_sub;
    vqsubq_u64(a: Uint64x2, b: Uint64x2) -> Uint64x2 = pseudocode::saturating_sub;
}

reference_units! {
    vhsub_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::halving_sub;
    vhsub_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::halving_sub;
    vhsub_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::halving_sub;
    vhsub_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::halving_sub;
    vhsub_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::halving_sub;
    vhsub_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::halving_sub;
    vhsubq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::halving_sub;
    vhsubq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::halving_sub;
    vhsubq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::halving_sub;
    vhsubq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::halving_sub;
    vhsubq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::halving_sub;
    vhsubq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::halving_sub;
}

reference_units! {
    vsubl_s8(a: Int8x8, b: Int8x8) -> Int16x8 = pseudocode::sub_long;
    vsubl_s16(a: Int16x4, b: Int16x4) -> Int32x4 = pseudocode::sub_long;
    vsubl_s32(a: Int32x2, b: Int32x2) -> Int64x2 = pseudocode::sub_long;
    vsubl_u8(a: Uint8x8, b: Uint8x8) -> Uint16x8 = pseudocode::sub_long;
    vsubl_u16(a: Uint16x4, b: Uint16x4) -> Uint32x4 = pseudocode::sub_long;
    vsubl_u32(a: Uint32x2, b: Uint32x2) -> Uint64x2 = pseudocode::sub_long;
}

reference_units! {
    vsubw_s8(a: Int16x8, b: Int8x8) -> Int16x8 = pseudocode::sub_wide;
    vsubw_s16(a: Int32x4, b: Int16x4) -> Int32x4 = pseudocode::sub_wide;
    vsubw_s32(a: Int64x2, b: Int32x2) -> Int64x2 = pseudocode::sub_wide;
    vsubw_u8(a: Uint16x8, b: Uint8x8) -> Uint16x8 = pseudocode::sub_wide;
    vsubw_u16(a: Uint32x4, b: Uint16x4) -> Uint32x4 = pseudocode::sub_wide;
    vsubw_u32(a: Uint64x2, b: Uint32x2) -> Uint64x2 = pseudocode::sub_wide;
}

reference_units! {
    vsubhn_s16(a: Int16x8, b: Int16x8) -> Int8x8 = pseudocode::sub_high_narrow;
    vsubhn_s32(a: Int32x4, b: Int32x4) -> Int16x4 = pseudocode::sub_high_narrow;
    vsubhn_s64(a: Int64x2, b: Int64x2) -> Int32x2 = pseudocode::sub_high_narrow;
    vsubhn_u16(a: Uint16x8, b: Uint16x8) -> Uint8x8 = pseudocode::sub_high_narrow;
    vsubhn_u32(a: Uint32x4, b: Uint32x4) -> Uint16x4 = pseudocode::sub_high_narrow;
    vsubhn_u64(a: Uint64x2, b: Uint64x2) -> Uint32x2 = pseudocode::sub_high_narrow;
}

reference_units! {
    vrsubhn_s16(a: Int16x8, b: Int16x8) -> Int8x8 = pseudocode::rounding_sub_high_narrow;
    vrsubhn_s32(a: Int32x4, b: Int32x4) -> Int16x4 = pseudocode::rounding_sub_high_narrow;
    vrsubhn_s64(a: Int64x2, b: Int64x2) -> Int32x2 = pseudocode::rounding_sub_high_narrow;
    vrsubhn_u16(a: Uint16x8, b: Uint16x8) -> Uint8x8 = pseudocode::rounding_sub_high_narrow;
    vrsubhn_u32(a: Uint32x4, b: Uint32x4) -> Uint16x4 = pseudocode::rounding_sub_high_narrow;
    vrsubhn_u64(a: Uint64x2, b: Uint64x2) -> Uint32x2 = pseudocode::rounding_sub_high_narrow;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vsubw_u32_reference() {
        let a = Uint64x2::from_array([1, u64::MAX]);
        let b = Uint32x2::from_array([2, u32::MAX]);
        assert_eq!(vsubw_u32(a, b).to_array(), [u64::MAX, u64::MAX - u32::MAX as u64]);
    }

    #[test]
    fn test_vrsubhn_u16_reference() {
        let a = Uint16x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(vrsubhn_u16(a, a).to_array(), [0; 8]);

        let b = Uint16x8::from_array([65535, 0, 0, 0, 0, 0, 0, 0]);
        let c = Uint16x8::from_array([1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(vrsubhn_u16(b, c).lane(0), 0);
    }

    #[test]
    fn test_vqsub_s64_reference() {
        let r = vqsub_s64(Int64x1::splat(i64::MIN), Int64x1::splat(1));
        assert_eq!(r.to_array(), [i64::MIN]);
        assert_eq!(vsub_s64(Int64x1::splat(i64::MIN), Int64x1::splat(1)).to_array(), [i64::MAX]);
    }
}
