//! Addition family, reference semantics.

use crate::simd::{neon::pseudocode, vector::*};

reference_units! {
    vadd_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::add;
    vadd_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::add;
    vadd_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::add;
    vadd_s64(a: Int64x1, b: Int64x1) -> Int64x1 = pseudocode::add;
    vadd_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::add;
    vadd_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::add;
    vadd_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::add;
    vadd_u64(a: Uint64x1, b: Uint64x1) -> Uint64x1 = pseudocode::add;
    vaddq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::add;
    vaddq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::add;
    vaddq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::add;
    vaddq_s64(a: Int64x2, b: Int64x2) -> Int64x2 = pseudocode::add;
    vaddq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::add;
    vaddq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::add;
    vaddq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::add;
    vaddq_u64(a: Uint64x2, b: Uint64x2) -> Uint64x2 = pseudocode::add;
}

reference_units! {
    vqadd_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::saturating_add;
    vqadd_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::saturating_add;
    vqadd_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::saturating_add;
    vqadd_s64(a: Int64x1, b: Int64x1) -> Int64x1 = pseudocode::saturating_add;
    vqadd_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::saturating_add;
    vqadd_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::saturating_add;
    vqadd_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::saturating_add;
    vqadd_u64(a: Uint64x1, b: Uint64x1) -> Uint64x1 = pseudocode::saturating_add;
    vqaddq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::saturating_add;
    vqaddq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::saturating_add;
    vqaddq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::saturating_add;
    vqaddq_s64(a: Int64x2, b: Int64x2) -> Int64x2 = pseudocode::saturating_add;
    vqaddq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::saturating_add;
    vqaddq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::saturating_add;
    vqaddq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::saturating_add;
    vqaddq_u64(a: Uint64x2, b: Uint64x2) -> Uint64x2 = pseudocode::saturating_add;
}

reference_units! {
    vhadd_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::halving_add;
    vhadd_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::halving_add;
    vhadd_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::halving_add;
    vhadd_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::halving_add;
    vhadd_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::halving_add;
    vhadd_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::halving_add;
    vhaddq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::halving_add;
    vhaddq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::halving_add;
    vhaddq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::halving_add;
    vhaddq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::halving_add;
    vhaddq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::halving_add;
    vhaddq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::halving_add;
}

reference_units! {
    vrhadd_s8(a: Int8x8, b: Int8x8) -> Int8x8 = pseudocode::rounding_halving_add;
    vrhadd_s16(a: Int16x4, b: Int16x4) -> Int16x4 = pseudocode::rounding_halving_add;
    vrhadd_s32(a: Int32x2, b: Int32x2) -> Int32x2 = pseudocode::rounding_halving_add;
    vrhadd_u8(a: Uint8x8, b: Uint8x8) -> Uint8x8 = pseudocode::rounding_halving_add;
    vrhadd_u16(a: Uint16x4, b: Uint16x4) -> Uint16x4 = pseudocode::rounding_halving_add;
    vrhadd_u32(a: Uint32x2, b: Uint32x2) -> Uint32x2 = pseudocode::rounding_halving_add;
    vrhaddq_s8(a: Int8x16, b: Int8x16) -> Int8x16 = pseudocode::rounding_halving_add;
    vrhaddq_s16(a: Int16x8, b: Int16x8) -> Int16x8 = pseudocode::rounding_halving_add;
    vrhaddq_s32(a: Int32x4, b: Int32x4) -> Int32x4 = pseudocode::rounding_halving_add;
    vrhaddq_u8(a: Uint8x16, b: Uint8x16) -> Uint8x16 = pseudocode::rounding_halving_add;
    vrhaddq_u16(a: Uint16x8, b: Uint16x8) -> Uint16x8 = pseudocode::rounding_halving_add;
    vrhaddq_u32(a: Uint32x4, b: Uint32x4) -> Uint32x4 = pseudocode::rounding_halving_add;
}

reference_units! {
    vaddl_s8(a: Int8x8, b: Int8x8) -> Int16x8 = pseudocode::add_long;
    vaddl_s16(a: Int16x4, b: Int16x4) -> Int32x4 = pseudocode::add_long;
    vaddl_s32(a: Int32x2, b: Int32x2) -> Int64x2 = pseudocode::add_long;
    vaddl_u8(a: Uint8x8, b: Uint8x8) -> Uint16x8 = pseudocode::add_long;
    vaddl_u16(a: Uint16x4, b: Uint16x4) -> Uint32x4 = pseudocode::add_long;
    vaddl_u32(a: Uint32x2, b: Uint32x2) -> Uint64x2 = pseudocode::add_long;
}

reference_units! {
    vaddw_s8(a: Int16x8, b: Int8x8) -> Int16x8 = pseudocode::add_wide;
    vaddw_s16(a: Int32x4, b: Int16x4) -> Int32x4 = pseudocode::add_wide;
    vaddw_s32(a: Int64x2, b: Int32x2) -> Int64x2 = pseudocode::add_wide;
    vaddw_u8(a: Uint16x8, b: Uint8x8) -> Uint16x8 = pseudocode::add_wide;
    vaddw_u16(a: Uint32x4, b: Uint16x4) -> Uint32x4 = pseudocode::add_wide;
    vaddw_u32(a: Uint64x2, b: Uint32x2) -> Uint64x2 = pseudocode::add_wide;
}

reference_units! {
    vaddhn_s16(a: Int16x8, b: Int16x8) -> Int8x8 = pseudocode::add_high_narrow;
    vaddhn_s32(a: Int32x4, b: Int32x4) -> Int16x4 = pseudocode::add_high_narrow;
    vaddhn_s64(a: Int64x2, b: Int64x2) -> Int32x2 = pseudocode::add_high_narrow;
    vaddhn_u16(a: Uint16x8, b: Uint16x8) -> Uint8x8 = pseudocode::add_high_narrow;
    vaddhn_u32(a: Uint32x4, b: Uint32x4) -> Uint16x4 = pseudocode::add_high_narrow;
    vaddhn_u64(a: Uint64x2, b: Uint64x2) -> Uint32x2 = pseudocode::add_high_narrow;
}

reference_units! {
    vraddhn_s16(a: Int16x8, b: Int16x8) -> Int8x8 = pseudocode::rounding_add_high_narrow;
    vraddhn_s32(a: Int32x4, b: Int32x4) -> Int16x4 = pseudocode::rounding_add_high_narrow;
    vraddhn_s64(a: Int64x2, b: Int64x2) -> Int32x2 = pseudocode::rounding_add_high_narrow;
    vraddhn_u16(a: Uint16x8, b: Uint16x8) -> Uint8x8 = pseudocode::rounding_add_high_narrow;
    vraddhn_u32(a: Uint32x4, b: Uint32x4) -> Uint16x4 = pseudocode::rounding_add_high_narrow;
    vraddhn_u64(a: Uint64x2, b: Uint64x2) -> Uint32x2 = pseudocode::rounding_add_high_narrow;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vhadd_u16_reference() {
        let a = Uint16x4::from_array([1, 65535, 65535, 0]);
        let b = Uint16x4::from_array([2, 65535, 0, 0]);
        assert_eq!(vhadd_u16(a, b).to_array(), [1, 65535, 32767, 0]);
    }

    #[test]
    fn test_vqaddq_u8_reference() {
        let a = Uint8x16::splat(200);
        let b = Uint8x16::from_array([55, 56, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
        let r = vqaddq_u8(a, b).to_array();
        assert_eq!(&r[..4], &[255, 255, 200, 201]);
    }

    #[test]
    fn test_vraddhn_s16_reference() {
        let a = Int16x8::from_array([0x7f80, -0x80, -0x81, 0x7f, 0, 0, 0, 0]);
        let r = vraddhn_s16(a, Int16x8::zero()).to_array();
        assert_eq!(&r[..4], &[-128, 0, -1, 0]);
    }
}
