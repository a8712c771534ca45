//! Narrowing moves, reference semantics.

use crate::simd::{neon::pseudocode, vector::*};

reference_units! {
    vmovn_s16(a: Int16x8) -> Int8x8 = pseudocode::narrow;
    vmovn_s32(a: Int32x4) -> Int16x4 = pseudocode::narrow;
    vmovn_s64(a: Int64x2) -> Int32x2 = pseudocode::narrow;
    vmovn_u16(a: Uint16x8) -> Uint8x8 = pseudocode::narrow;
    vmovn_u32(a: Uint32x4) -> Uint16x4 = pseudocode::narrow;
    vmovn_u64(a: Uint64x2) -> Uint32x2 = pseudocode::narrow;
}

reference_units! {
    vqmovn_s16(a: Int16x8) -> Int8x8 = pseudocode::saturating_narrow;
    vqmovn_s32(a: Int32x4) -> Int16x4 = pseudocode::saturating_narrow;
    vqmovn_s64(a: Int64x2) -> Int32x2 = pseudocode::saturating_narrow;
    vqmovn_u16(a: Uint16x8) -> Uint8x8 = pseudocode::saturating_narrow;
    vqmovn_u32(a: Uint32x4) -> Uint16x4 = pseudocode::saturating_narrow;
    vqmovn_u64(a: Uint64x2) -> Uint32x2 = pseudocode::saturating_narrow;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vqmovn_u16_reference() {
        let a = Uint16x8::from_array([0, 255, 256, 65535, 1, 2, 3, 4]);
        assert_eq!(vqmovn_u16(a).to_array(), [0, 255, 255, 255, 1, 2, 3, 4]);
        assert_eq!(vmovn_u16(a).to_array(), [0, 255, 0, 255, 1, 2, 3, 4]);
    }
}
