//! Lane-level properties of the scalable backend, checked with proptest.

use neonrvv::{
    harness::{lookup, tables, BackendKind, CATALOG},
    simd::{neon, rvv},
    Int16x4, Int16x8, Int32x4, Int8x16, Int8x8, Uint16x4, Uint16x8, Uint32x2, Uint64x2, Uint8x16,
};
use proptest::{array, prelude::*};

proptest! {
    #[test]
    fn vqaddq_u8_is_clamped_sum(a in array::uniform16(any::<u8>()), b in array::uniform16(any::<u8>())) {
        let got = rvv::vqaddq_u8(Uint8x16::from_array(a), Uint8x16::from_array(b)).to_array();
        for i in 0..16 {
            prop_assert_eq!(got[i], a[i].saturating_add(b[i]));
        }
    }

    #[test]
    fn vqaddq_s8_is_clamped_sum(a in array::uniform16(any::<i8>()), b in array::uniform16(any::<i8>())) {
        let got = rvv::vqaddq_s8(Int8x16::from_array(a), Int8x16::from_array(b)).to_array();
        for i in 0..16 {
            prop_assert_eq!(got[i], a[i].saturating_add(b[i]));
        }
    }

    #[test]
    fn vhadd_u16_is_floor_mean(a in array::uniform4(any::<u16>()), b in array::uniform4(any::<u16>())) {
        let got = rvv::vhadd_u16(Uint16x4::from_array(a), Uint16x4::from_array(b)).to_array();
        for i in 0..4 {
            prop_assert_eq!(u32::from(got[i]), (u32::from(a[i]) + u32::from(b[i])) >> 1);
        }
    }

    #[test]
    fn vrhaddq_s32_is_rounded_mean(a in array::uniform4(any::<i32>()), b in array::uniform4(any::<i32>())) {
        let got = rvv::vrhaddq_s32(Int32x4::from_array(a), Int32x4::from_array(b)).to_array();
        for i in 0..4 {
            prop_assert_eq!(i64::from(got[i]), (i64::from(a[i]) + i64::from(b[i]) + 1) >> 1);
        }
    }

    #[test]
    fn vsubw_u32_is_wrapping_difference(a in array::uniform2(any::<u64>()), b in array::uniform2(any::<u32>())) {
        let got = rvv::vsubw_u32(Uint64x2::from_array(a), Uint32x2::from_array(b)).to_array();
        for i in 0..2 {
            prop_assert_eq!(got[i], a[i].wrapping_sub(u64::from(b[i])));
        }
    }

    #[test]
    fn vsubw_s8_is_wrapping_difference(a in array::uniform8(any::<i16>()), b in array::uniform8(any::<i8>())) {
        let got = rvv::vsubw_s8(Int16x8::from_array(a), Int8x8::from_array(b)).to_array();
        for i in 0..8 {
            prop_assert_eq!(got[i], a[i].wrapping_sub(i16::from(b[i])));
        }
    }

    #[test]
    fn vrsubhn_u16_matches_reference(a in array::uniform8(any::<u16>()), b in array::uniform8(any::<u16>())) {
        let (a, b) = (Uint16x8::from_array(a), Uint16x8::from_array(b));
        prop_assert_eq!(rvv::vrsubhn_u16(a, b), neon::vrsubhn_u16(a, b));
    }

    #[test]
    fn vhsub_s16_matches_reference(a in array::uniform4(any::<i16>()), b in array::uniform4(any::<i16>())) {
        let (a, b) = (Int16x4::from_array(a), Int16x4::from_array(b));
        prop_assert_eq!(rvv::vhsub_s16(a, b), neon::vhsub_s16(a, b));
    }

    #[test]
    fn units_are_deterministic(a in array::uniform8(any::<u16>()), b in array::uniform8(any::<u16>())) {
        let (a, b) = (Uint16x8::from_array(a), Uint16x8::from_array(b));
        prop_assert_eq!(rvv::vraddhn_u16(a, b), rvv::vraddhn_u16(a, b));
        prop_assert_eq!(rvv::vqsubq_u16(a, b), rvv::vqsubq_u16(a, b));
    }

    #[test]
    fn random_cases_agree_across_backends(index in 0..CATALOG.len(), seed in any::<u64>()) {
        let op = &CATALOG[index];
        for case in tables::cases(op, 2, seed) {
            let scalable = op.run(BackendKind::Rvv, &case.inputs).unwrap();
            let reference = op.run(BackendKind::Neon, &case.inputs).unwrap();
            prop_assert_eq!(scalable, reference, "{} case {}", op.name, case.label);
        }
    }
}

#[test]
fn saturating_narrow_boundaries() {
    let op = lookup("vqmovn_u16").unwrap();
    let got = op
        .run(BackendKind::Rvv, &[vec![0, 1, 254, 255, 256, 1000, 65534, 65535]])
        .unwrap();
    assert_eq!(got, vec![0, 1, 254, 255, 255, 255, 255, 255]);

    let op = lookup("vqmovn_s16").unwrap();
    let got = op
        .run(BackendKind::Rvv, &[vec![-32768, -129, -128, -1, 0, 127, 128, 32767]])
        .unwrap();
    assert_eq!(got, vec![-128, -128, -128, -1, 0, 127, 127, 127]);
}
