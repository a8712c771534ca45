//! Known-answer tests for the flagship translation units on both backends.
//!
//! Each table is the documented input table of the unit together with the
//! lanes an Arm core produces for it.

use neonrvv::{
    harness::{lookup, tables, BackendKind},
    simd::{neon, rvv},
    Int16x8, Int64x1, Int8x8, Uint16x4, Uint16x8, Uint32x2, Uint32x4, Uint64x2, Uint8x16,
};

/// Runs `name` over its documented table on both backends and checks every row.
fn check_table(name: &str, expected: &[Vec<i128>]) {
    let op = lookup(name).unwrap();
    let cases = tables::cases(op, 0, 0);
    assert_eq!(cases.len(), expected.len(), "{name}: table size");

    for (case, want) in cases.iter().zip(expected) {
        for backend in [BackendKind::Rvv, BackendKind::Neon] {
            let got = op.run(backend, &case.inputs).unwrap();
            println!("{name} [{backend}] {:<12} {:?} -> {:?}", case.label, case.inputs, got);
            assert_eq!(&got, want, "{name} on {backend}, case {}", case.label);
        }
    }
}

#[test]
fn test_vrsubhn_u16_table() {
    // ((a - b) + 0x80) >> 8 with b = {1, .., 8}; the sum wraps at 16 bits.
    check_table(
        "vrsubhn_u16",
        &[
            vec![0; 8],
            vec![0; 8],
            vec![0; 8],
            vec![0; 8],
            vec![0; 8],
            vec![0, 0, 0, 0, 0, 0, 0, 0],
            vec![20, 236, 39, 217, 10, 246, 29, 227],
            vec![0; 8],
        ],
    );
}

#[test]
fn test_vsubw_s8_table() {
    check_table(
        "vsubw_s8",
        &[
            vec![-126, 130, 2, 5, -45, 56, -93, 108],
            vec![-127, 128, -1, 1, -50, 50, -100, 100],
            vec![-128, 126, -4, -3, -55, 44, -107, 92],
            vec![32640, -32641, 32766, -32768, 32717, -32719, 32667, -32669],
            vec![32641, -32640, 32767, -32767, 32718, -32718, 32668, -32668],
            vec![32640, -32640, 32766, -32767, 32717, -32718, 32667, -32668],
            vec![4873, -4872, 9999, -9999, 2450, -2450, 7400, -7400],
            vec![-126, 129, 0, 2, -49, 51, -99, 101],
        ],
    );
}

#[test]
fn test_vhadd_u16_table() {
    // floor((a + b) / 2) at double width, b = {1, 2, 3, 4}.
    check_table(
        "vhadd_u16",
        &[
            vec![1, 2, 3, 4],
            vec![0, 1, 1, 2],
            vec![32768, 32768, 32768, 32768],
            vec![32768, 32768, 32769, 32769],
            vec![0, 1, 1, 2],
            vec![32768, 1, 32769, 2],
            vec![2500, 30268, 5001, 27769],
            vec![1, 1, 2, 2],
        ],
    );
}

#[test]
fn test_vqaddq_u8_table() {
    // min(a + b, 255), b = {1, .., 16}.
    check_table(
        "vqaddq_u8",
        &[
            (1..=16).map(|i| 2 * i).collect::<Vec<i128>>(),
            (1..=16).collect::<Vec<i128>>(),
            vec![255; 16],
            vec![255; 16],
            (1..=16).collect::<Vec<i128>>(),
            vec![255, 2, 255, 4, 255, 6, 255, 8, 255, 10, 255, 12, 255, 14, 255, 16],
            vec![51, 207, 103, 159, 30, 236, 82, 188, 59, 215, 111, 167, 38, 244, 90, 196],
            (2..=17).collect::<Vec<i128>>(),
        ],
    );
}

#[test]
fn test_vsubw_u32_table() {
    // a - zero_extend(b) modulo 2^64, b = {1, 2}.
    const MAX: i128 = u64::MAX as i128;
    check_table(
        "vsubw_u32",
        &[
            vec![0, 0],
            vec![MAX, MAX - 1],
            vec![MAX - 1, MAX - 3],
            vec![MAX - 1, MAX - 2],
            vec![MAX, MAX - 1],
            vec![MAX - 1, MAX - 1],
            vec![4999, MAX - 5002],
            vec![0, MAX],
        ],
    );
}

#[test]
fn test_vaddq_u32_table() {
    // a + b modulo 2^32, b = {1, 2, 3, 4}.
    check_table(
        "vaddq_u32",
        &[
            vec![2, 4, 6, 8],
            vec![1, 2, 3, 4],
            vec![0, 0, 0, 0],
            vec![0, 1, 2, 3],
            vec![1, 2, 3, 4],
            vec![0, 2, 2, 4],
            vec![5001, 4294962298, 10003, 4294957300],
            vec![2, 3, 4, 5],
        ],
    );
}

#[test]
fn test_vsub_s64_table() {
    // a - 1, wrapping at i64::MIN.
    check_table(
        "vsub_s64",
        &[
            vec![0],
            vec![-1],
            vec![-2],
            vec![i64::MAX as i128 - 1],
            vec![i64::MAX as i128],
            vec![4999],
            vec![-5001],
            vec![0],
        ],
    );
}

#[test]
fn test_vhadd_u16_typed() {
    let a = Uint16x4::from_array([65535, 65535, 1, 0]);
    let b = Uint16x4::from_array([65535, 65534, 2, 0]);
    let want = [65535, 65534, 1, 0];

    assert_eq!(rvv::vhadd_u16(a, b).to_array(), want);
    assert_eq!(neon::vhadd_u16(a, b).to_array(), want);

    let max = Uint16x4::splat(u16::MAX);
    let one_to_four = Uint16x4::from_array([1, 2, 3, 4]);
    assert_eq!(rvv::vhadd_u16(max, one_to_four).to_array(), [32768, 32768, 32769, 32769]);
}

#[test]
fn test_vqaddq_u8_saturates() {
    let a = Uint8x16::from_array([250, 255, 0, 128, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 200]);
    let b = Uint8x16::from_array([10, 1, 0, 128, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 55]);
    let want = [255, 255, 0, 255, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 255];

    assert_eq!(rvv::vqaddq_u8(a, b).to_array(), want);
    assert_eq!(neon::vqaddq_u8(a, b).to_array(), want);
}

#[test]
fn test_vsubw_u32_zero_extends() {
    let a = Uint64x2::from_array([0, 1 << 40]);
    let b = Uint32x2::from_array([1, u32::MAX]);
    let want = [u64::MAX, (1 << 40) - u64::from(u32::MAX)];

    assert_eq!(rvv::vsubw_u32(a, b).to_array(), want);
    assert_eq!(neon::vsubw_u32(a, b).to_array(), want);
}

#[test]
fn test_vsubw_s8_typed() {
    let a = Int16x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
    let b = Int8x8::from_array([127, -128, 1, -1, 50, -50, 100, -100]);
    assert_eq!(
        rvv::vsubw_s8(a, b).to_array(),
        [-126, 130, 2, 5, -45, 56, -93, 108]
    );
}

#[test]
fn test_vrsubhn_u16_typed() {
    let a = Uint16x8::from_array([65535, 0, 0x1280, 0x1200, 300, 0, 0, 0]);
    let b = Uint16x8::from_array([1, 1, 0, 0, 44, 0, 0, 0]);
    let want = [0, 0, 0x13, 0x12, 1, 0, 0, 0];

    assert_eq!(rvv::vrsubhn_u16(a, b).to_array(), want);
    assert_eq!(neon::vrsubhn_u16(a, b).to_array(), want);
}

#[test]
fn test_vaddq_u32_wraps() {
    let a = Uint32x4::splat(u32::MAX);
    let b = Uint32x4::from_array([1, 2, 3, 4]);
    assert_eq!(rvv::vaddq_u32(a, b).to_array(), [0, 1, 2, 3]);
    assert_eq!(neon::vaddq_u32(a, b).to_array(), [0, 1, 2, 3]);
}

#[test]
fn test_vsub_s64_wraps() {
    let min = Int64x1::splat(i64::MIN);
    let max = Int64x1::splat(i64::MAX);
    assert_eq!(rvv::vsub_s64(min, max).to_array(), [1]);
    assert_eq!(rvv::vsub_s64(max, min).to_array(), [-1]);
    assert_eq!(neon::vsub_s64(min, max).to_array(), [1]);
}

#[test]
fn test_selected_backend_matches_reference() {
    let a = Uint16x4::from_array([7, 9, 65535, 0]);
    let b = Uint16x4::from_array([8, 1, 65535, 1]);
    assert_eq!(
        neonrvv::backend::vhadd_u16(a, b),
        neon::vhadd_u16(a, b)
    );
}
