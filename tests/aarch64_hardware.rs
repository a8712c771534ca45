//! On AArch64 hosts, checks the scalable backend against the real NEON
//! instructions.
#![cfg(target_arch = "aarch64")]

use std::arch::aarch64::*;

use neonrvv::{simd::rvv, Int16x8, Int8x8, Uint16x4, Uint16x8, Uint8x16};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_against_hardware() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..256 {
        let a16: [u16; 8] = rng.random();
        let b16: [u16; 8] = rng.random();
        let a8: [u8; 16] = rng.random();
        let b8: [u8; 16] = rng.random();
        let w: [i16; 8] = rng.random();
        let n: [i8; 8] = rng.random();

        // SAFETY: NEON is mandatory on AArch64 and every pointer covers the lanes read or written.
        unsafe {
            let mut out4 = [0u16; 4];
            vst1_u16(
                out4.as_mut_ptr(),
                vhadd_u16(vld1_u16(a16.as_ptr()), vld1_u16(b16.as_ptr())),
            );
            let a = Uint16x4::from_slice(&a16[..4]);
            let b = Uint16x4::from_slice(&b16[..4]);
            assert_eq!(rvv::vhadd_u16(a, b).to_array(), out4);

            let mut out16 = [0u8; 16];
            vst1q_u8(
                out16.as_mut_ptr(),
                vqaddq_u8(vld1q_u8(a8.as_ptr()), vld1q_u8(b8.as_ptr())),
            );
            let got = rvv::vqaddq_u8(Uint8x16::from_array(a8), Uint8x16::from_array(b8));
            assert_eq!(got.to_array(), out16);

            let mut out8 = [0u8; 8];
            vst1_u8(
                out8.as_mut_ptr(),
                vrsubhn_u16(vld1q_u16(a16.as_ptr()), vld1q_u16(b16.as_ptr())),
            );
            let got = rvv::vrsubhn_u16(Uint16x8::from_array(a16), Uint16x8::from_array(b16));
            assert_eq!(got.to_array(), out8);

            let mut outw = [0i16; 8];
            vst1q_s16(
                outw.as_mut_ptr(),
                vsubw_s8(vld1q_s16(w.as_ptr()), vld1_s8(n.as_ptr())),
            );
            let got = rvv::vsubw_s8(Int16x8::from_array(w), Int8x8::from_array(n));
            assert_eq!(got.to_array(), outw);
        }
    }
}
