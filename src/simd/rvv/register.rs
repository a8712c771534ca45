//! Register groups of the emulated RVV machine.
//!
//! A `Vreg<T, VLMAX>` is one register group holding `VLMAX` elements of `T`,
//! where `VLMAX = VLEN * LMUL / SEW`. Widening from SEW to 2*SEW doubles LMUL and
//! keeps VLMAX, so widening and narrowing primitives map `Vreg<T, M>` to
//! `Vreg<T::Wide, M>` and back without changing `M`.
//!
//! Lanes at or past the active `vl` are tail-agnostic; the emulation fills them
//! with all ones, which is one of the two results RVV permits.

use std::fmt;

use crate::simd::{shape::Vl, traits::Element, vector::Vector};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vreg<T: Element, const VLMAX: usize>([T; VLMAX]);

/// Number of lanes a primitive touches: `vl`, clamped to VLMAX as `vsetvli` does.
#[inline(always)]
pub(crate) fn active_lanes<const VLMAX: usize>(vl: Vl) -> usize {
    vl.get().min(VLMAX)
}

impl<T: Element, const VLMAX: usize> Vreg<T, VLMAX> {
    pub const fn vlmax() -> usize {
        VLMAX
    }

    /// A group whose every lane is tail-agnostic.
    #[inline(always)]
    pub(crate) fn agnostic() -> Self {
        Self([T::ONES; VLMAX])
    }

    /// Lanes below `vl` from `f`, the rest tail-agnostic.
    #[inline(always)]
    pub(crate) fn build(vl: Vl, f: impl Fn(usize) -> T) -> Self {
        let active = active_lanes::<VLMAX>(vl);
        Self(std::array::from_fn(|i| if i < active { f(i) } else { T::ONES }))
    }

    /// Lanes below `vl` from `f`, the rest copied from `self` (tail-undisturbed).
    #[inline(always)]
    pub(crate) fn build_tu(self, vl: Vl, f: impl Fn(usize) -> T) -> Self {
        let active = active_lanes::<VLMAX>(vl);
        Self(std::array::from_fn(|i| if i < active { f(i) } else { self.0[i] }))
    }

    /// Copies the overlapping low lanes into a group of `H`; any extra lanes are agnostic.
    #[inline(always)]
    pub(crate) fn resize<const H: usize>(self) -> Vreg<T, H> {
        let mut out = Vreg::<T, H>::agnostic();
        let shared = VLMAX.min(H);
        out.0[..shared].copy_from_slice(&self.0[..shared]);
        out
    }

    #[inline(always)]
    pub fn lane(&self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Reads the low `N` lanes back as a NEON-shaped value.
    #[inline(always)]
    pub fn into_vector<const N: usize>(self) -> Vector<T, N> {
        assert!(N <= VLMAX, "{N} lanes do not fit a group of {VLMAX}");
        Vector::from_array(std::array::from_fn(|i| self.0[i]))
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Places the value in the low lanes of a register group, the way the C layer
    /// typedefs `uint16x4_t` to `vuint16m1_t`. The remaining lanes are tail-agnostic.
    #[inline(always)]
    pub fn into_reg<const VLMAX: usize>(self) -> Vreg<T, VLMAX> {
        assert!(N <= VLMAX, "{N} lanes do not fit a group of {VLMAX}");
        let lanes = self.as_slice();
        Vreg(std::array::from_fn(|i| if i < N { lanes[i] } else { T::ONES }))
    }
}

impl<T: Element, const VLMAX: usize> fmt::Debug for Vreg<T, VLMAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vreg<{}{}x{VLMAX}> {:?}", if T::SIGNED { 'i' } else { 'u' }, T::BITS, self.0)
    }
}

// Register group types for VLEN = 128, named after the RVV C types.
pub type VInt8MF2 = Vreg<i8, 8>;
pub type VInt8M1 = Vreg<i8, 16>;
pub type VInt16MF2 = Vreg<i16, 4>;
pub type VInt16M1 = Vreg<i16, 8>;
pub type VInt16M2 = Vreg<i16, 16>;
pub type VInt32MF2 = Vreg<i32, 2>;
pub type VInt32M1 = Vreg<i32, 4>;
pub type VInt32M2 = Vreg<i32, 8>;
pub type VInt64M1 = Vreg<i64, 2>;
pub type VInt64M2 = Vreg<i64, 4>;

pub type VUint8MF2 = Vreg<u8, 8>;
pub type VUint8M1 = Vreg<u8, 16>;
pub type VUint16MF2 = Vreg<u16, 4>;
pub type VUint16M1 = Vreg<u16, 8>;
pub type VUint16M2 = Vreg<u16, 16>;
pub type VUint32MF2 = Vreg<u32, 2>;
pub type VUint32M1 = Vreg<u32, 4>;
pub type VUint32M2 = Vreg<u32, 8>;
pub type VUint64M1 = Vreg<u64, 2>;
pub type VUint64M2 = Vreg<u64, 4>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::shape::{VLEN_16, VLEN_2, VLEN_4};
    use crate::simd::vector::Uint16x4;

    #[test]
    fn test_vlmax_follows_sew_and_lmul() {
        assert_eq!(VUint8M1::vlmax(), 16);
        assert_eq!(VUint16M1::vlmax(), 8);
        assert_eq!(VUint32M2::vlmax(), 8);
        assert_eq!(VUint64M1::vlmax(), 2);
        assert_eq!(VInt8MF2::vlmax(), 8);
    }

    #[test]
    fn test_into_reg_pads_with_agnostic_lanes() {
        let reg: VUint16M1 = Uint16x4::from_array([1, 2, 3, 4]).into_reg();
        assert_eq!(reg.as_slice(), &[1, 2, 3, 4, 0xffff, 0xffff, 0xffff, 0xffff]);
        assert_eq!(reg.into_vector::<4>(), Uint16x4::from_array([1, 2, 3, 4]));
    }

    #[test]
    fn test_build_respects_vl_and_clamps_to_vlmax() {
        let reg = VUint32M1::build(VLEN_2, |i| i as u32 + 10);
        assert_eq!(reg.as_slice(), &[10, 11, u32::MAX, u32::MAX]);

        let clamped = VUint32M1::build(VLEN_16, |i| i as u32);
        assert_eq!(clamped.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(active_lanes::<4>(VLEN_16), 4);
    }

    #[test]
    fn test_build_tu_keeps_tail() {
        let base = VUint16MF2::build(VLEN_4, |_| 7);
        let reg = base.build_tu(VLEN_2, |_| 1);
        assert_eq!(reg.as_slice(), &[1, 1, 7, 7]);
        assert_eq!(VUint16MF2::agnostic().as_slice(), &[u16::MAX; 4]);
    }

    #[test]
    fn test_resize_fills_new_lanes_as_agnostic() {
        let narrow = VUint16MF2::build(VLEN_4, |i| i as u16 + 1);
        let wide: VUint16M1 = narrow.resize();
        assert_eq!(wide.as_slice(), &[1, 2, 3, 4, u16::MAX, u16::MAX, u16::MAX, u16::MAX]);

        let back: VUint16MF2 = wide.resize();
        assert_eq!(back, narrow);
    }

    #[test]
    #[should_panic(expected = "do not fit")]
    fn test_into_vector_rejects_oversized_shape() {
        let reg = VUint64M1::agnostic();
        let _ = reg.into_vector::<4>();
    }
}
