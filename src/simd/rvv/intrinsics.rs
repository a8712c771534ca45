//! Emulated RVV intrinsics.
//!
//! Names, operand order and semantics follow the RVV C intrinsics
//! (`__riscv_vwaddu_vv_u32m2(a, b, vl)` becomes `vwaddu_vv::<u16, 8>(a, b, vl)`).
//! Element type and LMUL are carried by the `Vreg` type instead of the name
//! suffix. Every primitive takes the effective length explicitly; results are
//! tail-agnostic past `vl` unless the name ends in `_tu`.
//!
//! Arithmetic is evaluated on exact `i128` lane values and then wrapped,
//! saturated or rounded exactly as the RVV specification describes.

use crate::simd::{
    rvv::{
        fixed_point::Vxrm,
        register::{active_lanes, Vreg},
    },
    shape::Vl,
    traits::{Element, Narrow, SignedElement, UnsignedElement, Widen},
};

#[inline(always)]
fn lanewise<T: Element, U: Element, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
    f: impl Fn(i128, i128) -> U,
) -> Vreg<U, M> {
    Vreg::build(vl, |i| f(a.lane(i).widen_i128(), b.lane(i).widen_i128()))
}

/// Shift amount of a narrowing shift: the low `lg2(2*SEW)` bits of the operand.
#[inline(always)]
fn narrowing_shift<W: Narrow>(shift: usize) -> u32 {
    (shift & (W::BITS as usize - 1)) as u32
}

// --- Unit-stride load / store / move ---

/// `vle<sew>_v`: loads `vl` elements from `src`.
///
/// # Panics
///
/// Panics if `src` holds fewer than `min(vl, VLMAX)` elements.
#[inline(always)]
pub fn vle_v<T: Element, const M: usize>(src: &[T], vl: Vl) -> Vreg<T, M> {
    let active = active_lanes::<M>(vl);
    assert!(src.len() >= active, "vle: {active} elements requested, {} available", src.len());
    Vreg::build(vl, |i| src[i])
}

/// `vle<sew>_v_tu`: loads `vl` elements, keeping the tail of `dest`.
#[inline(always)]
pub fn vle_v_tu<T: Element, const M: usize>(dest: Vreg<T, M>, src: &[T], vl: Vl) -> Vreg<T, M> {
    let active = active_lanes::<M>(vl);
    assert!(src.len() >= active, "vle: {active} elements requested, {} available", src.len());
    dest.build_tu(vl, |i| src[i])
}

/// `vse<sew>_v`: stores the first `vl` elements of `v` into `dst`.
///
/// # Panics
///
/// Panics if `dst` holds fewer than `min(vl, VLMAX)` elements.
#[inline(always)]
pub fn vse_v<T: Element, const M: usize>(dst: &mut [T], v: Vreg<T, M>, vl: Vl) {
    let active = active_lanes::<M>(vl);
    assert!(dst.len() >= active, "vse: {active} elements requested, {} available", dst.len());
    dst[..active].copy_from_slice(&v.as_slice()[..active]);
}

/// `vmv_v_x`: broadcasts `x` to the first `vl` elements.
#[inline(always)]
pub fn vmv_v_x<T: Element, const M: usize>(x: T, vl: Vl) -> Vreg<T, M> {
    Vreg::build(vl, |_| x)
}

// --- Single-width integer add / subtract ---

#[inline(always)]
pub fn vadd_vv<T: Element, const M: usize>(a: Vreg<T, M>, b: Vreg<T, M>, vl: Vl) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(x + y))
}

#[inline(always)]
pub fn vadd_vx<T: Element, const M: usize>(a: Vreg<T, M>, x: T, vl: Vl) -> Vreg<T, M> {
    let x = x.widen_i128();
    Vreg::build(vl, |i| T::wrapping_from_i128(a.lane(i).widen_i128() + x))
}

#[inline(always)]
pub fn vsub_vv<T: Element, const M: usize>(a: Vreg<T, M>, b: Vreg<T, M>, vl: Vl) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(x - y))
}

#[inline(always)]
pub fn vsub_vx<T: Element, const M: usize>(a: Vreg<T, M>, x: T, vl: Vl) -> Vreg<T, M> {
    let x = x.widen_i128();
    Vreg::build(vl, |i| T::wrapping_from_i128(a.lane(i).widen_i128() - x))
}

// --- Single-width saturating add / subtract ---

#[inline(always)]
pub fn vsaddu_vv<T: UnsignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::saturating_from_i128(x + y))
}

#[inline(always)]
pub fn vsadd_vv<T: SignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::saturating_from_i128(x + y))
}

#[inline(always)]
pub fn vssubu_vv<T: UnsignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::saturating_from_i128(x - y))
}

#[inline(always)]
pub fn vssub_vv<T: SignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::saturating_from_i128(x - y))
}

// --- Single-width averaging add / subtract ---

/// `vaaddu_vv`: `roundoff_unsigned(a + b, 1)` with the sum held at SEW+1 bits.
#[inline(always)]
pub fn vaaddu_vv<T: UnsignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(vxrm.shift_right(x + y, 1)))
}

#[inline(always)]
pub fn vaadd_vv<T: SignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(vxrm.shift_right(x + y, 1)))
}

#[inline(always)]
pub fn vasubu_vv<T: UnsignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(vxrm.shift_right(x - y, 1)))
}

#[inline(always)]
pub fn vasub_vv<T: SignedElement, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<T, M> {
    lanewise(a, b, vl, |x, y| T::wrapping_from_i128(vxrm.shift_right(x - y, 1)))
}

// --- Widening add / subtract (2*SEW = SEW op SEW) ---

#[inline(always)]
pub fn vwaddu_vv<T: UnsignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    lanewise(a, b, vl, |x, y| <T::Wide as Element>::wrapping_from_i128(x + y))
}

#[inline(always)]
pub fn vwadd_vv<T: SignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    lanewise(a, b, vl, |x, y| <T::Wide as Element>::wrapping_from_i128(x + y))
}

#[inline(always)]
pub fn vwsubu_vv<T: UnsignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    lanewise(a, b, vl, |x, y| <T::Wide as Element>::wrapping_from_i128(x - y))
}

#[inline(always)]
pub fn vwsub_vv<T: SignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    b: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    lanewise(a, b, vl, |x, y| <T::Wide as Element>::wrapping_from_i128(x - y))
}

/// `vwsubu_vx`: `zext(a) - zext(x)` at 2*SEW. With `x = 0` this is a zero-extension.
#[inline(always)]
pub fn vwsubu_vx<T: UnsignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    x: T,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    let x = x.widen_i128();
    Vreg::build(vl, |i| <T::Wide as Element>::wrapping_from_i128(a.lane(i).widen_i128() - x))
}

// --- Integer extension ---

#[inline(always)]
pub fn vzext_vf2<T: UnsignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    Vreg::build(vl, |i| <T::Wide as Element>::wrapping_from_i128(a.lane(i).widen_i128()))
}

#[inline(always)]
pub fn vsext_vf2<T: SignedElement + Widen, const M: usize>(
    a: Vreg<T, M>,
    vl: Vl,
) -> Vreg<T::Wide, M> {
    Vreg::build(vl, |i| <T::Wide as Element>::wrapping_from_i128(a.lane(i).widen_i128()))
}

// --- Narrowing shifts (SEW = 2*SEW >> x) ---

#[inline(always)]
pub fn vnsrl_wx<W: UnsignedElement + Narrow, const M: usize>(
    a: Vreg<W, M>,
    shift: usize,
    vl: Vl,
) -> Vreg<W::Narrow, M> {
    let shift = narrowing_shift::<W>(shift);
    Vreg::build(vl, |i| <W::Narrow as Element>::wrapping_from_i128(a.lane(i).widen_i128() >> shift))
}

#[inline(always)]
pub fn vnsra_wx<W: SignedElement + Narrow, const M: usize>(
    a: Vreg<W, M>,
    shift: usize,
    vl: Vl,
) -> Vreg<W::Narrow, M> {
    let shift = narrowing_shift::<W>(shift);
    Vreg::build(vl, |i| <W::Narrow as Element>::wrapping_from_i128(a.lane(i).widen_i128() >> shift))
}

// --- Narrowing fixed-point clip ---

/// `vnclipu_wx`: rounds `a >> shift` by `vxrm`, then saturates to the narrow type.
#[inline(always)]
pub fn vnclipu_wx<W: UnsignedElement + Narrow, const M: usize>(
    a: Vreg<W, M>,
    shift: usize,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<W::Narrow, M> {
    let shift = narrowing_shift::<W>(shift);
    Vreg::build(vl, |i| {
        <W::Narrow as Element>::saturating_from_i128(vxrm.shift_right(a.lane(i).widen_i128(), shift))
    })
}

#[inline(always)]
pub fn vnclip_wx<W: SignedElement + Narrow, const M: usize>(
    a: Vreg<W, M>,
    shift: usize,
    vxrm: Vxrm,
    vl: Vl,
) -> Vreg<W::Narrow, M> {
    let shift = narrowing_shift::<W>(shift);
    Vreg::build(vl, |i| {
        <W::Narrow as Element>::saturating_from_i128(vxrm.shift_right(a.lane(i).widen_i128(), shift))
    })
}

// --- LMUL changes (register reinterpretation, no vl) ---

/// `vlmul_trunc`: the low `H` elements of a group of `M`.
#[inline(always)]
pub fn vlmul_trunc<T: Element, const M: usize, const H: usize>(a: Vreg<T, M>) -> Vreg<T, H> {
    assert!(H <= M, "vlmul_trunc cannot grow a group ({M} -> {H})");
    a.resize()
}

/// `vlmul_ext`: a group of `H` whose low `M` elements are `a`; the rest are undefined.
#[inline(always)]
pub fn vlmul_ext<T: Element, const M: usize, const H: usize>(a: Vreg<T, M>) -> Vreg<T, H> {
    assert!(H >= M, "vlmul_ext cannot shrink a group ({M} -> {H})");
    a.resize()
}
