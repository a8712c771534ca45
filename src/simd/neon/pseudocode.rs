//! Lane semantics of the Advanced SIMD integer instructions, written the way
//! the Arm ARM pseudo-code states them: operands are read as unbounded
//! integers (`Int(x, unsigned)`), combined exactly, and the result is either
//! truncated to the destination width or passed through `SatQ`.
//!
//! Every function here is generic over the lane type and the lane count, so a
//! single definition covers the D and Q forms and every element size.

use crate::simd::{
    traits::{Element, Narrow, Widen},
    vector::Vector,
};

#[inline(always)]
fn exact<T: Element>(x: T) -> i128 {
    x.widen_i128()
}

/// `ADD`: wraps at the element size.
#[inline(always)]
pub fn add<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::wrapping_from_i128(exact(x) + exact(y)))
}

/// `SUB`: wraps at the element size.
#[inline(always)]
pub fn sub<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::wrapping_from_i128(exact(x) - exact(y)))
}

/// `SQADD` / `UQADD`: the exact sum passed through `SatQ`.
#[inline(always)]
pub fn saturating_add<T: Element, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::saturating_from_i128(exact(x) + exact(y)))
}

/// `SQSUB` / `UQSUB`.
#[inline(always)]
pub fn saturating_sub<T: Element, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::saturating_from_i128(exact(x) - exact(y)))
}

/// `SHADD` / `UHADD`: `(a + b) >> 1`, arithmetic shift of the exact sum.
#[inline(always)]
pub fn halving_add<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::wrapping_from_i128((exact(x) + exact(y)) >> 1))
}

/// `SRHADD` / `URHADD`: `(a + b + 1) >> 1`.
#[inline(always)]
pub fn rounding_halving_add<T: Element, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::wrapping_from_i128((exact(x) + exact(y) + 1) >> 1))
}

/// `SHSUB` / `UHSUB`: `(a - b) >> 1`; the low bits of a negative difference
/// are kept for the unsigned form.
#[inline(always)]
pub fn halving_sub<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::wrapping_from_i128((exact(x) - exact(y)) >> 1))
}

/// `SADDL` / `UADDL`: both operands extended, summed at double width.
#[inline(always)]
pub fn add_long<T: Widen, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T::Wide, N> {
    a.zip_map(b, |x, y| <T::Wide as Element>::wrapping_from_i128(exact(x) + exact(y)))
}

/// `SSUBL` / `USUBL`: wraps at double width.
#[inline(always)]
pub fn sub_long<T: Widen, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T::Wide, N> {
    a.zip_map(b, |x, y| <T::Wide as Element>::wrapping_from_i128(exact(x) - exact(y)))
}

/// `SADDW` / `UADDW`: `a + extend(b)` at the width of `a`.
#[inline(always)]
pub fn add_wide<W: Narrow, const N: usize>(a: Vector<W, N>, b: Vector<W::Narrow, N>) -> Vector<W, N> {
    a.zip_map(b, |x, y| W::wrapping_from_i128(exact(x) + exact(y)))
}

/// `SSUBW` / `USUBW`: `a - extend(b)` at the width of `a`.
#[inline(always)]
pub fn sub_wide<W: Narrow, const N: usize>(a: Vector<W, N>, b: Vector<W::Narrow, N>) -> Vector<W, N> {
    a.zip_map(b, |x, y| W::wrapping_from_i128(exact(x) - exact(y)))
}

/// Shared body of `ADDHN`, `SUBHN`, `RADDHN` and `RSUBHN`.
///
/// `result = op(a, b) + round_const` is held in a `2*esize` bit-vector, so it
/// wraps before `result<2*esize-1:esize>` is extracted.
#[inline(always)]
fn high_narrow<W: Narrow, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
    round: bool,
    op: impl Fn(i128, i128) -> i128,
) -> Vector<W::Narrow, N> {
    let esize = <W::Narrow as Element>::BITS;
    let round_const = if round { 1i128 << (esize - 1) } else { 0 };
    a.zip_map(b, |x, y| {
        let result = W::wrapping_from_i128(op(exact(x), exact(y)) + round_const);
        <W::Narrow as Element>::wrapping_from_i128(exact(result) >> esize)
    })
}

/// `ADDHN`: high half of the wrapping sum.
#[inline(always)]
pub fn add_high_narrow<W: Narrow, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Vector<W::Narrow, N> {
    high_narrow(a, b, false, |x, y| x + y)
}

/// `RADDHN`: as `ADDHN` with `1 << (esize - 1)` added first.
#[inline(always)]
pub fn rounding_add_high_narrow<W: Narrow, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Vector<W::Narrow, N> {
    high_narrow(a, b, true, |x, y| x + y)
}

/// `SUBHN`: high half of the wrapping difference.
#[inline(always)]
pub fn sub_high_narrow<W: Narrow, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Vector<W::Narrow, N> {
    high_narrow(a, b, false, |x, y| x - y)
}

/// `RSUBHN`: as `SUBHN` with `1 << (esize - 1)` added first.
#[inline(always)]
pub fn rounding_sub_high_narrow<W: Narrow, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Vector<W::Narrow, N> {
    high_narrow(a, b, true, |x, y| x - y)
}

/// `XTN`: the low half of each lane.
#[inline(always)]
pub fn narrow<W: Narrow, const N: usize>(a: Vector<W, N>) -> Vector<W::Narrow, N> {
    a.map(|x| <W::Narrow as Element>::wrapping_from_i128(exact(x)))
}

/// `SQXTN` / `UQXTN`: each lane saturated into the half-width range.
#[inline(always)]
pub fn saturating_narrow<W: Narrow, const N: usize>(a: Vector<W, N>) -> Vector<W::Narrow, N> {
    a.map(|x| <W::Narrow as Element>::saturating_from_i128(exact(x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::vector::{Int16x8, Int8x8, Uint16x8, Uint32x2, Uint64x2, Uint8x8};

    #[test]
    fn test_halving_forms() {
        let a = Uint8x8::from_array([255, 0, 1, 7, 0, 0, 0, 0]);
        let b = Uint8x8::from_array([255, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(&halving_add(a, b).to_array()[..4], &[255, 0, 1, 3]);
        assert_eq!(&rounding_halving_add(a, b).to_array()[..4], &[255, 1, 1, 4]);
        assert_eq!(&halving_sub(a, b).to_array()[..4], &[0, 255, 0, 3]);
    }

    #[test]
    fn test_long_and_wide() {
        let a = Uint32x2::from_array([u32::MAX, 0]);
        let b = Uint32x2::from_array([1, 1]);
        assert_eq!(add_long(a, b).to_array(), [1u64 << 32, 1]);
        assert_eq!(sub_long(a, b).to_array(), [u32::MAX as u64 - 1, u64::MAX]);

        let w = Uint64x2::from_array([0, 10]);
        assert_eq!(sub_wide(w, b).to_array(), [u64::MAX, 9]);
        assert_eq!(add_wide(w, a).to_array(), [u32::MAX as u64, 10]);
    }

    #[test]
    fn test_high_narrow_wraps_before_extracting() {
        let a = Uint16x8::from_array([65535, 0x0180, 0, 0, 0, 0, 0, 0]);
        let b = Uint16x8::from_array([1, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(&rounding_sub_high_narrow(a, b).to_array()[..3], &[0, 2, 0]);
        assert_eq!(&sub_high_narrow(a, b).to_array()[..3], &[255, 1, 255]);
        assert_eq!(&add_high_narrow(a, b).to_array()[..3], &[0, 1, 0]);
        assert_eq!(&rounding_add_high_narrow(a, b).to_array()[..3], &[0, 2, 0]);
    }

    #[test]
    fn test_narrowing_moves() {
        let a = Int16x8::from_array([300, -300, 127, -128, 128, -129, 0, -1]);
        let expected: Int8x8 = Int8x8::from_array([44, -44, 127, -128, -128, 127, 0, -1]);
        assert_eq!(narrow(a), expected);
        assert_eq!(
            saturating_narrow(a).to_array(),
            [127, -128, 127, -128, 127, -128, 0, -1]
        );
    }
}
