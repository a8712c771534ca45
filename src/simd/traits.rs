use std::fmt;

use num::traits::{AsPrimitive, PrimInt, Signed, Unsigned};

use crate::simd::vector::Vector;

/// An integer lane type that both backends can operate on.
///
/// Lane arithmetic in this crate is defined over unbounded integers (the way the
/// Arm pseudo-code and the RVV specification both define it) and then wrapped or
/// saturated back into the lane type. `i128` is wide enough to hold every
/// intermediate produced by the catalog, including the sum of two `u64` lanes.
pub trait Element:
    PrimInt + AsPrimitive<i128> + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Element width in bits (the RVV SEW).
    const BITS: u32;

    const SIGNED: bool;

    /// All bits set. Tail-agnostic lanes of a register group are filled with this.
    const ONES: Self;

    /// Lane value as an exact (sign- or zero-extended) integer.
    #[inline(always)]
    fn widen_i128(self) -> i128 {
        self.as_()
    }

    /// Keeps the low `BITS` bits of `value`.
    fn wrapping_from_i128(value: i128) -> Self;

    /// Clamps `value` into `[MIN, MAX]` of the lane type.
    #[inline(always)]
    fn saturating_from_i128(value: i128) -> Self {
        let min = Self::min_value().widen_i128();
        let max = Self::max_value().widen_i128();
        Self::wrapping_from_i128(value.clamp(min, max))
    }
}

/// Lane types with a double-width counterpart of the same signedness.
pub trait Widen: Element {
    type Wide: Element;
}

/// Lane types with a half-width counterpart of the same signedness.
pub trait Narrow: Element {
    type Narrow: Element;
}

/// Marker for lanes the unsigned RVV forms (`vsaddu`, `vnsrl`, `vzext`, ...) accept.
pub trait UnsignedElement: Element + Unsigned {}

/// Marker for lanes the signed RVV forms (`vsadd`, `vnsra`, `vsext`, ...) accept.
pub trait SignedElement: Element + Signed {}

macro_rules! impl_element {
    ($($t:ty => $signed:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const ONES: Self = !0;

                #[inline(always)]
                fn wrapping_from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_element!(
    u8 => false, u16 => false, u32 => false, u64 => false,
    i8 => true, i16 => true, i32 => true, i64 => true,
);

macro_rules! impl_width_pair {
    ($($narrow:ty => $wide:ty),* $(,)?) => {
        $(
            impl Widen for $narrow {
                type Wide = $wide;
            }

            impl Narrow for $wide {
                type Narrow = $narrow;
            }
        )*
    };
}

impl_width_pair!(
    u8 => u16, u16 => u32, u32 => u64,
    i8 => i16, i16 => i32, i32 => i64,
);

impl UnsignedElement for u8 {}
impl UnsignedElement for u16 {}
impl UnsignedElement for u32 {}
impl UnsignedElement for u64 {}

impl SignedElement for i8 {}
impl SignedElement for i16 {}
impl SignedElement for i32 {}
impl SignedElement for i64 {}

/// The `{load, store}` half of a backend; the "operate" half is the backend's
/// module of translation units.
///
/// Both adapters take an explicit lane `count` and never touch memory past it.
pub trait SimdBackend: Copy + Send + Sync + 'static {
    /// Short tag used in reports (`"rvv"`, `"neon"`).
    const NAME: &'static str;

    /// Loads `count` lanes from `src`; lanes at or past `count` are zero.
    ///
    /// # Panics
    ///
    /// Panics if `count > N` or `count > src.len()`.
    fn load<T: Element, const N: usize>(src: &[T], count: usize) -> Vector<T, N>;

    /// Stores the first `count` lanes of `v` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N` or `count > dst.len()`.
    fn store<T: Element, const N: usize>(dst: &mut [T], v: Vector<T, N>, count: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_keeps_low_bits() {
        assert_eq!(u8::wrapping_from_i128(256 + 7), 7);
        assert_eq!(u16::wrapping_from_i128(-1), u16::MAX);
        assert_eq!(i8::wrapping_from_i128(128), i8::MIN);
        assert_eq!(i64::wrapping_from_i128(i64::MAX as i128 + 1), i64::MIN);
    }

    #[test]
    fn test_saturation_clamps_to_lane_range() {
        assert_eq!(u8::saturating_from_i128(300), u8::MAX);
        assert_eq!(u8::saturating_from_i128(-3), 0);
        assert_eq!(i16::saturating_from_i128(-40_000), i16::MIN);
        assert_eq!(u64::saturating_from_i128(u64::MAX as i128 * 2), u64::MAX);
        assert_eq!(i32::saturating_from_i128(12), 12);
    }

    #[test]
    fn test_widen_i128_extends_by_signedness() {
        assert_eq!(0xffu8.widen_i128(), 255);
        assert_eq!((-1i8).widen_i128(), -1);
        assert_eq!(u64::MAX.widen_i128(), 18_446_744_073_709_551_615);
    }

    #[test]
    fn test_element_constants() {
        assert_eq!(<u16 as Element>::BITS, 16);
        assert_eq!(<i32 as Element>::ONES, -1);
        assert_eq!(<u8 as Element>::ONES, 0xff);
        assert!(<i64 as Element>::SIGNED);
        assert!(!<u32 as Element>::SIGNED);
    }
}
