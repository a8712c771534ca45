//! Lane-shape descriptors and the effective-length tokens bound to them.
//!
//! A scalable vector instruction processes however many lanes its `vl` operand
//! says. To make such an instruction behave like a fixed-width NEON instruction
//! every primitive call receives one of the [`Vl`] tokens below, equal to the
//! lane count of the NEON shape being emulated. Passing the wrong token does not
//! fail: it silently processes the wrong number of lanes. The cross-backend tests
//! are what catch it.

use std::fmt;

use serde::Serialize;

/// Register width of the emulated RVV machine, in bits.
pub const VLEN_BITS: usize = 128;

/// Largest element width the emulated machine supports, in bits.
pub const ELEN_BITS: usize = 64;

/// Effective-length token: the exact number of lanes a primitive must touch.
///
/// Only the `VLEN_*` constants exist; there is no public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vl(usize);

impl Vl {
    /// Length requested from an application vector length, as `vsetvl` with
    /// `avl = count`. Reserved for the load/store adapters, whose lane count
    /// comes from the caller rather than from a shape.
    #[inline(always)]
    pub(crate) const fn from_avl(count: usize) -> Self {
        Self(count)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Vl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VLEN_{}", self.0)
    }
}

pub const VLEN_1: Vl = Vl(1);
pub const VLEN_2: Vl = Vl(2);
pub const VLEN_4: Vl = Vl(4);
pub const VLEN_8: Vl = Vl(8);
pub const VLEN_16: Vl = Vl(16);

/// (element width, signedness, lane count) of a vector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LaneShape {
    pub bits: u32,
    pub signed: bool,
    pub lanes: usize,
}

impl LaneShape {
    pub const fn new(bits: u32, signed: bool, lanes: usize) -> Self {
        Self {
            bits,
            signed,
            lanes,
        }
    }

    /// Total width of the value in bits.
    pub const fn register_bits(&self) -> usize {
        self.bits as usize * self.lanes
    }

    /// `true` for the 64-bit ("D") and 128-bit ("Q") NEON register widths.
    pub const fn is_neon_register(&self) -> bool {
        matches!(self.register_bits(), 64 | 128)
    }

    /// The effective-length token for this shape's lane count.
    pub const fn vl(&self) -> Option<Vl> {
        match self.lanes {
            1 => Some(VLEN_1),
            2 => Some(VLEN_2),
            4 => Some(VLEN_4),
            8 => Some(VLEN_8),
            16 => Some(VLEN_16),
            _ => None,
        }
    }

    pub fn min_value(&self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits - 1))
        } else {
            0
        }
    }

    pub fn max_value(&self) -> i128 {
        if self.signed {
            (1i128 << (self.bits - 1)) - 1
        } else {
            (1i128 << self.bits) - 1
        }
    }

    /// Reinterprets the low `bits` bits of `value` as a lane of this shape.
    pub fn wrap(&self, value: i128) -> i128 {
        let modulus = 1i128 << self.bits;
        let low = value.rem_euclid(modulus);
        if self.signed && low > self.max_value() {
            low - modulus
        } else {
            low
        }
    }

    /// NEON suffix of the lane type, e.g. `u16`, `s8`.
    pub fn suffix(&self) -> String {
        format!("{}{}", if self.signed { 's' } else { 'u' }, self.bits)
    }
}

impl fmt::Display for LaneShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { "int" } else { "uint" };
        write!(f, "{sign}{}x{}", self.bits, self.lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_lane_counts() {
        for lanes in [1, 2, 4, 8, 16] {
            let shape = LaneShape::new(8, false, lanes);
            assert_eq!(shape.vl().map(Vl::get), Some(lanes));
        }
        assert_eq!(LaneShape::new(8, false, 3).vl(), None);
        assert_eq!(LaneShape::new(8, false, 32).vl(), None);
    }

    #[test]
    fn test_register_widths() {
        assert!(LaneShape::new(16, false, 4).is_neon_register());
        assert!(LaneShape::new(8, true, 16).is_neon_register());
        assert!(LaneShape::new(64, true, 1).is_neon_register());
        assert!(!LaneShape::new(32, false, 8).is_neon_register());
    }

    #[test]
    fn test_bounds_and_wrap() {
        let s8 = LaneShape::new(8, true, 8);
        assert_eq!(s8.min_value(), -128);
        assert_eq!(s8.max_value(), 127);
        assert_eq!(s8.wrap(128), -128);
        assert_eq!(s8.wrap(-129), 127);

        let u64x2 = LaneShape::new(64, false, 2);
        assert_eq!(u64x2.max_value(), u64::MAX as i128);
        assert_eq!(u64x2.wrap(-1), u64::MAX as i128);
    }

    #[test]
    fn test_display() {
        assert_eq!(LaneShape::new(16, false, 4).to_string(), "uint16x4");
        assert_eq!(LaneShape::new(8, true, 16).to_string(), "int8x16");
        assert_eq!(LaneShape::new(32, true, 2).suffix(), "s32");
        assert_eq!(VLEN_8.to_string(), "VLEN_8");
    }
}
