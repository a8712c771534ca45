//! Fixed-point rounding for the averaging and clipping primitives.

/// RVV fixed-point rounding mode (`vxrm`).
///
/// Passed explicitly to every primitive that rounds, instead of living in a
/// CSR, so that translation units stay free of hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vxrm {
    /// Round to nearest, ties up.
    #[default]
    Rnu,
    /// Round to nearest, ties to even.
    Rne,
    /// Round down (truncate).
    Rdn,
    /// Round to odd ("jam").
    Rod,
}

impl Vxrm {
    /// Rounding increment `r` for `roundoff(v, d) = (v >> d) + r`.
    pub fn increment(self, v: i128, d: u32) -> i128 {
        if d == 0 {
            return 0;
        }

        let bit = |i: u32| (v >> i) & 1;
        let low_bits_set = |n: u32| n > 0 && v & ((1i128 << n) - 1) != 0;

        match self {
            Vxrm::Rnu => bit(d - 1),
            Vxrm::Rne => bit(d - 1) & i128::from(low_bits_set(d - 1) || bit(d) == 1),
            Vxrm::Rdn => 0,
            Vxrm::Rod => i128::from(bit(d) == 0 && low_bits_set(d)),
        }
    }

    /// `v` shifted right by `d` with this rounding applied, at unbounded precision.
    #[inline(always)]
    pub fn shift_right(self, v: i128, d: u32) -> i128 {
        (v >> d) + self.increment(v, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_nearest_up() {
        assert_eq!(Vxrm::Rnu.shift_right(5, 1), 3);
        assert_eq!(Vxrm::Rnu.shift_right(4, 1), 2);
        assert_eq!(Vxrm::Rnu.shift_right(-3, 1), -1);
        assert_eq!(Vxrm::Rnu.shift_right(0x17f, 8), 1);
        assert_eq!(Vxrm::Rnu.shift_right(0x180, 8), 2);
    }

    #[test]
    fn test_round_to_nearest_even() {
        assert_eq!(Vxrm::Rne.shift_right(5, 1), 2);
        assert_eq!(Vxrm::Rne.shift_right(7, 1), 4);
        assert_eq!(Vxrm::Rne.shift_right(0b1011, 2), 3);
    }

    #[test]
    fn test_round_down_and_odd() {
        assert_eq!(Vxrm::Rdn.shift_right(7, 1), 3);
        assert_eq!(Vxrm::Rdn.shift_right(-7, 1), -4);
        assert_eq!(Vxrm::Rod.shift_right(4, 1), 2);
        assert_eq!(Vxrm::Rod.shift_right(5, 1), 3);
        assert_eq!(Vxrm::Rod.shift_right(7, 1), 3);
    }

    #[test]
    fn test_zero_shift_never_rounds() {
        for mode in [Vxrm::Rnu, Vxrm::Rne, Vxrm::Rdn, Vxrm::Rod] {
            assert_eq!(mode.shift_right(300, 0), 300);
        }
    }
}
