//! Fixed-lane vector values shared by every backend.
//!
//! `Vector<T, N>` is the semantic value a translation unit consumes and produces:
//! exactly `N` lanes of `T`, immutable, with no notion of the register that holds
//! it on any particular backend. The NEON type names are provided as aliases.

use std::fmt;

use crate::simd::{
    shape::LaneShape,
    traits::{Element, SimdBackend},
};

/// `N` lanes of `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T: Element, const N: usize>([T; N]);

impl<T: Element, const N: usize> Vector<T, N> {
    pub const LANES: usize = N;

    pub const SHAPE: LaneShape = LaneShape::new(T::BITS, T::SIGNED, N);

    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Builds a vector from exactly `N` lanes.
    ///
    /// # Panics
    ///
    /// Panics if `lanes.len() != N`.
    pub fn from_slice(lanes: &[T]) -> Self {
        assert_eq!(lanes.len(), N, "{} needs exactly {N} lanes", Self::SHAPE);
        Self(std::array::from_fn(|i| lanes[i]))
    }

    #[inline(always)]
    pub fn lane(&self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn map<U: Element>(self, f: impl Fn(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    #[inline(always)]
    pub(crate) fn zip_map<U: Element, V: Element>(
        self,
        rhs: Vector<U, N>,
        f: impl Fn(T, U) -> V,
    ) -> Vector<V, N> {
        Vector(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Element, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", Self::SHAPE, self.0)
    }
}

/// Type-erased view of a `Vector<T, N>` used by the harness, which handles every
/// shape through `i128` lanes.
pub trait LaneVector: Copy + fmt::Debug + Send + Sync + 'static {
    type Lane: Element;

    const SHAPE: LaneShape;

    fn lanes(&self) -> &[Self::Lane];

    /// Loads through backend `B`'s load adapter.
    fn load_with<B: SimdBackend>(src: &[Self::Lane], count: usize) -> Self;

    /// Stores through backend `B`'s store adapter.
    fn store_with<B: SimdBackend>(self, dst: &mut [Self::Lane], count: usize);

    /// Lane values as exact integers.
    fn to_i128_lanes(&self) -> Vec<i128> {
        self.lanes().iter().map(|x| x.widen_i128()).collect()
    }

    /// Converts exact integers to lanes of this type, or `None` if a value is
    /// out of range.
    fn lanes_from_i128(values: &[i128]) -> Option<Vec<Self::Lane>> {
        let (min, max) = (Self::SHAPE.min_value(), Self::SHAPE.max_value());
        values
            .iter()
            .map(|&v| (min..=max).contains(&v).then(|| <Self::Lane as Element>::wrapping_from_i128(v)))
            .collect()
    }
}

impl<T: Element, const N: usize> LaneVector for Vector<T, N> {
    type Lane = T;

    const SHAPE: LaneShape = LaneShape::new(T::BITS, T::SIGNED, N);

    #[inline(always)]
    fn lanes(&self) -> &[T] {
        &self.0
    }

    #[inline(always)]
    fn load_with<B: SimdBackend>(src: &[T], count: usize) -> Self {
        B::load::<T, N>(src, count)
    }

    #[inline(always)]
    fn store_with<B: SimdBackend>(self, dst: &mut [T], count: usize) {
        B::store::<T, N>(dst, self, count)
    }
}

// 64-bit (D register) shapes.
pub type Int8x8 = Vector<i8, 8>;
pub type Int16x4 = Vector<i16, 4>;
pub type Int32x2 = Vector<i32, 2>;
pub type Int64x1 = Vector<i64, 1>;
pub type Uint8x8 = Vector<u8, 8>;
pub type Uint16x4 = Vector<u16, 4>;
pub type Uint32x2 = Vector<u32, 2>;
pub type Uint64x1 = Vector<u64, 1>;

// 128-bit (Q register) shapes.
pub type Int8x16 = Vector<i8, 16>;
pub type Int16x8 = Vector<i16, 8>;
pub type Int32x4 = Vector<i32, 4>;
pub type Int64x2 = Vector<i64, 2>;
pub type Uint8x16 = Vector<u8, 16>;
pub type Uint16x8 = Vector<u16, 8>;
pub type Uint32x4 = Vector<u32, 4>;
pub type Uint64x2 = Vector<u64, 2>;
