//! Registry of every translation unit, with a type-erased kernel per backend.
//!
//! Translation units are resolved statically by their callers; this table only
//! exists so the harness can address them by name. Each kernel performs the
//! full `load -> unit -> store` sequence through its backend's adapters on
//! `i128` lane values.

use std::{fmt, hint::black_box};

use serde::Serialize;

use crate::{
    error::{shape_error, unknown_operation, Error, Result},
    harness::{performance::sample, BackendKind},
    simd::{
        neon::{self, Neon},
        rvv::{self, Rvv},
        shape::LaneShape,
        traits::{Element, SimdBackend},
        vector::*,
    },
};

/// Type-erased `load -> unit -> store`. `None` when the inputs do not fit the
/// unit's signature.
pub type Kernel = fn(&[&[i128]]) -> Option<Vec<i128>>;

/// Type-erased timing of the unit call alone: loads once, then returns one
/// nanosecond sample per timed call after `warmup` untimed ones.
pub type UnitTimer = fn(&[&[i128]], usize, usize) -> Option<Vec<f64>>;

/// A translation unit viewed as a function pointer, runnable on any backend.
pub trait Unit: Copy {
    fn run<B: SimdBackend>(self, inputs: &[&[i128]]) -> Option<Vec<i128>>;

    fn time<B: SimdBackend>(
        self,
        inputs: &[&[i128]],
        iterations: usize,
        warmup: usize,
    ) -> Option<Vec<f64>>;
}

fn load<B: SimdBackend, X: LaneVector>(values: &[i128]) -> Option<X> {
    let lanes = X::lanes_from_i128(values)?;
    (lanes.len() == X::SHAPE.lanes).then(|| X::load_with::<B>(&lanes, X::SHAPE.lanes))
}

fn store<B: SimdBackend, R: LaneVector>(result: R) -> Vec<i128> {
    let mut out: Vec<R::Lane> = vec![Default::default(); R::SHAPE.lanes];
    result.store_with::<B>(&mut out, R::SHAPE.lanes);
    out.iter().map(|lane| lane.widen_i128()).collect()
}

impl<X: LaneVector, R: LaneVector> Unit for fn(X) -> R {
    #[inline]
    fn run<B: SimdBackend>(self, inputs: &[&[i128]]) -> Option<Vec<i128>> {
        let [a] = inputs else { return None };
        let a = load::<B, X>(a)?;
        Some(store::<B, R>(self(a)))
    }

    fn time<B: SimdBackend>(
        self,
        inputs: &[&[i128]],
        iterations: usize,
        warmup: usize,
    ) -> Option<Vec<f64>> {
        let [a] = inputs else { return None };
        let a = load::<B, X>(a)?;
        Some(sample(iterations, warmup, || {
            black_box(self(black_box(a)));
        }))
    }
}

impl<X: LaneVector, Y: LaneVector, R: LaneVector> Unit for fn(X, Y) -> R {
    #[inline]
    fn run<B: SimdBackend>(self, inputs: &[&[i128]]) -> Option<Vec<i128>> {
        let [a, b] = inputs else { return None };
        let a = load::<B, X>(a)?;
        let b = load::<B, Y>(b)?;
        Some(store::<B, R>(self(a, b)))
    }

    fn time<B: SimdBackend>(
        self,
        inputs: &[&[i128]],
        iterations: usize,
        warmup: usize,
    ) -> Option<Vec<f64>> {
        let [a, b] = inputs else { return None };
        let a = load::<B, X>(a)?;
        let b = load::<B, Y>(b)?;
        Some(sample(iterations, warmup, || {
            black_box(self(black_box(a), black_box(b)));
        }))
    }
}

/// Operation families of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Add,
    Sub,
    SaturatingAdd,
    SaturatingSub,
    HalvingAdd,
    RoundingHalvingAdd,
    HalvingSub,
    AddLong,
    SubLong,
    AddWide,
    SubWide,
    AddHighNarrow,
    SubHighNarrow,
    RoundingAddHighNarrow,
    RoundingSubHighNarrow,
    Narrow,
    SaturatingNarrow,
}

impl Family {
    pub fn description(self) -> &'static str {
        match self {
            Family::Add => "wrapping add",
            Family::Sub => "wrapping subtract",
            Family::SaturatingAdd => "saturating add",
            Family::SaturatingSub => "saturating subtract",
            Family::HalvingAdd => "(a + b) >> 1 at double width",
            Family::RoundingHalvingAdd => "(a + b + 1) >> 1 at double width",
            Family::HalvingSub => "(a - b) >> 1 at double width",
            Family::AddLong => "widen both operands, add",
            Family::SubLong => "widen both operands, subtract",
            Family::AddWide => "wide + extend(narrow)",
            Family::SubWide => "wide - extend(narrow)",
            Family::AddHighNarrow => "high half of wrapping sum",
            Family::SubHighNarrow => "high half of wrapping difference",
            Family::RoundingAddHighNarrow => "rounded high half of wrapping sum",
            Family::RoundingSubHighNarrow => "rounded high half of wrapping difference",
            Family::Narrow => "truncate to half width",
            Family::SaturatingNarrow => "saturate to half width",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One catalog entry: a translation unit and its lane shapes.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub family: Family,
    pub inputs: &'static [LaneShape],
    pub output: LaneShape,
    rvv: Kernel,
    neon: Kernel,
    rvv_timer: UnitTimer,
    neon_timer: UnitTimer,
}

impl Operation {
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    pub fn kernel(&self, backend: BackendKind) -> Kernel {
        match backend {
            BackendKind::Rvv => self.rvv,
            BackendKind::Neon => self.neon,
        }
    }

    pub fn unit_timer(&self, backend: BackendKind) -> UnitTimer {
        match backend {
            BackendKind::Rvv => self.rvv_timer,
            BackendKind::Neon => self.neon_timer,
        }
    }

    /// `uint16x8, uint16x8 -> uint8x8`
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(LaneShape::to_string).collect();
        format!("{} -> {}", inputs.join(", "), self.output)
    }

    /// Checks input count, lane counts and lane ranges against the signature.
    pub fn check_inputs(&self, inputs: &[Vec<i128>]) -> Result<()> {
        if inputs.len() != self.arity() {
            return Err(shape_error(
                self.name,
                format!(
                    "expected {} input vector(s), found {}",
                    self.arity(),
                    inputs.len()
                ),
            ));
        }

        for (index, (row, shape)) in inputs.iter().zip(self.inputs).enumerate() {
            if row.len() != shape.lanes {
                return Err(Error::LaneCount {
                    operation: self.name.to_string(),
                    input: index,
                    expected: shape.lanes,
                    found: row.len(),
                });
            }
            if let Some(value) = row
                .iter()
                .find(|&&v| !(shape.min_value()..=shape.max_value()).contains(&v))
            {
                return Err(shape_error(
                    self.name,
                    format!("input {index} value {value} does not fit {shape}"),
                ));
            }
        }
        Ok(())
    }

    /// Runs the unit once on `backend`.
    pub fn run(&self, backend: BackendKind, inputs: &[Vec<i128>]) -> Result<Vec<i128>> {
        self.check_inputs(inputs)?;
        let rows: Vec<&[i128]> = inputs.iter().map(Vec::as_slice).collect();
        (self.kernel(backend))(&rows)
            .ok_or_else(|| shape_error(self.name, "inputs rejected by the kernel"))
    }
}

macro_rules! catalog {
    ($($family:ident { $($name:ident($($input:ty),+) -> $output:ty;)* })*) => {
        /// Every translation unit, grouped by family.
        pub static CATALOG: &[Operation] = &[
            $($(
                Operation {
                    name: stringify!($name),
                    family: Family::$family,
                    inputs: &[$(<$input as LaneVector>::SHAPE),+],
                    output: <$output as LaneVector>::SHAPE,
                    rvv: |inputs| {
                        Unit::run::<Rvv>(rvv::$name as fn($($input),+) -> $output, inputs)
                    },
                    neon: |inputs| {
                        Unit::run::<Neon>(neon::$name as fn($($input),+) -> $output, inputs)
                    },
                    rvv_timer: |inputs, iterations, warmup| {
                        Unit::time::<Rvv>(
                            rvv::$name as fn($($input),+) -> $output,
                            inputs,
                            iterations,
                            warmup,
                        )
                    },
                    neon_timer: |inputs, iterations, warmup| {
                        Unit::time::<Neon>(
                            neon::$name as fn($($input),+) -> $output,
                            inputs,
                            iterations,
                            warmup,
                        )
                    },
                },
            )*)*
        ];
    };
}

catalog! {
    Add {
        vadd_s8(Int8x8, Int8x8) -> Int8x8;
        vadd_s16(Int16x4, Int16x4) -> Int16x4;
        vadd_s32(Int32x2, Int32x2) -> Int32x2;
        vadd_s64(Int64x1, Int64x1) -> Int64x1;
        vadd_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vadd_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vadd_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vadd_u64(Uint64x1, Uint64x1) -> Uint64x1;
        vaddq_s8(Int8x16, Int8x16) -> Int8x16;
        vaddq_s16(Int16x8, Int16x8) -> Int16x8;
        vaddq_s32(Int32x4, Int32x4) -> Int32x4;
        vaddq_s64(Int64x2, Int64x2) -> Int64x2;
        vaddq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vaddq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vaddq_u32(Uint32x4, Uint32x4) -> Uint32x4;
        vaddq_u64(Uint64x2, Uint64x2) -> Uint64x2;
    }
    Sub {
        vsub_s8(Int8x8, Int8x8) -> Int8x8;
        vsub_s16(Int16x4, Int16x4) -> Int16x4;
        vsub_s32(Int32x2, Int32x2) -> Int32x2;
        vsub_s64(Int64x1, Int64x1) -> Int64x1;
        vsub_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vsub_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vsub_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vsub_u64(Uint64x1, Uint64x1) -> Uint64x1;
        vsubq_s8(Int8x16, Int8x16) -> Int8x16;
        vsubq_s16(Int16x8, Int16x8) -> Int16x8;
        vsubq_s32(Int32x4, Int32x4) -> Int32x4;
        vsubq_s64(Int64x2, Int64x2) -> Int64x2;
        vsubq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vsubq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vsubq_u32(Uint32x4, Uint32x4) -> Uint32x4;
        vsubq_u64(Uint64x2, Uint64x2) -> Uint64x2;
    }
    SaturatingAdd {
        vqadd_s8(Int8x8, Int8x8) -> Int8x8;
        vqadd_s16(Int16x4, Int16x4) -> Int16x4;
        vqadd_s32(Int32x2, Int32x2) -> Int32x2;
        vqadd_s64(Int64x1, Int64x1) -> Int64x1;
        vqadd_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vqadd_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vqadd_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vqadd_u64(Uint64x1, Uint64x1) -> Uint64x1;
        vqaddq_s8(Int8x16, Int8x16) -> Int8x16;
        vqaddq_s16(Int16x8, Int16x8) -> Int16x8;
        vqaddq_s32(Int32x4, Int32x4) -> Int32x4;
        vqaddq_s64(Int64x2, Int64x2) -> Int64x2;
        vqaddq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vqaddq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vqaddq_u32(Uint32x4, Uint32x4) -> Uint32x4;
        vqaddq_u64(Uint64x2, Uint64x2) -> Uint64x2;
    }
    SaturatingSub {
        vqsub_s8(Int8x8, Int8x8) -> Int8x8;
        vqsub_s16(Int16x4, Int16x4) -> Int16x4;
        vqsub_s32(Int32x2, Int32x2) -> Int32x2;
        vqsub_s64(Int64x1, Int64x1) -> Int64x1;
        vqsub_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vqsub_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vqsub_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vqsub_u64(Uint64x1, Uint64x1) -> Uint64x1;
        vqsubq_s8(Int8x16, Int8x16) -> Int8x16;
        vqsubq_s16(Int16x8, Int16x8) -> Int16x8;
        vqsubq_s32(Int32x4, Int32x4) -> Int32x4;
        vqsubq_s64(Int64x2, Int64x2) -> Int64x2;
        vqsubq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vqsubq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vqsubq_u32(Uint32x4, Uint32x4) -> Uint32x4;
        vqsubq_u64(Uint64x2, Uint64x2) -> Uint64x2;
    }
    HalvingAdd {
        vhadd_s8(Int8x8, Int8x8) -> Int8x8;
        vhadd_s16(Int16x4, Int16x4) -> Int16x4;
        vhadd_s32(Int32x2, Int32x2) -> Int32x2;
        vhadd_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vhadd_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vhadd_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vhaddq_s8(Int8x16, Int8x16) -> Int8x16;
        vhaddq_s16(Int16x8, Int16x8) -> Int16x8;
        vhaddq_s32(Int32x4, Int32x4) -> Int32x4;
        vhaddq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vhaddq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vhaddq_u32(Uint32x4, Uint32x4) -> Uint32x4;
    }
    RoundingHalvingAdd {
        vrhadd_s8(Int8x8, Int8x8) -> Int8x8;
        vrhadd_s16(Int16x4, Int16x4) -> Int16x4;
        vrhadd_s32(Int32x2, Int32x2) -> Int32x2;
        vrhadd_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vrhadd_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vrhadd_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vrhaddq_s8(Int8x16, Int8x16) -> Int8x16;
        vrhaddq_s16(Int16x8, Int16x8) -> Int16x8;
        vrhaddq_s32(Int32x4, Int32x4) -> Int32x4;
        vrhaddq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vrhaddq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vrhaddq_u32(Uint32x4, Uint32x4) -> Uint32x4;
    }
    HalvingSub {
        vhsub_s8(Int8x8, Int8x8) -> Int8x8;
        vhsub_s16(Int16x4, Int16x4) -> Int16x4;
        vhsub_s32(Int32x2, Int32x2) -> Int32x2;
        vhsub_u8(Uint8x8, Uint8x8) -> Uint8x8;
        vhsub_u16(Uint16x4, Uint16x4) -> Uint16x4;
        vhsub_u32(Uint32x2, Uint32x2) -> Uint32x2;
        vhsubq_s8(Int8x16, Int8x16) -> Int8x16;
        vhsubq_s16(Int16x8, Int16x8) -> Int16x8;
        vhsubq_s32(Int32x4, Int32x4) -> Int32x4;
        vhsubq_u8(Uint8x16, Uint8x16) -> Uint8x16;
        vhsubq_u16(Uint16x8, Uint16x8) -> Uint16x8;
        vhsubq_u32(Uint32x4, Uint32x4) -> Uint32x4;
    }
    AddLong {
        vaddl_s8(Int8x8, Int8x8) -> Int16x8;
        vaddl_s16(Int16x4, Int16x4) -> Int32x4;
        vaddl_s32(Int32x2, Int32x2) -> Int64x2;
        vaddl_u8(Uint8x8, Uint8x8) -> Uint16x8;
        vaddl_u16(Uint16x4, Uint16x4) -> Uint32x4;
        vaddl_u32(Uint32x2, Uint32x2) -> Uint64x2;
    }
    SubLong {
        vsubl_s8(Int8x8, Int8x8) -> Int16x8;
        vsubl_s16(Int16x4, Int16x4) -> Int32x4;
        vsubl_s32(Int32x2, Int32x2) -> Int64x2;
        vsubl_u8(Uint8x8, Uint8x8) -> Uint16x8;
        vsubl_u16(Uint16x4, Uint16x4) -> Uint32x4;
        vsubl_u32(Uint32x2, Uint32x2) -> Uint64x2;
    }
    AddWide {
        vaddw_s8(Int16x8, Int8x8) -> Int16x8;
        vaddw_s16(Int32x4, Int16x4) -> Int32x4;
        vaddw_s32(Int64x2, Int32x2) -> Int64x2;
        vaddw_u8(Uint16x8, Uint8x8) -> Uint16x8;
        vaddw_u16(Uint32x4, Uint16x4) -> Uint32x4;
        vaddw_u32(Uint64x2, Uint32x2) -> Uint64x2;
    }
    SubWide {
        vsubw_s8(Int16x8, Int8x8) -> Int16x8;
        vsubw_s16(Int32x4, Int16x4) -> Int32x4;
        vsubw_s32(Int64x2, Int32x2) -> Int64x2;
        vsubw_u8(Uint16x8, Uint8x8) -> Uint16x8;
        vsubw_u16(Uint32x4, Uint16x4) -> Uint32x4;
        vsubw_u32(Uint64x2, Uint32x2) -> Uint64x2;
    }
    AddHighNarrow {
        vaddhn_s16(Int16x8, Int16x8) -> Int8x8;
        vaddhn_s32(Int32x4, Int32x4) -> Int16x4;
        vaddhn_s64(Int64x2, Int64x2) -> Int32x2;
        vaddhn_u16(Uint16x8, Uint16x8) -> Uint8x8;
        vaddhn_u32(Uint32x4, Uint32x4) -> Uint16x4;
        vaddhn_u64(Uint64x2, Uint64x2) -> Uint32x2;
    }
    SubHighNarrow {
        vsubhn_s16(Int16x8, Int16x8) -> Int8x8;
        vsubhn_s32(Int32x4, Int32x4) -> Int16x4;
        vsubhn_s64(Int64x2, Int64x2) -> Int32x2;
        vsubhn_u16(Uint16x8, Uint16x8) -> Uint8x8;
        vsubhn_u32(Uint32x4, Uint32x4) -> Uint16x4;
        vsubhn_u64(Uint64x2, Uint64x2) -> Uint32x2;
    }
    RoundingAddHighNarrow {
        vraddhn_s16(Int16x8, Int16x8) -> Int8x8;
        vraddhn_s32(Int32x4, Int32x4) -> Int16x4;
        vraddhn_s64(Int64x2, Int64x2) -> Int32x2;
        vraddhn_u16(Uint16x8, Uint16x8) -> Uint8x8;
        vraddhn_u32(Uint32x4, Uint32x4) -> Uint16x4;
        vraddhn_u64(Uint64x2, Uint64x2) -> Uint32x2;
    }
    RoundingSubHighNarrow {
        vrsubhn_s16(Int16x8, Int16x8) -> Int8x8;
        vrsubhn_s32(Int32x4, Int32x4) -> Int16x4;
        vrsubhn_s64(Int64x2, Int64x2) -> Int32x2;
        vrsubhn_u16(Uint16x8, Uint16x8) -> Uint8x8;
        vrsubhn_u32(Uint32x4, Uint32x4) -> Uint16x4;
        vrsubhn_u64(Uint64x2, Uint64x2) -> Uint32x2;
    }
    Narrow {
        vmovn_s16(Int16x8) -> Int8x8;
        vmovn_s32(Int32x4) -> Int16x4;
        vmovn_s64(Int64x2) -> Int32x2;
        vmovn_u16(Uint16x8) -> Uint8x8;
        vmovn_u32(Uint32x4) -> Uint16x4;
        vmovn_u64(Uint64x2) -> Uint32x2;
    }
    SaturatingNarrow {
        vqmovn_s16(Int16x8) -> Int8x8;
        vqmovn_s32(Int32x4) -> Int16x4;
        vqmovn_s64(Int64x2) -> Int32x2;
        vqmovn_u16(Uint16x8) -> Uint8x8;
        vqmovn_u32(Uint32x4) -> Uint16x4;
        vqmovn_u64(Uint64x2) -> Uint32x2;
    }
}

/// Finds a unit by its NEON name.
pub fn lookup(name: &str) -> Result<&'static Operation> {
    CATALOG
        .iter()
        .find(|op| op.name == name)
        .ok_or_else(|| unknown_operation(name))
}

/// Resolves a list of names; an empty list selects the whole catalog.
pub fn select(names: &[String]) -> Result<Vec<&'static Operation>> {
    if names.is_empty() {
        return Ok(CATALOG.iter().collect());
    }
    names.iter().map(|name| lookup(name)).collect()
}
