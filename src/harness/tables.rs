//! Input tables fed to the translation units.
//!
//! Every operation is exercised with the same eight documented rows, built
//! for the lane shape of its first operand, and a fixed second operand. A few
//! operations carry their own lane-by-lane table instead (`vaddq_u32`,
//! `vsub_s64`). Rows are `i128` so one table type serves every lane width.

use ndarray::{Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{harness::catalog::Operation, simd::shape::LaneShape};

pub const UNSIGNED_ROWS: [&str; 8] = [
    "regular",
    "zeros",
    "near max",
    "max",
    "min",
    "alternating",
    "mixed",
    "ones",
];

pub const SIGNED_ROWS: [&str; 8] = [
    "regular",
    "zeros",
    "negatives",
    "max",
    "min",
    "alternating",
    "mixed",
    "ones",
];

/// Magnitudes of the "mixed" row, cycled. The 8-bit set keeps the same
/// proportions inside a byte.
fn mixed_magnitude(bits: u32, lane: usize) -> i128 {
    const WIDE: [i128; 4] = [5000, 10000, 2500, 7500];
    const BYTE: [i128; 4] = [50, 100, 25, 75];
    let table = if bits == 8 { BYTE } else { WIDE };
    table[(lane / 2) % table.len()]
}

fn row_label(shape: LaneShape, row: usize) -> &'static str {
    if shape.signed {
        SIGNED_ROWS[row]
    } else {
        UNSIGNED_ROWS[row]
    }
}

fn standard_value(shape: LaneShape, row: usize, lane: usize) -> i128 {
    let (min, max) = (shape.min_value(), shape.max_value());
    let index = lane as i128;
    let alternate = |even: i128, odd: i128| if lane % 2 == 0 { even } else { odd };

    match row {
        0 => index + 1,
        1 => 0,
        2 if shape.signed => -(index + 1),
        2 => max - index,
        3 => max,
        4 => min,
        5 => alternate(max, min),
        6 => {
            let m = mixed_magnitude(shape.bits, lane);
            if shape.signed {
                alternate(m, -m)
            } else {
                alternate(m, max - m)
            }
        }
        _ => 1,
    }
}

/// The eight documented rows for `shape`, one row per case.
pub fn standard_rows(shape: LaneShape) -> Array2<i128> {
    Array2::from_shape_fn((UNSIGNED_ROWS.len(), shape.lanes), |(row, lane)| {
        standard_value(shape, row, lane)
    })
}

/// The fixed second operand: `{1, 2, .., N}` for unsigned shapes and
/// `{MAX, MIN, 1, -1, 50, -50, 100, -100}` cycled for signed ones.
pub fn second_operand(shape: LaneShape) -> Array1<i128> {
    let signed = [
        shape.max_value(),
        shape.min_value(),
        1,
        -1,
        50,
        -50,
        100,
        -100,
    ];
    Array1::from_shape_fn(shape.lanes, |lane| {
        if shape.signed {
            signed[lane % signed.len()]
        } else {
            lane as i128 + 1
        }
    })
}

/// `count` rows of uniformly random lanes over the full range of `shape`.
pub fn random_rows(shape: LaneShape, count: usize, rng: &mut StdRng) -> Array2<i128> {
    let (min, max) = (shape.min_value(), shape.max_value());
    Array2::from_shape_simple_fn((count, shape.lanes), || rng.random_range(min..=max))
}

/// A fixed table for an operation whose inputs are documented lane by lane
/// rather than derived from its shape.
struct DocumentedTable {
    labels: [&'static str; 8],
    rows: [&'static [i128]; 8],
    second: &'static [i128],
}

const U32_MAX: i128 = u32::MAX as i128;
const I64_MAX: i128 = i64::MAX as i128;
const I64_MIN: i128 = i64::MIN as i128;

/// `vaddq_u32`: the mixed row is `2^32 - m`, not `MAX - m`.
const VADDQ_U32: DocumentedTable = DocumentedTable {
    labels: UNSIGNED_ROWS,
    rows: [
        &[1, 2, 3, 4],
        &[0, 0, 0, 0],
        &[U32_MAX, U32_MAX - 1, U32_MAX - 2, U32_MAX - 3],
        &[U32_MAX; 4],
        &[0, 0, 0, 0],
        &[U32_MAX, 0, U32_MAX, 0],
        &[5000, 4294962296, 10000, 4294957296],
        &[1, 1, 1, 1],
    ],
    second: &[1, 2, 3, 4],
};

/// `vsub_s64`: one lane, so the mixed row is split into a positive and a
/// negative case, and the subtrahend is `1`.
const VSUB_S64: DocumentedTable = DocumentedTable {
    labels: [
        "regular",
        "zeros",
        "negatives",
        "max",
        "min",
        "mixed positive",
        "mixed negative",
        "ones",
    ],
    rows: [
        &[1],
        &[0],
        &[-1],
        &[I64_MAX],
        &[I64_MIN],
        &[5000],
        &[-5000],
        &[1],
    ],
    second: &[1],
};

fn documented_table(name: &str) -> Option<&'static DocumentedTable> {
    match name {
        "vaddq_u32" => Some(&VADDQ_U32),
        "vsub_s64" => Some(&VSUB_S64),
        _ => None,
    }
}

/// One set of inputs for an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    pub label: String,
    pub inputs: Vec<Vec<i128>>,
}

/// The documented cases of `op`, followed by `random_cases` seeded random ones.
///
/// The random stream is seeded per operation name so that a case list does
/// not depend on which other operations were selected.
pub fn cases(op: &Operation, random_cases: usize, seed: u64) -> Vec<Case> {
    let mut cases = match documented_table(op.name) {
        Some(table) => documented_cases(op, table),
        None => standard_cases(op),
    };

    if random_cases > 0 {
        let mut rng = StdRng::seed_from_u64(seed ^ name_hash(op.name));
        let tables: Vec<Array2<i128>> = op
            .inputs
            .iter()
            .map(|&shape| random_rows(shape, random_cases, &mut rng))
            .collect();

        cases.extend((0..random_cases).map(|i| Case {
            label: format!("random {}", i + 1),
            inputs: tables.iter().map(|table| table.row(i).to_vec()).collect(),
        }));
    }

    cases
}

fn standard_cases(op: &Operation) -> Vec<Case> {
    let first = op.inputs[0];
    let rows = standard_rows(first);
    let rest: Vec<Vec<i128>> = op.inputs[1..]
        .iter()
        .map(|&shape| second_operand(shape).to_vec())
        .collect();

    rows.outer_iter()
        .enumerate()
        .map(|(row, lanes)| {
            let mut inputs = vec![lanes.to_vec()];
            inputs.extend(rest.iter().cloned());
            Case {
                label: row_label(first, row).to_string(),
                inputs,
            }
        })
        .collect()
}

fn documented_cases(op: &Operation, table: &DocumentedTable) -> Vec<Case> {
    table
        .labels
        .iter()
        .zip(table.rows)
        .map(|(label, row)| {
            let mut inputs = vec![row.to_vec()];
            inputs.extend((1..op.arity()).map(|_| table.second.to_vec()));
            Case {
                label: label.to_string(),
                inputs,
            }
        })
        .collect()
}

// FNV-1a, stable across runs and platforms.
fn name_hash(name: &str) -> u64 {
    name.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::catalog::lookup;

    #[test]
    fn test_unsigned_rows_match_documented_table() {
        let rows = standard_rows(LaneShape::new(16, false, 8));
        assert_eq!(rows.row(0).to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            rows.row(2).to_vec(),
            vec![65535, 65534, 65533, 65532, 65531, 65530, 65529, 65528]
        );
        assert_eq!(rows.row(4).to_vec(), vec![0; 8]);
        assert_eq!(
            rows.row(5).to_vec(),
            vec![65535, 0, 65535, 0, 65535, 0, 65535, 0]
        );
        assert_eq!(
            rows.row(6).to_vec(),
            vec![5000, 60535, 10000, 55535, 2500, 63035, 7500, 58035]
        );
        assert_eq!(rows.row(7).to_vec(), vec![1; 8]);
    }

    #[test]
    fn test_signed_rows_match_documented_table() {
        let rows = standard_rows(LaneShape::new(16, true, 8));
        assert_eq!(rows.row(2).to_vec(), vec![-1, -2, -3, -4, -5, -6, -7, -8]);
        assert_eq!(rows.row(3).to_vec(), vec![32767; 8]);
        assert_eq!(rows.row(4).to_vec(), vec![-32768; 8]);
        assert_eq!(
            rows.row(6).to_vec(),
            vec![5000, -5000, 10000, -10000, 2500, -2500, 7500, -7500]
        );
    }

    #[test]
    fn test_second_operand() {
        assert_eq!(
            second_operand(LaneShape::new(8, true, 8)).to_vec(),
            vec![127, -128, 1, -1, 50, -50, 100, -100]
        );
        assert_eq!(
            second_operand(LaneShape::new(16, false, 8)).to_vec(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_rows_fit_their_shape() {
        for (bits, signed, lanes) in [(8, false, 16), (8, true, 16), (64, true, 1), (64, false, 2)] {
            let shape = LaneShape::new(bits, signed, lanes);
            for value in standard_rows(shape).iter().chain(second_operand(shape).iter()) {
                assert!(*value >= shape.min_value() && *value <= shape.max_value());
            }
        }
    }

    #[test]
    fn test_vaddq_u32_uses_documented_table() {
        let cases = cases(lookup("vaddq_u32").unwrap(), 0, 0);
        assert_eq!(cases.len(), 8);
        assert_eq!(cases[2].inputs[0], vec![4294967295, 4294967294, 4294967293, 4294967292]);
        assert_eq!(cases[6].label, "mixed");
        assert_eq!(cases[6].inputs[0], vec![5000, 4294962296, 10000, 4294957296]);
        assert!(cases.iter().all(|case| case.inputs[1] == vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_vsub_s64_uses_documented_table() {
        let op = lookup("vsub_s64").unwrap();
        let cases = cases(op, 2, 12345);
        let rows: Vec<i128> = cases[..8].iter().map(|case| case.inputs[0][0]).collect();
        assert_eq!(
            rows,
            vec![1, 0, -1, i64::MAX as i128, i64::MIN as i128, 5000, -5000, 1]
        );
        assert_eq!(cases[6].label, "mixed negative");
        assert!(cases[..8].iter().all(|case| case.inputs[1] == vec![1]));
        assert_eq!(cases[9].label, "random 2");
        for case in &cases {
            op.check_inputs(&case.inputs).unwrap();
        }
    }

    #[test]
    fn test_cases_are_seeded_and_labelled() {
        let op = lookup("vsubw_s8").unwrap();
        let cases = cases(op, 3, 12345);
        assert_eq!(cases.len(), 11);
        assert_eq!(cases[2].label, "negatives");
        assert_eq!(cases[0].inputs[1], vec![127, -128, 1, -1, 50, -50, 100, -100]);
        assert_eq!(cases[10].label, "random 3");
        assert_eq!(cases[10].inputs[1].len(), 8);

        let again = super::cases(op, 3, 12345);
        assert_eq!(cases, again);
        assert_ne!(super::cases(op, 3, 1)[8], cases[8]);
    }
}
