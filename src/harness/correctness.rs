//! Correctness mode: per-lane results on one backend, or a lane-by-lane
//! comparison of the scalable backend against the reference.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::Result,
    harness::{
        catalog::Operation,
        config::HarnessConfig,
        tables::{self, Case},
        BackendKind,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub label: String,
    pub inputs: Vec<Vec<i128>>,
    pub output: Vec<i128>,
}

/// Results of one operation over its case table.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub operation: &'static str,
    pub signature: String,
    pub backend: BackendKind,
    pub results: Vec<CaseResult>,
}

/// Runs `op` on `backend` over `cases`.
pub fn run(op: &Operation, backend: BackendKind, cases: &[Case]) -> Result<RunReport> {
    let results = cases
        .iter()
        .map(|case| {
            let output = op.run(backend, &case.inputs)?;
            debug!(operation = op.name, case = %case.label, ?output, "case done");
            Ok(CaseResult {
                label: case.label.clone(),
                inputs: case.inputs.clone(),
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(operation = op.name, %backend, cases = results.len(), "run complete");

    Ok(RunReport {
        operation: op.name,
        signature: op.signature(),
        backend,
        results,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub case: String,
    pub lane: usize,
    pub rvv: i128,
    pub neon: i128,
}

/// Outcome of running one operation on both backends.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub operation: &'static str,
    pub cases: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs `op` on both backends and collects every lane that differs.
pub fn compare(op: &Operation, cases: &[Case]) -> Result<Comparison> {
    let mut mismatches = Vec::new();

    for case in cases {
        let rvv = op.run(BackendKind::Rvv, &case.inputs)?;
        let neon = op.run(BackendKind::Neon, &case.inputs)?;

        for (lane, (&r, &n)) in rvv.iter().zip(&neon).enumerate() {
            if r != n {
                warn!(operation = op.name, case = %case.label, lane, rvv = r, neon = n, "lane mismatch");
                mismatches.push(Mismatch {
                    case: case.label.clone(),
                    lane,
                    rvv: r,
                    neon: n,
                });
            }
        }
    }

    debug!(operation = op.name, cases = cases.len(), mismatches = mismatches.len(), "compared");

    Ok(Comparison {
        operation: op.name,
        cases: cases.len(),
        mismatches,
    })
}

/// Compares every operation in `ops` over its case table, in parallel.
pub fn compare_all(ops: &[&'static Operation], config: &HarnessConfig) -> Result<Vec<Comparison>> {
    let comparisons = ops
        .par_iter()
        .map(|op| compare(op, &tables::cases(op, config.random_cases, config.seed)))
        .collect::<Result<Vec<_>>>()?;

    let failed = comparisons.iter().filter(|c| !c.passed()).count();
    info!(operations = comparisons.len(), failed, "comparison complete");

    Ok(comparisons)
}
