//! Performance mode: wall-clock latency per case, measured twice. Once for
//! the whole `load + unit + store` sequence, once for the unit call alone on
//! already-loaded vectors.
//!
//! Each measurement is first run `warmup` times untimed, then `iterations`
//! times with every repetition timed on its own. Summaries are in nanoseconds.

use std::{hint::black_box, time::Instant};

use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};
use tracing::{debug, info};

use crate::{
    error::{config_error, shape_error, Result},
    harness::{catalog::Operation, tables::Case, BackendKind},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub label: String,
    pub iterations: usize,
    pub mean_ns: f64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    /// Unit call alone, without the load and store around it.
    pub unit_mean_ns: f64,
    pub unit_median_ns: f64,
}

fn median(samples: &[f64]) -> f64 {
    Data::new(samples.to_vec()).median()
}

impl Timing {
    /// Summarises raw per-iteration samples of the full sequence and of the
    /// unit call alone.
    pub fn from_samples(label: impl Into<String>, sequence: &[f64], unit: &[f64]) -> Self {
        let std_dev = if sequence.len() > 1 {
            sequence.std_dev()
        } else {
            0.0
        };
        Self {
            label: label.into(),
            iterations: sequence.len(),
            mean_ns: sequence.mean(),
            median_ns: median(sequence),
            std_dev_ns: std_dev,
            min_ns: Statistics::min(sequence),
            unit_mean_ns: unit.mean(),
            unit_median_ns: median(unit),
        }
    }
}

/// Runs `f` `warmup` times, then returns the duration of each of `iterations`
/// further calls.
pub(crate) fn sample(iterations: usize, warmup: usize, mut f: impl FnMut()) -> Vec<f64> {
    for _ in 0..warmup {
        f();
    }
    (0..iterations)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed().as_nanos() as f64
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub operation: &'static str,
    pub backend: BackendKind,
    pub timings: Vec<Timing>,
}

/// Times `op` on `backend` for every case.
pub fn bench(
    op: &Operation,
    backend: BackendKind,
    cases: &[Case],
    iterations: usize,
    warmup: usize,
) -> Result<BenchReport> {
    if iterations == 0 {
        return Err(config_error("iterations must be at least 1"));
    }

    let kernel = op.kernel(backend);
    let timer = op.unit_timer(backend);
    let mut timings = Vec::with_capacity(cases.len());

    for case in cases {
        op.check_inputs(&case.inputs)?;
        let rows: Vec<&[i128]> = case.inputs.iter().map(Vec::as_slice).collect();

        let sequence = sample(iterations, warmup, || {
            black_box(kernel(black_box(&rows)));
        });
        let unit = timer(&rows, iterations, warmup)
            .ok_or_else(|| shape_error(op.name, "inputs rejected by the kernel"))?;

        let timing = Timing::from_samples(case.label.as_str(), &sequence, &unit);
        debug!(
            operation = op.name,
            case = %case.label,
            mean_ns = timing.mean_ns,
            unit_mean_ns = timing.unit_mean_ns,
            "case timed"
        );
        timings.push(timing);
    }

    info!(operation = op.name, %backend, cases = timings.len(), iterations, "bench complete");

    Ok(BenchReport {
        operation: op.name,
        backend,
        timings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        harness::{catalog::lookup, tables},
    };

    #[test]
    fn test_summary_statistics() {
        let timing = Timing::from_samples(
            "regular",
            &[10.0, 20.0, 30.0, 40.0, 50.0],
            &[1.0, 2.0, 6.0],
        );
        assert_eq!(timing.iterations, 5);
        assert_eq!(timing.mean_ns, 30.0);
        assert_eq!(timing.median_ns, 30.0);
        assert_eq!(timing.min_ns, 10.0);
        assert!((timing.std_dev_ns - 15.811_388).abs() < 1e-5);
        assert_eq!(timing.unit_mean_ns, 3.0);
        assert_eq!(timing.unit_median_ns, 2.0);
    }

    #[test]
    fn test_single_sample_has_zero_spread() {
        let timing = Timing::from_samples("one", &[7.0], &[3.0]);
        assert_eq!(timing.std_dev_ns, 0.0);
        assert_eq!(timing.median_ns, 7.0);
        assert_eq!(timing.unit_median_ns, 3.0);
    }

    #[test]
    fn test_sample_runs_warmup_then_iterations() {
        let mut calls = 0;
        let samples = sample(4, 3, || calls += 1);
        assert_eq!(samples.len(), 4);
        assert_eq!(calls, 7);
    }

    #[test]
    fn test_bench_times_sequence_and_unit() {
        let op = lookup("vaddq_u32").unwrap();
        let cases = tables::cases(op, 0, 0);
        let report = bench(op, BackendKind::Rvv, &cases, 5, 1).unwrap();
        assert_eq!(report.timings.len(), 8);
        for t in &report.timings {
            println!("{t:?}");
            assert_eq!(t.iterations, 5);
            assert!(t.min_ns >= 0.0 && t.mean_ns.is_finite());
            assert!(t.unit_mean_ns >= 0.0 && t.unit_median_ns.is_finite());
        }
    }

    #[test]
    fn test_bench_rejects_zero_iterations() {
        let op = lookup("vsub_s64").unwrap();
        let cases = tables::cases(op, 0, 0);
        let err = bench(op, BackendKind::Rvv, &cases, 0, 0).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.to_string(), "invalid configuration: iterations must be at least 1");
    }
}
