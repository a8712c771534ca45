//! Rendering of harness results as text or JSON.
//!
//! Every report starts with the same header: when it was produced, which
//! backend ran, and the emulated vector length.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::{
    error::Result,
    harness::{
        catalog::Operation,
        config::ReportFormat,
        correctness::{Comparison, RunReport},
        performance::BenchReport,
        BackendKind,
    },
    simd::shape::{ELEN_BITS, VLEN_BITS},
    HOST_VECTOR_ISA,
};

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub generated_at: DateTime<Utc>,
    pub backend: BackendKind,
    pub vlen_bits: usize,
    pub elen_bits: usize,
    pub host_vector_isa: &'static str,
}

impl Header {
    pub fn now(backend: BackendKind) -> Self {
        Self {
            generated_at: Utc::now(),
            backend,
            vlen_bits: VLEN_BITS,
            elen_bits: ELEN_BITS,
            host_vector_isa: HOST_VECTOR_ISA,
        }
    }

    fn text(&self) -> String {
        format!(
            "# neonrvv | backend {} | VLEN {} | ELEN {} | host {} | {}",
            self.backend,
            self.vlen_bits,
            self.elen_bits,
            self.host_vector_isa,
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[derive(Debug, Serialize)]
struct Report<'a, T: Serialize> {
    #[serde(flatten)]
    header: &'a Header,
    #[serde(flatten)]
    body: T,
}

fn json<T: Serialize>(header: &Header, body: T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report { header, body })?)
}

fn lanes(values: &[i128]) -> String {
    let items: Vec<String> = values.iter().map(i128::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[derive(Debug, Serialize)]
struct OperationInfo {
    name: &'static str,
    family: crate::harness::Family,
    signature: String,
}

#[derive(Debug, Serialize)]
struct Operations {
    operations: Vec<OperationInfo>,
}

pub fn render_list(header: &Header, ops: &[&Operation], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => json(
            header,
            Operations {
                operations: ops
                    .iter()
                    .map(|op| OperationInfo {
                        name: op.name,
                        family: op.family,
                        signature: op.signature(),
                    })
                    .collect(),
            },
        ),
        ReportFormat::Text => {
            let mut lines = vec![header.text()];
            lines.extend(ops.iter().map(|op| {
                format!("{:<14} {:<36} {}", op.name, op.signature(), op.family)
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Debug, Serialize)]
struct Runs<'a> {
    runs: &'a [RunReport],
}

pub fn render_runs(header: &Header, runs: &[RunReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => json(header, Runs { runs }),
        ReportFormat::Text => {
            let mut lines = vec![header.text()];
            for run in runs {
                lines.push(format!("{} ({})", run.operation, run.signature));
                for result in &run.results {
                    let inputs: Vec<String> = result.inputs.iter().map(|row| lanes(row)).collect();
                    lines.push(format!(
                        "  {:<12} {} -> {}",
                        result.label,
                        inputs.join(" "),
                        lanes(&result.output)
                    ));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Debug, Serialize)]
struct Benches<'a> {
    benches: &'a [BenchReport],
}

pub fn render_benches(
    header: &Header,
    benches: &[BenchReport],
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Json => json(header, Benches { benches }),
        ReportFormat::Text => {
            let mut lines = vec![header.text()];
            for bench in benches {
                lines.push(format!("{} on {}", bench.operation, bench.backend));
                for (index, t) in bench.timings.iter().enumerate() {
                    lines.push(format!(
                        "  Test case {} ({}) {{load, {}, store}} mean {:.1} ns, median {:.1} ns, std-dev {:.1} ns, min {:.1} ns over {} runs",
                        index + 1,
                        t.label,
                        bench.operation,
                        t.mean_ns,
                        t.median_ns,
                        t.std_dev_ns,
                        t.min_ns,
                        t.iterations
                    ));
                    lines.push(format!(
                        "  Test case {} ({}) {} alone mean {:.1} ns, median {:.1} ns",
                        index + 1,
                        t.label,
                        bench.operation,
                        t.unit_mean_ns,
                        t.unit_median_ns
                    ));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Debug, Serialize)]
struct Comparisons<'a> {
    passed: usize,
    failed: usize,
    comparisons: &'a [Comparison],
}

pub fn render_comparisons(
    header: &Header,
    comparisons: &[Comparison],
    format: ReportFormat,
) -> Result<String> {
    let failed = comparisons.iter().filter(|c| !c.passed()).count();
    let passed = comparisons.len() - failed;

    match format {
        ReportFormat::Json => json(
            header,
            Comparisons {
                passed,
                failed,
                comparisons,
            },
        ),
        ReportFormat::Text => {
            let mut lines = vec![header.text()];
            for comparison in comparisons {
                let status = if comparison.passed() { "ok" } else { "MISMATCH" };
                lines.push(format!(
                    "{:<14} {:<8} {} cases",
                    comparison.operation, status, comparison.cases
                ));
                lines.extend(comparison.mismatches.iter().map(|m| {
                    format!(
                        "    {} lane {}: rvv {} != neon {}",
                        m.case, m.lane, m.rvv, m.neon
                    )
                }));
            }
            lines.push(format!("{passed} passed, {failed} failed"));
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Debug, Serialize)]
struct Info {
    operations: usize,
}

pub fn render_info(header: &Header, operations: usize, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => json(header, Info { operations }),
        ReportFormat::Text => Ok(format!(
            "{}\n{operations} translation units",
            header.text()
        )),
    }
}
