//! Correctness and performance driver for the translation units.
//!
//! The harness feeds the documented input tables through
//! `load -> translation unit -> store` on either backend, prints or times the
//! results, and compares the scalable backend lane by lane against the
//! reference one.

use std::fmt;

use serde::Serialize;

use crate::simd::{neon::Neon, rvv::Rvv, traits::SimdBackend};

pub mod catalog;
pub mod config;
pub mod correctness;
pub mod performance;
pub mod report;
pub mod tables;

pub use catalog::{lookup, select, Family, Operation, CATALOG};
pub use config::{HarnessConfig, ReportFormat};

/// Which backend a kernel runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Rvv,
    Neon,
}

impl BackendKind {
    /// The backend chosen by the crate's Cargo feature.
    pub const fn active() -> Self {
        if cfg!(feature = "rvv") {
            BackendKind::Rvv
        } else {
            BackendKind::Neon
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::Rvv => Rvv::NAME,
            BackendKind::Neon => Neon::NAME,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
