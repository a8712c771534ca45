//! Harness settings, read from TOML.
//!
//! ```toml
//! iterations = 2000
//! warmup = 200
//! seed = 12345
//! random_cases = 16
//! operations = ["vhadd_u16", "vrsubhn_u16"]
//! format = "json"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{config_error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Timed repetitions per case in `bench`.
    pub iterations: usize,
    /// Untimed repetitions per case before measuring.
    pub warmup: usize,
    /// Seed for the random rows.
    pub seed: u64,
    /// Random rows appended to the documented table of each operation.
    pub random_cases: usize,
    /// Operations to run when none are named on the command line; empty means all.
    pub operations: Vec<String>,
    pub format: ReportFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            warmup: 100,
            seed: 12345,
            random_cases: 0,
            operations: Vec::new(),
            format: ReportFormat::Text,
        }
    }
}

impl HarnessConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| config_error(format!("cannot read {}: {err}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(config_error("iterations must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = HarnessConfig::from_toml_str("").unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.seed, 12345);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let config = HarnessConfig::from_toml_str(
            r#"
            iterations = 50
            operations = ["vhadd_u16"]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.iterations, 50);
        assert_eq!(config.warmup, 100);
        assert_eq!(config.operations, vec!["vhadd_u16".to_string()]);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_keys_and_zero_iterations() {
        let err = HarnessConfig::from_toml_str("iteration = 5").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = HarnessConfig::from_toml_str("iterations = 0").unwrap_err();
        assert!(err.to_string().contains("iterations must be at least 1"));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = HarnessConfig::load("/nonexistent/neonrvv.toml").unwrap_err();
        assert!(err.to_string().contains("cannot read /nonexistent/neonrvv.toml"));
    }
}
