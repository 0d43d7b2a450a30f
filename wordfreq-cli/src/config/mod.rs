//! Configuration module
//!
//! Values are layered: built-in defaults, then the TOML file given with
//! `--config`, then command-line flags.

use crate::commands::count::{Mode, Order};
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pipeline-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Execution mode
    pub mode: Mode,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Input size at which adaptive mode goes parallel (KB)
    pub parallel_threshold_kb: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Adaptive,
            threads: 0,
            parallel_threshold_kb: 1024,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output locator, `-` for stdout
    pub path: String,

    /// Record order
    pub order: Order,

    /// Where to write the metrics as JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "counts.txt".to_string(),
            order: Order::Unordered,
            metrics_json: None,
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Verbosity used when no `-v` is given (0 = warn, 3 = trace)
    pub verbosity: u8,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
