//! Count command implementation

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::resolve_input;
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use wordfreq_engine::{
    staging_file_for, ExecutionMode, OutputOrder, RunSummary, Sink, WordCountPipeline,
    WordCountPipelineBuilder,
};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file, `-` for stdout [default: counts.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Execution mode [default: adaptive]
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of worker threads (0 = auto)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Order of the output records [default: unordered]
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write the run metrics as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub metrics_json: Option<PathBuf>,

    /// Suppress progress and the metrics report
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported execution modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single thread, streams the input
    Sequential,
    /// Worker pool over the whole input
    Parallel,
    /// Parallel only for large inputs
    Adaptive,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Parallel => ExecutionMode::Parallel,
            Mode::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

/// Supported record orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Whatever order counting produced
    Unordered,
    /// By word, byte-wise
    Alphabetical,
    /// Most frequent first, ties by word
    Frequency,
}

impl From<Order> for OutputOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Unordered => OutputOrder::Unordered,
            Order::Alphabetical => OutputOrder::Alphabetical,
            Order::Frequency => OutputOrder::Frequency,
        }
    }
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.load_config()?;
        self.init_logging(&config);

        log::info!("Starting word count");
        log::debug!("Arguments: {:?}", self);

        // The output is checked before anything is read
        let output = self.output_locator(&config);
        let mut sink = Sink::from_locator(&output)
            .with_context(|| format!("Invalid output '{output}'"))?;
        let metrics_json = self
            .metrics_json_path(&config)
            .map(MetricsJson::prepare)
            .transpose()?;

        let input = resolve_input(&self.input)?;
        let pipeline = self
            .pipeline_builder(&config)
            .build()
            .context("Failed to set up the pipeline")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(format!("Counting words into {}", sink.describe()));
        let result = pipeline.run(input, &mut sink);
        progress.finish();

        let summary = result.context("Word count failed")?;
        if !self.quiet {
            TextFormatter::stderr().write_report(&summary)?;
        }
        if let Some(metrics_json) = metrics_json {
            metrics_json.write(&summary)?;
        }

        Ok(())
    }

    /// Settings from flags, falling back to the config file
    pub fn pipeline_builder(&self, config: &CliConfig) -> WordCountPipelineBuilder {
        let mode = self.mode.unwrap_or(config.pipeline.mode);
        let threads = match self.threads.unwrap_or(config.pipeline.threads) {
            0 => None,
            n => Some(n),
        };
        let order = self.order.unwrap_or(config.output.order);

        WordCountPipeline::builder()
            .execution_mode(mode.into())
            .threads(threads)
            .parallel_threshold(config.pipeline.parallel_threshold_kb.saturating_mul(1024))
            .output_order(order.into())
    }

    /// Output locator from the flag or the config file
    pub fn output_locator(&self, config: &CliConfig) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| config.output.path.clone())
    }

    fn load_config(&self) -> CliResult<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::from_file(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Metrics report path from the flag or the config file
    pub fn metrics_json_path<'a>(&'a self, config: &'a CliConfig) -> Option<&'a Path> {
        self.metrics_json
            .as_deref()
            .or(config.output.metrics_json.as_deref())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self, config: &CliConfig) {
        let verbosity = if self.verbose > 0 {
            self.verbose
        } else {
            config.logging.verbosity
        };
        let log_level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second run in the same process keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// JSON metrics report, staged before the run and persisted after it
///
/// Staging up front makes an unusable path fail the run before the counts
/// are written.
struct MetricsJson {
    path: PathBuf,
    staged: NamedTempFile,
}

impl MetricsJson {
    fn prepare(path: &Path) -> CliResult<Self> {
        let staged = staging_file_for(path)
            .with_context(|| format!("Failed to create metrics file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            staged,
        })
    }

    fn write(mut self, summary: &RunSummary) -> CliResult<()> {
        let context = || format!("Failed to write metrics file {}", self.path.display());

        JsonFormatter::new(BufWriter::new(self.staged.as_file_mut()))
            .write_report(summary)
            .with_context(context)?;
        self.staged
            .persist(&self.path)
            .map_err(|e| e.error)
            .with_context(context)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wordfreq_engine::EngineError;

    fn args(input: &str) -> CountArgs {
        CountArgs {
            input: vec![input.to_string()],
            output: None,
            mode: None,
            threads: None,
            order: None,
            config: None,
            metrics_json: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let mut config = CliConfig::default();
        config.pipeline.mode = Mode::Parallel;
        config.pipeline.threads = 2;
        config.pipeline.parallel_threshold_kb = 4;
        config.output.order = Order::Frequency;
        config.output.path = "-".to_string();

        let count = args("in.txt");
        let pipeline = count.pipeline_builder(&config).build().unwrap();
        let engine = pipeline.config();

        assert_eq!(engine.execution_mode, ExecutionMode::Parallel);
        assert_eq!(engine.threads, Some(2));
        assert_eq!(engine.parallel_threshold, 4096);
        assert_eq!(engine.output_order, OutputOrder::Frequency);
        assert_eq!(count.output_locator(&config), "-");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.pipeline.threads = 8;
        config.output.order = Order::Frequency;

        let mut count = args("in.txt");
        count.mode = Some(Mode::Sequential);
        count.threads = Some(0);
        count.order = Some(Order::Alphabetical);
        count.output = Some("out.txt".to_string());

        let pipeline = count.pipeline_builder(&config).build().unwrap();
        let engine = pipeline.config();

        assert_eq!(engine.execution_mode, ExecutionMode::Sequential);
        assert_eq!(engine.threads, None);
        assert_eq!(engine.output_order, OutputOrder::Alphabetical);
        assert_eq!(count.output_locator(&config), "out.txt");
    }

    #[test]
    fn test_execute_writes_counts_and_metrics() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("counts.txt");
        let metrics = dir.path().join("metrics.json");
        fs::write(&input, "don't stop\n\ndon't\n").unwrap();

        let mut count = args(&input.to_string_lossy());
        count.output = Some(output.to_string_lossy().into_owned());
        count.order = Some(Order::Frequency);
        count.metrics_json = Some(metrics.clone());

        count.execute().unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "don't: 2\nstop: 1\n");
        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&metrics).unwrap()).unwrap();
        assert_eq!(report["metrics"]["extract"]["emptyLines"], 1);
    }

    #[test]
    fn test_blank_output_fails_before_input() {
        let dir = TempDir::new().unwrap();
        let mut count = args(&dir.path().join("missing-*.txt").to_string_lossy());
        count.output = Some(String::new());

        let err = count.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unwritable_metrics_path_leaves_counts_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("counts.txt");
        fs::write(&input, "fresh words\n").unwrap();
        fs::write(&output, "previous: 1\n").unwrap();

        let mut count = args(&input.to_string_lossy());
        count.output = Some(output.to_string_lossy().into_owned());
        count.metrics_json = Some(dir.path().join("missing").join("metrics.json"));

        let err = count.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to create metrics file"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous: 1\n");
    }

    #[test]
    fn test_mode_conversions() {
        assert_eq!(
            ExecutionMode::from(Mode::Adaptive),
            ExecutionMode::Adaptive
        );
        assert_eq!(OutputOrder::from(Order::Unordered), OutputOrder::Unordered);
    }
}
