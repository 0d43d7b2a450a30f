//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::CliResult;
use anyhow::{bail, Context};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   wordfreq count -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration as commented TOML
    fn generate_template(&self) -> CliResult<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordfreq configuration\n\
             # Command-line flags take precedence over these values.\n\
             # threads = 0 picks the thread count automatically.\n\n\
             {body}"
        ))
    }
}
