//! wordfreq command-line entry point

use clap::Parser;
use wordfreq_cli::{commands::Commands, CliResult};

/// Count word frequencies in text files
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}
