//! CLI command implementations

use clap::Subcommand;

pub mod count;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count word frequencies and write one `<word>: <count>` line per word
    Count(count::CountArgs),

    /// Write the default configuration as TOML
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let count_cmd = Commands::Count(count::CountArgs {
            input: vec!["kinglear.txt".to_string()],
            output: None,
            mode: None,
            threads: None,
            order: None,
            config: None,
            metrics_json: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", count_cmd);
        assert!(debug_str.contains("Count"));
        assert!(debug_str.contains("kinglear.txt"));

        let generate_cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: PathBuf::from("wordfreq.toml"),
            force: false,
        });
        let debug_str = format!("{:?}", generate_cmd);
        assert!(debug_str.contains("GenerateConfig"));
        assert!(debug_str.contains("wordfreq.toml"));
    }
}
