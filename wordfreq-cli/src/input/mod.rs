//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use wordfreq_engine::{Input, STDIN_LOCATOR};

/// Turn the `--input` values into an engine [`Input`]
///
/// `-` reads standard input and cannot be combined with other inputs.
/// Everything else is a local path or glob pattern; blank and remote
/// locators are rejected by the engine before any globbing happens.
pub fn resolve_input(locators: &[String]) -> Result<Input> {
    if locators.iter().any(|l| l == STDIN_LOCATOR) {
        if locators.len() > 1 {
            return Err(CliError::ConfigError(
                "standard input ('-') cannot be combined with other inputs".to_string(),
            )
            .into());
        }
        return Ok(Input::stdin());
    }

    for locator in locators {
        // Surfaces blank and remote locators with the engine's own errors
        Input::from_locator(locator)?;
    }

    let files = resolve_patterns(locators)?;
    log::debug!("resolved {} input file(s)", files.len());

    Ok(match <[_; 1]>::try_from(files) {
        Ok([file]) => Input::from_file(file),
        Err(files) => Input::from_files(files),
    })
}
