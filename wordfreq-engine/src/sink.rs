//! Output sinks
//!
//! A file sink writes into a temporary file next to the target and renames
//! it into place only after every record was written and synced. A run that
//! fails therefore leaves whatever was at the target before untouched.

use crate::error::{EngineError, Result};
use crate::input::is_remote_locator;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locator that selects standard output
pub const STDOUT_LOCATOR: &str = "-";

/// Destination for formatted records
#[derive(Debug)]
pub enum Sink {
    /// Local file, created or overwritten
    File(PathBuf),
    /// Standard output
    Stdout,
    /// In-memory buffer
    Memory(Vec<String>),
}

impl Sink {
    /// Interpret a resource locator.
    ///
    /// An empty locator is a configuration error; `-` is standard output.
    pub fn from_locator(locator: &str) -> Result<Self> {
        if locator.is_empty() {
            return Err(EngineError::ConfigError(
                "output must not be blank".to_string(),
            ));
        }
        if locator == STDOUT_LOCATOR {
            return Ok(Sink::Stdout);
        }
        if is_remote_locator(locator) {
            return Err(EngineError::UnsupportedLocator {
                locator: locator.to_string(),
            });
        }
        Ok(Sink::File(PathBuf::from(locator)))
    }

    /// Create an empty in-memory sink
    pub fn memory() -> Self {
        Sink::Memory(Vec::new())
    }

    /// Lines collected by a memory sink
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Sink::Memory(lines) => Some(lines),
            _ => None,
        }
    }

    /// Check the sink can be used, without touching the filesystem
    pub fn validate(&self) -> Result<()> {
        match self {
            Sink::File(path) if path.as_os_str().is_empty() => Err(EngineError::ConfigError(
                "output must not be blank".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Human-readable target name
    pub fn describe(&self) -> String {
        match self {
            Sink::File(path) => path.display().to_string(),
            Sink::Stdout => "<stdout>".to_string(),
            Sink::Memory(_) => "<memory>".to_string(),
        }
    }

    /// Write every line as one record, replacing any previous content.
    ///
    /// Returns the number of records written.
    pub fn write_all<I>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = String>,
    {
        self.validate()?;

        match self {
            Sink::File(path) => write_file(path, lines),
            Sink::Stdout => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                let written = write_lines(&mut writer, lines)?;
                writer.flush()?;
                Ok(written)
            }
            Sink::Memory(buffer) => {
                buffer.clear();
                buffer.extend(lines);
                Ok(buffer.len())
            }
        }
    }
}

fn write_lines<W, I>(writer: &mut W, lines: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;
    for line in lines {
        writeln!(writer, "{line}")?;
        written += 1;
    }
    Ok(written)
}

/// Create the temporary file that will later be persisted over `target`.
///
/// The file lands in the target's directory so the final rename stays on
/// one filesystem. It gets the permissions of an existing target, or the
/// mode a plain create would give (0o666 minus the umask) for a new one.
pub fn staging_file_for(target: &Path) -> io::Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".wordfreq-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The umask still applies to the requested mode
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;

    if let Ok(metadata) = fs::metadata(target) {
        staged.as_file().set_permissions(metadata.permissions())?;
    }

    Ok(staged)
}

fn write_file<I>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = String>,
{
    let io_error =
        |e: io::Error| EngineError::IoError(format!("Failed to write {}: {e}", path.display()));

    let mut staged = staging_file_for(path).map_err(io_error)?;
    log::debug!(
        "staging output for {} at {}",
        path.display(),
        staged.path().display()
    );

    let written = {
        let mut writer = BufWriter::new(staged.as_file_mut());
        let written = write_lines(&mut writer, lines)?;
        writer.flush().map_err(io_error)?;
        written
    };
    staged.as_file().sync_all().map_err(io_error)?;

    staged.persist(path).map_err(|e| io_error(e.error))?;
    log::debug!("persisted {written} records to {}", path.display());

    Ok(written)
}
