//! Line sources
//!
//! An [`Input`] turns into a lazy [`LineStream`]: one `String` per record,
//! without the `\n` or `\r\n` terminator. Multiple files are read one after
//! another, each contributing its own lines.

use crate::error::{EngineError, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Lazy sequence of input lines
pub type LineStream = Box<dyn Iterator<Item = Result<String>> + Send>;

/// Locator that selects standard input
pub const STDIN_LOCATOR: &str = "-";

/// Unified input abstraction
pub enum Input {
    /// In-memory text
    Text(String),
    /// A single local file
    File(PathBuf),
    /// Several local files, read in order
    Files(Vec<PathBuf>),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, pipes, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Files(paths) => f.debug_tuple("Files").field(paths).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from several file paths
    pub fn from_files(paths: Vec<PathBuf>) -> Self {
        Input::Files(paths)
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Create input from standard input
    pub fn stdin() -> Self {
        Input::from_reader(io::stdin())
    }

    /// Interpret a resource locator.
    ///
    /// `-` is standard input; anything else is a local file path. Remote
    /// locators (`scheme://...`) are rejected.
    pub fn from_locator(locator: &str) -> Result<Self> {
        if locator.is_empty() {
            return Err(EngineError::ConfigError(
                "input must not be blank".to_string(),
            ));
        }
        if locator == STDIN_LOCATOR {
            return Ok(Input::stdin());
        }
        if is_remote_locator(locator) {
            return Err(EngineError::UnsupportedLocator {
                locator: locator.to_string(),
            });
        }
        Ok(Input::from_file(locator))
    }

    /// Open the input and return its lines.
    ///
    /// Files are opened eagerly so a missing file fails here rather than
    /// halfway through a run.
    pub fn lines(self) -> Result<LineStream> {
        match self {
            Input::Text(text) => Ok(reader_lines(Cursor::new(text.into_bytes()), "<text>")),
            Input::Bytes(bytes) => Ok(reader_lines(Cursor::new(bytes), "<bytes>")),
            Input::Reader(reader) => Ok(reader_lines(BufReader::new(reader), "<stream>")),
            Input::File(path) => {
                let reader = open(&path)?;
                Ok(reader_lines(reader, path.display().to_string()))
            }
            Input::Files(paths) => {
                let readers = paths
                    .into_iter()
                    .map(|path| open(&path).map(|reader| (path, reader)))
                    .collect::<Result<Vec<_>>>()?;

                Ok(Box::new(readers.into_iter().flat_map(|(path, reader)| {
                    reader_lines(reader, path.display().to_string())
                })))
            }
        }
    }

    /// Get the estimated size of the input in bytes (if available)
    ///
    /// Used for adaptive mode selection. Streams return None.
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => file_size(path),
            Input::Files(paths) => paths
                .iter()
                .map(|path| file_size(path))
                .sum::<Option<usize>>(),
            Input::Reader(_) => None,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<PathBuf>> for Input {
    fn from(paths: Vec<PathBuf>) -> Self {
        Input::Files(paths)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// Whether `locator` has a URI scheme such as `gs://` or `s3://`
pub fn is_remote_locator(locator: &str) -> bool {
    match locator.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| EngineError::IoError(format!("Failed to open {}: {e}", path.display())))
}

fn file_size(path: &Path) -> Option<usize> {
    fs::metadata(path).ok().map(|m| m.len() as usize)
}

fn reader_lines<R, S>(reader: R, source: S) -> LineStream
where
    R: BufRead + Send + 'static,
    S: Into<String>,
{
    let source = source.into();
    Box::new(reader.lines().map(move |line| {
        line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                EngineError::EncodingError(format!("Invalid UTF-8 in {source}: {e}"))
            }
            _ => EngineError::IoError(format!("Failed to read {source}: {e}")),
        })
    }))
}
