//! Error types for t6conv.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for t6conv operations.
pub type Result<T> = std::result::Result<T, T6Error>;

/// Errors that can occur while converting price files.
#[derive(Error, Debug)]
pub enum T6Error {
    /// Input file could not be opened or read as a delimited table.
    #[error("Read error: {0}")]
    Read(String),

    /// A row's date or time could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Binary encoding or decoding failed.
    #[error("Format error: {0}")]
    Format(String),

    /// Walking the input directory failed.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// A background task panicked or was aborted.
    #[error("Task error: {0}")]
    Task(String),

    /// A file-level failure, tagged with the offending input path.
    #[error("{}: {source}", path.display())]
    File {
        /// The input file that failed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<T6Error>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl T6Error {
    /// Wraps this error with the input path it belongs to.
    #[must_use]
    pub fn for_file(self, path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
