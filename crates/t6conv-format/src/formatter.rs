//! Record formatter abstraction.

use std::io::Write;
use t6conv_types::PriceRecord;
use thiserror::Error;

/// Errors that can occur while encoding or decoding records.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown record layout name.
    #[error("Unknown record layout: {0}. Valid options: packed, zorro")]
    UnknownLayout(String),

    /// Binary data is not a whole number of records.
    #[error("Invalid data length: {0} bytes (expected multiple of {1})")]
    InvalidLength(usize, usize),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for record formatters.
///
/// Implemented by the binary [`T6Formatter`](crate::T6Formatter) and by the
/// text renderers used to inspect `.t6` files.
pub trait Formatter: Send + Sync {
    /// Writes price records to the output, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
