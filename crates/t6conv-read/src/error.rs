//! Reader errors.

use thiserror::Error;

/// Errors that can occur while loading or parsing a price table.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be split into records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// A row's date (or date and time) could not be parsed.
    #[error("Failed to parse time for record {row}: {value:?}: {source}")]
    RowParse {
        /// Zero-based row index within the file.
        row: usize,
        /// The text that failed to parse.
        value: String,
        /// The underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },

    /// A minute row's date or time cell has leading or trailing whitespace.
    #[error("Failed to parse time for record {row}: {value:?} has surrounding whitespace")]
    PaddedDate {
        /// Zero-based row index within the file.
        row: usize,
        /// The offending cell.
        value: String,
    },

    /// A row has no date column (or no time column in minute files).
    #[error("Record {row} has {columns} column(s), too few for a date")]
    MissingDate {
        /// Zero-based row index within the file.
        row: usize,
        /// Number of columns present.
        columns: usize,
    },
}
