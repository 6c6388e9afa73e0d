//! Delimited text readers for the t6conv price data converter.
//!
//! This crate turns input files into [`YearPartitions`]:
//!
//! - [`read_table`] - Loads a comma-separated file into rows of string cells
//! - [`parse_minute_rows`] - Minute-resolution reader, keyed by calendar year
//! - [`parse_daily_rows`] - Daily-resolution reader, single synthetic key
//! - [`parse_rows`] - Dispatches on [`Resolution`]
//!
//! Numeric cells are parsed leniently: an unparseable price or volume becomes
//! zero. Only an unparseable date (or time) fails the file.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dan-lind/t6conv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod daily;
mod error;
mod fields;
mod minute;
mod table;

pub use daily::parse_daily_rows;
pub use error::ReadError;
pub use fields::{lenient_f32, lenient_trimmed_f32};
pub use minute::parse_minute_rows;
pub use table::{Table, read_table, read_table_from};

use t6conv_types::{Resolution, YearPartitions};

/// Parses a table with the reader matching `resolution`.
///
/// # Errors
///
/// Returns [`ReadError::RowParse`], [`ReadError::PaddedDate`] or
/// [`ReadError::MissingDate`] if any row's date cannot be parsed; no partial result is returned.
pub fn parse_rows(rows: &[Vec<String>], resolution: Resolution) -> Result<YearPartitions, ReadError> {
    match resolution {
        Resolution::Minute => parse_minute_rows(rows),
        Resolution::Daily => parse_daily_rows(rows),
    }
}
