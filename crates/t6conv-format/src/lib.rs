//! Binary `.t6` encoding and text formatters for t6conv.
//!
//! - [`RecordLayout`] - Fixed-width byte layouts for a [`PriceRecord`]
//! - [`T6Formatter`] - Little-endian binary record encoder
//! - [`decode_records`] / [`read_t6`] - Decode `.t6` data back into records
//! - [`write_partitions`] - Writes one file per year partition
//! - [`CsvFormatter`] / [`JsonFormatter`] - Text renderings for inspection
//!
//! [`PriceRecord`]: t6conv_types::PriceRecord

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dan-lind/t6conv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod layout;
mod t6;
mod writer;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter};
pub use json::{JsonFormatter, JsonStyle};
pub use layout::RecordLayout;
pub use t6::{T6Formatter, decode_records, read_t6};
pub use writer::{
    T6_EXTENSION, WriteFailure, WriteReport, WrittenFile, base_name_of, output_path,
    write_partitions,
};
