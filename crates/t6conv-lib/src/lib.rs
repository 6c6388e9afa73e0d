//! Convert minute and daily price text files into Zorro `.t6` binary files.
//!
//! This is a facade crate that re-exports functionality from the t6conv
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use t6conv_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConvertConfig::new("data/minute", "data/t6")
//!         .with_resolution(Resolution::Minute)
//!         .with_layout(RecordLayout::Zorro);
//!
//!     let summary = convert_directory(&config, Arc::new(NoopObserver)).await?;
//!     println!("Wrote {} files", summary.outputs_written);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dan-lind/t6conv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use t6conv_types::*;

// Re-export readers
#[cfg(feature = "read")]
pub use t6conv_read::{
    ReadError, Table, lenient_f32, lenient_trimmed_f32, parse_daily_rows, parse_minute_rows,
    parse_rows, read_table, read_table_from,
};

// Re-export encoders and formatters
#[cfg(feature = "format")]
pub use t6conv_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, RecordLayout,
    T6_EXTENSION, T6Formatter, WriteFailure, WriteReport, WrittenFile, base_name_of,
    decode_records, output_path, read_t6, write_partitions,
};

// Re-export the pipeline
#[cfg(feature = "pipeline")]
pub use t6conv_pipeline::{
    CancelSignal, ConversionObserver, ConversionSummary, ConvertConfig, DEFAULT_WORKERS,
    FailedFile, FailurePolicy, NoopObserver, PipelineState, convert_directory, convert_file,
    is_price_file,
};

/// Prelude module for convenient imports.
///
/// ```
/// use t6conv_lib::prelude::*;
/// ```
pub mod prelude {
    pub use t6conv_types::{
        PriceRecord, Resolution, Result, T6Error, YearPartitions, decode_date, encode_date,
    };

    #[cfg(feature = "read")]
    pub use t6conv_read::{parse_rows, read_table};

    #[cfg(feature = "format")]
    pub use t6conv_format::{
        CsvFormatter, Formatter, JsonFormatter, RecordLayout, T6Formatter, read_t6,
    };

    #[cfg(feature = "pipeline")]
    pub use t6conv_pipeline::{
        ConversionObserver, ConversionSummary, ConvertConfig, FailurePolicy, NoopObserver,
        convert_directory,
    };
}
