//! Concurrent conversion pipeline for t6conv.
//!
//! - [`convert_directory`] - Converts every price file below a directory
//! - [`convert_file`] - Reads and parses a single file
//! - [`ConvertConfig`] - Directories, resolution, layout, pool size, failure policy
//! - [`CancelSignal`] - One-shot cooperative cancellation
//! - [`ConversionObserver`] - Progress hooks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dan-lind/t6conv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cancel;
mod config;
mod coordinator;
mod discover;
mod worker;

pub use cancel::CancelSignal;
pub use config::{ConvertConfig, DEFAULT_WORKERS, FailurePolicy};
pub use coordinator::{
    ConversionObserver, ConversionSummary, FailedFile, NoopObserver, PipelineState,
    convert_directory,
};
pub use discover::is_price_file;
pub use worker::convert_file;
