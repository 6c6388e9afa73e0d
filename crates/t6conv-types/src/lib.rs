//! Core types for the t6conv price data converter.
//!
//! This crate provides the fundamental data structures used throughout t6conv:
//!
//! - [`PriceRecord`] - A single bar with its fractional day-count date
//! - [`YearPartitions`] - Records of one input file grouped by year
//! - [`Resolution`] - Minute or daily input resolution
//! - [`encode_date`] / [`decode_date`] - The day-count date codec

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dan-lind/t6conv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod error;
mod partition;
mod record;
mod resolution;

pub use date::{SECONDS_PER_DAY, UNIX_EPOCH_DAYS, decode_date, encode_date};
pub use error::{Result, T6Error};
pub use partition::{DAILY_PARTITION, YearPartitions};
pub use record::PriceRecord;
pub use resolution::{Resolution, ResolutionParseError};
