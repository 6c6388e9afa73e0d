//! Per-year `.t6` file writer.

use std::fs::File;
use std::path::{Path, PathBuf};
use t6conv_types::{DAILY_PARTITION, PriceRecord, Resolution, YearPartitions};
use tracing::{debug, warn};

use crate::{FormatError, Formatter, RecordLayout, T6Formatter};

/// File extension of binary output files.
pub const T6_EXTENSION: &str = "t6";

/// An output file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path of the output file.
    pub path: PathBuf,
    /// Number of records written.
    pub records: usize,
}

/// An output file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    /// Path of the output file.
    pub path: PathBuf,
    /// Rendered error message.
    pub error: String,
}

/// Outcome of writing one input file's partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files written.
    pub written: Vec<WrittenFile>,
    /// Files that failed; the remaining partitions were still attempted.
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    /// Returns the number of records written across all files.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.written.iter().map(|f| f.records).sum()
    }

    /// Returns true if every output file was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Returns the base name used for an input file's outputs (its file stem).
#[must_use]
pub fn base_name_of(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the output path for one partition.
///
/// Daily output is `<dir>/<base>.t6`; minute output is `<dir>/<base>_<year>.t6`.
#[must_use]
pub fn output_path(output_dir: &Path, base_name: &str, year: Option<i32>) -> PathBuf {
    match year {
        Some(year) => output_dir.join(format!("{base_name}_{year}.{T6_EXTENSION}")),
        None => output_dir.join(format!("{base_name}.{T6_EXTENSION}")),
    }
}

/// Writes the partitions of one input file as `.t6` files.
///
/// Every partition is sorted newest first before writing. Daily conversions
/// produce a single file from the synthetic partition; minute conversions
/// produce one file per year. Existing files are overwritten.
///
/// A failure on one file is logged and recorded in the report; the remaining
/// partitions are still written.
pub fn write_partitions(
    mut partitions: YearPartitions,
    output_dir: &Path,
    base_name: &str,
    resolution: Resolution,
    layout: RecordLayout,
) -> WriteReport {
    partitions.sort_descending();
    let formatter = T6Formatter::new().with_layout(layout);
    let mut report = WriteReport::default();

    if resolution.is_daily() {
        let records = partitions.get(DAILY_PARTITION).unwrap_or_default();
        let path = output_path(output_dir, base_name, None);
        write_one(&formatter, records, path, &mut report);
    } else {
        for (year, records) in partitions.iter() {
            let path = output_path(output_dir, base_name, Some(year));
            write_one(&formatter, records, path, &mut report);
        }
    }

    report
}

fn write_one(
    formatter: &T6Formatter,
    records: &[PriceRecord],
    path: PathBuf,
    report: &mut WriteReport,
) {
    let result = File::create(&path)
        .map_err(FormatError::from)
        .and_then(|file| formatter.write_records(records, file));

    match result {
        Ok(()) => {
            debug!(path = %path.display(), records = records.len(), "wrote t6 file");
            report.written.push(WrittenFile {
                path,
                records: records.len(),
            });
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write t6 file");
            report.failures.push(WriteFailure {
                path,
                error: e.to_string(),
            });
        }
    }
}
