//! Conversion configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use t6conv_format::RecordLayout;
use t6conv_types::Resolution;

/// Number of worker tasks reading and parsing files.
pub const DEFAULT_WORKERS: usize = 8;

/// What to do when a file fails to read or parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Cancel the whole batch on the first failing file and return its error.
    #[default]
    AbortBatch,
    /// Skip the failing file, convert the rest and list it in the summary.
    SkipFile,
}

/// Configuration for a directory conversion.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory searched (recursively) for `.txt` and `.csv` files.
    pub input_dir: PathBuf,
    /// Directory receiving the `.t6` files. Created if missing.
    pub output_dir: PathBuf,
    /// Input resolution.
    pub resolution: Resolution,
    /// Output record layout.
    pub layout: RecordLayout,
    /// Number of worker tasks.
    pub workers: usize,
    /// Failure handling.
    pub failure_policy: FailurePolicy,
}

impl ConvertConfig {
    /// Creates a minute-resolution configuration with default settings.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            resolution: Resolution::Minute,
            layout: RecordLayout::Packed,
            workers: DEFAULT_WORKERS,
            failure_policy: FailurePolicy::AbortBatch,
        }
    }

    /// Sets the input resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the output record layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the number of worker tasks (at least one is always used).
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
