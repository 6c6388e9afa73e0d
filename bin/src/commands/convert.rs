//! Convert command implementation.
//!
//! Walks an input directory, converts every price file and reports progress
//! on a spinner.

use crate::display::format_elapsed;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use t6conv_lib::prelude::*;
use t6conv_lib::WriteReport;
use tracing::info;

/// Drives the spinner from pipeline events.
struct SpinnerObserver {
    progress: ProgressBar,
}

impl ConversionObserver for SpinnerObserver {
    fn file_converted(&self, path: &Path, records: usize) {
        self.progress.inc(1);
        self.progress
            .set_message(format!("{} ({records} records)", path.display()));
    }

    fn file_failed(&self, path: &Path, error: &T6Error) {
        self.progress
            .println(format!("  Failed: {}: {error}", path.display()));
    }

    fn outputs_written(&self, report: &WriteReport) {
        for failure in &report.failures {
            self.progress.println(format!(
                "  Write failed: {}: {}",
                failure.path.display(),
                failure.error
            ));
        }
    }
}

/// Convert every `.txt`/`.csv` file below `input` into `.t6` files in `output`.
pub(crate) async fn convert(
    input: PathBuf,
    output: PathBuf,
    resolution: Resolution,
    keep_going: bool,
    layout: RecordLayout,
    quiet: bool,
) -> Result<()> {
    let policy = if keep_going {
        FailurePolicy::SkipFile
    } else {
        FailurePolicy::AbortBatch
    };
    let config = ConvertConfig::new(&input, &output)
        .with_resolution(resolution)
        .with_layout(layout)
        .with_failure_policy(policy);
    info!(
        input = %input.display(),
        output = %output.display(),
        %resolution,
        %layout,
        ?policy,
        "starting conversion"
    );

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files converted {msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let observer = Arc::new(SpinnerObserver {
        progress: progress.clone(),
    });
    let result = convert_directory(&config, observer).await;
    progress.finish_and_clear();

    let summary =
        result.with_context(|| format!("Failed to convert {}", input.display()))?;
    info!(
        converted = summary.files_converted,
        failed = summary.files_failed.len(),
        outputs = summary.outputs_written,
        records = summary.records_written,
        elapsed = ?summary.elapsed,
        "conversion finished"
    );

    if !quiet {
        println!(
            "Wrote {} files ({} records) to {}",
            summary.outputs_written,
            summary.records_written,
            output.display()
        );
        if !summary.write_failures.is_empty() {
            println!("  Write failures: {}", summary.write_failures.len());
        }
    }

    if !summary.files_failed.is_empty() {
        println!("\nFailed files:");
        for (i, failed) in summary.files_failed.iter().enumerate() {
            println!("    {}: {}", i + 1, failed.error);
        }
        bail!(
            "{} out of {} files failed",
            summary.files_failed.len(),
            summary.files_failed.len() + summary.files_converted
        );
    }

    if !quiet {
        println!("All done!");
        println!("Conversion took {}", format_elapsed(summary.elapsed));
    }

    Ok(())
}
