//! Pipeline coordinator: discovery, worker pool, reducer and write stage.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use t6conv_format::{WriteReport, base_name_of, write_partitions};
use t6conv_types::T6Error;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::discover::spawn_discovery;
use crate::worker::{FileOutcome, run_worker};
use crate::{CancelSignal, ConvertConfig, FailurePolicy};

/// Capacity of the discovery queue. Discovery stays just ahead of the workers.
const PATH_QUEUE_CAPACITY: usize = 1;

/// Lifecycle of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PipelineState {
    /// Nothing started yet.
    #[default]
    Idle,
    /// Discovery and workers are running.
    Working,
    /// A fatal error fired cancellation; in-flight work is draining.
    Draining,
    /// All tasks finished.
    Done,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Working => "working",
            Self::Draining => "draining",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Hooks called as a conversion progresses.
///
/// All methods default to no-ops. Write hooks run on the blocking pool.
pub trait ConversionObserver: Send + Sync {
    /// An input file was parsed successfully.
    fn file_converted(&self, _path: &Path, _records: usize) {}

    /// An input file failed to read or parse.
    fn file_failed(&self, _path: &Path, _error: &T6Error) {}

    /// The outputs of one input file were written.
    fn outputs_written(&self, _report: &WriteReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {}

/// A file that could not be converted or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    /// Input path (conversion failures) or output path (write failures).
    pub path: PathBuf,
    /// Rendered error message.
    pub error: String,
}

/// Totals for a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Input files parsed successfully.
    pub files_converted: usize,
    /// Input files skipped under [`FailurePolicy::SkipFile`].
    pub files_failed: Vec<FailedFile>,
    /// Output files written.
    pub outputs_written: usize,
    /// Output files that could not be written.
    pub write_failures: Vec<FailedFile>,
    /// Records written across all outputs.
    pub records_written: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl ConversionSummary {
    /// Returns true if every file was converted and written.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files_failed.is_empty() && self.write_failures.is_empty()
    }

    fn absorb(&mut self, report: WriteReport) {
        self.outputs_written += report.written.len();
        self.records_written += report.records_written();
        self.write_failures
            .extend(report.failures.into_iter().map(|f| FailedFile {
                path: f.path,
                error: f.error,
            }));
    }
}

/// Converts every `.txt`/`.csv` file below `config.input_dir`.
///
/// Files are discovered, parsed by a pool of `config.workers` tasks and
/// written as they complete, so writing overlaps parsing. Output files are
/// produced in no particular order across inputs.
///
/// Under [`FailurePolicy::AbortBatch`] the first failing file cancels the run:
/// no new files are started, results already in flight are discarded, writes
/// already started are allowed to finish, and the file's error is returned.
/// Write failures never abort the run; they are listed in the summary.
///
/// # Errors
///
/// Returns the first file error (under `AbortBatch`), a discovery error if the
/// input tree could not be walked, or an I/O error if the output directory
/// cannot be created.
pub async fn convert_directory(
    config: &ConvertConfig,
    observer: Arc<dyn ConversionObserver>,
) -> Result<ConversionSummary, T6Error> {
    let start = Instant::now();
    let mut state = PipelineState::Idle;
    debug!(%state, input = %config.input_dir.display(), "starting conversion");

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let cancel = CancelSignal::new();
    let workers = config.workers.max(1);

    let (path_tx, path_rx) = mpsc::channel(PATH_QUEUE_CAPACITY);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FileOutcome>(workers);

    let discovery = spawn_discovery(config.input_dir.clone(), path_tx, cancel.clone());

    let path_rx = Arc::new(Mutex::new(path_rx));
    let mut pool = JoinSet::new();
    for id in 0..workers {
        pool.spawn(run_worker(
            id,
            Arc::clone(&path_rx),
            outcome_tx.clone(),
            config.resolution,
            cancel.clone(),
        ));
    }
    // Only the workers may hold these, so the channels close when they finish.
    drop(path_rx);
    drop(outcome_tx);

    state = PipelineState::Working;
    debug!(%state, workers, "pipeline running");

    let mut writes = JoinSet::new();
    let mut summary = ConversionSummary::default();
    let mut fatal: Option<T6Error> = None;

    while let Some(FileOutcome { path, result }) = outcome_rx.recv().await {
        if fatal.is_some() {
            debug!(path = %path.display(), "discarding result after cancellation");
            continue;
        }

        match result {
            Ok(partitions) => {
                summary.files_converted += 1;
                observer.file_converted(&path, partitions.total_records());

                let output_dir = config.output_dir.clone();
                let base_name = base_name_of(&path);
                let resolution = config.resolution;
                let layout = config.layout;
                let observer = Arc::clone(&observer);
                writes.spawn_blocking(move || {
                    let report =
                        write_partitions(partitions, &output_dir, &base_name, resolution, layout);
                    observer.outputs_written(&report);
                    report
                });
            }
            Err(e) => {
                observer.file_failed(&path, &e);
                let e = e.for_file(&path);
                match config.failure_policy {
                    FailurePolicy::AbortBatch => {
                        debug!(error = %e, "conversion failed, cancelling batch");
                        cancel.cancel();
                        state = PipelineState::Draining;
                        debug!(%state, "draining in-flight work");
                        fatal = Some(e);
                    }
                    FailurePolicy::SkipFile => {
                        warn!(error = %e, "skipping file");
                        summary.files_failed.push(FailedFile {
                            path,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }
    }

    while let Some(joined) = pool.join_next().await {
        if let Err(e) = joined {
            warn!(error = %e, "worker task failed");
        }
    }

    while let Some(joined) = writes.join_next().await {
        match joined {
            Ok(report) => summary.absorb(report),
            Err(e) => return Err(T6Error::Task(format!("write task failed: {e}"))),
        }
    }

    let walked = discovery
        .await
        .map_err(|e| T6Error::Task(format!("discovery task failed: {e}")))?;

    state = PipelineState::Done;
    summary.elapsed = start.elapsed();
    debug!(%state, elapsed = ?summary.elapsed, "pipeline finished");

    if let Some(e) = fatal {
        return Err(e);
    }
    let discovered = walked?;
    debug!(discovered, converted = summary.files_converted, "conversion complete");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use t6conv_format::{RecordLayout, read_t6};
    use t6conv_types::{Resolution, encode_date};
    use tempfile::TempDir;

    const MINUTE: &str = include_str!("../../../testdata/1min.csv");
    const DAILY: &str = include_str!("../../../testdata/daily.csv");

    fn write_input(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    fn noop() -> Arc<dyn ConversionObserver> {
        Arc::new(NoopObserver)
    }

    #[tokio::test]
    async fn test_minute_end_to_end() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "1min.csv", MINUTE);

        let config = ConvertConfig::new(input.path(), output.path());
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.files_converted, 1);
        assert_eq!(summary.outputs_written, 2);
        assert_eq!(summary.records_written, 20);
        assert!(summary.is_clean());

        let y2014 = read_t6(output.path().join("1min_2014.t6"), RecordLayout::Packed).unwrap();
        assert_eq!(y2014.len(), 18);
        let newest = Utc.with_ymd_and_hms(2014, 1, 2, 9, 47, 0).unwrap();
        assert_eq!(y2014[0].timestamp(), Some(newest));
        assert_eq!(y2014[0].open, 38.67);
        assert_eq!(y2014[0].high, 38.68);
        assert_eq!(y2014[0].low, 38.61);
        assert_eq!(y2014[0].close, 38.61);
        assert_eq!(y2014[0].volume, 7784.0);
        assert!(y2014.windows(2).all(|w| w[0].date > w[1].date));

        let y2015 = read_t6(output.path().join("1min_2015.t6"), RecordLayout::Packed).unwrap();
        assert_eq!(y2015.len(), 2);
        let newest = Utc.with_ymd_and_hms(2015, 1, 2, 9, 49, 0).unwrap();
        assert_eq!(y2015[0].timestamp(), Some(newest));
        assert_eq!(y2015[0].open, 38.59);
        assert_eq!(y2015[0].volume, 1762.0);
    }

    #[tokio::test]
    async fn test_daily_end_to_end() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "daily.csv", DAILY);

        let config = ConvertConfig::new(input.path(), output.path())
            .with_resolution(Resolution::Daily)
            .with_layout(RecordLayout::Zorro);
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.outputs_written, 1);
        let records = read_t6(output.path().join("daily.t6"), RecordLayout::Zorro).unwrap();
        assert_eq!(records.len(), 19);

        let oldest = records[18];
        let expected = Utc.with_ymd_and_hms(2001, 5, 11, 0, 0, 0).unwrap();
        assert_eq!(oldest.date, encode_date(expected));
        assert_eq!(oldest.open, 420.81);
        assert_eq!(oldest.volume, 0.0);
        assert_eq!(oldest.value, 2001.0);
    }

    #[tokio::test]
    async fn test_bad_file_aborts_with_single_error() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "good.csv", MINUTE);
        for i in 0..3 {
            write_input(
                input.path(),
                &format!("bad{i}.csv"),
                "20140102,09:30,1,1,1,1,1\n2014-01-02,09:31,1,1,1,1,1\n",
            );
        }

        let config = ConvertConfig::new(input.path(), output.path()).with_workers(2);
        let err = convert_directory(&config, noop()).await.unwrap_err();

        match err {
            T6Error::File { path, source } => {
                assert!(path.file_name().unwrap().to_string_lossy().starts_with("bad"));
                assert!(matches!(*source, T6Error::Parse(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_abort_reports_one_failure() {
        #[derive(Default)]
        struct Failures(AtomicUsize);

        impl ConversionObserver for Failures {
            fn file_failed(&self, _path: &Path, _error: &T6Error) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        for i in 0..4 {
            write_input(input.path(), &format!("bad{i}.csv"), "2014-01-02,09:31,1,1,1,1,1\n");
        }

        let failures = Arc::new(Failures::default());
        let config = ConvertConfig::new(input.path(), output.path()).with_workers(4);
        assert!(convert_directory(&config, failures.clone()).await.is_err());
        assert_eq!(failures.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_skip_file_policy_converts_the_rest() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "good.csv", MINUTE);
        write_input(input.path(), "bad.csv", "garbage,row\n");

        let config = ConvertConfig::new(input.path(), output.path())
            .with_failure_policy(FailurePolicy::SkipFile);
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.files_converted, 1);
        assert_eq!(summary.files_failed.len(), 1);
        assert!(summary.files_failed[0].path.ends_with("bad.csv"));
        assert!(!summary.is_clean());
        assert!(output.path().join("good_2014.t6").is_file());
        assert!(output.path().join("good_2015.t6").is_file());
    }

    #[tokio::test]
    async fn test_missing_input_dir_reports_discovery_error() {
        let root = TempDir::new().unwrap();
        let config = ConvertConfig::new(root.path().join("missing"), root.path().join("out"));

        let err = convert_directory(&config, noop()).await.unwrap_err();
        assert!(matches!(err, T6Error::Discovery(_)));
    }

    #[tokio::test]
    async fn test_many_files_small_pool() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        for i in 0..25 {
            write_input(
                input.path(),
                &format!("sub{}/file{i}.TXT", i % 3),
                &format!("2014010{},09:30,1,1,1,1,{i}\n", 1 + i % 9),
            );
        }
        write_input(input.path(), "ignored.md", "not a price file");

        let config = ConvertConfig::new(input.path(), output.path()).with_workers(3);
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.files_converted, 25);
        assert_eq!(summary.outputs_written, 25);
        assert!(output.path().join("file7_2014.t6").is_file());
        assert!(!output.path().join("ignored_2014.t6").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_not_fatal() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "1min.csv", MINUTE);
        std::fs::create_dir(output.path().join("1min_2014.t6")).unwrap();

        let config = ConvertConfig::new(input.path(), output.path());
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.outputs_written, 1);
        assert_eq!(summary.write_failures.len(), 1);
        assert!(output.path().join("1min_2015.t6").is_file());
    }

    #[tokio::test]
    async fn test_observer_sees_every_file() {
        #[derive(Default)]
        struct Counter {
            converted: AtomicUsize,
            written: AtomicUsize,
        }

        impl ConversionObserver for Counter {
            fn file_converted(&self, _path: &Path, _records: usize) {
                self.converted.fetch_add(1, Ordering::SeqCst);
            }

            fn outputs_written(&self, report: &WriteReport) {
                self.written.fetch_add(report.written.len(), Ordering::SeqCst);
            }
        }

        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_input(input.path(), "a.csv", MINUTE);
        write_input(input.path(), "b.csv", MINUTE);

        let counter = Arc::new(Counter::default());
        let config = ConvertConfig::new(input.path(), output.path());
        convert_directory(&config, counter.clone()).await.unwrap();

        assert_eq!(counter.converted.load(Ordering::SeqCst), 2);
        assert_eq!(counter.written.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let config = ConvertConfig::new(input.path(), output.path());
        let summary = convert_directory(&config, noop()).await.unwrap();

        assert_eq!(summary.files_converted, 0);
        assert_eq!(summary.outputs_written, 0);
    }
}
