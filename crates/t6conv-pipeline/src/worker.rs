//! Worker tasks that read and parse input files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use t6conv_read::{parse_rows, read_table};
use t6conv_types::{Resolution, T6Error, YearPartitions};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, trace};

use crate::CancelSignal;

/// Result of converting one input file, tagged with its path.
#[derive(Debug)]
pub(crate) struct FileOutcome {
    pub(crate) path: PathBuf,
    pub(crate) result: Result<YearPartitions, T6Error>,
}

/// Reads and parses one input file.
///
/// Parsing is offloaded to the blocking thread pool.
///
/// # Errors
///
/// Returns [`T6Error::Read`] if the file cannot be loaded and
/// [`T6Error::Parse`] if any row has an unparseable date.
pub async fn convert_file(path: &Path, resolution: Resolution) -> Result<YearPartitions, T6Error> {
    let rows = read_table(path)
        .await
        .map_err(|e| T6Error::Read(e.to_string()))?;

    tokio::task::spawn_blocking(move || parse_rows(&rows, resolution))
        .await
        .map_err(|e| T6Error::Task(format!("spawn_blocking failed: {e}")))?
        .map_err(|e| T6Error::Parse(e.to_string()))
}

/// Pulls paths until the queue is exhausted or cancellation fires.
pub(crate) async fn run_worker(
    id: usize,
    paths: Arc<Mutex<mpsc::Receiver<PathBuf>>>,
    outcomes: mpsc::Sender<FileOutcome>,
    resolution: Resolution,
    cancel: CancelSignal,
) {
    let mut handled = 0usize;

    loop {
        let next = {
            let mut paths = paths.lock().await;
            tokio::select! {
                biased;
                () = cancel.cancelled() => None,
                path = paths.recv() => path,
            }
        };
        let Some(path) = next else {
            break;
        };

        trace!(worker = id, path = %path.display(), "converting");
        let result = convert_file(&path, resolution).await;
        handled += 1;

        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            sent = outcomes.send(FileOutcome { path, result }) => {
                if sent.is_err() {
                    break;
                }
            }
        }
    }

    debug!(worker = id, handled, "worker finished");
}
