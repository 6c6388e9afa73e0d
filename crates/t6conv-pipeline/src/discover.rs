//! Input file discovery.

use std::path::{Path, PathBuf};
use t6conv_types::T6Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;
use walkdir::WalkDir;

use crate::CancelSignal;

/// Returns true if the file name ends in `.txt` or `.csv` (any case).
///
/// Dot-files such as `.csv` match too.
#[must_use]
pub fn is_price_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy().to_ascii_lowercase();
        name.ends_with(".txt") || name.ends_with(".csv")
    })
}

/// Walks `root` on the blocking pool and sends every price file on `paths`.
///
/// The walk stops early when `cancel` fires or every receiver is gone. The
/// handle resolves to the number of paths sent, or the first walk error.
pub(crate) fn spawn_discovery(
    root: PathBuf,
    paths: mpsc::Sender<PathBuf>,
    cancel: CancelSignal,
) -> JoinHandle<Result<usize, T6Error>> {
    tokio::task::spawn_blocking(move || walk(&root, &paths, &cancel))
}

fn walk(root: &Path, paths: &mpsc::Sender<PathBuf>, cancel: &CancelSignal) -> Result<usize, T6Error> {
    let mut sent = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| T6Error::Discovery(e.to_string()))?;
        if !entry.file_type().is_file() || !is_price_file(entry.path()) {
            continue;
        }

        if cancel.is_cancelled() {
            debug!(sent, "discovery cancelled");
            break;
        }
        if paths.blocking_send(entry.into_path()).is_err() {
            debug!(sent, "no workers left, discovery stopped");
            break;
        }
        sent += 1;
    }

    Ok(sent)
}
