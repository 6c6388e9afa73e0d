//! Display utilities and argument enums for the t6conv CLI.

use clap::ValueEnum;
use std::time::Duration;

/// Text format for `inspect`.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum InspectFormat {
    Csv,
    Json,
    Ndjson,
}

/// Formats an elapsed time as `1m 02.345s` or `2.345s`.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let millis = elapsed.subsec_millis();
    if secs >= 60 {
        format!("{}m {:02}.{:03}s", secs / 60, secs % 60, millis)
    } else {
        format!("{secs}.{millis:03}s")
    }
}
