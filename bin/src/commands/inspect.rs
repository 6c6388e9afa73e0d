//! Inspect command implementation.

use crate::display::InspectFormat;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use t6conv_lib::prelude::*;

/// Decode a `.t6` file and print its records to stdout.
pub(crate) fn inspect(
    file: &Path,
    layout: RecordLayout,
    limit: Option<usize>,
    format: InspectFormat,
    header: bool,
) -> Result<()> {
    let records = read_t6(file, layout)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let shown = &records[..limit.map_or(records.len(), |n| n.min(records.len()))];

    let mut writer = BufWriter::new(io::stdout());
    match format {
        InspectFormat::Csv => CsvFormatter::new()
            .with_header(header)
            .write_records(shown, &mut writer)?,
        InspectFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_records(shown, &mut writer)?,
        InspectFormat::Ndjson => JsonFormatter::ndjson().write_records(shown, &mut writer)?,
    }
    writer.flush()?;

    Ok(())
}
