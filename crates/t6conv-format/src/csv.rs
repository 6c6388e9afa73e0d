//! CSV rendering of decoded records.

use std::io::Write;
use t6conv_types::PriceRecord;

use crate::{FormatError, Formatter};

/// Column names, in output order.
const HEADER: &str = "timestamp,date,open,high,low,close,volume,value";

/// CSV formatter.
///
/// Each row carries the decoded UTC timestamp next to the raw day-count date,
/// so a `.t6` file can be checked against its source without recomputing
/// dates by hand. Undecodable dates leave the timestamp cell empty.
#[derive(Debug, Clone, Copy)]
pub struct CsvFormatter {
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a CSV formatter that writes a header row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_header {
            writeln!(writer, "{HEADER}")?;
        }

        for r in records {
            if let Some(t) = r.timestamp() {
                write!(writer, "{}", t.format("%Y-%m-%dT%H:%M:%SZ"))?;
            }
            writeln!(
                writer,
                ",{},{},{},{},{},{},{}",
                r.date, r.open, r.high, r.low, r.close, r.volume, r.value
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
