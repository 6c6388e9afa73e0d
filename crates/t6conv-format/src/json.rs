//! JSON output format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use t6conv_types::PriceRecord;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Each record is emitted with its decoded `timestamp` next to the raw fields.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

#[derive(Serialize)]
struct RecordRow<'a> {
    timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    record: &'a PriceRecord,
}

impl<'a> From<&'a PriceRecord> for RecordRow<'a> {
    fn from(record: &'a PriceRecord) -> Self {
        Self {
            timestamp: record.timestamp(),
            record,
        }
    }
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                let rows: Vec<RecordRow<'_>> = records.iter().map(RecordRow::from).collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &rows)?;
                } else {
                    serde_json::to_writer(&mut writer, &rows)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, &RecordRow::from(record))?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    fn create_test_record() -> PriceRecord {
        let timestamp = Utc.with_ymd_and_hms(2014, 1, 2, 9, 30, 0).unwrap();
        PriceRecord::at(timestamp, 38.5, 38.75, 38.25, 38.5, 67004.0)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let records = vec![create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"open\":38.5"));
        assert!(result.contains("\"timestamp\":\"2014-01-02T09:30:00Z\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let records = vec![create_test_record(), create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let records = vec![create_test_record()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&records, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }
}
