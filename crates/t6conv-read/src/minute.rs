//! Minute-resolution reader.

use chrono::{Datelike, NaiveDateTime};
use t6conv_types::{PriceRecord, YearPartitions, encode_date};

use crate::{ReadError, fields::column};

/// Combined date and time format (`YYYYMMDD` followed by `HH:MM`).
const DATE_TIME_FORMAT: &str = "%Y%m%d%H:%M";

/// Parses minute bars into records keyed by calendar year.
///
/// Each row is `date,time,open,high,low,close,volume` with the date as
/// `YYYYMMDD` and the time as `HH:MM`, in UTC. There is no header row.
/// Records keep their input order within a year.
///
/// # Errors
///
/// Fails the whole table if any row's date and time cannot be parsed, or if
/// either cell carries surrounding whitespace. The error carries the
/// zero-based row index.
pub fn parse_minute_rows(rows: &[Vec<String>]) -> Result<YearPartitions, ReadError> {
    let mut partitions = YearPartitions::new();

    for (i, row) in rows.iter().enumerate() {
        let (Some(date), Some(time)) = (row.first(), row.get(1)) else {
            return Err(ReadError::MissingDate {
                row: i,
                columns: row.len(),
            });
        };

        // chrono skips leading spaces in numeric fields; minute cells must be exact.
        if let Some(cell) = [date, time].into_iter().find(|c| c.trim().len() != c.len()) {
            return Err(ReadError::PaddedDate {
                row: i,
                value: cell.clone(),
            });
        }

        let stamp = format!("{date}{time}");
        let parsed = NaiveDateTime::parse_from_str(&stamp, DATE_TIME_FORMAT).map_err(|source| {
            ReadError::RowParse {
                row: i,
                value: stamp.clone(),
                source,
            }
        })?;
        let parsed = parsed.and_utc();

        let record = PriceRecord::new(
            encode_date(parsed),
            column(row, 2, false),
            column(row, 3, false),
            column(row, 4, false),
            column(row, 5, false),
            column(row, 6, false),
        );
        partitions.push(parsed.year(), record);
    }

    Ok(partitions)
}
