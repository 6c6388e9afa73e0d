//! Daily-resolution reader.

use chrono::{Datelike, NaiveDate};
use t6conv_types::{PriceRecord, YearPartitions, encode_date};

use crate::{ReadError, fields::column};

/// Date format (`YYYYMMDD`).
const DATE_FORMAT: &str = "%Y%m%d";

/// Number of columns in a row that carries a volume.
const COLUMNS_WITH_VOLUME: usize = 6;

/// Parses daily bars into a single partition.
///
/// Each row is `date,open,high,low,close[,volume]`. Row 0 is a header and is
/// always skipped, whatever it contains. Numeric cells are trimmed before
/// parsing. The volume is only read when the row has exactly six columns.
///
/// Every record lands under [`t6conv_types::DAILY_PARTITION`], with its
/// calendar year stored in [`PriceRecord::value`].
///
/// # Errors
///
/// Fails the whole table if any row's date cannot be parsed.
pub fn parse_daily_rows(rows: &[Vec<String>]) -> Result<YearPartitions, ReadError> {
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));

    for (i, row) in rows.iter().enumerate().skip(1) {
        let Some(cell) = row.first() else {
            return Err(ReadError::MissingDate { row: i, columns: 0 });
        };

        let date = cell.trim();
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            ReadError::RowParse {
                row: i,
                value: date.to_string(),
                source,
            }
        })?;

        let volume = if row.len() == COLUMNS_WITH_VOLUME {
            column(row, 5, true)
        } else {
            0.0
        };

        let record = PriceRecord::new(
            encode_date(parsed.and_time(chrono::NaiveTime::MIN).and_utc()),
            column(row, 1, true),
            column(row, 2, true),
            column(row, 3, true),
            column(row, 4, true),
            volume,
        )
        .with_value(parsed.year() as f32);

        records.push(record);
    }

    Ok(YearPartitions::daily(records))
}
