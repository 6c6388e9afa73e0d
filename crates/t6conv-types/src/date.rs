//! Fractional day-count date codec.
//!
//! Dates are stored as the number of days since 1899-12-30 (the spreadsheet
//! epoch), with the fractional part holding the time of day. Day 25569 is
//! 1970-01-01, which makes the conversion a single affine transform of the
//! Unix timestamp.

use chrono::{DateTime, Utc};

/// Day count of the Unix epoch (1970-01-01) relative to 1899-12-30.
pub const UNIX_EPOCH_DAYS: f64 = 25569.0;

/// Number of seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Encodes a UTC timestamp as a fractional day count.
///
/// Sub-second precision is dropped; the codec works at second granularity.
#[must_use]
pub fn encode_date(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 / SECONDS_PER_DAY + UNIX_EPOCH_DAYS
}

/// Decodes a fractional day count back into a UTC timestamp.
///
/// The seconds offset is rounded to the nearest whole second so that
/// `decode_date(encode_date(t)) == Some(t)` for any second-granularity `t`.
/// Returns `None` for non-finite input or values outside chrono's range.
#[must_use]
pub fn decode_date(value: f64) -> Option<DateTime<Utc>> {
    let seconds = ((value - UNIX_EPOCH_DAYS) * SECONDS_PER_DAY).round();
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0)
}
