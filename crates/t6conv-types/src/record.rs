//! Price record representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{decode_date, encode_date};

/// A single price bar as stored in a `.t6` file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Fractional day count since 1899-12-30 (UTC).
    pub date: f64,
    /// Opening price.
    pub open: f32,
    /// Highest price.
    pub high: f32,
    /// Lowest price.
    pub low: f32,
    /// Closing price.
    pub close: f32,
    /// Units traded; zero when unavailable.
    pub volume: f32,
    /// Auxiliary value. Daily conversions store the calendar year here.
    pub value: f32,
}

impl PriceRecord {
    /// Creates a new record with a zero auxiliary value.
    #[must_use]
    pub const fn new(date: f64, open: f32, high: f32, low: f32, close: f32, volume: f32) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            value: 0.0,
        }
    }

    /// Creates a record whose date is encoded from a UTC timestamp.
    #[must_use]
    pub fn at(time: DateTime<Utc>, open: f32, high: f32, low: f32, close: f32, volume: f32) -> Self {
        Self::new(encode_date(time), open, high, low, close, volume)
    }

    /// Sets the auxiliary value.
    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Returns the record date as a UTC timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        decode_date(self.date)
    }
}
