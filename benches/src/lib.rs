//! Synthetic inputs for t6conv benchmarks.

use chrono::{Duration, TimeZone, Utc};
use std::fmt::Write as _;
use t6conv_read::Table;
use t6conv_types::PriceRecord;

/// First bar of every generated series.
const SERIES_START: (i32, u32, u32) = (2013, 12, 30);

/// Builds `n` minute rows (`date,time,o,h,l,c,v`) starting at the series start.
///
/// Rows are one minute apart, so long series cross into the next year.
pub fn minute_rows(n: usize) -> Table {
    let (y, m, d) = SERIES_START;
    let start = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or_default();

    (0..n)
        .map(|i| {
            let t = start + Duration::minutes(i as i64);
            let price = 100.0 + (i % 500) as f32 * 0.01;
            vec![
                t.format("%Y%m%d").to_string(),
                t.format("%H:%M").to_string(),
                format!("{price:.2}"),
                format!("{:.2}", price + 0.05),
                format!("{:.2}", price - 0.05),
                format!("{:.2}", price + 0.01),
                (i % 10_000).to_string(),
            ]
        })
        .collect()
}

/// Renders rows as comma-separated text, one row per line.
pub fn render_csv(rows: &Table) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{}", row.join(","));
    }
    out
}

/// Builds `n` records with strictly increasing dates.
pub fn records(n: usize) -> Vec<PriceRecord> {
    (0..n)
        .map(|i| {
            let date = 41_638.0 + i as f64 / 1440.0;
            let price = 100.0 + (i % 500) as f32 * 0.01;
            PriceRecord::new(date, price, price + 0.05, price - 0.05, price + 0.01, i as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_rows_cross_year() {
        let rows = minute_rows(3 * 1440);
        assert_eq!(rows.len(), 3 * 1440);
        assert_eq!(rows[0][0], "20131230");
        assert_eq!(rows[0][1], "00:00");
        assert_eq!(rows[2 * 1440][0], "20140101");
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&minute_rows(2));
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.starts_with("20131230,00:00,100.00,100.05,99.95,100.01,0\n"));
    }
}
