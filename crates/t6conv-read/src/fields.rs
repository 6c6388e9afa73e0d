//! Lenient numeric field parsing.

/// Parses a numeric cell, substituting `0.0` when it is not a number.
#[inline]
#[must_use]
pub fn lenient_f32(cell: &str) -> f32 {
    cell.parse().unwrap_or(0.0)
}

/// Like [`lenient_f32`], but trims surrounding whitespace first.
#[inline]
#[must_use]
pub fn lenient_trimmed_f32(cell: &str) -> f32 {
    lenient_f32(cell.trim())
}

/// Reads column `index` of a row leniently; a missing column is zero.
#[inline]
pub(crate) fn column(row: &[String], index: usize, trim: bool) -> f32 {
    row.get(index).map_or(0.0, |cell| {
        if trim {
            lenient_trimmed_f32(cell)
        } else {
            lenient_f32(cell)
        }
    })
}
