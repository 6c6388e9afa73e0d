//! Binary `.t6` output format.

use std::io::{BufWriter, Write};
use std::path::Path;
use t6conv_types::PriceRecord;

use crate::{FormatError, Formatter, RecordLayout};

/// Binary formatter writing records back to back in a fixed layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct T6Formatter {
    layout: RecordLayout,
}

impl T6Formatter {
    /// Creates a formatter using the default packed layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: RecordLayout::Packed,
        }
    }

    /// Sets the record layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the record layout.
    #[must_use]
    pub const fn layout(&self) -> RecordLayout {
        self.layout
    }
}

impl Formatter for T6Formatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        writer: W,
    ) -> Result<(), FormatError> {
        let mut writer = BufWriter::new(writer);
        for record in records {
            self.layout.write_record(record, &mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "t6"
    }
}

/// Decodes records from `.t6` bytes.
///
/// # Errors
///
/// Returns an error if the data length is not a multiple of the record size.
pub fn decode_records(
    data: &[u8],
    layout: RecordLayout,
) -> Result<impl Iterator<Item = PriceRecord> + '_, FormatError> {
    let size = layout.record_size();
    if !data.len().is_multiple_of(size) {
        return Err(FormatError::InvalidLength(data.len(), size));
    }

    Ok(data
        .chunks_exact(size)
        .map(move |chunk| layout.read_record(chunk)))
}

/// Reads every record of a `.t6` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or has a truncated record.
pub fn read_t6(path: impl AsRef<Path>, layout: RecordLayout) -> Result<Vec<PriceRecord>, FormatError> {
    let data = std::fs::read(path)?;
    Ok(decode_records(&data, layout)?.collect())
}
