//! Fixed-width record layouts.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;
use t6conv_types::PriceRecord;

use crate::FormatError;

/// Byte layout of one record in a `.t6` file. All fields are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// 28 bytes, no padding:
    /// - `f64`: date (bytes 0-7)
    /// - `f32`: open (bytes 8-11)
    /// - `f32`: high (bytes 12-15)
    /// - `f32`: low (bytes 16-19)
    /// - `f32`: close (bytes 20-23)
    /// - `f32`: volume (bytes 24-27)
    ///
    /// The auxiliary value is not stored.
    #[default]
    Packed,
    /// 32 bytes, the Zorro `T6` struct:
    /// - `f64`: date (bytes 0-7)
    /// - `f32`: high (bytes 8-11)
    /// - `f32`: low (bytes 12-15)
    /// - `f32`: open (bytes 16-19)
    /// - `f32`: close (bytes 20-23)
    /// - `f32`: value (bytes 24-27)
    /// - `f32`: volume (bytes 28-31)
    Zorro,
}

impl RecordLayout {
    /// Returns the size in bytes of one record.
    #[must_use]
    pub const fn record_size(&self) -> usize {
        match self {
            Self::Packed => 28,
            Self::Zorro => 32,
        }
    }

    /// Returns the layout as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Packed => "packed",
            Self::Zorro => "zorro",
        }
    }

    /// Writes one record in this layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_record<W: Write>(&self, record: &PriceRecord, mut writer: W) -> io::Result<()> {
        writer.write_f64::<LittleEndian>(record.date)?;
        match self {
            Self::Packed => {
                writer.write_f32::<LittleEndian>(record.open)?;
                writer.write_f32::<LittleEndian>(record.high)?;
                writer.write_f32::<LittleEndian>(record.low)?;
                writer.write_f32::<LittleEndian>(record.close)?;
                writer.write_f32::<LittleEndian>(record.volume)?;
            }
            Self::Zorro => {
                writer.write_f32::<LittleEndian>(record.high)?;
                writer.write_f32::<LittleEndian>(record.low)?;
                writer.write_f32::<LittleEndian>(record.open)?;
                writer.write_f32::<LittleEndian>(record.close)?;
                writer.write_f32::<LittleEndian>(record.value)?;
                writer.write_f32::<LittleEndian>(record.volume)?;
            }
        }
        Ok(())
    }

    /// Reads one record from a chunk of exactly [`Self::record_size`] bytes.
    #[inline]
    pub(crate) fn read_record(&self, data: &[u8]) -> PriceRecord {
        let date = LittleEndian::read_f64(&data[0..8]);
        match self {
            Self::Packed => PriceRecord::new(
                date,
                LittleEndian::read_f32(&data[8..12]),
                LittleEndian::read_f32(&data[12..16]),
                LittleEndian::read_f32(&data[16..20]),
                LittleEndian::read_f32(&data[20..24]),
                LittleEndian::read_f32(&data[24..28]),
            ),
            Self::Zorro => PriceRecord::new(
                date,
                LittleEndian::read_f32(&data[16..20]),
                LittleEndian::read_f32(&data[8..12]),
                LittleEndian::read_f32(&data[12..16]),
                LittleEndian::read_f32(&data[20..24]),
                LittleEndian::read_f32(&data[28..32]),
            )
            .with_value(LittleEndian::read_f32(&data[24..28])),
        }
    }
}

impl std::fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordLayout {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "packed" | "28" => Ok(Self::Packed),
            "zorro" | "32" => Ok(Self::Zorro),
            _ => Err(FormatError::UnknownLayout(s.to_string())),
        }
    }
}
