//! Input resolution (the minute/daily mode flag).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resolution of the input price files.
///
/// Selects the row reader and the output naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// One-minute bars, `date,time,open,high,low,close,volume`, no header.
    #[default]
    Minute,
    /// Daily bars, `date,open,high,low,close[,volume]`, one header row.
    Daily,
}

impl Resolution {
    /// Returns true for daily input.
    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily)
    }

    /// Maps the boolean `--daily` flag to a resolution.
    #[must_use]
    pub const fn from_daily_flag(daily: bool) -> Self {
        if daily { Self::Daily } else { Self::Minute }
    }

    /// Returns the resolution as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Daily => "daily",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minute" | "m1" | "1min" => Ok(Self::Minute),
            "daily" | "d1" | "day" => Ok(Self::Daily),
            _ => Err(ResolutionParseError(s.to_string())),
        }
    }
}

/// Error parsing a resolution string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid resolution: {0}. Valid options: minute, daily")]
pub struct ResolutionParseError(pub String);
