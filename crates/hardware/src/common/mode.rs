//! Field access modes.
//!
//! The host framework uses the mode to decide which bus transactions a field
//! supports: read-only fields are refreshed and polled, write-only fields are
//! only ever written, read-write fields do both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RegMapError;

/// Access capability of a register field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    /// Read-only: status and counters driven by the hardware.
    #[serde(rename = "RO")]
    Ro,
    /// Write-only: strobes and commands; reads return nothing meaningful.
    #[serde(rename = "WO")]
    Wo,
    /// Read-write: configuration the host sets and may read back.
    #[default]
    #[serde(rename = "RW")]
    Rw,
}

impl AccessMode {
    /// Returns `true` if the field may be read over the bus.
    #[inline]
    pub const fn is_readable(self) -> bool {
        matches!(self, Self::Ro | Self::Rw)
    }

    /// Returns `true` if the field may be written over the bus.
    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Wo | Self::Rw)
    }

    /// Combines the capabilities of two fields sharing one register word.
    ///
    /// A register holding a read-only and a write-only field must be both read
    /// and written, so the union of `RO` and `WO` is `RW`.
    pub const fn union(self, other: Self) -> Self {
        match (self, other) {
            (Self::Ro, Self::Ro) => Self::Ro,
            (Self::Wo, Self::Wo) => Self::Wo,
            _ => Self::Rw,
        }
    }

    /// Returns the framework spelling of the mode (`"RO"`, `"WO"` or `"RW"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ro => "RO",
            Self::Wo => "WO",
            Self::Rw => "RW",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = RegMapError;

    /// Parses the framework spelling; matching is case-sensitive and ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "RO" => Ok(Self::Ro),
            "WO" => Ok(Self::Wo),
            "RW" => Ok(Self::Rw),
            other => Err(RegMapError::InvalidMode(other.to_string())),
        }
    }
}
