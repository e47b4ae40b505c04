//! Dictionary format version detection

use super::{
    FORMAT_VERSION_1_MAGIC_NUMBER, FORMAT_VERSION_2_MAGIC_NUMBER, FORMAT_VERSION_2_MINIMUM_SIZE,
    read_u16_be, read_u32_be,
};
use serde::Serialize;
use tracing::debug;

/// On-disk dictionary format versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatVersion {
    /// Version 1: fixed 5-byte header, no attributes
    V1,
    /// Version 2: variable-size header with flags and attributes
    V2,
    /// No recognized magic number
    Unknown,
}

impl FormatVersion {
    /// Detect the format version from the leading bytes of `dict`
    ///
    /// Reads at most [`FORMAT_VERSION_2_MINIMUM_SIZE`] bytes and never
    /// reads past the end of the slice.
    pub fn detect(dict: &[u8]) -> Self {
        // Magic numbers are stored big-endian. Anything shorter than the
        // magic itself cannot be identified.
        let Some(magic) = read_u32_be(dict, 0) else {
            debug!(len = dict.len(), "buffer too short for magic number");
            return Self::Unknown;
        };

        let version = match magic {
            // 0x78 0xB1 magic, 0x01 version byte, first options byte 0x00
            FORMAT_VERSION_1_MAGIC_NUMBER => Self::V1,
            FORMAT_VERSION_2_MAGIC_NUMBER => {
                // A V2 magic on a buffer that cannot hold the fixed header is
                // not something we can safely proceed with.
                if dict.len() < FORMAT_VERSION_2_MINIMUM_SIZE {
                    Self::Unknown
                } else {
                    match read_u16_be(dict, 4) {
                        Some(2) => Self::V2,
                        _ => Self::Unknown,
                    }
                }
            }
            _ => Self::Unknown,
        };

        debug!(magic, %version, "detected dictionary format");
        version
    }

    /// Whether this version carries header attributes
    pub const fn has_attributes(self) -> bool {
        match self {
            Self::V2 => true,
            Self::V1 | Self::Unknown => false,
        }
    }

    /// Convert to the numeric version stored on disk
    pub const fn to_u16(self) -> Option<u16> {
        match self {
            Self::V1 => Some(1),
            Self::V2 => Some(2),
            Self::Unknown => None,
        }
    }

    /// Create from the numeric version stored on disk
    pub const fn from_u16(value: u16) -> Self {
        match value {
            1 => Self::V1,
            2 => Self::V2,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "V1"),
            Self::V2 => write!(f, "V2"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
