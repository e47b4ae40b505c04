//! Header option flags

use binrw::{BinRead, BinWrite};
use serde::Serialize;
use std::fmt;

/// Option flags stored in a V2 header
///
/// V1 headers carry an options field that must be zero, so they always
/// report [`HeaderFlags::NONE`].
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct HeaderFlags {
    /// Raw flag value
    pub value: u16,
}

impl HeaderFlags {
    /// No flags set
    pub const NONE: u16 = 0x0000;

    /// Words need German umlaut processing (bit 0)
    pub const GERMAN_UMLAUT_PROCESSING: u16 = 0x0001;

    /// Dictionary may be updated in place (bit 1)
    pub const SUPPORTS_DYNAMIC_UPDATE: u16 = 0x0002;

    /// Words need French ligature processing (bit 2)
    pub const FRENCH_LIGATURE_PROCESSING: u16 = 0x0004;

    /// Create flags from a raw value
    pub const fn new(value: u16) -> Self {
        Self { value }
    }

    /// Check if flag is set
    pub const fn has(&self, flag: u16) -> bool {
        (self.value & flag) != 0
    }

    /// Set flag
    pub fn set(&mut self, flag: u16) {
        self.value |= flag;
    }

    /// Clear flag
    pub fn clear(&mut self, flag: u16) {
        self.value &= !flag;
    }

    /// Raw bits
    pub const fn bits(&self) -> u16 {
        self.value
    }

    /// Names of the known flags that are set
    pub fn names(&self) -> Vec<&'static str> {
        [
            (Self::GERMAN_UMLAUT_PROCESSING, "GERMAN_UMLAUT_PROCESSING"),
            (Self::SUPPORTS_DYNAMIC_UPDATE, "SUPPORTS_DYNAMIC_UPDATE"),
            (Self::FRENCH_LIGATURE_PROCESSING, "FRENCH_LIGATURE_PROCESSING"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.has(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl fmt::Display for HeaderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "{:#06x}", self.value)
        } else {
            write!(f, "{:#06x} ({})", self.value, names.join(" | "))
        }
    }
}
