//! Dictionary header decoding
//!
//! [`DictionaryHeader`] decodes everything a header stores: the format
//! version, option flags, total header size and, for V2, the attribute
//! map. It is separate from [`crate::DictionaryView`] because attribute
//! decoding allocates, while the view only needs the header size.
//!
//! ```rust
//! use latinime_dict::header::{DictionaryHeader, HeaderBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = HeaderBuilder::v2()
//!     .attribute("locale", "de")
//!     .build()?;
//! let header = DictionaryHeader::parse(&bytes)?;
//! assert_eq!(header.locale(), Some("de"));
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod builder;
pub mod flags;

pub use builder::HeaderBuilder;
pub use flags::HeaderFlags;

use crate::error::{DictError, Result};
use crate::format::{
    FORMAT_VERSION_1_HEADER_SIZE, FORMAT_VERSION_2_MINIMUM_SIZE, FormatVersion, header_size,
};
use binrw::{BinRead, BinWrite};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Cursor;
use tracing::debug;

/// Attribute key naming the dictionary
pub const DICTIONARY_ID_KEY: &str = "dictionary";

/// Attribute key holding the dictionary locale
pub const LOCALE_KEY: &str = "locale";

/// Attribute key holding the dictionary content version
pub const VERSION_KEY: &str = "version";

/// Attribute key holding the multi-word demotion rate in percent
pub const MULTIPLE_WORDS_DEMOTION_RATE_KEY: &str = "MULTIPLE_WORDS_DEMOTION_RATE";

/// Demotion rate used when the attribute is absent or malformed
pub const DEFAULT_MULTIPLE_WORDS_DEMOTION_RATE: u32 = 100;

/// Fixed V1 header (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(big, magic = 0x78B1u16)]
pub struct HeaderV1 {
    /// Version byte (1)
    #[br(assert(version == 1, "Invalid V1 version byte: {}", version))]
    pub version: u8,
    /// Options, always zero
    #[br(assert(options == 0, "Invalid V1 options: {:#06x}", options))]
    pub options: u16,
}

/// Fixed V2 header prefix (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(big, magic = 0x9BC1_3AFEu32)]
pub struct HeaderV2 {
    /// Version field (2)
    #[br(assert(version == 2, "Invalid V2 version field: {}", version))]
    pub version: u16,
    /// Option flags
    pub flags: HeaderFlags,
    /// Total header size including attributes
    pub header_size: u32,
}

/// Decoded dictionary header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryHeader {
    format: FormatVersion,
    flags: HeaderFlags,
    header_size: usize,
    attributes: BTreeMap<String, String>,
}

impl DictionaryHeader {
    /// Decode the header at the start of `dict`
    pub fn parse(dict: &[u8]) -> Result<Self> {
        let format = FormatVersion::detect(dict);
        let size = header_size(dict, format);
        Self::parse_detected(dict, format, size)
    }

    /// Decode a header whose format and size were already computed
    pub(crate) fn parse_detected(dict: &[u8], format: FormatVersion, size: usize) -> Result<Self> {
        match format {
            FormatVersion::Unknown => Err(DictError::UnknownFormat),
            FormatVersion::V1 => {
                check_bounds(dict, size, FORMAT_VERSION_1_HEADER_SIZE)?;
                HeaderV1::read(&mut Cursor::new(dict))?;
                Ok(Self {
                    format,
                    flags: HeaderFlags::default(),
                    header_size: size,
                    attributes: BTreeMap::new(),
                })
            }
            FormatVersion::V2 => {
                check_bounds(dict, size, FORMAT_VERSION_2_MINIMUM_SIZE)?;
                let fixed = HeaderV2::read(&mut Cursor::new(dict))?;
                let attributes = attributes::read_attributes(
                    &dict[FORMAT_VERSION_2_MINIMUM_SIZE..size],
                    FORMAT_VERSION_2_MINIMUM_SIZE,
                )?;
                debug!(
                    header_size = size,
                    attributes = attributes.len(),
                    flags = %fixed.flags,
                    "decoded V2 header"
                );
                Ok(Self {
                    format,
                    flags: fixed.flags,
                    header_size: size,
                    attributes,
                })
            }
        }
    }

    /// Format version of the header
    pub const fn format(&self) -> FormatVersion {
        self.format
    }

    /// Option flags (always empty for V1)
    pub const fn flags(&self) -> HeaderFlags {
        self.flags
    }

    /// Total header size in bytes
    pub const fn header_size(&self) -> usize {
        self.header_size
    }

    /// All attributes, sorted by key
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Look up a single attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Dictionary identifier, e.g. `main:en_us`
    pub fn dictionary_id(&self) -> Option<&str> {
        self.attribute(DICTIONARY_ID_KEY)
    }

    /// Locale the dictionary was built for
    pub fn locale(&self) -> Option<&str> {
        self.attribute(LOCALE_KEY)
    }

    /// Content version string
    pub fn version(&self) -> Option<&str> {
        self.attribute(VERSION_KEY)
    }

    /// Percentage applied to multi-word suggestion scores
    pub fn multiple_words_demotion_rate(&self) -> u32 {
        self.attribute(MULTIPLE_WORDS_DEMOTION_RATE_KEY)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_MULTIPLE_WORDS_DEMOTION_RATE)
    }
}

/// Reject headers that undercut their fixed prefix or overrun the buffer
pub(crate) fn check_bounds(dict: &[u8], size: usize, minimum: usize) -> Result<()> {
    if size < minimum {
        return Err(DictError::InvalidHeaderSize {
            header_size: size,
            minimum,
        });
    }
    if size > dict.len() {
        return Err(DictError::TruncatedHeader {
            header_size: size,
            buffer_len: dict.len(),
        });
    }
    Ok(())
}
