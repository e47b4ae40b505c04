//! Binary dictionary format identification
//!
//! A dictionary buffer starts with a header whose layout depends on the
//! format version. This module identifies the version from the leading
//! magic number and reports how many bytes the header occupies, which is
//! where the root of the lookup structure begins.
//!
//! # Layouts
//!
//! All multi-byte integers are big-endian.
//!
//! **Version 1** (5 bytes):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 2 | magic `0x78B1` |
//! | 2 | 1 | version `0x01` |
//! | 3 | 2 | options, must be `0x0000` |
//!
//! Detection only checks the first options byte; [`crate::header::DictionaryHeader::parse`]
//! rejects a nonzero second byte.
//!
//! **Version 2** (`header_size` bytes, at least 12):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `0x9BC13AFE` |
//! | 4 | 2 | version `0x0002` |
//! | 6 | 2 | flags |
//! | 8 | 4 | header size |
//! | 12 | .. | attributes (see [`crate::header`]) |

pub mod version;

pub use version::FormatVersion;

/// Magic number, version byte and first options byte of a V1 header
pub const FORMAT_VERSION_1_MAGIC_NUMBER: u32 = 0x78B1_0100;

/// Magic number of a V2 header
pub const FORMAT_VERSION_2_MAGIC_NUMBER: u32 = 0x9BC1_3AFE;

/// Size of a V1 header
pub const FORMAT_VERSION_1_HEADER_SIZE: usize = 5;

/// Size of the fixed part of a V2 header
pub const FORMAT_VERSION_2_MINIMUM_SIZE: usize = 12;

/// Header size reported for buffers of unknown format
pub const UNKNOWN_FORMAT_HEADER_SIZE: usize = 0;

/// Offset of the header size field in a V2 header
pub(crate) const FORMAT_VERSION_2_HEADER_SIZE_OFFSET: usize = 8;

/// Detect the format version of a dictionary buffer
pub fn detect_format_version(dict: &[u8]) -> FormatVersion {
    FormatVersion::detect(dict)
}

/// Number of leading bytes occupied by the header of `format`
///
/// The V2 size is read from the header itself and is not checked against
/// the buffer length here; [`crate::DictionaryView::new`] does that.
/// Returns [`UNKNOWN_FORMAT_HEADER_SIZE`] for [`FormatVersion::Unknown`] and
/// for a V2 tag on a buffer too short to hold the size field.
pub fn header_size(dict: &[u8], format: FormatVersion) -> usize {
    match format {
        FormatVersion::V1 => FORMAT_VERSION_1_HEADER_SIZE,
        FormatVersion::V2 => read_u32_be(dict, FORMAT_VERSION_2_HEADER_SIZE_OFFSET)
            .map_or(UNKNOWN_FORMAT_HEADER_SIZE, |size| size as usize),
        FormatVersion::Unknown => UNKNOWN_FORMAT_HEADER_SIZE,
    }
}

/// Read a big-endian `u16` at `offset`, or `None` if out of range
pub(crate) fn read_u16_be(buf: &[u8], offset: usize) -> Option<u16> {
    let bytes = buf.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Read a big-endian `u32` at `offset`, or `None` if out of range
pub(crate) fn read_u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
