//! Read-only view over a dictionary buffer
//!
//! [`DictionaryView`] is the entry point for everything that navigates a
//! dictionary. It binds a borrowed byte buffer to its detected
//! [`FormatVersion`] and the absolute offset of the root lookup structure.
//! Both are computed once at construction and never change.
//!
//! The view borrows the buffer, so the buffer outlives it and cannot be
//! mutated while it exists. It does not implement `Clone`; build another
//! view from the same slice when a second handle is needed.
//!
//! ```rust
//! use latinime_dict::{DictionaryView, FormatVersion};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dict = [0x78, 0xB1, 0x01, 0x00, 0x00, 0x2A];
//! let view = DictionaryView::new(&dict)?;
//!
//! assert_eq!(view.format(), FormatVersion::V1);
//! assert_eq!(view.root(), &[0x2A]);
//! assert_eq!(view.root_position(), 0);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::format::{FORMAT_VERSION_1_HEADER_SIZE, FORMAT_VERSION_2_MINIMUM_SIZE, FormatVersion};
use crate::header::{DictionaryHeader, check_bounds};
use tracing::debug;

/// Logical position of the root node for index-based traversal
pub const ROOT_POSITION: usize = 0;

/// Immutable, non-owning handle over a dictionary buffer
#[derive(Debug)]
pub struct DictionaryView<'a> {
    buffer: &'a [u8],
    format: FormatVersion,
    root_offset: usize,
}

impl<'a> DictionaryView<'a> {
    /// Create a view over `buffer`
    ///
    /// An unrecognized format is not an error: the view reports
    /// [`FormatVersion::Unknown`] with a root offset of zero, and callers
    /// check [`format`](Self::format) before traversing.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::TruncatedHeader`](crate::DictError::TruncatedHeader)
    /// if the header extends past the end of `buffer`, and
    /// [`DictError::InvalidHeaderSize`](crate::DictError::InvalidHeaderSize)
    /// if a V2 header declares a size smaller than its fixed prefix.
    pub fn new(buffer: &'a [u8]) -> Result<Self> {
        let format = crate::format::detect_format_version(buffer);
        let root_offset = crate::format::header_size(buffer, format);

        match format {
            FormatVersion::V1 => check_bounds(buffer, root_offset, FORMAT_VERSION_1_HEADER_SIZE)?,
            FormatVersion::V2 => check_bounds(buffer, root_offset, FORMAT_VERSION_2_MINIMUM_SIZE)?,
            FormatVersion::Unknown => {}
        }

        debug!(%format, root_offset, len = buffer.len(), "created dictionary view");

        Ok(Self {
            buffer,
            format,
            root_offset,
        })
    }

    /// The buffer this view was created over
    pub const fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Bytes starting at the root structure
    pub fn root(&self) -> &'a [u8] {
        &self.buffer[self.root_offset..]
    }

    /// Absolute byte offset of the root structure in [`buffer`](Self::buffer)
    pub const fn root_offset(&self) -> usize {
        self.root_offset
    }

    /// Detected format version
    pub const fn format(&self) -> FormatVersion {
        self.format
    }

    /// Logical position of the root node, always [`ROOT_POSITION`]
    ///
    /// Node positions are relative to [`root`](Self::root), so the root
    /// node sits at zero whatever the header size is.
    pub const fn root_position(&self) -> usize {
        ROOT_POSITION
    }

    /// Whether the format was recognized
    pub fn is_known_format(&self) -> bool {
        self.format != FormatVersion::Unknown
    }

    /// Decode the full header, including attributes
    pub fn header(&self) -> Result<DictionaryHeader> {
        DictionaryHeader::parse_detected(self.buffer, self.format, self.root_offset)
    }
}
