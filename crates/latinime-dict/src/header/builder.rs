//! Builder for dictionary headers

use crate::error::{DictError, Result};
use crate::format::{FORMAT_VERSION_2_MINIMUM_SIZE, FormatVersion};
use crate::header::attributes::write_string;
use crate::header::{HeaderFlags, HeaderV1, HeaderV2};
use binrw::BinWrite;
use std::collections::BTreeMap;
use std::io::Cursor;

/// Builder for dictionary header bytes
///
/// Produces only the header. Callers append the root structure after it.
/// The V2 header size is computed from the encoded attributes at build
/// time. Flags and attributes are ignored for V1, which has no room for
/// them.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    format: FormatVersion,
    flags: HeaderFlags,
    attributes: BTreeMap<String, String>,
}

impl HeaderBuilder {
    /// Builder for a V1 header
    #[must_use]
    pub fn v1() -> Self {
        Self {
            format: FormatVersion::V1,
            flags: HeaderFlags::default(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder for a V2 header with no flags and no attributes
    #[must_use]
    pub fn v2() -> Self {
        Self {
            format: FormatVersion::V2,
            ..Self::v1()
        }
    }

    /// Set the option flags
    #[must_use]
    pub fn flags(mut self, flags: HeaderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Add an attribute, replacing any earlier value for `key`
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Encode the header
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());

        match self.format {
            FormatVersion::V2 => {
                let mut area = Vec::new();
                for (key, value) in &self.attributes {
                    write_string(&mut area, key);
                    write_string(&mut area, value);
                }

                let fixed = HeaderV2 {
                    version: 2,
                    flags: self.flags,
                    header_size: encoded_header_size(area.len())?,
                };
                fixed.write(&mut cursor)?;
                let mut out = cursor.into_inner();
                out.extend_from_slice(&area);
                Ok(out)
            }
            // Unknown is unreachable through the public constructors
            FormatVersion::V1 | FormatVersion::Unknown => {
                HeaderV1 {
                    version: 1,
                    options: 0,
                }
                .write(&mut cursor)?;
                Ok(cursor.into_inner())
            }
        }
    }
}

/// Total V2 header size for an attribute area of `attributes_len` bytes
fn encoded_header_size(attributes_len: usize) -> Result<u32> {
    FORMAT_VERSION_2_MINIMUM_SIZE
        .checked_add(attributes_len)
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(DictError::HeaderTooLarge { attributes_len })
}
