//! Header attribute strings
//!
//! Attribute keys and values use the dictionary's compact character
//! encoding: a byte in `0x20..=0xFF` is a character on its own, a byte
//! below `0x20` starts a three-byte big-endian code point, and `0x1F`
//! terminates the string.

use crate::error::{DictError, Result};
use std::collections::BTreeMap;

/// Terminator for character arrays
pub const CHARACTER_ARRAY_TERMINATOR: u8 = 0x1F;

/// Smallest byte value that encodes a character in one byte
pub const MINIMAL_ONE_BYTE_CHARACTER_VALUE: u8 = 0x20;

/// Decode key/value attribute pairs from the attribute area of a header
///
/// `base` is the absolute offset of `area` in the dictionary buffer and is
/// only used for error reporting. A repeated key keeps its last value.
pub fn read_attributes(area: &[u8], base: usize) -> Result<BTreeMap<String, String>> {
    let mut attributes = BTreeMap::new();
    let mut pos = 0;

    while pos < area.len() {
        let key = read_string(area, &mut pos, base)?;
        let value = read_string(area, &mut pos, base)?;
        attributes.insert(key, value);
    }

    Ok(attributes)
}

/// Decode one terminated string starting at `*pos`, advancing past the terminator
pub fn read_string(area: &[u8], pos: &mut usize, base: usize) -> Result<String> {
    let start = *pos;
    let mut out = String::new();

    loop {
        let Some(&byte) = area.get(*pos) else {
            return Err(DictError::UnterminatedString {
                offset: base + start,
            });
        };

        if byte == CHARACTER_ARRAY_TERMINATOR {
            *pos += 1;
            return Ok(out);
        }

        if byte < MINIMAL_ONE_BYTE_CHARACTER_VALUE {
            let Some(bytes) = area.get(*pos..*pos + 3) else {
                return Err(DictError::UnterminatedString {
                    offset: base + start,
                });
            };
            let value =
                (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);
            let ch = char::from_u32(value).ok_or(DictError::InvalidCodePoint {
                offset: base + *pos,
                value,
            })?;
            out.push(ch);
            *pos += 3;
        } else {
            out.push(char::from(byte));
            *pos += 1;
        }
    }
}

/// Encode `s` as a terminated string
pub fn write_string(out: &mut Vec<u8>, s: &str) {
    for ch in s.chars() {
        let code_point = u32::from(ch);
        if (u32::from(MINIMAL_ONE_BYTE_CHARACTER_VALUE)..=0xFF).contains(&code_point) {
            out.push(code_point as u8);
        } else {
            out.extend_from_slice(&[
                (code_point >> 16) as u8,
                (code_point >> 8) as u8,
                code_point as u8,
            ]);
        }
    }
    out.push(CHARACTER_ARRAY_TERMINATOR);
}
