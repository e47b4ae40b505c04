//! Integration tests for memory-mapped dictionary files

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use latinime_dict::{
    DictError, FormatVersion, HeaderBuilder, HeaderFlags, MappedDictionary, ROOT_POSITION,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_dictionary(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write dictionary");
    file.flush().expect("flush dictionary");
    file
}

#[test]
fn mapped_v2_dictionary() {
    let mut bytes = HeaderBuilder::v2()
        .flags(HeaderFlags::new(HeaderFlags::GERMAN_UMLAUT_PROCESSING))
        .attribute("dictionary", "main:de")
        .attribute("locale", "de")
        .attribute("version", "54")
        .build()
        .expect("builder succeeds");
    let header_len = bytes.len();
    bytes.extend_from_slice(&[0x02, 0x61, 0x62]);

    let file = write_dictionary(&bytes);
    let dictionary = MappedDictionary::open(file.path()).expect("open dictionary");
    assert!(dictionary.is_mapped());
    assert_eq!(dictionary.len(), bytes.len());
    assert_eq!(dictionary.path(), Some(file.path()));

    let view = dictionary.view().expect("valid view");
    assert_eq!(view.format(), FormatVersion::V2);
    assert_eq!(view.root_offset(), header_len);
    assert_eq!(view.root(), &[0x02, 0x61, 0x62]);
    assert_eq!(view.root_position(), ROOT_POSITION);

    let header = view.header().expect("valid header");
    assert_eq!(header.dictionary_id(), Some("main:de"));
    assert_eq!(header.locale(), Some("de"));
    assert_eq!(header.version(), Some("54"));
    assert!(header.flags().has(HeaderFlags::GERMAN_UMLAUT_PROCESSING));
}

#[test]
fn mapped_v1_dictionary() {
    let mut bytes = HeaderBuilder::v1().build().expect("builder succeeds");
    bytes.extend_from_slice(&[0x01, 0x41]);

    let file = write_dictionary(&bytes);
    let dictionary = MappedDictionary::open(file.path()).expect("open dictionary");
    let view = dictionary.view().expect("valid view");

    assert_eq!(view.format(), FormatVersion::V1);
    assert_eq!(view.root_offset(), 5);
    assert_eq!(view.root(), &[0x01, 0x41]);
}

#[test]
fn mapped_unknown_dictionary_is_still_viewable() {
    let file = write_dictionary(b"not a dictionary");
    let dictionary = MappedDictionary::open(file.path()).expect("open dictionary");
    let view = dictionary.view().expect("unknown format is not an error");

    assert_eq!(view.format(), FormatVersion::Unknown);
    assert_eq!(view.root_offset(), 0);
    assert_eq!(view.root(), b"not a dictionary");
}

#[test]
fn mapped_empty_file() {
    let file = write_dictionary(&[]);
    let dictionary = MappedDictionary::open(file.path()).expect("open dictionary");

    assert!(dictionary.is_empty());
    assert!(!dictionary.is_mapped());
    assert_eq!(dictionary.view().expect("valid view").format(), FormatVersion::Unknown);
}

#[test]
fn mapped_truncated_dictionary_rejected() {
    let bytes = HeaderBuilder::v2()
        .attribute("locale", "en")
        .build()
        .expect("builder succeeds");

    let file = write_dictionary(&bytes[..bytes.len() - 3]);
    let dictionary = MappedDictionary::open(file.path()).expect("open dictionary");

    match dictionary.view() {
        Err(DictError::TruncatedHeader {
            header_size,
            buffer_len,
        }) => {
            assert_eq!(header_size, bytes.len());
            assert_eq!(buffer_len, bytes.len() - 3);
        }
        other => panic!("expected truncated header, got {other:?}"),
    }
}
