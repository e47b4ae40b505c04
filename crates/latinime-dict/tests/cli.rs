//! Integration tests for the latinime-dict CLI

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use latinime_dict::HeaderBuilder;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_dictionary(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write dictionary");
    file.flush().expect("flush dictionary");
    file
}

/// V2 dictionary whose 22-byte header is followed by three root bytes
fn v2_dictionary() -> NamedTempFile {
    let mut bytes = HeaderBuilder::v2()
        .attribute("locale", "en")
        .build()
        .expect("builder succeeds");
    assert_eq!(bytes.len(), 22);
    bytes.extend_from_slice(&[0x01, 0x02, 0x03]);
    write_dictionary(&bytes)
}

#[test]
fn test_info_v2_text() {
    let file = v2_dictionary();
    let mut cmd = Command::cargo_bin("latinime-dict").unwrap();
    cmd.arg("info")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Format:        V2"))
        .stdout(predicate::str::contains("Root offset:   22"))
        .stdout(predicate::str::contains("Root position: 0"))
        .stdout(predicate::str::contains("locale = en"));
}

#[test]
fn test_info_v2_json() {
    let file = v2_dictionary();
    let mut cmd = Command::cargo_bin("latinime-dict").unwrap();
    let output = cmd
        .args(["info", "--json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""format": "v2""#))
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(summary["format"], "v2");
    assert_eq!(summary["root_offset"], 22);
    assert_eq!(summary["root_position"], 0);
    assert_eq!(summary["size"], 25);
    assert_eq!(summary["attributes"]["locale"], "en");
}

#[test]
fn test_info_unknown_format_fails() {
    let file = write_dictionary(&[0xFF, 0xFF]);
    let mut cmd = Command::cargo_bin("latinime-dict").unwrap();
    cmd.args(["info", "--json"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""format": "unknown""#))
        .stderr(predicate::str::contains("dictionary unavailable or corrupt"));
}

#[test]
fn test_info_missing_file_fails() {
    let mut cmd = Command::cargo_bin("latinime-dict").unwrap();
    cmd.args(["info", "/nonexistent/main.dict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_info_truncated_header_fails() {
    let bytes = HeaderBuilder::v2()
        .attribute("locale", "en")
        .build()
        .expect("builder succeeds");
    let file = write_dictionary(&bytes[..bytes.len() - 3]);

    let mut cmd = Command::cargo_bin("latinime-dict").unwrap();
    cmd.arg("info")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read header"));
}
