//! End-to-end generation runs into a scratch directory.

use pretty_assertions::assert_eq;
use rsv_core::{decode, encode, rows_from_json};
use rsv_testdata::catalog::{invalid_cases, valid_cases};
use rsv_testdata::{generate, generate_into, HarnessError, Progress};
use std::path::{Path, PathBuf};

/// Progress sink that records instead of printing.
#[derive(Default)]
struct Recording {
    paths: Vec<PathBuf>,
}

impl Progress for Recording {
    fn path_written(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rsv-testdata-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

#[test]
fn full_run_writes_the_whole_corpus() {
    let dir = scratch_dir("full");
    let mut progress = Recording::default();

    let summary = generate(&dir, &mut progress).unwrap();
    let valid = valid_cases();
    let invalid = invalid_cases();
    assert_eq!(summary.valid, valid.len());
    assert_eq!(summary.invalid, invalid.len());

    // One .rsv and one .json per valid case, one .rsv per invalid case.
    assert_eq!(progress.paths.len(), valid.len() * 2 + invalid.len());

    // Ids are sequential from 1 and zero-padded to three digits.
    for i in 1..=valid.len() {
        assert!(dir.join(format!("Valid_{:03}.rsv", i)).is_file(), "Valid_{:03}.rsv", i);
        assert!(dir.join(format!("Valid_{:03}.json", i)).is_file(), "Valid_{:03}.json", i);
    }
    for i in 1..=invalid.len() {
        assert!(dir.join(format!("Invalid_{:03}.rsv", i)).is_file(), "Invalid_{:03}.rsv", i);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn first_valid_fixture_matches_its_case() {
    let dir = scratch_dir("first-valid");
    let mut progress = Recording::default();
    generate(&dir, &mut progress).unwrap();

    let expected = encode(&valid_cases()[0]);
    let native = std::fs::read(dir.join("Valid_001.rsv")).unwrap();
    assert_eq!(native, expected);

    // The interchange file re-encodes to the identical bytes.
    let text = std::fs::read_to_string(dir.join("Valid_001.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(encode(&rows_from_json(&value).unwrap()), expected);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn first_invalid_fixture_is_written_verbatim() {
    let dir = scratch_dir("first-invalid");
    let mut progress = Recording::default();
    generate(&dir, &mut progress).unwrap();

    let bytes = std::fs::read(dir.join("Invalid_001.rsv")).unwrap();
    assert_eq!(bytes, vec![0xFF, 0x00]);
    assert!(decode(&bytes).is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn directory_bootstrap_is_idempotent() {
    let dir = scratch_dir("rerun");
    let mut progress = Recording::default();

    generate(&dir, &mut progress).unwrap();
    // Second run over the existing directory must not fail.
    generate(&dir, &mut progress).unwrap();

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_aborts_at_the_first_accepted_invalid_case() {
    let dir = scratch_dir("abort");
    let mut progress = Recording::default();

    // Case 2 is well-formed, so it must be accepted - which for the
    // invalid list is the fatal condition.
    let well_formed = encode(&[vec![Some("a".to_owned())]]);
    let invalid = vec![vec![0xFF, 0x00], well_formed, b"Hello".to_vec()];

    let err = generate_into(&dir, &[], &invalid, &mut progress).unwrap_err();
    match err {
        HarnessError::InvalidCaseNotRejected { name } => assert_eq!(name, "Invalid_002"),
        other => panic!("expected InvalidCaseNotRejected, got {}", other),
    }

    // Everything before the failing case was persisted; the failing
    // case's file may exist (persist precedes the check); nothing
    // after it was touched.
    assert!(dir.join("Invalid_001.rsv").is_file());
    assert!(!dir.join("Invalid_003.rsv").exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn valid_and_invalid_numbering_spaces_are_independent() {
    let dir = scratch_dir("numbering");
    let mut progress = Recording::default();

    let valid = vec![vec![vec![Some("x".to_owned())]]];
    let invalid = vec![b"Hello".to_vec()];
    generate_into(&dir, &valid, &invalid, &mut progress).unwrap();

    assert!(dir.join("Valid_001.rsv").is_file());
    assert!(dir.join("Invalid_001.rsv").is_file());

    std::fs::remove_dir_all(&dir).ok();
}
