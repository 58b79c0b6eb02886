//! Per-case fixture protocol.
//!
//! For a valid case the writer encodes, self-validates, persists, and
//! then proves two independent reload paths reproduce the same bytes:
//! the JSON interchange file re-parsed through a generic JSON parser,
//! and the native file decoded and re-encoded. For an invalid case it
//! persists the raw bytes and proves the decoder and validator both
//! reject them. Any violation is fatal; there is no case-local
//! recovery.

use crate::progress::Progress;
use rsv_core::{decode, encode, is_valid, rows_from_json, to_json, Row};
use std::io;
use std::path::{Path, PathBuf};

/// Which numbering space a fixture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    Valid,
    Invalid,
}

impl FixtureKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }
}

/// File stem for a fixture id: `Valid_001`, `Invalid_042`.
///
/// Ids are zero-padded to three digits; wider ids simply widen the
/// stem, so numbering stays unique past 999.
pub fn fixture_stem(kind: FixtureKind, id: u32) -> String {
    format!("{}_{:03}", kind.prefix(), id)
}

/// Fatal generation failure. All variants abort the run.
#[derive(Debug)]
pub enum HarnessError {
    /// A case meant to be valid failed one of its round-trip checks.
    ValidationMismatch { name: String, check: &'static str },
    /// A case meant to be invalid was accepted by the decoder or the
    /// standalone validator.
    InvalidCaseNotRejected { name: String },
    /// File system failure while persisting or reloading a fixture.
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationMismatch { name, check } => {
                write!(f, "validation mismatch for {}: {}", name, check)
            }
            Self::InvalidCaseNotRejected { name } => {
                write!(f, "{} was accepted but must be rejected", name)
            }
            Self::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Writes and verifies fixtures in one output directory.
pub struct FixtureWriter<'a> {
    dir: &'a Path,
    progress: &'a mut dyn Progress,
}

impl<'a> FixtureWriter<'a> {
    pub fn new(dir: &'a Path, progress: &'a mut dyn Progress) -> Self {
        Self { dir, progress }
    }

    /// Valid-case protocol: encode, self-validate, persist native and
    /// interchange files, then reload both and require byte-identical
    /// re-encodings.
    pub fn write_valid(&mut self, id: u32, rows: &[Row]) -> Result<(), HarnessError> {
        let name = fixture_stem(FixtureKind::Valid, id);
        let bytes = encode(rows);

        if !is_valid(&bytes) {
            return Err(HarnessError::ValidationMismatch {
                name,
                check: "validator rejected freshly encoded bytes",
            });
        }

        let rsv_path = self.dir.join(format!("{}.rsv", name));
        self.persist(&rsv_path, &bytes)?;

        let json_path = self.dir.join(format!("{}.json", name));
        self.persist(&json_path, to_json(rows).as_bytes())?;

        // Interchange path: reload the JSON text, push it through a
        // generic parser, re-encode the untyped result.
        let text = read(&json_path)?;
        let reencoded = match serde_json::from_slice::<serde_json::Value>(&text)
            .ok()
            .as_ref()
            .and_then(|value| rows_from_json(value).ok())
        {
            Some(reparsed) => encode(&reparsed),
            None => {
                return Err(HarnessError::ValidationMismatch {
                    name,
                    check: "interchange file did not parse back to a matrix",
                })
            }
        };
        if reencoded != bytes {
            return Err(HarnessError::ValidationMismatch {
                name,
                check: "interchange round trip diverged from native bytes",
            });
        }

        // Native path: reload the persisted bytes, decode, re-encode.
        let reloaded = read(&rsv_path)?;
        let redecoded = match decode(&reloaded) {
            Ok(rows) => rows,
            Err(_) => {
                return Err(HarnessError::ValidationMismatch {
                    name,
                    check: "persisted native bytes failed to decode",
                })
            }
        };
        if encode(&redecoded) != bytes {
            return Err(HarnessError::ValidationMismatch {
                name,
                check: "native round trip diverged from original bytes",
            });
        }

        Ok(())
    }

    /// Invalid-case protocol: persist the raw bytes verbatim, then
    /// require both the decoder and the standalone validator to reject
    /// them.
    pub fn write_invalid(&mut self, id: u32, bytes: &[u8]) -> Result<(), HarnessError> {
        let name = fixture_stem(FixtureKind::Invalid, id);
        let rsv_path = self.dir.join(format!("{}.rsv", name));
        self.persist(&rsv_path, bytes)?;

        let reloaded = read(&rsv_path)?;
        if decode(&reloaded).is_ok() {
            return Err(HarnessError::InvalidCaseNotRejected { name });
        }
        if is_valid(bytes) {
            return Err(HarnessError::InvalidCaseNotRejected { name });
        }

        Ok(())
    }

    fn persist(&mut self, path: &Path, bytes: &[u8]) -> Result<(), HarnessError> {
        std::fs::write(path, bytes).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.progress.path_written(path);
        Ok(())
    }
}

fn read(path: &Path) -> Result<Vec<u8>, HarnessError> {
    std::fs::read(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
