//! Run sequencing: directory bootstrap, numbering, fail-fast loop.
//!
//! No verification logic lives here. Cases are processed strictly in
//! catalog order, one at a time, so "everything before the failing
//! case was already persisted" is well defined. The loop stops at the
//! first error; earlier fixtures stay on disk.

use crate::catalog;
use crate::progress::Progress;
use crate::writer::{FixtureWriter, HarnessError};
use rsv_core::RowMatrix;
use std::path::Path;

/// Counts of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

/// Generate the built-in catalog into `dir`.
pub fn generate(dir: &Path, progress: &mut dyn Progress) -> Result<Summary, HarnessError> {
    generate_into(
        dir,
        &catalog::valid_cases(),
        &catalog::invalid_cases(),
        progress,
    )
}

/// Generate an explicit case list into `dir`.
///
/// Ids are 1-based per kind, in list order; the valid and invalid
/// numbering spaces are independent. Creating `dir` is idempotent.
pub fn generate_into(
    dir: &Path,
    valid: &[RowMatrix],
    invalid: &[Vec<u8>],
    progress: &mut dyn Progress,
) -> Result<Summary, HarnessError> {
    std::fs::create_dir_all(dir).map_err(|source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut writer = FixtureWriter::new(dir, progress);
    for (i, rows) in valid.iter().enumerate() {
        writer.write_valid(i as u32 + 1, rows)?;
    }
    for (i, bytes) in invalid.iter().enumerate() {
        writer.write_invalid(i as u32 + 1, bytes)?;
    }

    Ok(Summary {
        valid: valid.len(),
        invalid: invalid.len(),
    })
}
