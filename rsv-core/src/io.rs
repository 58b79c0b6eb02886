//! File load/save helpers.

use crate::codec::{decode, encode, DecodeError, Row, RowMatrix};
use std::io;
use std::path::Path;

/// Failure while loading a document from disk.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Decode(DecodeError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "read failed: {}", err),
            Self::Decode(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DecodeError> for LoadError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

/// Encode a matrix and write it to `path`.
pub fn save_rows(rows: &[Row], path: &Path) -> io::Result<()> {
    std::fs::write(path, encode(rows))
}

/// Read `path` and decode it as an RSV document.
pub fn load_rows(path: &Path) -> Result<RowMatrix, LoadError> {
    let bytes = std::fs::read(path)?;
    Ok(decode(&bytes)?)
}
