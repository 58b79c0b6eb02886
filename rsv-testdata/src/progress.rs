//! Injectable progress sink.
//!
//! The per-file console lines are observational, not part of the
//! correctness contract, so the writer reports through this trait and
//! tests substitute a recording sink.

use std::path::Path;

/// Receives one report per fixture file written.
pub trait Progress {
    fn path_written(&mut self, path: &Path);
}

/// Prints each written path on its own line.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn path_written(&mut self, path: &Path) {
        println!("{}", path.display());
    }
}
