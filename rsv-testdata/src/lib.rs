//! RSV test corpus generator
//!
//! Produces the fixture files that independent RSV implementations
//! check themselves against: valid fixtures must decode and re-encode
//! byte-identically, invalid fixtures must be rejected. Every fixture
//! is verified through multiple round-trip paths at generation time,
//! and the first inconsistency aborts the whole run - a silently wrong
//! corpus is worse than no corpus.
//!
//! # Architecture
//!
//! - **catalog.rs** - the fixed case catalog (data, no logic)
//! - **writer.rs** - per-case encode/verify/persist protocol
//! - **orchestrator.rs** - sequencing, numbering, directory bootstrap
//! - **progress.rs** - injectable progress sink

pub mod catalog;
pub mod orchestrator;
pub mod progress;
pub mod writer;

pub use orchestrator::{generate, generate_into, Summary};
pub use progress::{ConsoleProgress, Progress};
pub use writer::{fixture_stem, FixtureKind, FixtureWriter, HarnessError};
