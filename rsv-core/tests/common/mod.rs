//! Test infrastructure for the RSV codec
//!
//! Provides seeded stochastic matrix generation for fuzz round-trips.

mod generators;

pub use generators::Gen;
