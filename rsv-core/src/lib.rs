//! RSV Core
//!
//! Encoder, decoder and validator for RSV (Rows of String Values),
//! a row-oriented serialization format for jagged matrices of
//! strings and nulls.
//!
//! # Architecture
//!
//! - **codec.rs** - wire format: encode / decode / is_valid
//! - **json.rs** - JSON interchange bridge
//! - **io.rs** - file load/save helpers

pub mod codec;
pub mod io;
pub mod json;

pub use codec::{decode, encode, is_valid, DecodeError, Row, RowMatrix};
pub use io::{load_rows, save_rows, LoadError};
pub use json::{rows_from_json, to_json, JsonError};
