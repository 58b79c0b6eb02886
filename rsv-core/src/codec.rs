//! RSV wire format.
//!
//! A document is a sequence of rows; a row is a sequence of values.
//! Three reserved bytes delimit the structure, chosen because none of
//! them can occur inside well-formed UTF-8:
//!
//! ```text
//! 0xFF  value terminator - emitted after every value
//! 0xFE  null marker      - a value of the single byte 0xFE is null
//! 0xFD  row terminator   - emitted after every row
//! ```
//!
//! `"Hello"` then null then `""` as one row encodes as:
//!
//! ```text
//! 48 65 6C 6C 6F FF  FE FF  FF  FD
//! ```
//!
//! Decoding is the strict inverse: every value must be terminated,
//! every row must be terminated, and value payloads must be empty,
//! the null marker, or valid UTF-8.

use memchr::memchr2;

/// Value terminator byte.
pub const VALUE_TERMINATOR: u8 = 0xFF;
/// Null value marker byte.
pub const NULL_VALUE: u8 = 0xFE;
/// Row terminator byte.
pub const ROW_TERMINATOR: u8 = 0xFD;

/// One row of cells. `None` is the explicit null cell.
pub type Row = Vec<Option<String>>;

/// A whole document: rows may be empty and may differ in length.
pub type RowMatrix = Vec<Row>;

/// Decode failure, field-less by design - the input either is or is
/// not a well-formed document, and the corpus treats rejection as a
/// single observable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Non-empty input whose final byte is not a row terminator.
    IncompleteDocument,
    /// Row terminator encountered while a value was still in progress.
    IncompleteRow,
    /// Value payload is neither empty, the null marker, nor valid UTF-8.
    InvalidStringValue,
}

impl DecodeError {
    /// Get a human-readable message for this error.
    pub fn message(self) -> &'static str {
        match self {
            Self::IncompleteDocument => "incomplete RSV document",
            Self::IncompleteRow => "incomplete RSV row",
            Self::InvalidStringValue => "invalid string value",
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DecodeError {}

/// Encode a matrix to RSV bytes. Infallible: any string cell is
/// representable because the delimiter bytes cannot occur in UTF-8.
pub fn encode(rows: &[Row]) -> Vec<u8> {
    let mut out = Vec::new();
    for row in rows {
        for cell in row {
            match cell {
                Some(text) => out.extend_from_slice(text.as_bytes()),
                None => out.push(NULL_VALUE),
            }
            out.push(VALUE_TERMINATOR);
        }
        out.push(ROW_TERMINATOR);
    }
    out
}

/// Decode RSV bytes into a matrix.
///
/// The empty input decodes to the empty matrix. Everything else must
/// end with a row terminator.
pub fn decode(bytes: &[u8]) -> Result<RowMatrix, DecodeError> {
    if let Some(&last) = bytes.last() {
        if last != ROW_TERMINATOR {
            return Err(DecodeError::IncompleteDocument);
        }
    }

    let mut rows = Vec::new();
    let mut row: Row = Vec::new();
    let mut value_start = 0;
    let mut pos = 0;

    // Terminator bytes never occur inside value payloads (they are not
    // valid UTF-8), so scanning for the next one is unambiguous.
    while let Some(offset) = memchr2(VALUE_TERMINATOR, ROW_TERMINATOR, &bytes[pos..]) {
        let i = pos + offset;
        if bytes[i] == VALUE_TERMINATOR {
            row.push(decode_value(&bytes[value_start..i])?);
        } else {
            // Row terminator: only legal on a value boundary.
            if value_start != i {
                return Err(DecodeError::IncompleteRow);
            }
            rows.push(std::mem::take(&mut row));
        }
        value_start = i + 1;
        pos = i + 1;
    }

    Ok(rows)
}

fn decode_value(payload: &[u8]) -> Result<Option<String>, DecodeError> {
    if payload == [NULL_VALUE] {
        return Ok(None);
    }
    match std::str::from_utf8(payload) {
        Ok(text) => Ok(Some(text.to_owned())),
        Err(_) => Err(DecodeError::InvalidStringValue),
    }
}

/// Validate RSV bytes without building the matrix.
///
/// Returns true exactly when [`decode`] would succeed. One pass, no
/// allocation: walks values with an inline UTF-8 acceptor and tracks
/// whether the document sits on a row boundary at the end.
pub fn is_valid(bytes: &[u8]) -> bool {
    let n = bytes.len();
    let mut i = 0;
    let mut row_open = false;

    while i < n {
        if bytes[i] == ROW_TERMINATOR {
            row_open = false;
            i += 1;
            continue;
        }

        // One value: payload, then the value terminator.
        row_open = true;
        if bytes[i] == NULL_VALUE {
            i += 1;
        } else {
            while i < n && bytes[i] != VALUE_TERMINATOR {
                match utf8_char_len(bytes, i) {
                    Some(len) => i += len,
                    None => return false,
                }
            }
        }
        if i >= n || bytes[i] != VALUE_TERMINATOR {
            return false;
        }
        i += 1;
    }

    !row_open
}

/// Length of the well-formed UTF-8 sequence starting at `i`, or None.
///
/// Matches the acceptance rules of `std::str::from_utf8`: overlong
/// forms, surrogates and values above U+10FFFF are rejected, which is
/// what keeps [`is_valid`] and [`decode`] in exact agreement.
fn utf8_char_len(bytes: &[u8], i: usize) -> Option<usize> {
    let lead = bytes[i];
    let (len, first_min, first_max) = match lead {
        0x00..=0x7F => return Some(1),
        0xC2..=0xDF => (2, 0x80, 0xBF),
        0xE0 => (3, 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF),
        0xED => (3, 0x80, 0x9F),
        0xF0 => (4, 0x90, 0xBF),
        0xF1..=0xF3 => (4, 0x80, 0xBF),
        0xF4 => (4, 0x80, 0x8F),
        // 0x80..=0xBF lone continuation, 0xC0/0xC1 overlong leads,
        // 0xF5..=0xFF never valid.
        _ => return None,
    };

    if i + len > bytes.len() {
        return None;
    }
    if bytes[i + 1] < first_min || bytes[i + 1] > first_max {
        return None;
    }
    for k in 2..len {
        if bytes[i + k] < 0x80 || bytes[i + k] > 0xBF {
            return None;
        }
    }
    Some(len)
}
