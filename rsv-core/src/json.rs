//! JSON interchange bridge.
//!
//! An RSV matrix has an exact JSON image: an array of arrays whose
//! leaves are strings or null. The bridge renders that image and maps
//! a generic parsed [`serde_json::Value`] back into a matrix, giving
//! the corpus an independent cross-check path against the native
//! binary encoding.

use crate::codec::{Row, RowMatrix};
use serde_json::Value;

/// Conversion failure from a generic JSON value to a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// Top-level value is not an array.
    NotAMatrix,
    /// A row is not an array.
    NotARow,
    /// A cell is neither a string nor null.
    NotACell,
}

impl JsonError {
    /// Get a human-readable message for this error.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAMatrix => "top-level JSON value is not an array",
            Self::NotARow => "row is not a JSON array",
            Self::NotACell => "cell is not a JSON string or null",
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for JsonError {}

/// Render a matrix as JSON text, one row per line.
///
/// String escaping is delegated to `serde_json`, so embedded control
/// characters (including NUL) come out as `\u` escapes.
pub fn to_json(rows: &[Row]) -> String {
    let mut out = String::from("[");
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("\n  ");
        out.push_str(&row_value(row).to_string());
    }
    if !rows.is_empty() {
        out.push('\n');
    }
    out.push(']');
    out
}

fn row_value(row: &Row) -> Value {
    Value::Array(
        row.iter()
            .map(|cell| match cell {
                Some(text) => Value::String(text.clone()),
                None => Value::Null,
            })
            .collect(),
    )
}

/// Interpret a generic parsed JSON value as a matrix.
///
/// Accepts exactly the shape [`to_json`] produces; anything else is
/// rejected rather than coerced.
pub fn rows_from_json(value: &Value) -> Result<RowMatrix, JsonError> {
    let rows = value.as_array().ok_or(JsonError::NotAMatrix)?;
    rows.iter()
        .map(|row| {
            let cells = row.as_array().ok_or(JsonError::NotARow)?;
            cells
                .iter()
                .map(|cell| match cell {
                    Value::Null => Ok(None),
                    Value::String(text) => Ok(Some(text.clone())),
                    _ => Err(JsonError::NotACell),
                })
                .collect::<Result<Row, JsonError>>()
        })
        .collect()
}
