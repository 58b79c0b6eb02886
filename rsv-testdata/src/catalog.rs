//! The fixed case catalog.
//!
//! Pure data: an ordered list of matrices that must round-trip, and an
//! ordered list of byte sequences that must be rejected. Catalog order
//! is fixture order - reordering entries renumbers the corpus.

use rsv_core::{Row, RowMatrix};

fn row(cells: &[Option<&str>]) -> Row {
    cells.iter().map(|c| c.map(str::to_owned)).collect()
}

/// Matrices every conforming implementation must accept, in fixture
/// order.
pub fn valid_cases() -> Vec<RowMatrix> {
    let mut cases = vec![
        // Two short rows with a null in the first.
        vec![row(&[Some("a"), None]), row(&[Some("b"), Some("c")])],
        // The empty document.
        vec![],
        // A single empty row, then two empty rows.
        vec![vec![]],
        vec![vec![], vec![]],
        // Empty string and null are distinct cells.
        vec![row(&[Some("")])],
        vec![row(&[None])],
        // Reference document: ASCII, supplementary-plane scalars,
        // null, empty string, embedded NUL and newline.
        vec![
            row(&[Some("Hello"), Some("🌎"), None, Some("")]),
            row(&[Some("A\u{0}B\nC"), Some("Test 𝄞")]),
            vec![],
            row(&[Some("")]),
        ],
        // Multi-byte UTF-8 across the plane boundary.
        vec![row(&[Some("Köln"), Some("日本語"), Some("🌍🌏")])],
        // Jagged row lengths.
        vec![
            row(&[Some("1")]),
            row(&[Some("2"), Some("3"), Some("4")]),
            vec![],
            row(&[Some("5"), Some("6")]),
        ],
        // Control characters inside cells.
        vec![row(&[Some("line1\nline2"), Some("tab\there"), Some("\r\n")])],
        // Nulls and empties interleaved.
        vec![row(&[None, Some(""), None]), row(&[Some(""), None])],
    ];

    // A longer document so the corpus has one fixture past toy size.
    cases.push(
        (0..32)
            .map(|i| row(&[Some(&format!("r{}", i)), Some("x"), None]))
            .collect(),
    );

    cases
}

/// Byte sequences every conforming implementation must reject, in
/// fixture order. Each is malformed for a distinct reason.
pub fn invalid_cases() -> Vec<Vec<u8>> {
    vec![
        // Value terminator followed by a stray byte, document never
        // closed.
        vec![0xFF, 0x00],
        // Bare text: no terminators at all.
        b"Hello".to_vec(),
        // Value terminated but the row is not.
        b"Hello\xFF".to_vec(),
        // Row terminator while a value is in progress.
        b"Hello\xFD".to_vec(),
        // Null marker without its value terminator.
        vec![0xFE, 0xFD],
        // Payload bytes after the null marker.
        vec![0xFE, 0x41, 0xFF, 0xFD],
        // Lone UTF-8 continuation byte.
        vec![0x80, 0xFF, 0xFD],
        // Overlong two-byte encoding of '/'.
        vec![0xC0, 0xAF, 0xFF, 0xFD],
        // UTF-16 surrogate half.
        vec![0xED, 0xA0, 0x80, 0xFF, 0xFD],
        // Lead byte above U+10FFFF.
        vec![0xF5, 0x80, 0x80, 0x80, 0xFF, 0xFD],
        // Four-byte scalar truncated by the value terminator.
        vec![0xF0, 0x9F, 0x8C, 0xFF, 0xFD],
        // Document ends inside a second row.
        vec![0xFD, 0xFF],
    ]
}
