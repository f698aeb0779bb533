//! Shared helpers for integration tests.

use routecrack::{Direction, Key};

/// Encrypts `plaintext` (row-major, `rows` x `key.columns()`) by walking the
/// columns in key order, each in the direction its sign records.
pub fn encrypt<S: AsRef<str>>(plaintext: &[S], key: &Key, rows: usize) -> Vec<String> {
    let columns = key.columns();
    assert_eq!(plaintext.len(), rows * columns, "plaintext must fill the grid");

    let cell = |r: usize, c: usize| plaintext[r * columns + c].as_ref().to_string();
    let mut out = Vec::with_capacity(plaintext.len());
    for p in key.placements() {
        match p.direction {
            Direction::Down => out.extend((0..rows).map(|r| cell(r, p.slot))),
            Direction::Up => out.extend((0..rows).rev().map(|r| cell(r, p.slot))),
        }
    }
    out
}

/// Splits a space-separated candidate back into words.
pub fn split(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
