//! Matrix decoder: rebuilds a plaintext candidate from ciphertext and a key.
//!
//! The ciphertext is `columns` contiguous blocks of `rows` words, one per key
//! entry in key order. Each block is filed under the physical column slot
//! named by its entry's magnitude, oriented so that the *tail* of every slot
//! is always the topmost unread word:
//!
//! ```text
//! key entry < 0 (read bottom-to-top)  block = [bottom .. top]  stored as is
//! key entry > 0 (read top-to-bottom)  block = [top .. bottom]  stored reversed
//! ```
//!
//! Reading then pops one word from the tail of each slot, left to right, once
//! per row. Both directions share that single consumption rule.

use crate::key::{Direction, Key};

/// Per-slot word lists for one key evaluation.
///
/// Built fresh for every key and drained exactly once by
/// [`read_rows`](Self::read_rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationMatrix<'a> {
    slots: Vec<Vec<&'a str>>,
    rows: usize,
}

impl<'a> TranslationMatrix<'a> {
    /// Files each ciphertext block under its physical slot.
    ///
    /// # Parameters
    /// - `words`: The ciphertext, exactly `rows * key.columns()` words.
    /// - `key`: A valid signed permutation.
    /// - `rows`: Number of grid rows (block length).
    ///
    /// # Panics
    /// May panic if `key` is not a signed permutation or `words` is shorter
    /// than `rows * key.columns()`. Both are caller contract violations.
    pub fn build<S: AsRef<str>>(words: &'a [S], key: &Key, rows: usize) -> Self {
        let mut slots: Vec<Vec<&'a str>> = vec![Vec::new(); key.columns()];
        let mut start = 0;

        for placement in key.placements() {
            let block = words[start..start + rows].iter().map(|w| w.as_ref());
            slots[placement.slot] = match placement.direction {
                Direction::Up => block.collect(),
                Direction::Down => block.rev().collect(),
            };
            start += rows;
        }

        TranslationMatrix { slots, rows }
    }

    /// Emits the grid row by row, left to right, draining every slot.
    ///
    /// # Returns
    /// The plaintext words in reading order (`rows * columns` of them).
    ///
    /// # Panics
    /// Panics if a slot runs out before the last row, which only happens
    /// when the matrix was built from a key that is not a signed permutation.
    pub fn read_rows(&mut self) -> Vec<&'a str> {
        let mut out = Vec::with_capacity(self.rows * self.slots.len());
        for _ in 0..self.rows {
            for slot in self.slots.iter_mut() {
                let word = slot
                    .pop()
                    .expect("column slot exhausted before the last row");
                out.push(word);
            }
        }
        out
    }

    /// Returns the words still stored in `slot`, tail = next to be read.
    ///
    /// # Panics
    /// Panics if `slot >= key.columns()` for the key the matrix was built from.
    pub fn slot(&self, slot: usize) -> &[&'a str] {
        &self.slots[slot]
    }

    /// Returns true once every slot has been fully consumed.
    pub fn is_drained(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// Decodes `words` under `key` into a plaintext candidate.
///
/// Words are separated by a single space with no trailing separator.
///
/// # Examples
///
/// ```
/// use routecrack::{decode, Key};
///
/// let words = ["A", "B", "C", "D", "E", "F", "G", "H"];
/// let key = Key::new(vec![-1, 2, -3, 4]).unwrap();
/// assert_eq!(decode(&words, &key, 2), "B C F G A D E H");
/// ```
pub fn decode<S: AsRef<str>>(words: &[S], key: &Key, rows: usize) -> String {
    let mut matrix = TranslationMatrix::build(words, key, rows);
    let plaintext = matrix.read_rows().join(" ");
    debug_assert!(matrix.is_drained());
    plaintext
}
