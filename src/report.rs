//! Human-readable run report.
//!
//! Output layout:
//!
//! ```text
//!
//! Length of cipher = 8
//! Acceptable column/row values include: [2, 4]
//!
//!
//! using key = [-1, 2, -3, 4]
//! translated = B C F G A D E H
//! ...
//!
//! number of keys = 384
//! ```

use std::io::{self, Write};

use crate::key::Key;
use crate::validator::Diagnostics;

/// Writes diagnostics, candidates and the final tally to a sink.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Wraps an output sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the ciphertext length and its factor list.
    pub fn diagnostics(&mut self, diagnostics: &Diagnostics) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Length of cipher = {}", diagnostics.word_count)?;
        writeln!(
            self.out,
            "Acceptable column/row values include: {:?}",
            diagnostics.factors
        )?;
        writeln!(self.out)
    }

    /// Writes one key and the plaintext it produces.
    pub fn candidate(&mut self, key: &Key, plaintext: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "using key = {}", key)?;
        writeln!(self.out, "translated = {}", plaintext)
    }

    /// Writes the number of keys evaluated.
    pub fn summary(&mut self, keys_evaluated: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "number of keys = {}", keys_evaluated)?;
        self.out.flush()
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
