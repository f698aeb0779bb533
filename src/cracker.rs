//! RouteCracker: brute-force driver for whole-word route ciphers.
//!
//! Validates the configured grid once, then for every key supplied by a
//! [`KeySpace`] decodes a plaintext candidate and hands it to the reporter.
//! Each key is evaluated independently with its own translation matrix.

use std::io::Write;

use crate::ciphertext::Ciphertext;
use crate::config::CrackConfig;
use crate::decoder::decode;
use crate::error::RouteCipherError;
use crate::key::Key;
use crate::keyspace::{validate_columns, KeySpace};
use crate::report::Reporter;
use crate::validator::{validate, Diagnostics};

/// Key space size above which a run is logged as a warning.
const LARGE_KEY_SPACE: u128 = 10_000_000;

/// Validated ciphertext and grid, ready to be brute-forced.
///
/// # Examples
///
/// ```
/// use routecrack::{CrackConfig, Exhaustive, Reporter, RouteCracker};
///
/// let cracker = RouteCracker::new(CrackConfig::new("A B C D", 2, 2)).unwrap();
/// let mut reporter = Reporter::new(Vec::new());
/// let evaluated = cracker.run(&Exhaustive, &mut reporter).unwrap();
/// assert_eq!(evaluated, 8);
/// ```
#[derive(Debug, Clone)]
pub struct RouteCracker {
    ciphertext: Ciphertext,
    rows: usize,
    columns: usize,
    diagnostics: Diagnostics,
}

impl RouteCracker {
    /// Validates `config` and builds a cracker for it.
    ///
    /// # Errors
    /// - Any error from [`validate`]; see
    ///   [`RouteCipherError::DimensionMismatch`] in particular.
    /// - [`RouteCipherError::TooManyColumns`] if the key space is too wide
    ///   to enumerate.
    pub fn new(config: CrackConfig) -> Result<Self, RouteCipherError> {
        let ciphertext = config.words();
        let diagnostics = validate(&ciphertext, config.rows, config.columns)?;
        validate_columns(config.columns)?;

        log::info!(
            "ciphertext of {} words accepted as {} rows x {} columns",
            ciphertext.len(),
            config.rows,
            config.columns
        );

        Ok(RouteCracker {
            ciphertext,
            rows: config.rows,
            columns: config.columns,
            diagnostics,
        })
    }

    /// Returns the length diagnostics computed during validation.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the validated ciphertext.
    pub fn ciphertext(&self) -> &Ciphertext {
        &self.ciphertext
    }

    /// Returns the number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of grid columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Lazily yields `(key, plaintext candidate)` for every key in `keys`.
    ///
    /// # Panics
    /// Decoding panics on a key whose width differs from the grid's; call
    /// [`KeySpace::check`] first for key sources that can produce one.
    pub fn candidates<K: KeySpace>(&self, keys: &K) -> Candidates<'_, K::Keys> {
        Candidates {
            words: self.ciphertext.words(),
            rows: self.rows,
            keys: keys.enumerate(self.columns),
        }
    }

    /// Evaluates every key and reports each candidate, then the total.
    ///
    /// # Returns
    /// The number of keys evaluated.
    ///
    /// # Errors
    /// - Any error from [`KeySpace::check`], e.g.
    ///   [`RouteCipherError::KeyWidthMismatch`]; nothing is reported then.
    /// - [`RouteCipherError::Io`] if the report cannot be written.
    pub fn run<K: KeySpace, W: Write>(
        &self,
        keys: &K,
        reporter: &mut Reporter<W>,
    ) -> Result<usize, RouteCipherError> {
        keys.check(self.columns)?;
        match keys.size(self.columns) {
            Some(total) if total <= LARGE_KEY_SPACE => {
                log::debug!("evaluating {} keys", total)
            }
            Some(total) => log::warn!(
                "searching {} keys for {} columns",
                total,
                self.columns
            ),
            None => log::warn!("key space for {} columns overflows u128", self.columns),
        }

        let mut evaluated = 0usize;
        for (key, plaintext) in self.candidates(keys) {
            log::trace!("key {} decoded", key);
            reporter.candidate(&key, &plaintext)?;
            evaluated += 1;
        }
        reporter.summary(evaluated)?;
        log::info!("evaluated {} keys", evaluated);
        Ok(evaluated)
    }
}

/// Iterator returned by [`RouteCracker::candidates`].
pub struct Candidates<'a, I> {
    words: &'a [String],
    rows: usize,
    keys: I,
}

impl<I: Iterator<Item = Key>> Iterator for Candidates<'_, I> {
    type Item = (Key, String);

    fn next(&mut self) -> Option<(Key, String)> {
        let key = self.keys.next()?;
        let plaintext = decode(self.words, &key, self.rows);
        Some((key, plaintext))
    }
}
