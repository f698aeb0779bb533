//! Grid dimension validation.
//!
//! The ciphertext must fill the declared grid exactly; truncating or padding
//! a mismatched grid would produce meaningless candidates.

use crate::ciphertext::Ciphertext;
use crate::error::RouteCipherError;

/// Operator-facing diagnostics about the ciphertext length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Number of ciphertext words.
    pub word_count: usize,
    /// Divisors of `word_count` in `[2, word_count - 1]`.
    pub factors: Vec<usize>,
}

/// Returns every `f` in `[2, n - 1]` with `n % f == 0`, ascending.
///
/// # Examples
///
/// ```
/// use routecrack::validator::factors;
///
/// assert_eq!(factors(12), vec![2, 3, 4, 6]);
/// assert!(factors(7).is_empty());
/// ```
pub fn factors(n: usize) -> Vec<usize> {
    (2..n).filter(|f| n % f == 0).collect()
}

/// Computes the length diagnostics for a ciphertext of `word_count` words.
pub fn diagnose(word_count: usize) -> Diagnostics {
    Diagnostics {
        word_count,
        factors: factors(word_count),
    }
}

/// Checks that `rows * columns` equals the ciphertext word count.
///
/// # Parameters
/// - `ciphertext`: The words to decode (not modified).
/// - `rows`: Declared grid rows.
/// - `columns`: Declared grid columns.
///
/// # Returns
/// The length [`Diagnostics`] on success.
///
/// # Errors
/// - [`RouteCipherError::EmptyCiphertext`] if there are no words.
/// - [`RouteCipherError::ZeroDimension`] if `rows` or `columns` is zero.
/// - [`RouteCipherError::DimensionMismatch`] if the grid size differs from the
///   word count (an overflowing product is also a mismatch).
pub fn validate(
    ciphertext: &Ciphertext,
    rows: usize,
    columns: usize,
) -> Result<Diagnostics, RouteCipherError> {
    if ciphertext.is_empty() {
        return Err(RouteCipherError::EmptyCiphertext);
    }
    if rows == 0 || columns == 0 {
        return Err(RouteCipherError::ZeroDimension { rows, columns });
    }

    let diagnostics = diagnose(ciphertext.len());
    if rows.checked_mul(columns) != Some(ciphertext.len()) {
        log::debug!(
            "rejecting {}x{} grid for {} words",
            rows,
            columns,
            ciphertext.len()
        );
        return Err(RouteCipherError::DimensionMismatch {
            words: diagnostics.word_count,
            rows,
            columns,
            factors: diagnostics.factors,
        });
    }
    Ok(diagnostics)
}
