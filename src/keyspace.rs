//! Key space enumeration.
//!
//! The decoder only needs a stream of candidate keys; where they come from
//! is abstracted behind [`KeySpace`]. [`Exhaustive`] walks the full space of
//! signed permutations lazily, [`FixedKeys`] replays a caller-chosen list.

use crate::error::RouteCipherError;
use crate::key::Key;

/// Widest key the exhaustive enumerator supports (sign masks live in a `u64`).
pub const MAX_COLUMNS: usize = 20;

/// A source of candidate keys for a grid of a given width.
pub trait KeySpace {
    /// Iterator over the keys produced for one grid width.
    type Keys: Iterator<Item = Key>;

    /// Produces the candidate keys for `columns` columns.
    fn enumerate(&self, columns: usize) -> Self::Keys;

    /// Number of keys [`enumerate`](Self::enumerate) yields for `columns`,
    /// or `None` if it does not fit a `u128`.
    fn size(&self, columns: usize) -> Option<u128>;

    /// Checks that every key produced for `columns` fits that grid width.
    ///
    /// # Errors
    /// Returns the [`RouteCipherError`] describing why this source cannot
    /// serve a `columns`-wide grid.
    fn check(&self, columns: usize) -> Result<(), RouteCipherError>;
}

/// Every signed permutation of `1..=columns`, each exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl KeySpace for Exhaustive {
    type Keys = SignedPermutations;

    /// # Panics
    /// Panics if `columns > MAX_COLUMNS`; see [`validate_columns`].
    fn enumerate(&self, columns: usize) -> SignedPermutations {
        SignedPermutations::new(columns)
    }

    fn size(&self, columns: usize) -> Option<u128> {
        key_space_size(columns)
    }

    fn check(&self, columns: usize) -> Result<(), RouteCipherError> {
        validate_columns(columns)
    }
}

/// A fixed list of keys, e.g. supplied by the operator.
#[derive(Debug, Clone, Default)]
pub struct FixedKeys {
    keys: Vec<Key>,
}

impl FixedKeys {
    /// Wraps an explicit list of keys.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl KeySpace for FixedKeys {
    type Keys = std::vec::IntoIter<Key>;

    fn enumerate(&self, _columns: usize) -> Self::Keys {
        self.keys.clone().into_iter()
    }

    fn size(&self, _columns: usize) -> Option<u128> {
        Some(self.keys.len() as u128)
    }

    /// # Errors
    /// Returns [`RouteCipherError::KeyWidthMismatch`] for the first key whose
    /// width is not `columns`.
    fn check(&self, columns: usize) -> Result<(), RouteCipherError> {
        match self.keys.iter().find(|k| k.columns() != columns) {
            Some(bad) => Err(RouteCipherError::KeyWidthMismatch {
                key: bad.to_string(),
                columns,
            }),
            None => Ok(()),
        }
    }
}

/// Checks that `columns` is within what [`Exhaustive`] can enumerate.
///
/// # Errors
/// Returns [`RouteCipherError::TooManyColumns`] if `columns > MAX_COLUMNS`.
pub fn validate_columns(columns: usize) -> Result<(), RouteCipherError> {
    if columns > MAX_COLUMNS {
        return Err(RouteCipherError::TooManyColumns {
            columns,
            max: MAX_COLUMNS,
        });
    }
    Ok(())
}

/// Returns `columns! * 2^columns`, or `None` if it overflows a `u128`.
///
/// # Examples
///
/// ```
/// use routecrack::keyspace::key_space_size;
///
/// assert_eq!(key_space_size(4), Some(384));
/// assert_eq!(key_space_size(0), Some(1));
/// ```
pub fn key_space_size(columns: usize) -> Option<u128> {
    let mut total: u128 = 1;
    for i in 1..=columns as u128 {
        total = total.checked_mul(i)?.checked_mul(2)?;
    }
    Some(total)
}

/// Lazy iterator over all signed permutations of `1..=n`.
///
/// Permutations are visited in lexicographic order of their magnitudes; for
/// each one the `2^n` sign patterns are visited in mask order, where bit `i`
/// set makes entry `i` negative.
#[derive(Debug, Clone)]
pub struct SignedPermutations {
    perm: Vec<i32>,
    mask: u64,
    mask_end: u64,
    exhausted: bool,
}

impl SignedPermutations {
    /// Starts the enumeration for width `n`.
    ///
    /// # Panics
    /// Panics if `n > MAX_COLUMNS`.
    pub fn new(n: usize) -> Self {
        assert!(
            n <= MAX_COLUMNS,
            "key width must be at most {}",
            MAX_COLUMNS
        );
        Self {
            perm: (1..=n as i32).collect(),
            mask: 0,
            mask_end: 1u64 << n,
            exhausted: false,
        }
    }

    fn signed(&self) -> Vec<i32> {
        self.perm
            .iter()
            .enumerate()
            .map(|(i, &m)| if (self.mask >> i) & 1 == 1 { -m } else { m })
            .collect()
    }
}

impl Iterator for SignedPermutations {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.exhausted {
            return None;
        }
        let key = Key::from_entries_unchecked(self.signed());

        self.mask += 1;
        if self.mask == self.mask_end {
            self.mask = 0;
            if !next_permutation(&mut self.perm) {
                self.exhausted = true;
            }
        }
        Some(key)
    }
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns false (leaving `items` untouched) when already at the last one.
fn next_permutation(items: &mut [i32]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts after the pivot
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_permutation_order() {
        let mut p = [1, 2, 3];
        let mut seen = vec![p.to_vec()];
        while next_permutation(&mut p) {
            seen.push(p.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_first_keys_cycle_signs() {
        let keys: Vec<Vec<i32>> = SignedPermutations::new(2)
            .take(4)
            .map(|k| k.entries().to_vec())
            .collect();
        assert_eq!(
            keys,
            vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]
        );
    }

    #[test]
    fn test_counts_match_key_space_size() {
        for n in 0..=5 {
            let count = Exhaustive.enumerate(n).count() as u128;
            assert_eq!(Some(count), key_space_size(n), "n = {}", n);
        }
    }

    #[test]
    fn test_keys_are_distinct_signed_permutations() {
        let keys: Vec<Key> = Exhaustive.enumerate(4).collect();
        let unique: HashSet<&Key> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        for k in &keys {
            assert!(Key::is_signed_permutation(k.entries()));
            assert_eq!(k.columns(), 4);
        }
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let mut it = SignedPermutations::new(1);
        assert_eq!(it.next().unwrap().entries(), &[1]);
        assert_eq!(it.next().unwrap().entries(), &[-1]);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_fixed_keys_replay_in_order() {
        let fixed = FixedKeys::new(vec![
            Key::new(vec![1, -2]).unwrap(),
            Key::new(vec![-2, 1]).unwrap(),
        ]);
        let keys: Vec<Key> = fixed.enumerate(2).collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].entries(), &[-2, 1]);
        assert_eq!(fixed.size(2), Some(2));
    }

    #[test]
    fn test_fixed_keys_check_rejects_wrong_width() {
        let fixed = FixedKeys::new(vec![
            Key::new(vec![1, -2]).unwrap(),
            Key::new(vec![-1, 2, 3]).unwrap(),
        ]);
        assert!(fixed.check(3).is_err());
        match fixed.check(2) {
            Err(RouteCipherError::KeyWidthMismatch { key, columns }) => {
                assert_eq!(key, "[-1, 2, 3]");
                assert_eq!(columns, 2);
            }
            other => panic!("expected KeyWidthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_exhaustive_check_and_size() {
        assert!(Exhaustive.check(MAX_COLUMNS).is_ok());
        assert!(matches!(
            Exhaustive.check(MAX_COLUMNS + 1),
            Err(RouteCipherError::TooManyColumns { .. })
        ));
        assert_eq!(Exhaustive.size(3), Some(48));
    }

    #[test]
    fn test_validate_columns_limit() {
        assert!(validate_columns(MAX_COLUMNS).is_ok());
        assert!(matches!(
            validate_columns(MAX_COLUMNS + 1),
            Err(RouteCipherError::TooManyColumns { .. })
        ));
    }

    #[test]
    fn test_key_space_size_overflow() {
        assert_eq!(key_space_size(1), Some(2));
        assert_eq!(key_space_size(5), Some(120 * 32));
        assert!(key_space_size(MAX_COLUMNS).is_some());
        assert_eq!(key_space_size(200), None);
    }

    #[test]
    #[should_panic(expected = "key width must be at most")]
    fn test_enumerate_too_wide_panics() {
        let _ = SignedPermutations::new(MAX_COLUMNS + 1);
    }
}
