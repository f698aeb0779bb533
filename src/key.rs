//! Route cipher keys: signed permutations of the column numbers.
//!
//! A key of width `n` lists the columns `1..=n` in the order they were read
//! during encryption. The sign of each entry records the direction that
//! column was traversed:
//!
//! ```text
//!   key = [-1, 2, -3, 4]
//!
//!   1   2   3   4
//!  ___ ___ ___ ___
//! | ^ | | | ^ | | |
//! |_|_|_v_|_|_|_v_|
//! | ^ | | | ^ | | |
//! |_|_|_v_|_|_|_v_|
//! START        END
//! ```
//!
//! Negative entries were read bottom-to-top, positive entries top-to-bottom.
//! Zero is never a valid entry.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteCipherError;

/// Traversal direction of one column during encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Read from the top row down (positive key entry).
    Down,
    /// Read from the bottom row up (negative key entry).
    Up,
}

/// Where one contiguous ciphertext block belongs in the grid.
///
/// `position` is the block's index in key order; `slot` is the physical
/// column it occupies. The two only coincide for unpermuted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Zero-based index of the entry in the key.
    pub position: usize,
    /// Zero-based physical column slot (`|entry| - 1`).
    pub slot: usize,
    /// Traversal direction recorded by the entry's sign.
    pub direction: Direction,
}

/// A signed permutation of `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    entries: Vec<i32>,
}

impl Key {
    /// Creates a key after checking it is a signed permutation.
    ///
    /// # Errors
    /// Returns [`RouteCipherError::InvalidKey`] if any entry is zero, out of
    /// range, or a repeated magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use routecrack::Key;
    ///
    /// assert!(Key::new(vec![-1, 2, -3, 4]).is_ok());
    /// assert!(Key::new(vec![1, -1]).is_err());
    /// assert!(Key::new(vec![0, 1]).is_err());
    /// ```
    pub fn new(entries: Vec<i32>) -> Result<Self, RouteCipherError> {
        Self::check(&entries)?;
        Ok(Self { entries })
    }

    /// Wraps entries the caller already knows to be a signed permutation.
    pub(crate) fn from_entries_unchecked(entries: Vec<i32>) -> Self {
        debug_assert!(Self::is_signed_permutation(&entries));
        Self { entries }
    }

    /// Returns true if the absolute values of `entries` are exactly
    /// `{1, ..., entries.len()}`, each once, with no zero entry.
    pub fn is_signed_permutation(entries: &[i32]) -> bool {
        Self::check(entries).is_ok()
    }

    fn check(entries: &[i32]) -> Result<(), RouteCipherError> {
        let n = entries.len();
        let mut seen = vec![false; n];
        for &e in entries {
            if e == 0 {
                return Err(RouteCipherError::InvalidKey(
                    "0 is not a valid column".to_string(),
                ));
            }
            let m = e.unsigned_abs() as usize;
            if m > n {
                return Err(RouteCipherError::InvalidKey(format!(
                    "column {} outside 1..={}",
                    e, n
                )));
            }
            if seen[m - 1] {
                return Err(RouteCipherError::InvalidKey(format!(
                    "column {} appears more than once",
                    m
                )));
            }
            seen[m - 1] = true;
        }
        Ok(())
    }

    /// Returns the raw signed entries in key order.
    pub fn entries(&self) -> &[i32] {
        &self.entries
    }

    /// Returns the number of columns this key covers.
    pub fn columns(&self) -> usize {
        self.entries.len()
    }

    /// Yields the placement of each ciphertext block, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use routecrack::{Direction, Key};
    ///
    /// let key = Key::new(vec![3, -1, 2]).unwrap();
    /// let second = key.placements().nth(1).unwrap();
    /// assert_eq!(second.position, 1);
    /// assert_eq!(second.slot, 0);
    /// assert_eq!(second.direction, Direction::Up);
    /// ```
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, &e)| Placement {
                position,
                slot: e.unsigned_abs() as usize - 1,
                direction: if e < 0 { Direction::Up } else { Direction::Down },
            })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.entries)
    }
}

impl FromStr for Key {
    type Err = RouteCipherError;

    /// Parses keys written as `-1 2 -3 4`, `-1,2,-3,4` or `[-1, 2, -3, 4]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        let entries = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| {
                    RouteCipherError::InvalidKey(format!("'{}' is not an integer", tok))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if entries.is_empty() {
            return Err(RouteCipherError::InvalidKey("key is empty".to_string()));
        }
        Key::new(entries)
    }
}
