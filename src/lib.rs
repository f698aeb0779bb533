//! Brute-force decryption engine for whole-word route ciphers.
//!
//! A route cipher writes plaintext words row by row into a grid, then reads
//! the ciphertext out column by column in a secret order, walking each column
//! either top-to-bottom or bottom-to-top. The key is a signed permutation of
//! the column numbers (see [`Key`]).
//!
//! Given the ciphertext and the grid dimensions, this crate enumerates every
//! possible key and reconstructs the corresponding plaintext candidate for a
//! human to inspect. Candidates are not scored or ranked.
//!
//! # Architecture
//!
//! ```text
//! validator   (grid dimensions vs. word count, factor diagnostics)
//!     ↓
//! keyspace    (KeySpace trait — every signed permutation of 1..=C)
//!     ↓ one key at a time
//! decoder     (TranslationMatrix — file blocks by slot, read rows)
//!     ↓
//! report      (key + candidate per line, total at the end)
//! ```
//!
//! [`RouteCracker`] ties the stages together.
//!
//! # Examples
//!
//! Decode under a known key:
//!
//! ```
//! use routecrack::{decode, Key};
//!
//! let words = ["A", "B", "C", "D", "E", "F", "G", "H"];
//! let key: Key = "-1 2 -3 4".parse().unwrap();
//! assert_eq!(decode(&words, &key, 2), "B C F G A D E H");
//! ```
//!
//! Brute-force every key of a 2 x 3 grid:
//!
//! ```
//! use routecrack::{CrackConfig, Exhaustive, RouteCracker};
//!
//! let cracker = RouteCracker::new(CrackConfig::new("A B C D E F", 2, 3)).unwrap();
//! assert_eq!(cracker.candidates(&Exhaustive).count(), 48);
//! ```

#![deny(clippy::all)]

pub mod error;

mod ciphertext;
pub mod config;
mod cracker;
pub mod decoder;
pub mod key;
pub mod keyspace;
pub mod report;
pub mod validator;

pub use ciphertext::Ciphertext;
pub use config::CrackConfig;
pub use cracker::{Candidates, RouteCracker};
pub use decoder::{decode, TranslationMatrix};
pub use error::RouteCipherError;
pub use key::{Direction, Key, Placement};
pub use keyspace::{Exhaustive, FixedKeys, KeySpace};
pub use report::Reporter;
