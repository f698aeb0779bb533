//! Run configuration.
//!
//! A [`CrackConfig`] is assembled once at the application boundary (from a
//! JSON file, command-line flags, or both) and handed to the
//! [`RouteCracker`](crate::RouteCracker) by value. Nothing downstream reads
//! ambient state.
//!
//! ```json
//! {
//!   "ciphertext": "REST TRANSPORT YOU GODWIN ...",
//!   "rows": 5,
//!   "columns": 4
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ciphertext::Ciphertext;
use crate::error::RouteCipherError;

/// Ciphertext plus declared grid dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CrackConfig {
    /// Whitespace-delimited ciphertext words.
    pub ciphertext: String,
    /// Number of rows in the transposition grid.
    pub rows: usize,
    /// Number of columns in the transposition grid.
    #[serde(alias = "cols")]
    pub columns: usize,
}

impl CrackConfig {
    /// Creates a configuration from its parts.
    pub fn new(ciphertext: impl Into<String>, rows: usize, columns: usize) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            rows,
            columns,
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns [`RouteCipherError::Json`] if the document is malformed or
    /// misses a field.
    pub fn from_json_str(json: &str) -> Result<Self, RouteCipherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`RouteCipherError::Io`] if the file cannot be read, or
    /// [`RouteCipherError::Json`] if it cannot be parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RouteCipherError> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Tokenizes the configured ciphertext.
    pub fn words(&self) -> Ciphertext {
        Ciphertext::from_text(&self.ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let cfg = CrackConfig::from_json_str(
            r#"{ "ciphertext": "A B C D E F", "rows": 2, "columns": 3 }"#,
        )
        .unwrap();
        assert_eq!(cfg, CrackConfig::new("A B C D E F", 2, 3));
        assert_eq!(cfg.words().len(), 6);
    }

    #[test]
    fn test_cols_alias() {
        let cfg =
            CrackConfig::from_json_str(r#"{ "ciphertext": "A B", "rows": 1, "cols": 2 }"#)
                .unwrap();
        assert_eq!(cfg.columns, 2);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = CrackConfig::from_json_str(r#"{ "ciphertext": "A B", "rows": 1 }"#)
            .unwrap_err();
        assert!(matches!(err, RouteCipherError::Json(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CrackConfig::from_json_str(
            r#"{ "ciphertext": "A", "rows": 1, "columns": 1, "key": [1] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, RouteCipherError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CrackConfig::from_json_file("/nonexistent/routecrack/config.json").unwrap_err();
        assert!(matches!(err, RouteCipherError::Io(_)));
    }

    #[test]
    fn test_serialize_round_trips_through_json() {
        let cfg = CrackConfig::new("X Y", 1, 2);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(CrackConfig::from_json_str(&json).unwrap(), cfg);
    }
}
