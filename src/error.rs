//! Error types for the routecrack library.

use thiserror::Error;

/// Errors produced by the routecrack library.
#[derive(Error, Debug)]
pub enum RouteCipherError {
    /// The declared grid does not hold exactly the ciphertext's words.
    ///
    /// `factors` lists the divisors of `words` in `[2, words - 1]`, i.e. the
    /// row/column values that would have produced a consistent grid.
    #[error(
        "Input columns & rows not factors of length of cipher: \
         {rows} rows x {columns} columns != {words} words (acceptable values: {factors:?})"
    )]
    DimensionMismatch {
        words: usize,
        rows: usize,
        columns: usize,
        factors: Vec<usize>,
    },

    /// The ciphertext contains no words.
    #[error("Ciphertext contains no words")]
    EmptyCiphertext,

    /// Rows or columns were declared as zero.
    #[error("Rows and columns must be positive (got {rows} rows, {columns} columns)")]
    ZeroDimension { rows: usize, columns: usize },

    /// The key space for this many columns cannot be enumerated.
    #[error("Cannot enumerate keys for {columns} columns (maximum is {max})")]
    TooManyColumns { columns: usize, max: usize },

    /// A key is not a signed permutation of `1..=n`, or failed to parse.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A supplied key has a different width than the grid.
    #[error("Key {key} has the wrong width for a {columns}-column grid")]
    KeyWidthMismatch { key: String, columns: usize },

    /// A required setting was given neither on the command line nor in the config file.
    #[error("Missing required setting: {0}")]
    MissingConfig(&'static str),

    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouteCipherError {
    /// Returns true for errors caused by an inconsistent configuration, as
    /// opposed to I/O or parse failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RouteCipherError::DimensionMismatch { .. }
                | RouteCipherError::EmptyCiphertext
                | RouteCipherError::ZeroDimension { .. }
                | RouteCipherError::TooManyColumns { .. }
                | RouteCipherError::KeyWidthMismatch { .. }
                | RouteCipherError::MissingConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = RouteCipherError::DimensionMismatch {
            words: 12,
            rows: 5,
            columns: 2,
            factors: vec![2, 3, 4, 6],
        };
        assert_eq!(
            format!("{}", err),
            "Input columns & rows not factors of length of cipher: \
             5 rows x 2 columns != 12 words (acceptable values: [2, 3, 4, 6])"
        );
    }

    #[test]
    fn test_display_zero_dimension() {
        let err = RouteCipherError::ZeroDimension { rows: 0, columns: 4 };
        assert_eq!(
            format!("{}", err),
            "Rows and columns must be positive (got 0 rows, 4 columns)"
        );
    }

    #[test]
    fn test_display_too_many_columns() {
        let err = RouteCipherError::TooManyColumns {
            columns: 21,
            max: 20,
        };
        assert_eq!(
            format!("{}", err),
            "Cannot enumerate keys for 21 columns (maximum is 20)"
        );
    }

    #[test]
    fn test_display_invalid_key() {
        let err = RouteCipherError::InvalidKey("magnitude 3 repeated".to_string());
        assert_eq!(format!("{}", err), "Invalid key: magnitude 3 repeated");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RouteCipherError = io.into();
        assert!(matches!(err, RouteCipherError::Io(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_classification() {
        assert!(RouteCipherError::EmptyCiphertext.is_configuration());
        assert!(RouteCipherError::MissingConfig("rows").is_configuration());
        assert!(!RouteCipherError::InvalidKey(String::new()).is_configuration());
    }
}
