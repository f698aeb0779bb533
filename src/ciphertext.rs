//! Whole-word ciphertext.

use std::fmt;

/// An ordered, immutable sequence of ciphertext word tokens.
///
/// Tokens are opaque: no case folding or punctuation handling is applied,
/// the text is only split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    words: Vec<String>,
}

impl Ciphertext {
    /// Splits `text` on any run of whitespace (spaces, tabs, newlines).
    ///
    /// # Examples
    ///
    /// ```
    /// use routecrack::Ciphertext;
    ///
    /// let ct = Ciphertext::from_text("REST TRANSPORT\n  YOU GODWIN");
    /// assert_eq!(ct.len(), 4);
    /// assert_eq!(ct.words()[2], "YOU");
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Builds a ciphertext from already tokenized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the words in ciphertext order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}
