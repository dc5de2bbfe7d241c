//! Rule-based suffix-stripping stemming
//!
//! Wraps the Snowball English stemmer. Stems are crude root forms and are
//! not guaranteed to be dictionary words.

use crate::types::Token;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// A suffix-stripping stemmer applied independently to each token.
pub struct Stemmer {
    inner: SnowballStemmer,
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer").finish_non_exhaustive()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer {
    /// Create a new English stemmer
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }

    /// Stem a single word. Input is lowercased first; the algorithm expects it.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    /// Stem every token, preserving length and order (a 1:1 positional
    /// transform over the filtered token list).
    pub fn stem_all(&self, tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(&t.text)).collect()
    }
}
