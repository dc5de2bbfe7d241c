//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the
//! `stop-words` crate, with support for caller-supplied additions. The
//! filter predicate is the classic one: keep a token iff its lowercase form
//! is not a stopword AND it is entirely alphanumeric.

use crate::types::Token;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords and non-alphanumeric tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language.
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// The filter predicate: not a stopword AND entirely alphanumeric.
    pub fn keeps(&self, token: &Token) -> bool {
        token.is_alphanumeric() && !self.is_stopword(&token.text)
    }

    /// Filter a token list, preserving order and duplicates.
    ///
    /// The output is always a subsequence of the input. Pure function of
    /// the token list and the stopword set.
    pub fn filter(&self, tokens: &[Token]) -> Vec<Token> {
        tokens.iter().filter(|t| self.keeps(t)).cloned().collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            // Polish has no list in the NLTK stopword source (the pack's source);
            // "pl"/"polish" falls through to the documented English fallback below.
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
