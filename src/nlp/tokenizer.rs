//! Punctuation/abbreviation-aware tokenization
//!
//! This module layers a rule set on top of UAX #29 word segmentation:
//! punctuation marks become tokens of their own, known abbreviations and
//! dotted acronyms keep their trailing period, decimal numbers stay intact,
//! and English clitics are split Penn-style (`don't` -> `do` + `n't`).

use crate::errors::{Result, TextPrepError};
use crate::types::Token;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that keep a trailing period as part of the token
/// (lowercase, stored without the period).
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "rev", "hon", "gen", "sen", "rep", "st",
    "sr", "jr", "etc", "vs", "approx", "dept", "est", "fig", "inc", "ltd",
    "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat",
    "sun",
];

/// Clitic suffixes split off as separate tokens, checked after `n't`.
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A rule-based tokenizer for the pipeline's first stage.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    abbreviations: FxHashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with the built-in abbreviation lexicon
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Tokenize text into an ordered token list.
    ///
    /// Punctuation is kept as separate tokens; sentence-final periods are
    /// not folded into the preceding word unless that word is a known
    /// abbreviation or a dotted acronym.
    ///
    /// Returns an error only when non-empty input produces no tokens at
    /// all, which signals the caller to fall back to whitespace splitting.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::new();

        for (offset, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            // Fold a free-standing period into the preceding abbreviation
            // or dotted acronym ("Dr" + "." -> "Dr.", "U.S.A" + "." -> "U.S.A.").
            if segment == "." {
                if let Some(last) = tokens.last_mut() {
                    if last.end == offset && self.keeps_trailing_period(&last.text) {
                        last.text.push('.');
                        last.end += 1;
                        continue;
                    }
                }
            }

            self.push_segment(&mut tokens, offset, segment);
        }

        if tokens.is_empty() && !text.trim().is_empty() {
            return Err(TextPrepError::stage_failed(
                "tokenize",
                "rule tokenizer produced no tokens for non-empty input",
            ));
        }

        Ok(tokens)
    }

    /// Whether a token absorbs a directly-following period.
    fn keeps_trailing_period(&self, text: &str) -> bool {
        if !text.chars().any(char::is_alphabetic) {
            return false;
        }
        // Dotted acronyms like "U.S.A" carry internal periods already.
        if text.contains('.') {
            return true;
        }
        // Single capital letters are initials ("J. K. Rowling").
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_uppercase() {
                return true;
            }
        }
        self.abbreviations.contains(text.to_lowercase().as_str())
    }

    /// Push a word-bound segment, splitting clitics off the tail.
    fn push_segment(&self, tokens: &mut Vec<Token>, offset: usize, segment: &str) {
        if let Some(split) = clitic_split(segment) {
            let (base, clitic) = segment.split_at(split);
            let idx = tokens.len();
            tokens.push(Token::new(base, offset, offset + split, idx));
            tokens.push(Token::new(
                clitic,
                offset + split,
                offset + segment.len(),
                idx + 1,
            ));
        } else {
            let idx = tokens.len();
            tokens.push(Token::new(segment, offset, offset + segment.len(), idx));
        }
    }
}

/// Find the byte position where a Penn-style clitic split applies, if any.
fn clitic_split(segment: &str) -> Option<usize> {
    let lower = segment.to_ascii_lowercase();

    // "n't" first: the split point sits before the 'n', not at the apostrophe.
    if lower.len() > 3 && lower.ends_with("n't") {
        let split = segment.len() - 3;
        if segment.is_char_boundary(split) {
            return Some(split);
        }
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let split = segment.len() - clitic.len();
            if segment.is_char_boundary(split) {
                return Some(split);
            }
        }
    }

    None
}

/// Naive whitespace tokenization, the fallback when rule tokenization fails.
pub fn whitespace_tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                let idx = tokens.len();
                tokens.push(Token::new(&text[s..i], s, i, idx));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        let idx = tokens.len();
        tokens.push(Token::new(&text[s..], s, text.len(), idx));
    }

    tokens
}
