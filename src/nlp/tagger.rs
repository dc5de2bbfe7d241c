//! Part-of-speech tagging
//!
//! A lexicon + suffix-heuristic tagger assigning one grammatical-category
//! label per token of the original (unfiltered) token list. Closed-class
//! words come from a function-word lexicon, open-class words from
//! capitalization and derivational-suffix heuristics.

use crate::errors::{Result, TextPrepError};
use crate::types::{PosTag, TaggedToken, Token};
use rustc_hash::FxHashSet;

/// Common verbs, including irregular past forms the suffix heuristics miss.
const VERBS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has",
    "had", "do", "does", "did", "done", "go", "goes", "went", "gone", "say",
    "says", "said", "make", "makes", "made", "take", "takes", "took", "come",
    "comes", "came", "see", "sees", "saw", "seen", "get", "gets", "got",
    "give", "gives", "gave", "find", "finds", "found", "know", "knows",
    "knew", "buy", "buys", "bought", "run", "runs", "ran", "eat", "eats",
    "ate", "write", "writes", "wrote", "can", "could", "will", "would",
    "shall", "should", "may", "might", "must",
];

/// Symbols tagged SYM rather than PUNCT.
const SYMBOLS: &[char] = &['$', '€', '£', '¥', '%', '+', '=', '<', '>', '#', '&'];

/// A per-token POS tagger over the original token sequence.
#[derive(Debug, Clone)]
pub struct Tagger {
    verbs: FxHashSet<&'static str>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger {
    /// Create a new tagger with the built-in lexicons
    pub fn new() -> Self {
        Self {
            verbs: VERBS.iter().copied().collect(),
        }
    }

    /// Assign one tag per token. The output always has the same length and
    /// order as the input.
    pub fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>> {
        if self.verbs.is_empty() {
            return Err(TextPrepError::resource("tagger lexicon is empty"));
        }

        Ok(tokens
            .iter()
            .map(|t| TaggedToken::new(t.text.clone(), self.classify(&t.text), t.token_idx))
            .collect())
    }

    /// Classify a single surface form.
    fn classify(&self, word: &str) -> PosTag {
        if word.is_empty() {
            return PosTag::Other;
        }

        // Tokens with no alphanumeric content are punctuation or symbols.
        if !word.chars().any(char::is_alphanumeric) {
            if word.chars().any(|c| SYMBOLS.contains(&c)) {
                return PosTag::Symbol;
            }
            return PosTag::Punctuation;
        }

        // Numerals, including decimals and digit groupings.
        if word.chars().any(|c| c.is_ascii_digit())
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        {
            return PosTag::Numeral;
        }

        let lower = word.to_lowercase();

        if let Some(pos) = function_word_pos(&lower) {
            return pos;
        }
        if self.verbs.contains(lower.as_str()) {
            return PosTag::Verb;
        }

        // Dotted abbreviations and acronyms ("U.S.A.", "Dr.", "IBM").
        if word.contains('.') && word.chars().any(|c| c.is_uppercase()) {
            return PosTag::ProperNoun;
        }
        if word.chars().count() >= 2 && word.chars().all(|c| c.is_uppercase()) {
            return PosTag::ProperNoun;
        }

        // Capitalized word (might be proper noun or sentence start).
        let mut chars = word.chars();
        if chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase) {
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }
}

/// Closed-class function words.
fn function_word_pos(lower: &str) -> Option<PosTag> {
    let pos = match lower {
        // Determiners
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
        | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
            PosTag::Determiner
        }
        // Conjunctions
        "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while" | "though"
        | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
        // Prepositions
        "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
        | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
        | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
        // Pronouns
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us"
        | "them" | "myself" | "yourself" | "ourselves" | "themselves" => PosTag::Pronoun,
        // Particles and clitics
        "not" | "n't" | "'s" | "'re" | "'ve" | "'ll" | "'d" | "'m" => PosTag::Particle,
        _ => return None,
    };
    Some(pos)
}
