//! Core types for textprep
//!
//! This module defines the fundamental data structures used throughout the
//! library: tokens, tag and entity labels, warnings, and configuration.

use crate::errors::{Result, TextPrepError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// A token from the input text.
///
/// Tokens carry their surface form plus byte offsets into the source text so
/// downstream artifacts can always be traced back to where they came from.
/// Order is meaningful and preserved through every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// Byte offset (start) in original text
    pub start: usize,
    /// Byte offset (end, exclusive) in original text
    pub end: usize,
    /// Token index within the document
    pub token_idx: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize, token_idx: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            token_idx,
        }
    }

    /// Check if every character of the surface form is alphanumeric.
    ///
    /// This is the filter predicate used by stopword removal: punctuation
    /// tokens, dotted abbreviations, and decimal numbers all fail it.
    pub fn is_alphanumeric(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_alphanumeric())
    }
}

// ============================================================================
// POS tags
// ============================================================================

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
    /// Fallback label assigned when tagging fails
    Unknown,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag marks sentence-level punctuation
    pub fn is_punctuation(&self) -> bool {
        matches!(self, PosTag::Punctuation)
    }

    /// Get the display string for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Particle => "PART",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
            PosTag::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (token, grammatical-category) pair over the original token sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The surface form of the tagged token
    pub text: String,
    /// The assigned grammatical category
    pub tag: PosTag,
    /// Index of the source token in the original token list
    pub token_idx: usize,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, tag: PosTag, token_idx: usize) -> Self {
        Self {
            text: text.into(),
            tag,
            token_idx,
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Entity category labels, following the classic chunker inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    /// Geo-political entity (countries, cities, states)
    Gpe,
    Facility,
    Date,
    Time,
    Money,
    Percent,
}

impl EntityLabel {
    /// Get the display string for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Facility => "FACILITY",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity: a labeled span of contiguous tokens.
///
/// `text` is the span's surface tokens joined with single spaces, so joining
/// always reconstructs a contiguous run of the original token list
/// (`start_token..end_token`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Joined surface text of the span
    pub text: String,
    /// Entity category
    pub label: EntityLabel,
    /// Start token index (inclusive) into the original token list
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
}

impl Entity {
    /// Get the token length of this entity span
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// The recoverable pipeline stages that can surface a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Tokenize,
    PosTag,
    EntityRecognition,
}

impl Stage {
    /// Get the display name of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Tokenize => "tokenize",
            Stage::PosTag => "pos_tag",
            Stage::EntityRecognition => "entity_recognition",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal, caller-visible warning raised when a stage degraded to its
/// fallback. The message includes the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// The stage that degraded
    pub stage: Stage,
    /// Human-readable description including the underlying cause
    pub message: String,
}

impl Warning {
    /// Create a new warning
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the preprocessing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Language code for the stopword list (e.g., "en", "de", "fr")
    pub language: String,
    /// Optional additional stopwords (extends the built-in list when provided)
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(TextPrepError::invalid_config(
                "language must not be empty",
            ));
        }

        if self.extra_stopwords.iter().any(|w| w.trim().is_empty()) {
            return Err(TextPrepError::invalid_config(
                "extra_stopwords must not contain empty entries",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set additional stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_alphanumeric() {
        assert!(Token::new("apples", 0, 6, 0).is_alphanumeric());
        assert!(Token::new("U2", 0, 2, 0).is_alphanumeric());
        assert!(!Token::new("Dr.", 0, 3, 0).is_alphanumeric());
        assert!(!Token::new("5.50", 0, 4, 0).is_alphanumeric());
        assert!(!Token::new("$", 0, 1, 0).is_alphanumeric());
        assert!(!Token::new("", 0, 0, 0).is_alphanumeric());
    }

    #[test]
    fn test_pos_tag_display() {
        assert_eq!(PosTag::ProperNoun.as_str(), "PROPN");
        assert_eq!(PosTag::Unknown.as_str(), "UNKNOWN");
        assert_eq!(PosTag::Punctuation.to_string(), "PUNCT");
    }

    #[test]
    fn test_entity_label_display() {
        assert_eq!(EntityLabel::Person.as_str(), "PERSON");
        assert_eq!(EntityLabel::Gpe.to_string(), "GPE");
    }

    #[test]
    fn test_entity_token_len() {
        let entity = Entity {
            text: "New York City".to_string(),
            label: EntityLabel::Gpe,
            start_token: 3,
            end_token: 6,
        };
        assert_eq!(entity.token_len(), 3);
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::new(Stage::Tokenize, "fell back to whitespace split");
        assert_eq!(
            warning.to_string(),
            "[tokenize] fell back to whitespace split"
        );
    }

    #[test]
    fn test_stage_serde() {
        let json = serde_json::to_string(&Stage::EntityRecognition).unwrap();
        assert_eq!(json, r#""entity_recognition""#);
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::EntityRecognition);
    }

    #[test]
    fn test_config_validation() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());

        let bad = PipelineConfig::default().with_language("  ");
        assert!(bad.validate().is_err());

        let bad = PipelineConfig::default().with_extra_stopwords(vec!["ok", ""]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_config_serde_missing_extra_stopwords_defaults() {
        let json = r#"{ "language": "de" }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.language, "de");
        assert!(config.extra_stopwords.is_empty());
    }
}
