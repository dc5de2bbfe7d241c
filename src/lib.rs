//! # textprep
//!
//! A classic text-preprocessing pipeline: tokenization, stopword removal,
//! stemming, lemmatization, part-of-speech tagging, and named-entity
//! recognition, with every intermediate result returned as a typed artifact.
//!
//! The pipeline is a fixed, synchronous stage sequence. Each stage that
//! depends on a lexical resource is wrapped in a recoverable-failure
//! boundary: tokenization degrades to whitespace splitting, tagging to a
//! uniform `UNKNOWN` label, and entity recognition to an empty list, each
//! surfacing a caller-visible warning instead of an error.
//!
//! ## Example
//!
//! ```
//! use textprep::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let result = pipeline.process("Dr. Smith went to the U.S.A. on Friday.");
//!
//! assert!(result.tokens.iter().any(|t| t.text == "U.S.A."));
//! assert_eq!(result.tagged_tokens.len(), result.tokens.len());
//! assert!(result.warnings.is_empty());
//! ```

pub mod errors;
pub mod nlp;
pub mod ner;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextPrepError};
pub use types::{
    Entity, EntityLabel, PipelineConfig, PosTag, Stage, TaggedToken, Token, Warning,
};

// Re-export main functionality
pub use nlp::lemmatizer::Lemmatizer;
pub use nlp::stemmer::Stemmer;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tagger::Tagger;
pub use nlp::tokenizer::Tokenizer;
pub use ner::chunker::EntityChunker;
pub use pipeline::{Pipeline, PipelineResult, Recovered};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
