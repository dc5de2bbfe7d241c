//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds every stage's read-only state (stopword
//! set, stemmer, lexicons, gazetteers), constructed once and reused across
//! calls. [`Pipeline::process`] executes the fixed stage sequence
//! synchronously on the calling thread, degrading each recoverable stage to
//! its fallback instead of failing.

use std::sync::OnceLock;

use crate::errors::Result;
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stemmer::Stemmer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::Tagger;
use crate::nlp::tokenizer::{whitespace_tokenize, Tokenizer};
use crate::ner::chunker::EntityChunker;
use crate::pipeline::artifacts::{PipelineResult, Recovered};
use crate::types::{PipelineConfig, PosTag, Stage, TaggedToken, Warning};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — one-time-constructed stage container
// ============================================================================

/// The text normalization pipeline.
///
/// Construction loads every lexical resource once; `process` is then a pure
/// function of the input text and that read-only state. For a shared
/// process-wide instance with default configuration, use
/// [`Pipeline::global`].
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    stemmer: Stemmer,
    lemmatizer: Lemmatizer,
    tagger: Tagger,
    chunker: EntityChunker,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Build a pipeline with the default (English) configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
            .expect("default configuration is valid")
    }

    /// Build a pipeline from a validated configuration.
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(&config.extra_stopwords);

        Ok(Self {
            config,
            tokenizer: Tokenizer::new(),
            stopwords,
            stemmer: Stemmer::new(),
            lemmatizer: Lemmatizer::new(),
            tagger: Tagger::new(),
            chunker: EntityChunker::new(),
        })
    }

    /// A shared process-wide pipeline with default configuration,
    /// constructed on first use.
    pub fn global() -> &'static Pipeline {
        static GLOBAL: OnceLock<Pipeline> = OnceLock::new();
        GLOBAL.get_or_init(Pipeline::new)
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full stage sequence on `raw_text`.
    ///
    /// Empty (or whitespace-only) input skips processing entirely and
    /// returns the default, all-empty result. For any other input all six
    /// artifacts are produced, possibly via fallback paths; this method
    /// never fails.
    pub fn process(&self, raw_text: &str) -> PipelineResult {
        if raw_text.trim().is_empty() {
            return PipelineResult::default();
        }

        let mut warnings = Vec::new();

        // 1. Tokenize, falling back to naive whitespace splitting.
        trace_stage!("tokenize");
        let outcome = match self.tokenizer.tokenize(raw_text) {
            Ok(tokens) => Recovered::clean(tokens),
            Err(err) => Recovered::fallback(
                whitespace_tokenize(raw_text),
                Warning::new(
                    Stage::Tokenize,
                    format!("falling back to whitespace split: {err}"),
                ),
            ),
        };
        let (tokens, warning) = outcome.into_parts();
        warnings.extend(warning);

        // 2. Stopword filtering over the token list (pure).
        trace_stage!("filter_stopwords");
        let filtered_tokens = self.stopwords.filter(&tokens);

        // 3-4. Positional transforms over the filtered tokens (pure).
        trace_stage!("stem");
        let stems = self.stemmer.stem_all(&filtered_tokens);
        trace_stage!("lemmatize");
        let lemmas = self.lemmatizer.lemmatize_all(&filtered_tokens);

        // 5. POS tagging over the original tokens, falling back to UNKNOWN.
        trace_stage!("pos_tag");
        let outcome = match self.tagger.tag(&tokens) {
            Ok(tagged) => Recovered::clean(tagged),
            Err(err) => Recovered::fallback(
                tokens
                    .iter()
                    .map(|t| TaggedToken::new(t.text.clone(), PosTag::Unknown, t.token_idx))
                    .collect(),
                Warning::new(
                    Stage::PosTag,
                    format!("tagging every token UNKNOWN: {err}"),
                ),
            ),
        };
        let (tagged_tokens, warning) = outcome.into_parts();
        warnings.extend(warning);

        // 6. Entity recognition over the tagged tokens, falling back to none.
        trace_stage!("recognize_entities");
        let outcome = match self.chunker.chunk(&tagged_tokens) {
            Ok(entities) => Recovered::clean(entities),
            Err(err) => Recovered::fallback(
                Vec::new(),
                Warning::new(
                    Stage::EntityRecognition,
                    format!("emitting no entities: {err}"),
                ),
            ),
        };
        let (entities, warning) = outcome.into_parts();
        warnings.extend(warning);

        PipelineResult {
            tokens,
            filtered_tokens,
            stems,
            lemmas,
            tagged_tokens,
            entities,
            warnings,
        }
    }
}
