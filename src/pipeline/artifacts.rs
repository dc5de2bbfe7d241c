//! Pipeline artifacts.
//!
//! Each field of [`PipelineResult`] is a typed intermediate produced by one
//! stage, bundled in the fixed order the stages run. [`Recovered`] is the
//! local recoverable-failure boundary wrapping each external-stage call: a
//! stage either yields its payload cleanly or yields a fallback payload
//! paired with a warning.

use crate::types::{Entity, TaggedToken, Token, Warning};
use serde::{Deserialize, Serialize};

// ============================================================================
// Recovered — graceful degradation boundary
// ============================================================================

/// Outcome of a stage that can degrade to a fallback.
///
/// Failures never propagate past this type: the runner unwraps it into a
/// payload plus an optional warning and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovered<T> {
    /// The stage succeeded.
    Clean(T),
    /// The stage failed and a fallback payload was substituted.
    Fallback {
        /// The fallback payload
        value: T,
        /// The caller-visible warning, including the underlying cause
        warning: Warning,
    },
}

impl<T> Recovered<T> {
    /// Wrap a clean stage result
    pub fn clean(value: T) -> Self {
        Self::Clean(value)
    }

    /// Wrap a fallback payload and its warning
    pub fn fallback(value: T, warning: Warning) -> Self {
        Self::Fallback { value, warning }
    }

    /// Whether this outcome came from the fallback path
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Borrow the payload, clean or fallback
    pub fn value(&self) -> &T {
        match self {
            Self::Clean(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    /// Split into the payload and the warning, if any
    pub fn into_parts(self) -> (T, Option<Warning>) {
        match self {
            Self::Clean(value) => (value, None),
            Self::Fallback { value, warning } => (value, Some(warning)),
        }
    }
}

// ============================================================================
// PipelineResult — the six artifacts plus warnings
// ============================================================================

/// The bundle of artifacts produced by one `process` call, in stage order.
///
/// All artifacts are immutable once produced and suitable for direct
/// display. An empty input yields the `Default` value: every artifact
/// empty, no warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Stage 1: the ordered token list (punctuation included)
    pub tokens: Vec<Token>,
    /// Stage 2: the stopword-filtered subsequence of `tokens`
    pub filtered_tokens: Vec<Token>,
    /// Stage 3: stems, positionally aligned with `filtered_tokens`
    pub stems: Vec<String>,
    /// Stage 4: lemmas, positionally aligned with `filtered_tokens`
    pub lemmas: Vec<String>,
    /// Stage 5: one tag per token of the original `tokens` list
    pub tagged_tokens: Vec<TaggedToken>,
    /// Stage 6: labeled entity spans over `tagged_tokens`
    pub entities: Vec<Entity>,
    /// Warnings accumulated from fallback paths, in stage order
    pub warnings: Vec<Warning>,
}

impl PipelineResult {
    /// Whether processing was skipped entirely (empty input)
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
            && self.filtered_tokens.is_empty()
            && self.tagged_tokens.is_empty()
            && self.entities.is_empty()
            && self.warnings.is_empty()
    }

    /// Whether any stage degraded to its fallback
    pub fn degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
