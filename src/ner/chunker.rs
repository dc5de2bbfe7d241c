//! Named-entity chunking
//!
//! Groups contiguous tagged tokens into labeled spans by pattern matching
//! on POS tags, token shape, and small gazetteers. Ungrouped tokens are
//! discarded; each span's surface tokens are joined with single spaces, so
//! an entity always reconstructs a contiguous run of the original tokens.

use crate::errors::{Result, TextPrepError};
use crate::types::{Entity, EntityLabel, PosTag, TaggedToken};
use rustc_hash::FxHashSet;

/// Titles preceding a person name. Stored with the trailing period folded
/// in by the tokenizer.
const HONORIFICS: &[&str] = &[
    "dr.", "mr.", "mrs.", "ms.", "prof.", "rev.", "hon.", "gen.", "sen.",
    "rep.", "sir", "lady", "lord",
];

/// Weekday and month names, the DATE gazetteer.
const DATE_TERMS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday", "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
];

/// Geo-political names (countries, cities, regions), joined lowercase.
const PLACES: &[&str] = &[
    "america", "england", "france", "germany", "spain", "italy", "canada",
    "japan", "china", "india", "brazil", "russia", "australia", "europe",
    "asia", "africa", "london", "paris", "berlin", "madrid", "rome", "tokyo",
    "beijing", "moscow", "boston", "chicago", "washington", "california",
    "texas", "new york", "new york city", "los angeles", "san francisco",
    "united states", "united kingdom",
];

/// Geographic features, the LOCATION gazetteer.
const LOCATIONS: &[&str] = &[
    "everest", "amazon", "nile", "alps", "sahara", "pacific", "atlantic",
];

/// Corporate designators ending an organization name.
const ORG_SUFFIXES: &[&str] = &["inc.", "corp.", "ltd.", "co.", "llc"];

/// Currency symbols opening a MONEY span.
const CURRENCY: &[char] = &['$', '€', '£', '¥'];

/// Named-entity chunker over the tagged-token sequence.
#[derive(Debug, Clone)]
pub struct EntityChunker {
    honorifics: FxHashSet<&'static str>,
    date_terms: FxHashSet<&'static str>,
    places: FxHashSet<&'static str>,
    locations: FxHashSet<&'static str>,
    org_suffixes: FxHashSet<&'static str>,
}

impl Default for EntityChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityChunker {
    /// Create a new chunker with the built-in gazetteers
    pub fn new() -> Self {
        Self {
            honorifics: HONORIFICS.iter().copied().collect(),
            date_terms: DATE_TERMS.iter().copied().collect(),
            places: PLACES.iter().copied().collect(),
            locations: LOCATIONS.iter().copied().collect(),
            org_suffixes: ORG_SUFFIXES.iter().copied().collect(),
        }
    }

    /// Extract labeled entity spans from the tagged-token sequence.
    ///
    /// Spans are emitted in document order and never overlap.
    pub fn chunk(&self, tagged: &[TaggedToken]) -> Result<Vec<Entity>> {
        if self.date_terms.is_empty() || self.places.is_empty() {
            return Err(TextPrepError::resource("entity gazetteers are empty"));
        }

        let mut entities = Vec::new();
        let mut i = 0;

        while i < tagged.len() {
            let token = &tagged[i];
            let lower = token.text.to_lowercase();

            // MONEY: currency symbol followed by a numeral.
            if token.tag == PosTag::Symbol
                && token.text.chars().any(|c| CURRENCY.contains(&c))
                && matches!(tagged.get(i + 1), Some(next) if next.tag == PosTag::Numeral)
            {
                entities.push(span(&tagged[i..i + 2], EntityLabel::Money));
                i += 2;
                continue;
            }

            // PERCENT: numeral followed by the percent sign.
            if token.tag == PosTag::Numeral
                && matches!(tagged.get(i + 1), Some(next) if next.text == "%")
            {
                entities.push(span(&tagged[i..i + 2], EntityLabel::Percent));
                i += 2;
                continue;
            }

            // TIME: clock pattern "5 : 30" (best-effort).
            if token.tag == PosTag::Numeral
                && matches!(tagged.get(i + 1), Some(sep) if sep.text == ":")
                && matches!(tagged.get(i + 2), Some(next) if next.tag == PosTag::Numeral)
            {
                entities.push(span(&tagged[i..i + 3], EntityLabel::Time));
                i += 3;
                continue;
            }

            // DATE: weekday or month, optionally followed by a day numeral.
            if self.date_terms.contains(lower.as_str()) {
                let end = if matches!(tagged.get(i + 1), Some(next) if next.tag == PosTag::Numeral)
                {
                    i + 2
                } else {
                    i + 1
                };
                entities.push(span(&tagged[i..end], EntityLabel::Date));
                i = end;
                continue;
            }

            // PERSON: honorific followed by a proper-noun run; the honorific
            // stays outside the span.
            if self.honorifics.contains(lower.as_str()) {
                let run_end = proper_noun_run_end(tagged, i + 1);
                if run_end > i + 1 {
                    entities.push(span(&tagged[i + 1..run_end], EntityLabel::Person));
                }
                i = run_end.max(i + 1);
                continue;
            }

            // Remaining proper-noun runs.
            if token.tag == PosTag::ProperNoun {
                let run_end = proper_noun_run_end(tagged, i);
                if let Some(label) = self.classify_run(tagged, i, run_end) {
                    entities.push(span(&tagged[i..run_end], label));
                }
                i = run_end;
                continue;
            }

            i += 1;
        }

        Ok(entities)
    }

    /// Decide the label for a proper-noun run, or `None` to leave it
    /// ungrouped.
    fn classify_run(
        &self,
        tagged: &[TaggedToken],
        start: usize,
        end: usize,
    ) -> Option<EntityLabel> {
        let run = &tagged[start..end];
        let joined = run
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let last_lower = run.last().map(|t| t.text.to_lowercase())?;

        // A lone corporate designator is noise, not a name.
        if run.len() == 1 && self.org_suffixes.contains(last_lower.as_str()) {
            return None;
        }

        if self.places.contains(joined.as_str()) {
            return Some(EntityLabel::Gpe);
        }
        if self.locations.contains(joined.as_str()) {
            return Some(EntityLabel::Location);
        }
        if self.org_suffixes.contains(last_lower.as_str()) {
            return Some(EntityLabel::Organization);
        }

        // Dotted acronyms ("U.S.A.") read as geo-political names.
        if run.len() == 1 && is_dotted_acronym(&run[0].text) {
            return Some(EntityLabel::Gpe);
        }

        // Undotted all-caps acronyms ("IBM") read as organizations.
        if run
            .iter()
            .all(|t| t.text.chars().count() >= 2 && t.text.chars().all(char::is_uppercase))
        {
            return Some(EntityLabel::Organization);
        }

        // A lone capitalized word opening a sentence is most often just a
        // sentence start, not a name.
        if run.len() == 1 && sentence_initial(tagged, start) {
            return None;
        }

        Some(EntityLabel::Person)
    }
}

/// End index (exclusive) of the proper-noun run starting at `start`.
fn proper_noun_run_end(tagged: &[TaggedToken], start: usize) -> usize {
    let mut end = start;
    while end < tagged.len() && tagged[end].tag == PosTag::ProperNoun {
        end += 1;
    }
    end
}

/// Whether the token at `idx` opens a sentence.
fn sentence_initial(tagged: &[TaggedToken], idx: usize) -> bool {
    if idx == 0 {
        return true;
    }
    let prev = &tagged[idx - 1];
    prev.tag == PosTag::Punctuation && matches!(prev.text.as_str(), "." | "!" | "?")
}

/// "U.S.A."-shaped: letters with interleaved periods.
fn is_dotted_acronym(text: &str) -> bool {
    text.contains('.')
        && text.chars().any(|c| c.is_uppercase())
        && text.chars().all(|c| c.is_alphabetic() || c == '.')
}

/// Build an entity from a contiguous tagged-token slice.
fn span(run: &[TaggedToken], label: EntityLabel) -> Entity {
    Entity {
        text: run
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        label,
        start_token: run[0].token_idx,
        end_token: run[run.len() - 1].token_idx + 1,
    }
}
