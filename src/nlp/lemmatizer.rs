//! Dictionary-lookup-based lemmatization
//!
//! Reduces words to their base form using an irregular-form exception table
//! and the classic noun detachment rules. Deliberately applied without
//! part-of-speech context, so accuracy is best-effort: a plural noun reduces
//! correctly, but a verb conjugation may not ("went" stays "went").

use crate::types::Token;
use rustc_hash::{FxHashMap, FxHashSet};

/// Irregular noun forms mapped straight to their lemma.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("appendices", "appendix"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

/// Words ending in `s` that are not plural morphology.
const INVARIANTS: &[&str] = &[
    "news",
    "series",
    "species",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "linguistics",
    "athletics",
];

/// A base-form reducer applied independently to each token.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: FxHashMap<&'static str, &'static str>,
    invariants: FxHashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    /// Create a new lemmatizer with the built-in exception table
    pub fn new() -> Self {
        Self {
            exceptions: EXCEPTIONS.iter().copied().collect(),
            invariants: INVARIANTS.iter().copied().collect(),
        }
    }

    /// Reduce a word to its base form. Lemmas are lowercase.
    pub fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some(&lemma) = self.exceptions.get(lower.as_str()) {
            return lemma.to_string();
        }
        if self.invariants.contains(lower.as_str()) {
            return lower;
        }

        // Detachment rules, most specific first.
        if lower.ends_with("ches") || lower.ends_with("shes") {
            return lower[..lower.len() - 2].to_string();
        }
        if lower.ends_with("xes") || lower.ends_with("zes") {
            return lower[..lower.len() - 2].to_string();
        }
        if lower.ends_with("ses") && lower.len() > 3 {
            return lower[..lower.len() - 2].to_string();
        }
        if lower.ends_with("ies") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("men") {
            return format!("{}man", &lower[..lower.len() - 3]);
        }
        if lower.ends_with('s')
            && lower.len() > 3
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
            && !lower.ends_with("ous")
        {
            return lower[..lower.len() - 1].to_string();
        }

        lower
    }

    /// Lemmatize every token, preserving length and order (a 1:1 positional
    /// transform over the filtered token list).
    pub fn lemmatize_all(&self, tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| self.lemmatize(&t.text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("apples"), "apple");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("dishes"), "dish");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("feet"), "foot");
        assert_eq!(lemmatizer.lemmatize("mice"), "mouse");
        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("policemen"), "policeman");
    }

    #[test]
    fn test_pos_unaware_leaves_verb_forms() {
        let lemmatizer = Lemmatizer::new();

        // Without POS context, verb conjugations pass through unchanged.
        assert_eq!(lemmatizer.lemmatize("went"), "went");
        assert_eq!(lemmatizer.lemmatize("bought"), "bought");
        assert_eq!(lemmatizer.lemmatize("running"), "running");
    }

    #[test]
    fn test_non_plural_s_endings_kept() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("delicious"), "delicious");
        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("virus"), "virus");
        assert_eq!(lemmatizer.lemmatize("news"), "news");
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
    }

    #[test]
    fn test_lemmas_are_lowercase() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("Apples"), "apple");
        assert_eq!(lemmatizer.lemmatize("Smith"), "smith");
    }

    #[test]
    fn test_lemmatize_all_is_positional() {
        let lemmatizer = Lemmatizer::new();
        let tokens: Vec<Token> = ["Smith", "went", "buy", "delicious", "apples"]
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(*t, 0, t.len(), i))
            .collect();

        let lemmas = lemmatizer.lemmatize_all(&tokens);
        assert_eq!(lemmas.len(), tokens.len());
        assert_eq!(lemmas, vec!["smith", "went", "buy", "delicious", "apple"]);
    }
}
