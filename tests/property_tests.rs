//! Property-based tests using proptest

use proptest::prelude::*;
use textprep::*;

fn check_invariants(text: &str, result: &PipelineResult) {
    // Empty input skips processing entirely.
    if text.trim().is_empty() {
        assert!(result.is_empty());
        return;
    }

    // All six artifacts exist with consistent shapes.
    assert_eq!(result.stems.len(), result.filtered_tokens.len());
    assert_eq!(result.lemmas.len(), result.filtered_tokens.len());
    assert_eq!(result.tagged_tokens.len(), result.tokens.len());

    // Filtered tokens are a subsequence of the original tokens.
    let mut last_idx = None;
    for token in &result.filtered_tokens {
        if let Some(last) = last_idx {
            assert!(token.token_idx > last);
        }
        last_idx = Some(token.token_idx);
        assert_eq!(result.tokens[token.token_idx].text, token.text);
    }

    // Tagged tokens mirror the original list in order.
    for (tagged, token) in result.tagged_tokens.iter().zip(result.tokens.iter()) {
        assert_eq!(tagged.text, token.text);
        assert_eq!(tagged.token_idx, token.token_idx);
    }

    // Entities are ordered, non-overlapping groupings whose joined surface
    // text reconstructs a contiguous run of original tokens.
    let mut last_end = 0;
    for entity in &result.entities {
        assert!(entity.start_token < entity.end_token);
        assert!(entity.end_token <= result.tokens.len());
        assert!(entity.start_token >= last_end);
        last_end = entity.end_token;

        let reconstructed = result.tokens[entity.start_token..entity.end_token]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(entity.text, reconstructed);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_process_never_panics(text in ".*") {
        let pipeline = Pipeline::new();
        let result = pipeline.process(&text);
        check_invariants(&text, &result);
    }

    #[test]
    fn test_process_invariants_on_prose(
        words in prop::collection::vec("[A-Za-z]{1,12}", 1..30)
    ) {
        let text = words.join(" ");
        let pipeline = Pipeline::new();
        let result = pipeline.process(&text);
        check_invariants(&text, &result);

        // Whitespace-separated alphabetic words tokenize one-to-one.
        prop_assert_eq!(result.tokens.len(), words.len());
    }

    #[test]
    fn test_tokenizer_offsets_slice_source(text in ".*") {
        let tokenizer = Tokenizer::new();
        if let Ok(tokens) = tokenizer.tokenize(&text) {
            for token in &tokens {
                prop_assert_eq!(&text[token.start..token.end], token.text.as_str());
            }
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent(
        words in prop::collection::vec("[a-zA-Z.$0-9]{1,8}", 0..20)
    ) {
        let filter = StopwordFilter::new("en");
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(w.as_str(), 0, w.len(), i))
            .collect();

        let once = filter.filter(&tokens);
        let twice = filter.filter(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_stem_and_lemma_are_deterministic(word in "[a-zA-Z]{1,15}") {
        let stemmer = Stemmer::new();
        let lemmatizer = Lemmatizer::new();

        prop_assert_eq!(stemmer.stem(&word), stemmer.stem(&word));
        prop_assert_eq!(lemmatizer.lemmatize(&word), lemmatizer.lemmatize(&word));

        // Lemmas are always lowercase.
        let lemma = lemmatizer.lemmatize(&word);
        prop_assert!(lemma.chars().all(|c| !c.is_uppercase()));
    }

    #[test]
    fn test_process_is_pure(text in ".{0,200}") {
        let pipeline = Pipeline::new();
        prop_assert_eq!(pipeline.process(&text), pipeline.process(&text));
    }
}
