//! Core NLP stages: tokenization, stopword filtering, stemming,
//! lemmatization, and POS tagging.

pub mod lemmatizer;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
