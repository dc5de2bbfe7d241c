//! Benchmarks for textprep

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textprep::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Dr. Smith went to the U.S.A. on Friday to buy some delicious apples for $5.50.
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being
explicitly programmed. Mr. Turing worked in England, and the children bought
delicious apples in London on Monday for $3.20. Acme Corp. hired IBM to build
a translation system for the United States.
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let stopwords = StopwordFilter::new("en");
    let stemmer = Stemmer::new();
    let lemmatizer = Lemmatizer::new();
    let tagger = Tagger::new();
    let chunker = EntityChunker::new();

    let tokens = tokenizer.tokenize(SAMPLE_TEXT).unwrap();
    let filtered = stopwords.filter(&tokens);
    let tagged = tagger.tag(&tokens).unwrap();

    c.bench_function("filter_stopwords", |b| {
        b.iter(|| stopwords.filter(black_box(&tokens)))
    });
    c.bench_function("stem", |b| b.iter(|| stemmer.stem_all(black_box(&filtered))));
    c.bench_function("lemmatize", |b| {
        b.iter(|| lemmatizer.lemmatize_all(black_box(&filtered)))
    });
    c.bench_function("pos_tag", |b| b.iter(|| tagger.tag(black_box(&tokens))));
    c.bench_function("recognize_entities", |b| {
        b.iter(|| chunker.chunk(black_box(&tagged)))
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::new();

    c.bench_function("process_sample", |b| {
        b.iter(|| pipeline.process(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("process_by_size");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| pipeline.process(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_stages,
    benchmark_full_pipeline
);
criterion_main!(benches);
