use criterion::{black_box, criterion_group, criterion_main, Criterion};
use news_lexicon::constants::{HEADLINE_COLUMN, TOKENS_COLUMN, TOKENS_JOINED_COLUMN};
use news_lexicon::{
    analyze_corpus, CorpusPreprocessor, Dataset, FrequencyAnalyzer, NgramRange, Normalizer,
    Record,
};

const HEADLINES: &[(&str, &str, &str)] = &[
    ("Stocks That Hit 52-Week Highs On Friday", "Benzinga Insights", "A"),
    ("71 Biggest Movers From Friday", "Lisa Levin", "AAPL"),
    (
        "UBS Maintains Neutral on Agilent Technologies, Raises Price Target to $87",
        "vishwanath@benzinga.com",
        "A",
    ),
    (
        "Agilent Technologies shares are trading higher after the company reported better-than-expected Q2 EPS",
        "Benzinga Newsdesk",
        "A",
    ),
    ("Wells Fargo Maintains Overweight on Agilent Technologies", "Vick Meyer", "AAPL"),
];

fn synthetic_dataset(rows: usize) -> Dataset {
    let records: Vec<Record> = HEADLINES
        .iter()
        .cycle()
        .take(rows)
        .map(|(headline, publisher, stock)| Record::new(headline, publisher, stock))
        .collect();

    Dataset::from_records(&records)
}

fn benchmark_frequency_analyzer(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let stopwords = normalizer.stopwords().clone();
    let dataset = CorpusPreprocessor::new(normalizer)
        .apply(&synthetic_dataset(10_000), HEADLINE_COLUMN)
        .expect("Failed to preprocess synthetic dataset");
    let ngram_range = NgramRange { min_n: 2, max_n: 3 };

    for (name, analyzer) in [
        ("parallel", FrequencyAnalyzer { parallel: true }),
        ("sequential", FrequencyAnalyzer::sequential()),
    ] {
        c.bench_function(&format!("top_keywords_{}", name), |b| {
            b.iter(|| analyzer.top_keywords(black_box(&dataset), TOKENS_COLUMN, 20))
        });

        c.bench_function(&format!("top_ngrams_{}", name), |b| {
            b.iter(|| {
                analyzer.top_ngrams(
                    black_box(&dataset),
                    TOKENS_JOINED_COLUMN,
                    20,
                    ngram_range,
                    &stopwords,
                )
            })
        });
    }
}

fn benchmark_analyze_corpus(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);

    c.bench_function("analyze_corpus", |b| {
        b.iter(|| analyze_corpus(black_box(&dataset)))
    });
}

criterion_group!(benches, benchmark_frequency_analyzer, benchmark_analyze_corpus);
criterion_main!(benches);
