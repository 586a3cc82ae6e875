use crate::config::DEFAULT_CORPUS_REPORT_CONFIG;
use crate::constants::{TOKENS_COLUMN, TOKENS_JOINED_COLUMN};
use crate::models::{
    extract_publisher_domain, publisher_counts, top_publisher_tickers, CorpusPreprocessor,
    Dataset, FrequencyAnalyzer, NgramRange, Normalizer, NormalizerConfig,
};
use crate::types::{PublisherTickerMap, RankedList};
use crate::Error;
use log::info;

/// Parameters for a full corpus report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusReportConfig {
    pub normalizer: NormalizerConfig,
    pub top_keywords_n: usize,
    pub top_ngrams_n: usize,
    pub ngram_range: NgramRange,
    pub top_publishers_n: usize,
    pub top_tickers_n: usize,
    pub top_domains_n: usize,
    pub parallel: bool,
}

impl Default for CorpusReportConfig {
    fn default() -> Self {
        DEFAULT_CORPUS_REPORT_CONFIG
    }
}

/// Column names the report reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusColumns<'a> {
    pub text: &'a str,
    pub publisher: &'a str,
    pub stock: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorpusReport {
    pub top_keywords: RankedList,
    pub top_ngrams: RankedList,
    pub publisher_counts: RankedList,
    pub publisher_tickers: PublisherTickerMap,
    pub publisher_domains: RankedList,
}

/// Normalizes the text column, then computes every ranking of a `CorpusReport`.
///
/// Every column is checked before any row is processed, so a misnamed column fails fast.
pub fn build_corpus_report(
    config: &CorpusReportConfig,
    dataset: &Dataset,
    columns: CorpusColumns<'_>,
) -> Result<CorpusReport, Error> {
    config.ngram_range.validate()?;
    for column in [columns.text, columns.publisher, columns.stock] {
        dataset.column(column)?;
    }

    let normalizer = Normalizer::new(&config.normalizer);
    let preprocessor = CorpusPreprocessor::new(normalizer);
    let preprocessed = preprocessor.apply(dataset, columns.text)?;

    let analyzer = FrequencyAnalyzer {
        parallel: config.parallel,
    };

    let report = CorpusReport {
        top_keywords: analyzer.top_keywords(
            &preprocessed,
            TOKENS_COLUMN,
            config.top_keywords_n,
        )?,
        top_ngrams: analyzer.top_ngrams(
            &preprocessed,
            TOKENS_JOINED_COLUMN,
            config.top_ngrams_n,
            config.ngram_range,
            preprocessor.normalizer().stopwords(),
        )?,
        publisher_counts: publisher_counts(dataset, columns.publisher)?,
        publisher_tickers: top_publisher_tickers(
            dataset,
            columns.publisher,
            columns.stock,
            config.top_publishers_n,
            config.top_tickers_n,
        )?,
        publisher_domains: extract_publisher_domain(
            dataset,
            columns.publisher,
            config.top_domains_n,
        )?,
    };

    info!(
        "Built corpus report over {} rows: {} keywords, {} n-grams, {} publishers",
        dataset.len(),
        report.top_keywords.len(),
        report.top_ngrams.len(),
        report.publisher_counts.len()
    );

    Ok(report)
}
