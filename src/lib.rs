#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{parse_top_n, DEFAULT_CORPUS_REPORT_CONFIG, DEFAULT_NORMALIZER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    add_word_count_column, build_corpus_report, extract_publisher_domain, group_by_publisher,
    parse_dates, parse_timestamp, publisher_counts, publisher_domain, read_dataset_from_path,
    read_dataset_from_reader, read_dataset_from_string, remove_outliers_iqr,
    top_publisher_tickers, with_publisher_domain_column, Cell, Column, ConfigurationWarning,
    CorpusColumns, CorpusPreprocessor, CorpusReport, CorpusReportConfig, Dataset, Error,
    FrequencyAnalyzer, FrequencyTable, NgramRange, Normalizer, NormalizerConfig, Record,
    StopwordSet, TextField,
};
pub mod types;
mod utils;
pub use types::{
    ColumnName, Count, PublisherGroups, PublisherName, PublisherTickerMap, RankedList, Term,
    Token, TokenRef, TokenSequence,
};

use constants::{HEADLINE_COLUMN, PUBLISHER_COLUMN, STOCK_COLUMN};

/// Builds a `CorpusReport` over the `headline`, `publisher` and `stock` columns using the
/// default configuration.
pub fn analyze_corpus(dataset: &Dataset) -> Result<CorpusReport, Error> {
    let report = analyze_corpus_with_custom_config(&DEFAULT_CORPUS_REPORT_CONFIG, dataset)?;

    Ok(report)
}

pub fn analyze_corpus_with_custom_config(
    corpus_report_config: &CorpusReportConfig,
    dataset: &Dataset,
) -> Result<CorpusReport, Error> {
    build_corpus_report(
        corpus_report_config,
        dataset,
        CorpusColumns {
            text: HEADLINE_COLUMN,
            publisher: PUBLISHER_COLUMN,
            stock: STOCK_COLUMN,
        },
    )
}
