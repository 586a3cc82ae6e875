use crate::constants::DEFAULT_LANGUAGE;
use crate::models::{CorpusReportConfig, NgramRange, NormalizerConfig};
use crate::Error;
use std::borrow::Cow;

pub const DEFAULT_NORMALIZER_CONFIG: NormalizerConfig = NormalizerConfig {
    language: Cow::Borrowed(DEFAULT_LANGUAGE),
    remove_numbers: true,
};

pub const DEFAULT_CORPUS_REPORT_CONFIG: CorpusReportConfig = CorpusReportConfig {
    normalizer: DEFAULT_NORMALIZER_CONFIG,
    top_keywords_n: 20,
    top_ngrams_n: 20,
    ngram_range: NgramRange { min_n: 2, max_n: 3 },
    top_publishers_n: 5,
    top_tickers_n: 10,
    top_domains_n: 10,
    parallel: true,
};

/// Parses a textual "top N" parameter.
///
/// Any non-negative integer is accepted; `0` yields empty rankings downstream.
pub fn parse_top_n(value: &str) -> Result<usize, Error> {
    value.trim().parse::<usize>().map_err(|e| {
        Error::InvalidArgument(format!(
            "expected a non-negative integer for N, got '{}': {}",
            value, e
        ))
    })
}
