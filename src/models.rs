pub mod error;
pub use error::{ConfigurationWarning, Error};

pub mod stopword_set;
pub use stopword_set::StopwordSet;

pub mod normalizer;
pub use normalizer::{Normalizer, NormalizerConfig};

pub mod text_field;
pub use text_field::TextField;

pub mod dataset;
pub use dataset::{Cell, Column, Dataset, Record};

pub mod dataset_loader;
pub use dataset_loader::{
    add_word_count_column, parse_dates, parse_timestamp, read_dataset_from_path,
    read_dataset_from_reader, read_dataset_from_string, remove_outliers_iqr,
};

pub mod corpus_preprocessor;
pub use corpus_preprocessor::CorpusPreprocessor;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod frequency_analyzer;
pub use frequency_analyzer::{FrequencyAnalyzer, NgramRange};

pub mod publisher_analytics;
pub use publisher_analytics::{
    extract_publisher_domain, group_by_publisher, publisher_counts, publisher_domain,
    top_publisher_tickers, with_publisher_domain_column,
};

pub mod corpus_report;
pub use corpus_report::{build_corpus_report, CorpusColumns, CorpusReport, CorpusReportConfig};
