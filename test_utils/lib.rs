use news_lexicon::constants::HEADLINE_COLUMN;
use news_lexicon::{
    read_dataset_from_path, Cell, Column, Dataset, Error as LibError, RankedList, Record,
};
use std::path::Path;
pub mod constants;

/// Loads a CSV fixture, panicking with the path on failure.
pub fn load_dataset_fixture(path: &Path) -> Dataset {
    read_dataset_from_path(path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {:?}: {}", path, e))
}

/// Builds a dataset holding only a `headline` column.
pub fn headline_dataset(headlines: &[&str]) -> Dataset {
    text_dataset(HEADLINE_COLUMN, headlines)
}

/// Builds a single-column dataset of text cells.
pub fn text_dataset(column: &str, values: &[&str]) -> Dataset {
    Dataset::from_columns(vec![Column::new(
        column,
        values
            .iter()
            .map(|value| Cell::Text(value.to_string()))
            .collect(),
    )])
    .expect("Failed to build single-column dataset")
}

/// Builds a dataset from `(headline, publisher, stock)` triples.
pub fn records_dataset(rows: &[(&str, &str, &str)]) -> Dataset {
    let records: Vec<Record> = rows
        .iter()
        .map(|(headline, publisher, stock)| Record::new(headline, publisher, stock))
        .collect();

    Dataset::from_records(&records)
}

/// Converts borrowed `(term, count)` pairs into a `RankedList` for comparisons.
pub fn ranked(pairs: &[(&str, usize)]) -> RankedList {
    pairs
        .iter()
        .map(|(term, count)| (term.to_string(), *count))
        .collect()
}

/// Asserts that a result failed with `MissingColumn` for `column`.
pub fn assert_missing_column<T: std::fmt::Debug>(result: Result<T, LibError>, column: &str) {
    match result {
        Err(LibError::MissingColumn {
            column: missing, ..
        }) => assert_eq!(missing, column),
        other => panic!("Expected MissingColumn({}), got {:?}", column, other),
    }
}
