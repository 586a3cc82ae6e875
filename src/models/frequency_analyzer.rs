use crate::models::{Cell, Dataset, FrequencyTable, StopwordSet, TextField};
use crate::types::RankedList;
use crate::utils::sliding_windows;
use crate::Error;
use log::debug;
use rayon::prelude::*;

/// An inclusive range of n-gram lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramRange {
    pub min_n: usize,
    pub max_n: usize,
}

impl NgramRange {
    /// Creates a validated range: both bounds at least 1 and `min_n <= max_n`.
    pub fn new(min_n: usize, max_n: usize) -> Result<Self, Error> {
        let range = Self { min_n, max_n };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.min_n < 1 || self.max_n < 1 {
            return Err(Error::InvalidArgument(format!(
                "n-gram lengths must be at least 1, got ({}, {})",
                self.min_n, self.max_n
            )));
        }

        if self.min_n > self.max_n {
            return Err(Error::InvalidArgument(format!(
                "n-gram range minimum {} exceeds maximum {}",
                self.min_n, self.max_n
            )));
        }

        Ok(())
    }
}

/// Computes unigram and n-gram frequency rankings over a text column.
///
/// Text cells may hold raw strings or token sequences. With `parallel` enabled, rows are counted
/// into partial tables on the rayon pool and merged; the result is identical to a sequential
/// pass.
///
/// # Example
///
/// ```
/// use news_lexicon::{Cell, Column, Dataset, FrequencyAnalyzer, NgramRange, StopwordSet};
///
/// let dataset = Dataset::from_columns(vec![Column::new(
///     "text",
///     vec![
///         Cell::Text("new york times".to_string()),
///         Cell::Text("new york post".to_string()),
///     ],
/// )])
/// .unwrap();
///
/// let analyzer = FrequencyAnalyzer::default();
/// let bigrams = analyzer
///     .top_ngrams(&dataset, "text", 10, NgramRange::new(2, 2).unwrap(), &StopwordSet::empty())
///     .unwrap();
///
/// assert_eq!(
///     bigrams,
///     vec![
///         ("new york".to_string(), 2),
///         ("york post".to_string(), 1),
///         ("york times".to_string(), 1)
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyAnalyzer {
    pub parallel: bool,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl FrequencyAnalyzer {
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn top_keywords(
        &self,
        dataset: &Dataset,
        text_field: &str,
        n: usize,
    ) -> Result<RankedList, Error> {
        Ok(self.keyword_table(dataset, text_field)?.ranked(n))
    }

    /// Counts every token of every row.
    pub fn keyword_table(
        &self,
        dataset: &Dataset,
        text_field: &str,
    ) -> Result<FrequencyTable, Error> {
        let cells = dataset.column(text_field)?.cells();

        let table = self.count(cells, |field, table| {
            for token in field.tokens() {
                table.add(token);
            }
        });

        debug!(
            "Counted {} distinct keywords in column '{}'",
            table.len(),
            text_field
        );

        Ok(table)
    }

    pub fn top_ngrams(
        &self,
        dataset: &Dataset,
        text_field: &str,
        n: usize,
        ngram_range: NgramRange,
        stopwords: &StopwordSet,
    ) -> Result<RankedList, Error> {
        Ok(self
            .ngram_table(dataset, text_field, ngram_range, stopwords)?
            .ranked(n))
    }

    /// Counts the contiguous n-grams of each row for every length in `ngram_range`.
    ///
    /// Stopwords are removed from a row before its windows are built, so an n-gram may join
    /// tokens which were separated by a stopword in the source text. Windows never cross rows.
    pub fn ngram_table(
        &self,
        dataset: &Dataset,
        text_field: &str,
        ngram_range: NgramRange,
        stopwords: &StopwordSet,
    ) -> Result<FrequencyTable, Error> {
        ngram_range.validate()?;
        let cells = dataset.column(text_field)?.cells();

        let table = self.count(cells, |field, table| {
            let joined = field.joined();
            let tokens: Vec<&str> = joined
                .split_whitespace()
                .filter(|token| stopwords.is_empty() || !stopwords.contains(token))
                .collect();

            for window_len in ngram_range.min_n..=ngram_range.max_n {
                for ngram in sliding_windows(&tokens, window_len) {
                    table.add_owned(ngram);
                }
            }
        });

        debug!(
            "Counted {} distinct n-grams ({}..={}) in column '{}'",
            table.len(),
            ngram_range.min_n,
            ngram_range.max_n,
            text_field
        );

        Ok(table)
    }

    fn count<F>(&self, cells: &[Cell], count_row: F) -> FrequencyTable
    where
        F: Fn(TextField<'_>, &mut FrequencyTable) + Sync,
    {
        if self.parallel {
            cells
                .par_iter()
                .fold(FrequencyTable::new, |mut table, cell| {
                    count_row(cell.as_text_field(), &mut table);
                    table
                })
                .reduce(FrequencyTable::new, FrequencyTable::merge)
        } else {
            cells.iter().fold(FrequencyTable::new(), |mut table, cell| {
                count_row(cell.as_text_field(), &mut table);
                table
            })
        }
    }
}
