use crate::types::{Count, RankedList, Term, TokenRef};
use crate::utils::sort_results;
use std::collections::HashMap;

/// Occurrence counts of terms aggregated over a corpus.
///
/// Tables built over disjoint partitions of a corpus can be merged; the merged table equals the
/// one built over the whole corpus in a single pass.
///
/// # Example
///
/// ```
/// use news_lexicon::FrequencyTable;
///
/// let left = FrequencyTable::from_terms(["sat", "cat"]);
/// let right = FrequencyTable::from_terms(["sat", "dog"]);
///
/// let merged = left.merge(right);
/// assert_eq!(
///     merged.ranked(usize::MAX),
///     vec![
///         ("sat".to_string(), 2),
///         ("cat".to_string(), 1),
///         ("dog".to_string(), 1)
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Term, Count>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<TokenRef>,
    {
        let mut table = Self::new();
        for term in terms {
            table.add(term.as_ref());
        }
        table
    }

    /// Counts one occurrence of `term`.
    pub fn add(&mut self, term: &TokenRef) {
        self.add_count(term, 1);
    }

    /// Counts an owned term without re-allocating it.
    pub fn add_owned(&mut self, term: Term) {
        *self.counts.entry(term).or_insert(0) += 1;
    }

    pub fn add_count(&mut self, term: &TokenRef, count: Count) {
        match self.counts.get_mut(term) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(term.to_string(), count);
            }
        }
    }

    /// Sums the counts of two tables.
    pub fn merge(self, other: FrequencyTable) -> FrequencyTable {
        // Fold the smaller table into the larger one
        let (mut larger, smaller) = if self.counts.len() >= other.counts.len() {
            (self.counts, other.counts)
        } else {
            (other.counts, self.counts)
        };

        for (term, count) in smaller {
            *larger.entry(term).or_insert(0) += count;
        }

        FrequencyTable { counts: larger }
    }

    pub fn get(&self, term: &TokenRef) -> Count {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    /// The top `n` terms by count (descending), ties broken by term (ascending). When `n` exceeds
    /// the vocabulary size the whole vocabulary is returned.
    pub fn ranked(&self, n: usize) -> RankedList {
        sort_results(&self.counts, n)
    }
}
