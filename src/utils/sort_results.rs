use crate::types::{Count, RankedList, Term};
use std::collections::HashMap;

/// Sorts a mapping of terms to their counts into a ranked list of at most `n` entries.
///
/// ### Sorting Order:
/// - **Primary:** count, descending.
/// - **Secondary:** term, ascending, so ties come out in a deterministic order.
pub fn sort_results(results: &HashMap<Term, Count>, n: usize) -> RankedList {
    let mut sorted_results: RankedList = results
        .iter()
        .map(|(term, count)| (term.to_owned(), *count))
        .collect();

    sorted_results.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted_results.truncate(n);

    sorted_results
}
