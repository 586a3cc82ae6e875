use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a normalized word token as an owned `String`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered sequence of normalized tokens derived from a single text field. An empty sequence
/// is a valid value (e.g. for a missing headline).
pub type TokenSequence = Vec<Token>;

/// A countable term: either a single token or a space-joined n-gram.
pub type Term = String;

/// The number of occurrences of a term or category.
pub type Count = usize;

/// An ordered sequence of `(term, count)` pairs, sorted by count (descending), then by term
/// (ascending).
pub type RankedList = Vec<(Term, Count)>;

/// Represents the name of a dataset column.
pub type ColumnName = String;

/// Represents a publisher identifier as it appears in the dataset (a name or an email-like
/// address).
pub type PublisherName = String;

/// Ticker rankings per publisher, ordered the same way as the publisher ranking they were
/// derived from.
pub type PublisherTickerMap = Vec<(PublisherName, RankedList)>;

/// Row indices of the dataset attributed to each publisher.
pub type PublisherGroups = HashMap<PublisherName, Vec<usize>>;
