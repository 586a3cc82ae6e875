use crate::constants::{PUBLISHER_DOMAIN_COLUMN, PUBLISHER_DOMAIN_PATTERN};
use crate::models::{Cell, Column, Dataset, FrequencyTable};
use crate::types::{PublisherGroups, PublisherTickerMap, RankedList};
use crate::Error;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static PUBLISHER_DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PUBLISHER_DOMAIN_PATTERN).expect("publisher domain pattern must compile")
});

/// Counts records per distinct publisher, ranked by count then name. Null publishers are not
/// counted.
pub fn publisher_counts(dataset: &Dataset, publisher_field: &str) -> Result<RankedList, Error> {
    let cells = dataset.column(publisher_field)?.cells();

    let table = FrequencyTable::from_terms(cells.iter().filter_map(Cell::as_str));

    Ok(table.ranked(usize::MAX))
}

/// Maps each publisher to the indices of its rows.
pub fn group_by_publisher(
    dataset: &Dataset,
    publisher_field: &str,
) -> Result<PublisherGroups, Error> {
    let cells = dataset.column(publisher_field)?.cells();

    let mut groups = PublisherGroups::new();
    for (row, publisher) in cells
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| cell.as_str().map(|publisher| (row, publisher)))
    {
        groups.entry(publisher.to_string()).or_default().push(row);
    }

    Ok(groups)
}

/// Ranks the tickers of each of the `top_publishers_n` most active publishers, keeping at most
/// `top_tickers_n` tickers per publisher.
///
/// The result follows the publisher ranking. A publisher whose rows carry no ticker gets an
/// empty list rather than being left out.
pub fn top_publisher_tickers(
    dataset: &Dataset,
    publisher_field: &str,
    stock_field: &str,
    top_publishers_n: usize,
    top_tickers_n: usize,
) -> Result<PublisherTickerMap, Error> {
    let stock_cells = dataset.column(stock_field)?.cells();
    let groups = group_by_publisher(dataset, publisher_field)?;

    let mut publisher_table = FrequencyTable::new();
    for (publisher, rows) in &groups {
        publisher_table.add_count(publisher, rows.len());
    }

    let publisher_tickers: PublisherTickerMap = publisher_table
        .ranked(top_publishers_n)
        .into_iter()
        .map(|(publisher, _)| {
            let tickers = groups
                .get(&publisher)
                .map(|rows| {
                    FrequencyTable::from_terms(
                        rows.iter().filter_map(|&row| stock_cells[row].as_str()),
                    )
                })
                .unwrap_or_default()
                .ranked(top_tickers_n);

            (publisher, tickers)
        })
        .collect();

    debug!("Ranked tickers for {} publishers", publisher_tickers.len());

    Ok(publisher_tickers)
}

/// Extracts the domain of an email-like publisher identifier: the text after the last `@`.
///
/// ```
/// use news_lexicon::publisher_domain;
///
/// assert_eq!(publisher_domain("jane@benzinga.com"), Some("benzinga.com"));
/// assert_eq!(publisher_domain("Benzinga Newsdesk"), None);
/// ```
pub fn publisher_domain(publisher: &str) -> Option<&str> {
    PUBLISHER_DOMAIN_REGEX
        .captures(publisher)
        .and_then(|captures| captures.get(1))
        .map(|domain| domain.as_str())
}

/// Ranks publisher domains by the number of rows they appear in, keeping the top `n`.
///
/// Rows whose publisher carries no domain are skipped entirely; they do not form an "unknown"
/// bucket.
pub fn extract_publisher_domain(
    dataset: &Dataset,
    publisher_field: &str,
    n: usize,
) -> Result<RankedList, Error> {
    let cells = dataset.column(publisher_field)?.cells();

    let table = FrequencyTable::from_terms(
        cells
            .iter()
            .filter_map(Cell::as_str)
            .filter_map(publisher_domain),
    );

    Ok(table.ranked(n))
}

/// Returns a copy of `dataset` with a `publisher_domain` column (null where the publisher has
/// no domain).
pub fn with_publisher_domain_column(
    dataset: &Dataset,
    publisher_field: &str,
) -> Result<Dataset, Error> {
    let domains: Vec<Cell> = dataset
        .column(publisher_field)?
        .cells()
        .iter()
        .map(|cell| {
            cell.as_str()
                .and_then(publisher_domain)
                .map_or(Cell::Null, |domain| Cell::Text(domain.to_string()))
        })
        .collect();

    let mut output = dataset.clone();
    output.insert_column(Column::new(PUBLISHER_DOMAIN_COLUMN, domains))?;

    Ok(output)
}
