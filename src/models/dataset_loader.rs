use crate::constants::IQR_OUTLIER_FACTOR;
use crate::models::{Cell, Column, Dataset};
use crate::utils::quantile;
use crate::Error;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Reads a CSV file with a header row into a `Dataset`. Files ending in `.gz` are decompressed
/// on the fly.
pub fn read_dataset_from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_gzipped = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    let dataset = if is_gzipped {
        read_dataset_from_reader(GzDecoder::new(file))?
    } else {
        read_dataset_from_reader(file)?
    };

    info!(
        "Loaded {} rows and {} columns from {:?}",
        dataset.len(),
        dataset.column_names().len(),
        path
    );

    Ok(dataset)
}

pub fn read_dataset_from_string(csv: &str) -> Result<Dataset, Error> {
    read_dataset_from_reader(Cursor::new(csv))
}

/// Reads CSV data with a header row. Empty fields become `Cell::Null`.
///
/// Column types are inferred from the non-empty fields: a column whose fields all parse as
/// integers holds `Cell::Integer`, one whose fields all parse as numbers holds `Cell::Float`,
/// and anything else holds `Cell::Text`.
pub fn read_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let mut fields: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::ParserError(format!("Failed to read record {}: {}", row + 1, e))
        })?;

        for (index, values) in fields.iter_mut().enumerate() {
            let value = record
                .get(index)
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            values.push(value);
        }
    }

    Dataset::from_columns(
        headers
            .iter()
            .zip(fields)
            .map(|(name, values)| Column::new(name, infer_cells(values)))
            .collect(),
    )
}

fn infer_cells(values: Vec<Option<String>>) -> Vec<Cell> {
    let present = || values.iter().flatten().map(|value| value.trim());

    if present().all(|value| value.parse::<i64>().is_ok()) {
        return values
            .iter()
            .map(|value| match value.as_deref().map(str::trim).map(str::parse::<i64>) {
                Some(Ok(integer)) => Cell::Integer(integer),
                _ => Cell::Null,
            })
            .collect();
    }

    if present().all(|value| value.parse::<f64>().is_ok()) {
        return values
            .iter()
            .map(|value| match value.as_deref().map(str::trim).map(str::parse::<f64>) {
                Some(Ok(float)) => Cell::Float(float),
                _ => Cell::Null,
            })
            .collect();
    }

    values
        .into_iter()
        .map(|value| value.map_or(Cell::Null, Cell::Text))
        .collect()
}

/// Returns a copy of `dataset` with a `target` column holding the whitespace word count of each
/// row of `column`. Rows without text stay null.
pub fn add_word_count_column(
    dataset: &Dataset,
    column: &str,
    target: &str,
) -> Result<Dataset, Error> {
    let counts: Vec<Cell> = dataset
        .column(column)?
        .cells()
        .iter()
        .map(|cell| match cell.as_text_field() {
            field if field.is_missing() => Cell::Null,
            field => Cell::Integer(field.tokens().len() as i64),
        })
        .collect();

    let mut output = dataset.clone();
    output.insert_column(Column::new(target, counts))?;

    Ok(output)
}

/// Keeps the rows whose numeric value in `column` lies within
/// `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`. Rows without a numeric value are dropped.
pub fn remove_outliers_iqr(dataset: &Dataset, column: &str) -> Result<Dataset, Error> {
    let cells = dataset.column(column)?.cells();

    let mut values: Vec<f64> = cells.iter().filter_map(Cell::as_f64).collect();
    values.sort_by(f64::total_cmp);

    let (Some(q1), Some(q3)) = (quantile(&values, 0.25), quantile(&values, 0.75)) else {
        debug!("Column '{}' holds no numeric values", column);
        return Ok(dataset.filter_rows(|_| false));
    };

    let iqr = q3 - q1;
    let lower = q1 - IQR_OUTLIER_FACTOR * iqr;
    let upper = q3 + IQR_OUTLIER_FACTOR * iqr;

    let output = dataset.filter_rows(|row| {
        cells[row]
            .as_f64()
            .map_or(false, |value| value >= lower && value <= upper)
    });

    info!(
        "Removed {} outlier rows outside [{}, {}] in column '{}'",
        dataset.len() - output.len(),
        lower,
        upper,
        column
    );

    Ok(output)
}

/// Returns a copy of `dataset` with the text timestamps of `columns` parsed and converted to
/// `timezone`. Unparsable values become null.
pub fn parse_dates(dataset: &Dataset, columns: &[&str], timezone: Tz) -> Result<Dataset, Error> {
    // Validate every column before converting any
    for column in columns {
        dataset.column(column)?;
    }

    let mut output = dataset.clone();

    for column in columns {
        let cells: Vec<Cell> = dataset
            .column(column)?
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Text(text) => parse_timestamp(text).map_or(Cell::Null, |timestamp| {
                    Cell::Timestamp(timestamp.with_timezone(&timezone).fixed_offset())
                }),
                Cell::Timestamp(timestamp) => {
                    Cell::Timestamp(timestamp.with_timezone(&timezone).fixed_offset())
                }
                _ => Cell::Null,
            })
            .collect();

        let coerced = cells.iter().filter(|cell| cell.is_null()).count();
        debug!(
            "Parsed column '{}' into {}, {} null values",
            column, timezone, coerced
        );

        output.insert_column(Column::new(*column, cells))?;
    }

    Ok(output)
}

/// Parses a timestamp as UTC. Values without an offset are taken to be UTC already.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(timestamp) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
