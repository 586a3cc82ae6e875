use crate::constants::{DATE_COLUMN, HEADLINE_COLUMN, PUBLISHER_COLUMN, STOCK_COLUMN};
use crate::models::TextField;
use crate::types::{ColumnName, TokenSequence};
use crate::Error;
use chrono::{DateTime, FixedOffset};

/// A single dataset value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Text(String),
    Tokens(TokenSequence),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<FixedOffset>),
}

impl Cell {
    /// Wraps optional text, mapping `None` to `Cell::Null`.
    pub fn from_text(text: Option<&str>) -> Self {
        text.map_or(Cell::Null, |text| Cell::Text(text.to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_field(&self) -> TextField<'_> {
        match self {
            Cell::Text(text) => TextField::Raw(text),
            Cell::Tokens(tokens) => TextField::Tokens(tokens),
            _ => TextField::Missing,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Float(value) if !value.is_nan() => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Cell::Timestamp(timestamp) => Some(timestamp),
            _ => None,
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: ColumnName,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<ColumnName>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// One row of the source dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub headline: Option<String>,
    pub publisher: Option<String>,
    pub stock: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
}

impl Record {
    pub fn new(headline: &str, publisher: &str, stock: &str) -> Self {
        Self {
            headline: Some(headline.to_string()),
            publisher: Some(publisher.to_string()),
            stock: Some(stock.to_string()),
            date: None,
        }
    }
}

/// A column-oriented table whose columns all have the same number of rows.
///
/// Analyses only ever add derived columns; source columns are not rewritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from columns, rejecting ragged input and duplicate names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, Error> {
        let mut dataset = Self::new();
        for column in columns {
            if dataset.has_column(column.name()) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate column '{}'",
                    column.name()
                )));
            }
            dataset.insert_column(column)?;
        }
        Ok(dataset)
    }

    /// Builds a dataset with the `headline`, `publisher`, `stock` and `date` columns.
    pub fn from_records(records: &[Record]) -> Self {
        let headlines = records
            .iter()
            .map(|record| Cell::from_text(record.headline.as_deref()))
            .collect();
        let publishers = records
            .iter()
            .map(|record| Cell::from_text(record.publisher.as_deref()))
            .collect();
        let stocks = records
            .iter()
            .map(|record| Cell::from_text(record.stock.as_deref()))
            .collect();
        let dates = records
            .iter()
            .map(|record| record.date.map_or(Cell::Null, Cell::Timestamp))
            .collect();

        Self {
            columns: vec![
                Column::new(HEADLINE_COLUMN, headlines),
                Column::new(PUBLISHER_COLUMN, publishers),
                Column::new(STOCK_COLUMN, stocks),
                Column::new(DATE_COLUMN, dates),
            ],
            row_count: records.len(),
        }
    }

    /// Reads the `headline`, `publisher` and `stock` columns (and `date`, when present) back
    /// into records.
    pub fn to_records(&self) -> Result<Vec<Record>, Error> {
        let headlines = self.column(HEADLINE_COLUMN)?.cells();
        let publishers = self.column(PUBLISHER_COLUMN)?.cells();
        let stocks = self.column(STOCK_COLUMN)?.cells();
        let dates = self.column(DATE_COLUMN).ok().map(|column| column.cells());

        Ok((0..self.row_count)
            .map(|row| Record {
                headline: headlines[row].as_str().map(str::to_string),
                publisher: publishers[row].as_str().map(str::to_string),
                stock: stocks[row].as_str().map(str::to_string),
                date: dates.and_then(|dates| dates[row].as_timestamp().copied()),
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name() == name)
    }

    /// Looks up a column, failing with `Error::MissingColumn` (listing the available columns)
    /// when it does not exist.
    pub fn column(&self, name: &str) -> Result<&Column, Error> {
        self.columns
            .iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| self.missing_column(name))
    }

    /// Adds a column, replacing any existing column of the same name.
    ///
    /// The first column of an empty dataset sets the row count.
    pub fn insert_column(&mut self, column: Column) -> Result<(), Error> {
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(Error::InvalidArgument(format!(
                "column '{}' has {} rows, expected {}",
                column.name(),
                column.len(),
                self.row_count
            )));
        }

        match self
            .columns
            .iter_mut()
            .find(|existing| existing.name() == column.name())
        {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }

        Ok(())
    }

    /// Removes the named columns. Fails without modifying the dataset if any is missing.
    pub fn drop_columns(&mut self, names: &[&str]) -> Result<(), Error> {
        if let Some(missing) = names.iter().find(|name| !self.has_column(name)) {
            return Err(self.missing_column(missing));
        }

        self.columns
            .retain(|column| !names.contains(&column.name()));

        Ok(())
    }

    /// Returns a new dataset holding only the rows for which `keep` is true.
    pub fn filter_rows<F>(&self, keep: F) -> Dataset
    where
        F: Fn(usize) -> bool,
    {
        let kept_rows: Vec<usize> = (0..self.row_count).filter(|&row| keep(row)).collect();

        let columns = self
            .columns
            .iter()
            .map(|column| {
                Column::new(
                    column.name(),
                    kept_rows
                        .iter()
                        .map(|&row| column.cells[row].clone())
                        .collect(),
                )
            })
            .collect();

        Dataset {
            columns,
            row_count: kept_rows.len(),
        }
    }

    fn missing_column(&self, name: &str) -> Error {
        Error::MissingColumn {
            column: name.to_string(),
            available: self
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
