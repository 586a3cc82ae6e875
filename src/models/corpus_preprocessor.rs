use crate::constants::{TOKENS_COLUMN, TOKENS_JOINED_COLUMN};
use crate::models::{Cell, Column, Dataset, Normalizer, TextField};
use crate::Error;
use log::debug;
use rayon::prelude::*;

/// Applies a `Normalizer` to every row of a text column, adding a `tokens` column (the token
/// sequence) and a `tokens_joined` column (tokens joined by a single space).
///
/// Rows are independent of each other and are normalized in parallel.
#[derive(Debug, Clone, Default)]
pub struct CorpusPreprocessor {
    normalizer: Normalizer,
}

impl CorpusPreprocessor {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Returns a copy of `dataset` with the derived columns added. The input is left untouched.
    pub fn apply(&self, dataset: &Dataset, text_field: &str) -> Result<Dataset, Error> {
        let mut output = dataset.clone();
        self.apply_in_place(&mut output, text_field)?;
        Ok(output)
    }

    /// Adds the derived columns to `dataset` itself, replacing any previous derived columns.
    pub fn apply_in_place(&self, dataset: &mut Dataset, text_field: &str) -> Result<(), Error> {
        let (tokens, tokens_joined) = self.preprocess_column(dataset, text_field)?;

        dataset.insert_column(tokens)?;
        dataset.insert_column(tokens_joined)?;

        Ok(())
    }

    fn preprocess_column(
        &self,
        dataset: &Dataset,
        text_field: &str,
    ) -> Result<(Column, Column), Error> {
        let column = dataset.column(text_field)?;

        debug!(
            "Preprocessing {} rows of column '{}'",
            column.len(),
            text_field
        );

        let (tokens, tokens_joined): (Vec<Cell>, Vec<Cell>) = column
            .cells()
            .par_iter()
            .map(|cell| {
                // Pre-tokenized cells are re-normalized from their joined form
                let text = match cell.as_text_field() {
                    TextField::Missing => None,
                    field => Some(field.joined()),
                };
                let tokens = self.normalizer.normalize(text.as_deref());
                let joined = tokens.join(" ");

                (Cell::Tokens(tokens), Cell::Text(joined))
            })
            .unzip();

        Ok((
            Column::new(TOKENS_COLUMN, tokens),
            Column::new(TOKENS_JOINED_COLUMN, tokens_joined),
        ))
    }
}
