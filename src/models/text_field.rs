use crate::types::{Token, TokenRef};
use std::borrow::Cow;

/// A text cell as consumed by the analyzers: either raw text or an already tokenized sequence.
///
/// Anything else (nulls, numbers, timestamps) is `Missing` and behaves like an empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField<'a> {
    Raw(&'a str),
    Tokens(&'a [Token]),
    Missing,
}

impl<'a> TextField<'a> {
    /// Whitespace tokens of the field. Token sequences are passed through as-is.
    pub fn tokens(&self) -> Vec<&'a TokenRef> {
        match *self {
            TextField::Raw(text) => text.split_whitespace().collect(),
            TextField::Tokens(tokens) => tokens.iter().map(|token| token.as_str()).collect(),
            TextField::Missing => Vec::new(),
        }
    }

    /// The canonical string form: raw text unchanged, tokens joined by a single space.
    pub fn joined(&self) -> Cow<'a, str> {
        match *self {
            TextField::Raw(text) => Cow::Borrowed(text),
            TextField::Tokens(tokens) => Cow::Owned(tokens.join(" ")),
            TextField::Missing => Cow::Borrowed(""),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TextField::Missing)
    }
}
