use crate::constants::ENGLISH_STOP_WORDS;
use crate::models::ConfigurationWarning;
use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// A set of lowercase words excluded from token sequences.
///
/// An empty set is valid and means "no stopword filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<Token>,
}

impl StopwordSet {
    /// A set which filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves the built-in stopword list for `language` (case-insensitive).
    ///
    /// Returns a `ConfigurationWarning` when no list exists for the language; callers decide
    /// whether to degrade to `StopwordSet::empty()`.
    pub fn for_language(language: &str) -> Result<Self, ConfigurationWarning> {
        match language.trim().to_lowercase().as_str() {
            "english" => Ok(Self::from_words(ENGLISH_STOP_WORDS.iter().copied())),
            _ => Err(ConfigurationWarning::UnsupportedStopwordLanguage(
                language.to_string(),
            )),
        }
    }

    /// Builds a custom set. Words are lowercased so they compare against normalized tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.words.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
