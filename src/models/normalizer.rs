use crate::config::DEFAULT_NORMALIZER_CONFIG;
use crate::constants::PUNCTUATION;
use crate::models::{ConfigurationWarning, StopwordSet};
use crate::types::{TokenRef, TokenSequence};
use log::warn;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Language of the built-in stopword list.
    pub language: Cow<'static, str>,
    /// Drop tokens which consist solely of numeric characters.
    pub remove_numbers: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        DEFAULT_NORMALIZER_CONFIG
    }
}

/// Turns one raw text field into an ordered sequence of normalized word tokens.
///
/// The steps run in a fixed order:
/// 1. lowercase the text
/// 2. strip ASCII punctuation without inserting a separator (`"don't"` becomes `"dont"`)
/// 3. split on runs of whitespace
/// 4. drop stopwords (skipped when the stopword set is empty)
/// 5. optionally drop purely numeric tokens
///
/// # Example
///
/// ```
/// use news_lexicon::{Normalizer, StopwordSet};
///
/// let normalizer = Normalizer::with_stopwords(StopwordSet::from_words(["the"]), true);
/// let tokens = normalizer.normalize(Some("The Fed's 2024 rate-cut, explained!"));
/// assert_eq!(tokens, vec!["feds", "ratecut", "explained"]);
///
/// assert!(normalizer.normalize(None).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: StopwordSet,
    remove_numbers: bool,
    warning: Option<ConfigurationWarning>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&DEFAULT_NORMALIZER_CONFIG)
    }
}

impl Normalizer {
    /// Resolves the stopword list for the configured language once.
    ///
    /// An unsupported language is not fatal: the warning is logged, kept on the normalizer, and
    /// stopword filtering is disabled.
    pub fn new(config: &NormalizerConfig) -> Self {
        let (stopwords, warning) = match StopwordSet::for_language(&config.language) {
            Ok(stopwords) => (stopwords, None),
            Err(warning) => {
                warn!("{}", warning);
                (StopwordSet::empty(), Some(warning))
            }
        };

        Self {
            stopwords,
            remove_numbers: config.remove_numbers,
            warning,
        }
    }

    /// Builds a normalizer around an explicitly supplied stopword set.
    pub fn with_stopwords(stopwords: StopwordSet, remove_numbers: bool) -> Self {
        Self {
            stopwords,
            remove_numbers,
            warning: None,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn remove_numbers(&self) -> bool {
        self.remove_numbers
    }

    /// The configuration warning raised at construction, if any.
    pub fn warning(&self) -> Option<&ConfigurationWarning> {
        self.warning.as_ref()
    }

    /// Normalizes a text field. Missing text yields an empty sequence.
    pub fn normalize(&self, text: Option<&str>) -> TokenSequence {
        let Some(text) = text else {
            return TokenSequence::new();
        };

        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !PUNCTUATION.contains(*c))
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| self.stopwords.is_empty() || !self.stopwords.contains(token))
            .filter(|token| !self.remove_numbers || !is_numeric_token(token))
            .map(|token| token.to_string())
            .collect()
    }
}

fn is_numeric_token(token: &TokenRef) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}
