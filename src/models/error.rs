use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidArgument(String),
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::MissingColumn { column, available } => write!(
                f,
                "Missing Column: '{}' is not in the dataset (available: {})",
                column,
                available.join(", ")
            ),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

/// A non-fatal configuration problem. Processing continues with a degraded setting, and the
/// warning stays available to the caller for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationWarning {
    /// No built-in stopword list exists for the requested language; stopword filtering is
    /// disabled.
    UnsupportedStopwordLanguage(String),
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationWarning::UnsupportedStopwordLanguage(language) => write!(
                f,
                "Configuration Warning: no stopword list for language '{}', stopword filtering is disabled",
                language
            ),
        }
    }
}
