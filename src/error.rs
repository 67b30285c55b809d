use thiserror::Error;

/// Failures while setting up or running the parser
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} grammar: {message}")]
    LanguageInit {
        language: &'static str,
        message: String,
    },

    #[error("Failed to parse {0} source")]
    ParseFailed(&'static str),
}

/// A rule resolver call that rejected
#[derive(Error, Debug)]
#[error("Resolver failed for `{rule}`: {message}")]
pub struct ResolveError {
    pub rule: String,
    pub message: String,
}

impl ResolveError {
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// An edit that cannot be recorded against the original text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("Invalid span {start}..{end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("Span {start}..{end} is out of bounds for text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("Span {start}..{end} overlaps an existing edit")]
    Overlap { start: usize, end: usize },
}

/// Problems with transformer options, surfaced at construction time
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that aborts a single file transform
#[derive(Error, Debug)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

pub type Result<T, E = TransformError> = std::result::Result<T, E>;
