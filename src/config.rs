//! Transformer options: blocklist and module-id filters, loaded from JSON

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A string or regular expression entry.
///
/// In JSON a bare string is a literal and `{ "regex": "..." }` is a regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Literal(String),
    Regex { regex: String },
}

impl PatternSpec {
    pub fn regex(pattern: impl Into<String>) -> Self {
        PatternSpec::Regex {
            regex: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            PatternSpec::Literal(s) => s,
            PatternSpec::Regex { regex } => regex,
        }
    }
}

impl From<&str> for PatternSpec {
    fn from(s: &str) -> Self {
        PatternSpec::Literal(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerOptions {
    /// Attribute names to leave untouched
    #[serde(default)]
    pub blocklist: Vec<PatternSpec>,
    /// Module ids to process
    #[serde(default = "default_include")]
    pub include: Vec<PatternSpec>,
    /// Module ids to skip, checked before `include`
    #[serde(default)]
    pub exclude: Vec<PatternSpec>,
}

impl Default for TransformerOptions {
    fn default() -> Self {
        Self {
            blocklist: Vec::new(),
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

pub fn default_include() -> Vec<PatternSpec> {
    vec![PatternSpec::regex(r"\.[jt]sx$"), PatternSpec::regex(r"\.mdx$")]
}

impl TransformerOptions {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn with_blocklist<I, P>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PatternSpec>,
    {
        self.blocklist = entries.into_iter().map(Into::into).collect();
        self
    }
}
