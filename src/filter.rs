//! Name and module-id filters
//!
//! `Blocklist` decides which rule names never reach the resolver.
//! `IdFilter` decides which modules are transformed at all.

use regex::Regex;

use crate::config::PatternSpec;
use crate::error::ConfigError;

/// A compiled pattern entry
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Regex(Regex),
}

impl Matcher {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Exact(s) => s == text,
            Matcher::Regex(re) => re.is_match(text),
        }
    }
}

fn compile_regex(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Attribute names that are never rewritten
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    entries: Vec<Matcher>,
}

impl Blocklist {
    /// Literal entries compare exactly, regex entries match anywhere
    pub fn new(specs: &[PatternSpec]) -> Result<Self, ConfigError> {
        let entries = specs
            .iter()
            .map(|spec| match spec {
                PatternSpec::Literal(s) => Ok(Matcher::Exact(s.clone())),
                PatternSpec::Regex { regex } => compile_regex(regex).map(Matcher::Regex),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn is_blocked(&self, rule_name: &str) -> bool {
        self.entries.iter().any(|m| m.is_match(rule_name))
    }
}

/// Include/exclude filter over module ids.
///
/// String entries are treated as regular expressions here, so `"\\.vue$"`
/// and `{ "regex": "\\.vue$" }` behave the same.
#[derive(Debug, Clone)]
pub struct IdFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl IdFilter {
    pub fn new(include: &[PatternSpec], exclude: &[PatternSpec]) -> Result<Self, ConfigError> {
        let compile = |specs: &[PatternSpec]| {
            specs
                .iter()
                .map(|spec| compile_regex(spec.pattern()))
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Exclusion wins over inclusion
    pub fn matches(&self, id: &str) -> bool {
        if self.exclude.iter().any(|re| re.is_match(id)) {
            return false;
        }
        self.include.iter().any(|re| re.is_match(id))
    }
}
