//! Rule resolver seam
//!
//! The utility-rule engine lives outside this crate. It is reached through
//! `RuleResolver`, whose calls are independent and may run concurrently.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use crate::error::ResolveError;

/// A positive verdict from the rule engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: String,
}

/// Answers whether a name is a utility rule in the active rule set.
///
/// `Ok(None)` means "not a rule"; `Err` is a rejected lookup and aborts the
/// whole file transform.
#[async_trait]
pub trait RuleResolver: Send + Sync {
    async fn resolve(&self, rule: &str) -> Result<Option<RuleMatch>, ResolveError>;
}

#[async_trait]
impl<R: RuleResolver + ?Sized> RuleResolver for Arc<R> {
    async fn resolve(&self, rule: &str) -> Result<Option<RuleMatch>, ResolveError> {
        (**self).resolve(rule).await
    }
}

#[async_trait]
impl<R: RuleResolver + ?Sized> RuleResolver for &R {
    async fn resolve(&self, rule: &str) -> Result<Option<RuleMatch>, ResolveError> {
        (**self).resolve(rule).await
    }
}

/// A resolver over a fixed rule set: exact names plus regex rules
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSet {
    names: HashSet<String>,
    patterns: Vec<Regex>,
}

impl StaticRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Regex rules are matched against the whole name
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(Regex::new(&format!("^(?:{})$", pattern))?);
        Ok(self)
    }

    fn lookup(&self, rule: &str) -> bool {
        self.names.contains(rule) || self.patterns.iter().any(|re| re.is_match(rule))
    }
}

#[async_trait]
impl RuleResolver for StaticRuleSet {
    async fn resolve(&self, rule: &str) -> Result<Option<RuleMatch>, ResolveError> {
        Ok(self.lookup(rule).then(|| RuleMatch {
            rule: rule.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_names() {
        let rules = StaticRuleSet::new().with_names(["flex", "grid"]);

        assert_eq!(
            rules.resolve("flex").await.unwrap(),
            Some(RuleMatch {
                rule: "flex".to_string()
            })
        );
        assert_eq!(rules.resolve("border").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_patterns_are_anchored() {
        let rules = StaticRuleSet::new()
            .with_pattern(r"(hover-)?text-(red|blue)")
            .unwrap();

        assert!(rules.resolve("hover-text-red").await.unwrap().is_some());
        assert!(rules.resolve("text-blue").await.unwrap().is_some());
        assert!(rules.resolve("focus-text-red").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_shared_resolver() {
        let rules: Arc<dyn RuleResolver> = Arc::new(StaticRuleSet::new().with_names(["p-4"]));

        assert!(rules.resolve("p-4").await.unwrap().is_some());
        assert!((&rules).resolve("p-5").await.unwrap().is_none());
    }
}
