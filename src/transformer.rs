//! Attributify JSX transformer
//!
//! Rewrites valueless attributes whose names are utility rules
//! (`<div flex />`) into explicit empty-string attributes
//! (`<div flex="" />`) so attribute-mode extractors can see them.
//!
//! Per file:
//! 1. Parse and collect valueless attributes inside opening tags
//! 2. Drop names on the blocklist
//! 3. Resolve every remaining name concurrently
//! 4. Once every lookup has settled, write the edits for the matches
//!
//! A single rejected lookup fails the file and leaves the buffer untouched.

use futures::future::join_all;
use tracing::{debug, trace, warn};

use crate::candidate::{find_candidates, Candidate};
use crate::config::TransformerOptions;
use crate::edit::{CodeBuffer, Edit};
use crate::error::{ConfigError, Result};
use crate::filter::{Blocklist, IdFilter};
use crate::resolver::RuleResolver;
use crate::syntax::{Language, SourceParser};

/// When a source transformer runs relative to the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
}

/// Compiled transformer, immutable and shareable across files
#[derive(Debug, Clone)]
pub struct AttributifyJsx {
    blocklist: Blocklist,
    id_filter: IdFilter,
}

impl AttributifyJsx {
    pub const NAME: &'static str = "attributify-jsx";

    pub fn new(options: &TransformerOptions) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            blocklist: Blocklist::new(&options.blocklist)?,
            id_filter: IdFilter::new(&options.include, &options.exclude)?,
        })
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    /// Whether the module `id` passes the include/exclude filter
    pub fn should_transform(&self, id: &str) -> bool {
        self.id_filter.matches(id)
    }

    /// Rewrite the matching attributes of one module into `code`.
    ///
    /// The id filter is not consulted here; callers check
    /// `should_transform` first.
    pub async fn transform<R>(&self, code: &mut CodeBuffer, id: &str, resolver: &R) -> Result<()>
    where
        R: RuleResolver + ?Sized,
    {
        let candidates = self.collect_candidates(code.original(), id)?;
        let found = candidates.len();

        let lookups = candidates
            .into_iter()
            .filter(|candidate| {
                let blocked = self.blocklist.is_blocked(&candidate.rule_name);
                if blocked {
                    trace!(rule = %candidate.rule_name, "blocked attribute skipped");
                }
                !blocked
            })
            .map(|candidate| resolve_candidate(candidate, resolver));

        // Every lookup settles before the first rejection is reported; nothing
        // is written to `code` before this.
        let settled = join_all(lookups).await;
        let edits: Vec<Edit> = settled
            .into_iter()
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        debug!(id, found, rewritten = edits.len(), "attributify transform finished");
        code.overwrite_all(edits)?;
        Ok(())
    }

    /// Transform `source` and return the rewritten text
    pub async fn transform_source<R>(&self, source: &str, id: &str, resolver: &R) -> Result<String>
    where
        R: RuleResolver + ?Sized,
    {
        let mut code = CodeBuffer::new(source);
        self.transform(&mut code, id, resolver).await?;
        Ok(code.to_string())
    }

    fn collect_candidates(&self, source: &str, id: &str) -> Result<Vec<Candidate>> {
        let mut parser = SourceParser::new(Language::from_id(id))?;
        let tree = parser.parse(source)?;
        Ok(find_candidates(&tree, source))
    }
}

async fn resolve_candidate<R>(candidate: Candidate, resolver: &R) -> Result<Option<Edit>>
where
    R: RuleResolver + ?Sized,
{
    match resolver.resolve(&candidate.rule_name).await {
        Ok(Some(_)) => Ok(Some(Edit {
            replacement: candidate.replacement(),
            span: candidate.span,
        })),
        Ok(None) => {
            trace!(rule = %candidate.rule_name, "not a utility rule");
            Ok(None)
        }
        Err(e) => {
            warn!(rule = %candidate.rule_name, error = %e, "rule lookup failed");
            Err(e.into())
        }
    }
}
