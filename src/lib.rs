//! Rewrites boolean-style JSX attributes that name utility rules
//! (`<div flex hover:text-red />`) into explicit empty-string attributes
//! (`<div flex="" hover-text-red="" />`).
//!
//! The rule engine is external and reached through [`RuleResolver`].

pub mod candidate;
pub mod config;
pub mod edit;
pub mod error;
pub mod filter;
pub mod resolver;
pub mod syntax;
pub mod transformer;

pub use candidate::{find_candidates, rule_name_for, Candidate};
pub use config::{PatternSpec, TransformerOptions};
pub use edit::{materialize, CodeBuffer, Edit, EditSet};
pub use error::{ConfigError, EditError, ParseError, ResolveError, TransformError};
pub use filter::{Blocklist, IdFilter};
pub use resolver::{RuleMatch, RuleResolver, StaticRuleSet};
pub use transformer::{AttributifyJsx, Enforce};
