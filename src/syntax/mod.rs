//! Tree-sitter integration
//!
//! Parses JSX/TSX sources and runs structural queries over the resulting
//! trees. Nothing here knows about utility rules; it only locates nodes.

mod parser;
mod query;

pub use parser::{Language, SourceParser};
pub use query::{
    has_ancestor_of_kinds, has_child_of_kinds, no_descendant_of_kinds, Constraint, Rule,
};
