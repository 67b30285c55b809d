//! Structural node queries
//!
//! A small set of composable predicates evaluated against tree-sitter nodes,
//! enough to express "a node of kind K that has this child, lacks those
//! descendants and sits inside one of these constructs" as a single match.

use tree_sitter::{Node, TreeCursor};

/// A structural condition checked against one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// At least one direct child has one of the kinds
    HasChildOfKinds(&'static [&'static str]),
    /// No descendant, at any depth, has one of the kinds
    NoDescendantOfKinds(&'static [&'static str]),
    /// Some ancestor has one of the kinds
    HasAncestorOfKinds(&'static [&'static str]),
}

pub fn has_child_of_kinds(kinds: &'static [&'static str]) -> Constraint {
    Constraint::HasChildOfKinds(kinds)
}

pub fn no_descendant_of_kinds(kinds: &'static [&'static str]) -> Constraint {
    Constraint::NoDescendantOfKinds(kinds)
}

pub fn has_ancestor_of_kinds(kinds: &'static [&'static str]) -> Constraint {
    Constraint::HasAncestorOfKinds(kinds)
}

impl Constraint {
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Constraint::HasChildOfKinds(kinds) => {
                let mut cursor = node.walk();
                let found = node
                    .children(&mut cursor)
                    .any(|child| kinds.contains(&child.kind()));
                found
            }
            Constraint::NoDescendantOfKinds(kinds) => !has_descendant_of_kinds(node, kinds),
            Constraint::HasAncestorOfKinds(kinds) => {
                let mut current = node.parent();
                while let Some(ancestor) = current {
                    if kinds.contains(&ancestor.kind()) {
                        return true;
                    }
                    current = ancestor.parent();
                }
                false
            }
        }
    }
}

// Walks are iterative: nesting depth is bounded by the source, not the stack.
fn has_descendant_of_kinds(node: &Node, kinds: &[&str]) -> bool {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return false;
    }
    loop {
        if kinds.contains(&cursor.node().kind()) {
            return true;
        }
        if cursor.goto_first_child() {
            continue;
        }
        if !skip_subtree(&mut cursor) {
            return false;
        }
    }
}

/// Move to the next node in document order outside the current subtree.
///
/// Returns false once the cursor is back at the node it was created from.
fn skip_subtree(cursor: &mut TreeCursor) -> bool {
    loop {
        if cursor.goto_next_sibling() {
            return true;
        }
        if !cursor.goto_parent() {
            return false;
        }
    }
}

/// A node kind plus the constraints every match must satisfy
#[derive(Debug, Clone)]
pub struct Rule {
    kind: &'static str,
    constraints: Vec<Constraint>,
}

impl Rule {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            constraints: Vec::new(),
        }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Check a single node against the kind and every constraint
    pub fn matches(&self, node: &Node) -> bool {
        node.kind() == self.kind && self.constraints.iter().all(|c| c.matches(node))
    }

    /// Collect all matching nodes under `root` in document order.
    ///
    /// A matched node is not searched further, so results never nest.
    pub fn find_all<'tree>(&self, root: Node<'tree>) -> Vec<Node<'tree>> {
        let mut matches = Vec::new();
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if self.matches(&node) {
                matches.push(node);
            } else if cursor.goto_first_child() {
                continue;
            }
            if !skip_subtree(&mut cursor) {
                return matches;
            }
        }
    }
}
