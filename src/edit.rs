//! Span edits over an immutable source
//!
//! Edits are recorded as `(span, replacement)` pairs and only turned into
//! text by `materialize`, which copies the untouched runs of the original
//! and substitutes the edited ones in a single pass.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use crate::error::EditError;

/// One replacement of a byte range in the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Range<usize>,
    pub replacement: String,
}

/// Pairwise disjoint edits keyed by start offset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    edits: BTreeMap<usize, Edit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit after checking it against `original` and the
    /// edits already present.
    pub fn insert(&mut self, original: &str, edit: Edit) -> Result<(), EditError> {
        let Range { start, end } = edit.span;
        if start > end {
            return Err(EditError::InvalidSpan { start, end });
        }
        if end > original.len() {
            return Err(EditError::OutOfBounds {
                start,
                end,
                len: original.len(),
            });
        }
        for offset in [start, end] {
            if !original.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary(offset));
            }
        }

        let overlaps_prev = self
            .edits
            .range(..=start)
            .next_back()
            .is_some_and(|(_, prev)| overlaps(&prev.span, &edit.span));
        let overlaps_next = self
            .edits
            .range(start..)
            .next()
            .is_some_and(|(_, next)| overlaps(&edit.span, &next.span));
        if overlaps_prev || overlaps_next {
            return Err(EditError::Overlap { start, end });
        }

        self.edits.insert(start, edit);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Edits in ascending span order
    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.edits.values()
    }
}

// Two empty spans at the same offset collide; an empty span touching a
// non-empty one at its boundary does not.
fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    if a.start == b.start {
        return true;
    }
    a.start < b.end && b.start < a.end
}

/// Apply every edit to `original`
pub fn materialize(original: &str, edits: &EditSet) -> String {
    let grown: usize = edits.iter().map(|e| e.replacement.len()).sum();
    let mut output = String::with_capacity(original.len() + grown);
    let mut cursor = 0;
    for edit in edits.iter() {
        output.push_str(&original[cursor..edit.span.start]);
        output.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    output.push_str(&original[cursor..]);
    output
}

/// The original text of one module plus the edits recorded against it
#[derive(Debug, Clone)]
pub struct CodeBuffer {
    original: String,
    edits: EditSet,
}

impl CodeBuffer {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            edits: EditSet::new(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn edits(&self) -> &EditSet {
        &self.edits
    }

    /// Replace `start..end` of the original text with `content`
    pub fn overwrite(&mut self, start: usize, end: usize, content: &str) -> Result<(), EditError> {
        self.edits.insert(
            &self.original,
            Edit {
                span: start..end,
                replacement: content.to_string(),
            },
        )
    }

    /// Record a batch of edits, all or nothing
    pub fn overwrite_all(&mut self, edits: impl IntoIterator<Item = Edit>) -> Result<(), EditError> {
        let mut staged = self.edits.clone();
        for edit in edits {
            staged.insert(&self.original, edit)?;
        }
        self.edits = staged;
        Ok(())
    }

    pub fn has_changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

impl fmt::Display for CodeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&materialize(&self.original, &self.edits))
    }
}
