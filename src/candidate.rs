//! Valueless JSX attribute discovery
//!
//! Finds `jsx_attribute` nodes written without a value inside an opening or
//! self-closing tag, and derives the rule name each one is looked up under.

use std::ops::Range;

use tree_sitter::Tree;

use crate::syntax::{has_ancestor_of_kinds, has_child_of_kinds, no_descendant_of_kinds, Rule};

const ATTRIBUTE_NAMES: &[&str] = &["property_identifier", "jsx_namespace_name"];

// Element-valued attributes (`icon=<Icon />`) carry a value too.
const ATTRIBUTE_VALUES: &[&str] = &[
    "jsx_expression",
    "string",
    "jsx_element",
    "jsx_self_closing_element",
    "jsx_fragment",
];

const OPENING_TAGS: &[&str] = &["jsx_opening_element", "jsx_self_closing_element"];

/// The structural rule matching a boolean-style attribute
pub fn valueless_attribute_rule() -> Rule {
    Rule::new("jsx_attribute")
        .with(has_child_of_kinds(ATTRIBUTE_NAMES))
        .with(no_descendant_of_kinds(ATTRIBUTE_VALUES))
        .with(has_ancestor_of_kinds(OPENING_TAGS))
}

/// A located attribute-without-value occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Byte range of the attribute in the source
    pub span: Range<usize>,
    /// Source text at `span`
    pub raw_text: String,
    /// Name used for blocklist matching and rule lookup
    pub rule_name: String,
}

impl Candidate {
    pub fn new(span: Range<usize>, raw_text: String) -> Self {
        let rule_name = rule_name_for(&raw_text);
        Self {
            span,
            raw_text,
            rule_name,
        }
    }

    /// The text written back when the rule matches
    pub fn replacement(&self) -> String {
        format!("{}=\"\"", self.rule_name)
    }
}

/// Map namespaced attribute syntax onto the rule separator.
///
/// Only the first `:` becomes `-`: `hover:flex` -> `hover-flex`,
/// `a:b:c` -> `a-b:c`.
pub fn rule_name_for(raw: &str) -> String {
    raw.replacen(':', "-", 1)
}

/// Find every valueless attribute in document order
pub fn find_candidates(tree: &Tree, source: &str) -> Vec<Candidate> {
    valueless_attribute_rule()
        .find_all(tree.root_node())
        .into_iter()
        .filter_map(|node| {
            let span = node.byte_range();
            if span.is_empty() {
                return None;
            }
            let raw = source.get(span.clone())?;
            Some(Candidate::new(span, raw.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Language, SourceParser};

    fn candidates(code: &str, language: Language) -> Vec<Candidate> {
        let mut parser = SourceParser::new(language).unwrap();
        let tree = parser.parse(code).unwrap();
        find_candidates(&tree, code)
    }

    fn names(code: &str) -> Vec<String> {
        candidates(code, Language::Jsx)
            .into_iter()
            .map(|c| c.raw_text)
            .collect()
    }

    #[test]
    fn test_rule_name_normalization() {
        assert_eq!(rule_name_for("flex"), "flex");
        assert_eq!(rule_name_for("hover:flex"), "hover-flex");
        assert_eq!(rule_name_for("a:b:c"), "a-b:c");
    }

    #[test]
    fn test_finds_bare_and_namespaced_attributes() {
        let code = r#"<div flex hover:text-red border="1" {...props} />"#;
        let found = candidates(code, Language::Jsx);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].raw_text, "flex");
        assert_eq!(found[0].span, 5..9);
        assert_eq!(found[1].raw_text, "hover:text-red");
        assert_eq!(found[1].rule_name, "hover-text-red");
        assert_eq!(&code[found[1].span.clone()], "hover:text-red");
    }

    #[test]
    fn test_skips_attributes_with_values() {
        let code = r#"<a href="/" onClick={go} title='t' icon=<Icon /> m-2>x</a>"#;
        assert_eq!(names(code), vec!["m-2"]);
    }

    #[test]
    fn test_opening_element_with_children() {
        let code = "<section grid>\n  <p text-sm>hi</p>\n</section>";
        assert_eq!(names(code), vec!["grid", "text-sm"]);
    }

    #[test]
    fn test_ignores_lookalikes_outside_tags() {
        let code = "const flex = { grid: true };\nlet p = a ? flex : grid;\nfunction f(m) { return m; }";
        assert!(names(code).is_empty());
    }

    #[test]
    fn test_tsx_generics_are_not_attributes() {
        let code = "function id<T,>(x: T): T { return x }\nconst el = <Box p-4 />;";
        let found = candidates(code, Language::Tsx);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].raw_text, "p-4");
    }

    #[test]
    fn test_spans_are_disjoint() {
        let code = "<div a b c>\n<span d e:f />\n</div>";
        let found = candidates(code, Language::Jsx);

        assert_eq!(found.len(), 5);
        for pair in found.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_deeply_nested_element() {
        let depth = 20_000;
        let code = format!(
            "const x = {}<div flex />{};",
            "[".repeat(depth),
            "]".repeat(depth)
        );
        let found = candidates(&code, Language::Jsx);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].raw_text, "flex");
        assert_eq!(found[0].span.start, code.find("flex").unwrap());
    }

    #[test]
    fn test_replacement_uses_normalized_name() {
        let candidate = Candidate::new(0..10, "sm:visible".to_string());
        assert_eq!(candidate.replacement(), "sm-visible=\"\"");
    }
}
