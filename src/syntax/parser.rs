//! Grammar selection and parsing
//!
//! Picks a tree-sitter grammar from a module id and parses one source
//! buffer into a tree for the candidate finder.

use tree_sitter::{Parser, Tree};

use crate::error::ParseError;

/// Grammars a module can be parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl Language {
    /// Detect the grammar from a module id.
    ///
    /// Bundler ids may carry a `?query` or `#hash` suffix, which is ignored.
    /// Anything that is not TypeScript falls back to the JavaScript grammar,
    /// which accepts JSX.
    pub fn from_id(id: &str) -> Self {
        let path = id.split(['?', '#']).next().unwrap_or(id);
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return Language::JavaScript;
        };
        match ext.to_lowercase().as_str() {
            "tsx" => Language::Tsx,
            "ts" | "mts" | "cts" => Language::TypeScript,
            "jsx" => Language::Jsx,
            _ => Language::JavaScript,
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Jsx => "JSX",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
        }
    }

    fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            // JSX uses the same grammar as JavaScript in tree-sitter-javascript
            Language::JavaScript | Language::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

/// A tree-sitter parser bound to one grammar.
///
/// `tree_sitter::Parser` is not `Sync`, so one is built per transform
/// invocation instead of being shared between files.
pub struct SourceParser {
    language: Language,
    parser: Parser,
}

impl SourceParser {
    pub fn new(language: Language) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .map_err(|e| ParseError::LanguageInit {
                language: language.display_name(),
                message: e.to_string(),
            })?;
        Ok(Self { language, parser })
    }

    /// Parse source code into a syntax tree.
    ///
    /// Recovered syntax errors stay in the tree as `ERROR` nodes; only a
    /// parser that produces no tree at all is a failure.
    pub fn parse(&mut self, code: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(code, None)
            .ok_or(ParseError::ParseFailed(self.language.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert_eq!(Language::from_id("src/App.tsx"), Language::Tsx);
        assert_eq!(Language::from_id("src/App.jsx"), Language::Jsx);
        assert_eq!(Language::from_id("lib/util.ts"), Language::TypeScript);
        assert_eq!(Language::from_id("lib/util.mts"), Language::TypeScript);
        assert_eq!(Language::from_id("main.js"), Language::JavaScript);
        assert_eq!(Language::from_id("docs/intro.mdx"), Language::JavaScript);
        assert_eq!(Language::from_id("Makefile"), Language::JavaScript);
    }

    #[test]
    fn test_language_detection_ignores_query() {
        assert_eq!(Language::from_id("/src/App.tsx?v=3f2a"), Language::Tsx);
        assert_eq!(Language::from_id("/src/App.jsx#hmr"), Language::Jsx);
        assert_eq!(Language::from_id("/src.tsx/index?x.ts"), Language::JavaScript);
    }

    #[test]
    fn test_parse_jsx() {
        let mut parser = SourceParser::new(Language::Jsx).unwrap();
        let tree = parser.parse("const a = <div flex />;").unwrap();

        assert!(!tree.root_node().has_error());
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn test_parse_tsx() {
        let mut parser = SourceParser::new(Language::Tsx).unwrap();
        let code = "const App = (p: Props): JSX.Element => <main grid {...p} />;";
        let tree = parser.parse(code).unwrap();

        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_keeps_recovered_errors() {
        let mut parser = SourceParser::new(Language::Jsx).unwrap();
        let tree = parser.parse("# Title\n\n<Card flex />").unwrap();

        assert!(tree.root_node().has_error());
    }
}
