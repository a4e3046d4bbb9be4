//! Syntax highlighting for fenced code blocks, backed by syntect's
//! bundled syntax definitions.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::error::{DocsetError, Result};

const THEME: &str = "InspiredGitHub";

pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults().themes[THEME].clone();
        Self { syntaxes, theme }
    }

    /// Render `code` as highlighted HTML. A language token the syntax set
    /// does not recognise aborts the conversion.
    pub fn highlight(&self, language: &str, code: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .ok_or_else(|| DocsetError::UnknownLanguage(language.to_string()))?;
        Ok(highlighted_html_for_string(
            code,
            &self.syntaxes,
            syntax,
            &self.theme,
        )?)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_a_known_language() {
        let highlighter = Highlighter::new();
        let html = highlighter
            .highlight("rust", "fn main() {}\n")
            .expect("highlight rust");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn rejects_an_unknown_language() {
        let highlighter = Highlighter::new();
        let err = highlighter
            .highlight("not-a-language", "x\n")
            .expect_err("unknown language");
        assert!(matches!(err, DocsetError::UnknownLanguage(_)));
    }
}
