//! Markdown-to-HTML rendering driven by pulldown-cmark, with heading and
//! code-block events routed through a pluggable block renderer.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};

use crate::error::Result;
use crate::highlight::Highlighter;
use crate::toc::Outline;

/// Rendering strategy for the block kinds this tool treats specially.
/// Every other block kind is rendered by pulldown-cmark's HTML writer.
pub trait BlockRenderer {
    /// Render one heading. `text` is the inline-rendered HTML content of
    /// the heading, `raw` the unrendered heading source.
    fn heading(&mut self, level: u8, text: &str, raw: &str) -> String;

    /// Render one code block. `language` is the first token of the fence
    /// info string, or `None` for bare fences and indented blocks.
    fn code_block(&mut self, language: Option<&str>, code: &str) -> Result<String>;
}

/// Render a whole Markdown document, delegating headings and code blocks
/// to `renderer`.
pub fn render_document<R: BlockRenderer>(input: &str, renderer: &mut R) -> Result<String> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut iter = Parser::new_ext(input, options).into_offset_iter();
    let mut events: Vec<Event> = Vec::new();

    while let Some((event, range)) = iter.next() {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                let mut inline = Vec::new();
                for (inner, _) in iter.by_ref() {
                    if matches!(inner, Event::End(Tag::Heading(..))) {
                        break;
                    }
                    inline.push(inner);
                }

                let mut text = String::new();
                html::push_html(&mut text, inline.into_iter());
                let raw = raw_heading_source(&input[range]);
                let fragment = renderer.heading(level as u8, text.trim_end(), &raw);
                events.push(Event::Html(fragment.into()));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = fence_language(&kind);
                let mut code = String::new();
                for (inner, _) in iter.by_ref() {
                    match inner {
                        Event::Text(chunk) => code.push_str(&chunk),
                        Event::End(Tag::CodeBlock(_)) => break,
                        _ => {}
                    }
                }
                let fragment = renderer.code_block(language.as_deref(), &code)?;
                events.push(Event::Html(fragment.into()));
            }
            other => events.push(other),
        }
    }

    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    Ok(output)
}

/// The docset rendering strategy: anchors every heading, records it for
/// indexing, and highlights fenced code.
pub struct DocsetRenderer {
    outline: Outline,
    highlighter: Highlighter,
}

impl DocsetRenderer {
    pub fn new() -> Self {
        Self {
            outline: Outline::new(),
            highlighter: Highlighter::new(),
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Restart anchor numbering at zero for a new conversion run.
    pub fn reset(&mut self) {
        self.outline.reset();
    }
}

impl Default for DocsetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRenderer for DocsetRenderer {
    fn heading(&mut self, level: u8, text: &str, raw: &str) -> String {
        let anchor = self.outline.record(text, level, raw);
        format!("<h{level} id=\"toc-{anchor}\">{text}</h{level}>\n")
    }

    fn code_block(&mut self, language: Option<&str>, code: &str) -> Result<String> {
        match language {
            Some(language) => self.highlighter.highlight(language, code),
            None => Ok(format!(
                "\n<pre><code>{}</code></pre>\n",
                html_escape::encode_text(code)
            )),
        }
    }
}

fn fence_language(kind: &CodeBlockKind) -> Option<String> {
    match kind {
        CodeBlockKind::Indented => None,
        CodeBlockKind::Fenced(info) => {
            let token = info
                .split(|c: char| c == ',' || c.is_whitespace())
                .next()
                .unwrap_or("");
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        }
    }
}

/// Recover the unrendered heading text from its source span. ATX markers
/// and a whitespace-preceded closing hash run are stripped; for setext
/// headings the span's first line already is the content.
fn raw_heading_source(span: &str) -> String {
    let line = span.lines().next().unwrap_or("").trim();
    let after_hashes = line.trim_start_matches('#').trim_start();
    let mut content = after_hashes.trim_end();
    let stripped = content.trim_end_matches('#');
    if stripped.len() < content.len() && stripped.ends_with(char::is_whitespace) {
        content = stripped.trim_end();
    }
    content.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsetError;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchors_headings_in_document_order() {
        let mut renderer = DocsetRenderer::new();
        let html =
            render_document("# Title\n\n## A\n\n#### Deep\n", &mut renderer).expect("render");
        assert!(html.contains("<h1 id=\"toc-0\">Title</h1>"));
        assert!(html.contains("<h2 id=\"toc-1\">A</h2>"));
        assert!(html.contains("<h4 id=\"toc-2\">Deep</h4>"));
    }

    #[test]
    fn renders_inline_markup_inside_headings() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("# Heading **Text**\n", &mut renderer).expect("render");
        assert!(html.contains("<h1 id=\"toc-0\">Heading <strong>Text</strong></h1>"));
        assert_eq!(renderer.outline().records()[0].raw, "Heading **Text**");
    }

    #[test]
    fn strips_closing_hashes_from_raw_text() {
        let mut renderer = DocsetRenderer::new();
        render_document("### Heading ##\n", &mut renderer).expect("render");
        assert_eq!(renderer.outline().records()[0].raw, "Heading");
        assert_eq!(renderer.outline().records()[0].level, 3);
    }

    #[test]
    fn records_setext_headings_like_atx() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("Title\n=====\n\nSub\n---\n", &mut renderer).expect("render");
        assert!(html.contains("<h1 id=\"toc-0\">Title</h1>"));
        assert!(html.contains("<h2 id=\"toc-1\">Sub</h2>"));
        assert_eq!(renderer.outline().records()[0].raw, "Title");
    }

    #[test]
    fn escapes_code_without_a_language() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("```\na < b\n```\n", &mut renderer).expect("render");
        assert!(html.contains("<pre><code>a &lt; b\n</code></pre>"));
    }

    #[test]
    fn escapes_indented_code_blocks() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("    a < b\n", &mut renderer).expect("render");
        assert!(html.contains("<pre><code>a &lt; b\n</code></pre>"));
    }

    #[test]
    fn highlights_fenced_code_with_a_language() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("```rust\nfn main() {}\n```\n", &mut renderer).expect("render");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
        // The highlighted block replaces the plain pre/code fallback.
        assert!(!html.contains("<pre><code>fn main"));
    }

    #[test]
    fn unknown_fence_language_is_fatal() {
        let mut renderer = DocsetRenderer::new();
        let err = render_document("```klingon\nx\n```\n", &mut renderer).expect_err("render");
        assert!(matches!(err, DocsetError::UnknownLanguage(_)));
    }

    #[test]
    fn uses_only_the_first_token_of_the_fence_info() {
        let mut renderer = DocsetRenderer::new();
        render_document("```rust,no_run\nfn main() {}\n```\n", &mut renderer).expect("render");
    }

    #[test]
    fn passes_other_blocks_to_the_html_writer() {
        let mut renderer = DocsetRenderer::new();
        let html = render_document("plain *paragraph*\n", &mut renderer).expect("render");
        assert!(html.contains("<p>plain <em>paragraph</em></p>"));
        assert!(renderer.outline().is_empty());
    }
}
