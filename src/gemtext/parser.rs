//! Parser session API
//!
//! [`GemParser`] is the one-stop entry point: it tokenizes a document once and
//! renders the result in any format on demand.
//!
//! The result of the last tokenization is published as an immutable
//! [`Document`] behind an `Arc`. `parse` replaces that snapshot wholesale
//! instead of mutating it, so a snapshot taken with [`GemParser::snapshot`] can
//! keep being rendered (on any thread) while the parser moves on to the next
//! input.
//!
//! ```rust,ignore
//! let mut parser = GemParser::new();
//! parser.parse(Some(source));
//!
//! let html = parser.html();
//! let toc = parser.toc();
//! let title = parser.title();
//! ```

use crate::gemtext::formats::{
    render_gemini, render_html, render_markdown, render_toc, HtmlOptions, MarkdownOptions,
};
use crate::gemtext::lexing::tokenize;
use crate::gemtext::token::Token;
use std::sync::Arc;

/// A tokenized document: its token stream and title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<Token>,
    title: Option<String>,
}

impl Document {
    pub fn new(tokens: Vec<Token>, title: Option<String>) -> Self {
        Document { tokens, title }
    }

    /// The document with no tokens and no title
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Text of the first level 1 heading, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render as HTML with the given options
    pub fn html_with(&self, options: &HtmlOptions) -> Option<String> {
        render_html(&self.tokens, options)
    }

    /// Render as HTML: not strict, images expanded and linked
    pub fn html(&self) -> Option<String> {
        self.html_with(&HtmlOptions::default())
    }

    /// Render as canonical Gemtext
    pub fn gemini(&self) -> Option<String> {
        render_gemini(&self.tokens)
    }

    /// Render as Markdown with the given options
    pub fn markdown_with(&self, options: &MarkdownOptions) -> Option<String> {
        render_markdown(&self.tokens, options)
    }

    /// Render as Markdown with images expanded
    pub fn markdown(&self) -> Option<String> {
        self.markdown_with(&MarkdownOptions::default())
    }

    /// Render the HTML table of contents
    pub fn toc(&self) -> Option<String> {
        render_toc(&self.tokens)
    }
}

/// Parser session holding the result of the last tokenization
#[derive(Debug, Clone, Default)]
pub struct GemParser {
    document: Arc<Document>,
}

impl GemParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `input`, replacing the previous result
    ///
    /// `None` is "no input": it leaves the parser with no tokens and no title.
    pub fn parse(&mut self, input: Option<&str>) {
        self.document = Arc::new(tokenize(input));
    }

    /// The current document, shared
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    pub fn tokens(&self) -> &[Token] {
        self.document.tokens()
    }

    pub fn title(&self) -> Option<&str> {
        self.document.title()
    }

    pub fn html_with(&self, options: &HtmlOptions) -> Option<String> {
        self.document.html_with(options)
    }

    pub fn html(&self) -> Option<String> {
        self.document.html()
    }

    pub fn gemini(&self) -> Option<String> {
        self.document.gemini()
    }

    pub fn markdown_with(&self, options: &MarkdownOptions) -> Option<String> {
        self.document.markdown_with(options)
    }

    pub fn markdown(&self) -> Option<String> {
        self.document.markdown()
    }

    pub fn toc(&self) -> Option<String> {
        self.document.toc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_parser_renders_nothing() {
        let parser = GemParser::new();
        assert!(parser.tokens().is_empty());
        assert_eq!(parser.title(), None);
        assert_eq!(parser.html(), None);
        assert_eq!(parser.gemini(), None);
        assert_eq!(parser.markdown(), None);
        assert_eq!(parser.toc(), None);
    }

    #[test]
    fn test_parse_none_clears_previous_result() {
        let mut parser = GemParser::new();
        parser.parse(Some("# Title\ntext"));
        assert_eq!(parser.title(), Some("Title"));

        parser.parse(None);
        assert!(parser.tokens().is_empty());
        assert_eq!(parser.title(), None);
        assert_eq!(parser.html(), None);
    }

    #[test]
    fn test_parse_replaces_tokens_wholesale() {
        let mut parser = GemParser::new();
        parser.parse(Some("# One\n* a"));
        parser.parse(Some("## Two"));

        assert_eq!(parser.tokens().len(), 1);
        assert_eq!(parser.title(), None);
        assert_eq!(
            parser.html().as_deref(),
            Some("<h2 id=\"jt-heading-1\">Two</h2>\n")
        );
    }

    #[test]
    fn test_snapshot_survives_reparse() {
        let mut parser = GemParser::new();
        parser.parse(Some("# First"));
        let snapshot = parser.snapshot();

        parser.parse(Some("# Second"));

        assert_eq!(snapshot.title(), Some("First"));
        assert_eq!(parser.title(), Some("Second"));
    }

    #[test]
    fn test_snapshot_renders_across_threads() {
        let mut parser = GemParser::new();
        parser.parse(Some("# Shared\n* item"));
        let snapshot = parser.snapshot();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let document = Arc::clone(&snapshot);
                thread::spawn(move || document.html())
            })
            .collect();

        let expected = snapshot.html();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_rendering_does_not_reparse() {
        let mut parser = GemParser::new();
        parser.parse(Some("=> /a.png Pic"));
        let before = parser.snapshot();

        let _ = parser.html();
        let _ = parser.markdown();
        let _ = parser.gemini();

        assert!(Arc::ptr_eq(&before, &parser.snapshot()));
    }
}
