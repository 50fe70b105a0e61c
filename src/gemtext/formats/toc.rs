//! HTML table of contents
//!
//! A flat `<ul>` with one entry per heading, in document order. Entries are not
//! nested by level; the level is exposed as a `jt-toc-depth-N` class instead so
//! stylesheets can indent them.

use crate::gemtext::encoding::{encode, Ruleset};
use crate::gemtext::formats::registry::{FormatError, Formatter};
use crate::gemtext::token::Token;

/// Render the table of contents of a token stream
///
/// Returns `None` when there are no tokens. A document without headings yields an
/// empty list.
pub fn render_toc(tokens: &[Token]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }

    let mut output = String::from("<ul class=\"jt-toc-list\">\n");
    for heading in tokens.iter().filter_map(Token::as_heading) {
        output.push_str(&format!(
            "<li class=\"jt-toc-depth-{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level,
            heading.id(),
            encode(&heading.text, Ruleset::HtmlFull)
        ));
    }
    output.push_str("</ul>");

    Some(output)
}

/// Table of contents formatter for the format registry
#[derive(Debug, Clone, Copy, Default)]
pub struct TocFormatter;

impl Formatter for TocFormatter {
    fn name(&self) -> &str {
        "toc"
    }

    fn description(&self) -> &str {
        "HTML table of contents fragment"
    }

    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError> {
        Ok(render_toc(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemtext::lexing::tokenize_str;

    #[test]
    fn test_empty_tokens_render_nothing() {
        assert_eq!(render_toc(&[]), None);
    }

    #[test]
    fn test_document_without_headings() {
        let document = tokenize_str("just text");
        assert_eq!(
            render_toc(document.tokens()).as_deref(),
            Some("<ul class=\"jt-toc-list\">\n</ul>")
        );
    }

    #[test]
    fn test_entries_are_flat_and_encoded() {
        let document = tokenize_str("## Q&A\ntext\n### Über");
        insta::assert_snapshot!(render_toc(document.tokens()).unwrap(), @r###"
        <ul class="jt-toc-list">
        <li class="jt-toc-depth-2"><a href="#jt-heading-1">Q&amp;A</a></li>
        <li class="jt-toc-depth-3"><a href="#jt-heading-2">&Uuml;ber</a></li>
        </ul>
        "###);
    }
}
