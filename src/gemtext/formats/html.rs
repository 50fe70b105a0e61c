//! HTML format implementation
//!
//! Strategy: direct token → HTML generation, one line of output per element.
//!
//! # Data Model
//!
//! | Token | HTML | Notes |
//! |-------|------|-------|
//! | Text | `<p>` | Blank lines produce nothing |
//! | ListItem | `<li>` inside `<ul>` | Grouping inferred from neighbours |
//! | Blockquote | `<blockquote>` | |
//! | PreBegin / PreText / PreEnd | `<pre>` | Caption becomes an HTML comment |
//! | Passthru* | raw HTML | Dropped in strict mode |
//! | HorizontalRule | `<hr />` | Dropped in strict mode |
//! | Heading | `<h1>`-`<h3>` | `id` from the heading sequence number |
//! | Link | `<a>` or `<img>` | Images expanded by extension |
//!
//! # List grouping
//!
//! Gemtext has no list container, so `<ul>` boundaries are inferred: a list item
//! opens a list unless the previous token is a list item, and closes it unless the
//! next token is one. In both directions a single empty text line is skipped, so
//! one blank line between bullets keeps them in the same list.

use crate::gemtext::encoding::{encode, Ruleset};
use crate::gemtext::formats::is_image_url;
use crate::gemtext::formats::registry::{FormatError, Formatter};
use crate::gemtext::token::{Heading, Link, Token};
use serde::Deserialize;

/// Knobs for HTML rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Drop everything that is not Gemtext proper: pass-through blocks and rules
    pub strict: bool,
    /// Render links to images as `<img>` elements
    pub expand_images: bool,
    /// Wrap expanded images in a link to the image itself
    pub link_images: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            strict: false,
            expand_images: true,
            link_images: true,
        }
    }
}

impl HtmlOptions {
    /// Strict rendering, otherwise default options
    pub fn strict() -> Self {
        HtmlOptions {
            strict: true,
            ..Self::default()
        }
    }
}

/// Render tokens as an HTML fragment
///
/// Returns `None` when there are no tokens.
pub fn render_html(tokens: &[Token], options: &HtmlOptions) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }

    let mut output = String::new();
    for (index, token) in tokens.iter().enumerate() {
        render_token(&mut output, tokens, index, token, options);
    }
    Some(output)
}

fn render_token(
    output: &mut String,
    tokens: &[Token],
    index: usize,
    token: &Token,
    options: &HtmlOptions,
) {
    if options.strict && (token.is_passthru() || matches!(token, Token::HorizontalRule)) {
        return;
    }

    match token {
        Token::PreBegin { caption } => {
            if let Some(caption) = caption {
                let caption = encode(caption, Ruleset::HtmlMinimal);
                output.push_str(&format!("<!-- {caption} -->\n"));
            }
            output.push_str("<pre>\n");
        }
        Token::PreEnd => output.push_str("</pre>\n"),
        Token::PreText(text) => {
            output.push_str(&encode(text, Ruleset::HtmlMinimal));
            output.push('\n');
        }
        Token::PassthruBegin => output.push_str("<!-- begin HTML pass-through -->\n"),
        Token::PassthruEnd => output.push_str("<!-- end HTML pass-through -->\n"),
        Token::PassthruText(text) => {
            output.push_str(text);
            output.push('\n');
        }
        Token::HorizontalRule => output.push_str("<hr />\n"),
        Token::Link(link) => render_link(output, link, options),
        Token::Heading(heading) => render_heading(output, heading),
        Token::ListItem(text) => {
            if !neighbour_is_list_item(tokens, index, Direction::Before) {
                output.push_str("<ul>\n");
            }
            let text = encode(text, Ruleset::HtmlFull);
            output.push_str(&format!("<li>{text}</li>\n"));
            if !neighbour_is_list_item(tokens, index, Direction::After) {
                output.push_str("</ul>\n");
            }
        }
        Token::Blockquote(text) => {
            let text = encode(text, Ruleset::HtmlFull);
            output.push_str(&format!("<blockquote>{text}</blockquote>\n"));
        }
        Token::Text(text) => {
            if !text.trim().is_empty() {
                let text = encode(text, Ruleset::HtmlFull);
                output.push_str(&format!("<p>{text}</p>\n"));
            }
        }
    }
}

fn render_link(output: &mut String, link: &Link, options: &HtmlOptions) {
    let url = encode(&link.url, Ruleset::HtmlFull);
    let alt_text = encode(&link.alt_text, Ruleset::HtmlFull);

    if !(options.expand_images && is_image_url(&link.url)) {
        output.push_str(&format!(
            "<a class=\"jt-link\" href=\"{url}\">{alt_text}</a>\n"
        ));
        return;
    }

    if options.link_images {
        output.push_str(&format!("<a href=\"{url}\">\n"));
    }
    output.push_str(&format!(
        "<img class=\"jt-image\" src=\"{url}\" alt=\"{alt_text}\" title=\"{alt_text}\" />\n"
    ));
    if options.link_images {
        output.push_str("</a>\n");
    }
}

fn render_heading(output: &mut String, heading: &Heading) {
    let level = heading.level.depth();
    let id = heading.id();
    let text = encode(&heading.text, Ruleset::HtmlFull);
    output.push_str(&format!("<h{level} id=\"{id}\">{text}</h{level}>\n"));
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Before,
    After,
}

/// Whether the token next to `index` in `direction` is a list item
///
/// A single empty text line directly next to the item is skipped over.
fn neighbour_is_list_item(tokens: &[Token], index: usize, direction: Direction) -> bool {
    let step = |i: usize| match direction {
        Direction::Before => i.checked_sub(1),
        Direction::After => Some(i + 1).filter(|&next| next < tokens.len()),
    };

    let mut neighbour = step(index);
    if let Some(i) = neighbour {
        if tokens[i].is_empty_text() {
            neighbour = step(i);
        }
    }

    neighbour.is_some_and(|i| tokens[i].is_list_item())
}

/// HTML formatter for the format registry
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    pub options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlFormatter { options }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        if self.options.strict {
            "html-strict"
        } else {
            "html"
        }
    }

    fn description(&self) -> &str {
        if self.options.strict {
            "HTML fragment without pass-through blocks or rules"
        } else {
            "HTML fragment"
        }
    }

    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError> {
        Ok(render_html(tokens, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemtext::lexing::tokenize_str;

    fn html(source: &str) -> String {
        render_html(tokenize_str(source).tokens(), &HtmlOptions::default()).unwrap()
    }

    fn html_with(source: &str, options: HtmlOptions) -> String {
        render_html(tokenize_str(source).tokens(), &options).unwrap()
    }

    #[test]
    fn test_empty_tokens_render_nothing() {
        assert_eq!(render_html(&[], &HtmlOptions::default()), None);
    }

    #[test]
    fn test_paragraphs_and_blank_lines() {
        assert_eq!(html("one\n\n  \ntwo"), "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_blank_only_document_renders_empty_string() {
        assert_eq!(html("   "), "");
    }

    #[test]
    fn test_text_is_fully_encoded() {
        assert_eq!(
            html("Fish & chips — £5"),
            "<p>Fish &amp; chips &mdash; &pound;5</p>\n"
        );
    }

    #[test]
    fn test_pre_caption_comment() {
        assert_eq!(
            html("```a <caption>\nx < y\n```"),
            "<!-- a &lt;caption&gt; -->\n<pre>\nx &lt; y\n</pre>\n"
        );
    }

    #[test]
    fn test_pre_text_uses_minimal_encoding() {
        assert_eq!(html("```\ncafé\n```"), "<pre>\ncafé\n</pre>\n");
    }

    #[test]
    fn test_strict_drops_passthru_and_rules() {
        let source = "+++\n<b>raw</b>\n+++\n===\ntext";
        assert_eq!(html_with(source, HtmlOptions::strict()), "<p>text</p>\n");
        assert_eq!(
            html(source),
            "<!-- begin HTML pass-through -->\n\
             <b>raw</b>\n\
             <!-- end HTML pass-through -->\n\
             <hr />\n\
             <p>text</p>\n"
        );
    }

    #[test]
    fn test_image_not_expanded_when_disabled() {
        let options = HtmlOptions {
            expand_images: false,
            ..HtmlOptions::default()
        };
        assert_eq!(
            html_with("=> cat.png A cat", options),
            "<a class=\"jt-link\" href=\"cat.png\">A cat</a>\n"
        );
    }

    #[test]
    fn test_link_attributes_are_encoded() {
        assert_eq!(
            html("=> /search?a=1&b=2 \"Search\""),
            "<a class=\"jt-link\" href=\"/search?a=1&amp;b=2\">&quot;Search&quot;</a>\n"
        );
    }

    #[test]
    fn test_list_grouping_skips_one_blank_line() {
        assert_eq!(html("* a\n\n* b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }

    #[test]
    fn test_list_grouping_two_blank_lines_split() {
        assert_eq!(
            html("* a\n\n\n* b"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_grouping_whitespace_line_is_not_skipped() {
        assert_eq!(
            html("* a\n \n* b"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_after_text_and_before_heading() {
        assert_eq!(
            html("intro\n* a\n# H"),
            "<p>intro</p>\n<ul>\n<li>a</li>\n</ul>\n<h1 id=\"jt-heading-1\">H</h1>\n"
        );
    }

    #[test]
    fn test_formatter_names() {
        assert_eq!(HtmlFormatter::default().name(), "html");
        assert_eq!(
            HtmlFormatter::new(HtmlOptions::strict()).name(),
            "html-strict"
        );
    }
}
