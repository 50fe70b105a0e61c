//! Markdown serialization
//!
//! Maps each token to its closest Markdown construct:
//!
//! | Token | Markdown |
//! |-------|----------|
//! | Text | escaped paragraph line |
//! | ListItem | `* item` |
//! | Blockquote | `> quote` (HTML-escaped) |
//! | PreBegin / PreEnd | ```` ``` ```` fence with caption |
//! | PreText | line with backticks doubled |
//! | PassthruText | raw line |
//! | HorizontalRule | `---` and a blank line |
//! | Heading | `#` run and text |
//! | Link | `[alt](url)` or `![alt](url)`, then a blank line |
//!
//! Every token produces exactly its own output; nothing carries over into the
//! handling of the next construct.

use crate::gemtext::encoding::{encode, Ruleset};
use crate::gemtext::formats::is_image_url;
use crate::gemtext::formats::registry::{FormatError, Formatter};
use crate::gemtext::token::Token;
use serde::Deserialize;

/// Knobs for Markdown rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Render links to images as Markdown images
    pub expand_images: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            expand_images: true,
        }
    }
}

/// Render tokens as Markdown
///
/// Returns `None` when there are no tokens.
pub fn render_markdown(tokens: &[Token], options: &MarkdownOptions) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }

    let mut output = String::new();
    for token in tokens {
        match token {
            Token::PreBegin { caption } => {
                output.push_str("```");
                if let Some(caption) = caption {
                    output.push_str(caption);
                }
                output.push('\n');
            }
            Token::PreEnd => output.push_str("```\n"),
            Token::PreText(text) => {
                output.push_str(&text.replace('`', "``"));
                output.push('\n');
            }
            Token::Link(link) => {
                if options.expand_images && is_image_url(&link.url) {
                    output.push('!');
                }
                output.push_str(&format!("[{}]({})\n\n", link.alt_text, link.url));
            }
            Token::Blockquote(text) => {
                output.push_str("> ");
                output.push_str(&encode(text, Ruleset::HtmlMinimal));
                output.push('\n');
            }
            Token::ListItem(text) => {
                output.push_str("* ");
                output.push_str(text);
                output.push('\n');
            }
            Token::Heading(heading) => {
                output.push_str(heading.level.marker());
                output.push(' ');
                output.push_str(&heading.text);
                output.push('\n');
            }
            Token::Text(text) => {
                output.push_str(&encode(text, Ruleset::Markdown));
                output.push('\n');
            }
            Token::PassthruText(text) => {
                output.push_str(text);
                output.push('\n');
            }
            Token::HorizontalRule => output.push_str("---\n\n"),
            Token::PassthruBegin | Token::PassthruEnd => {}
        }
    }

    Some(output)
}

/// Markdown formatter for the format registry
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    pub options: MarkdownOptions,
}

impl MarkdownFormatter {
    pub fn new(options: MarkdownOptions) -> Self {
        MarkdownFormatter { options }
    }
}

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown document"
    }

    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError> {
        Ok(render_markdown(tokens, &self.options))
    }
}
