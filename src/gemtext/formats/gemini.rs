//! Canonical Gemtext serialization
//!
//! Re-emits a token stream as strict Gemtext. Everything that is an extension of the
//! format (pass-through blocks and horizontal rules) is filtered out; every other
//! token is written back in its canonical form:
//!
//! - links as `=> URL` plus the alt text when it differs from the URL
//! - headings with a single space after the `#` run
//! - list items and blockquotes with `* ` and `> `
//! - plain and preformatted text verbatim
//!
//! Re-tokenizing the output and rendering it again gives the same output.

use crate::gemtext::formats::registry::{FormatError, Formatter};
use crate::gemtext::token::Token;

/// Render tokens as canonical Gemtext
///
/// Returns `None` when there are no tokens.
pub fn render_gemini(tokens: &[Token]) -> Option<String> {
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
            }
            Token::PreEnd => output.push_str("```"),
            Token::Link(link) => {
                output.push_str("=> ");
                output.push_str(&link.url);
                if link.has_alt_text() {
                    output.push(' ');
                    output.push_str(&link.alt_text);
                }
            }
            Token::Blockquote(text) => {
                output.push_str("> ");
                output.push_str(text);
            }
            Token::ListItem(text) => {
                output.push_str("* ");
                output.push_str(text);
            }
            Token::Heading(heading) => {
                output.push_str(heading.level.marker());
                output.push(' ');
                output.push_str(&heading.text);
            }
            Token::Text(text) | Token::PreText(text) => output.push_str(text),
            // Not Gemtext: no output, not even a line break
            Token::PassthruBegin
            | Token::PassthruText(_)
            | Token::PassthruEnd
            | Token::HorizontalRule => continue,
        }
        output.push('\n');
    }

    Some(output)
}

/// Canonical Gemtext formatter for the format registry
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiFormatter;

impl Formatter for GeminiFormatter {
    fn name(&self) -> &str {
        "gemini"
    }

    fn description(&self) -> &str {
        "Canonical Gemtext without pass-through blocks or rules"
    }

    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError> {
        Ok(render_gemini(tokens))
    }
}
