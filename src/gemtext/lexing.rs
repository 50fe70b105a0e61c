//! Tokenizer
//!
//! This module turns a Gemtext source into the flat token stream the renderers
//! consume. Tokenization is a single pass over the physical lines:
//!
//! 1. Split the source on any line-break convention (./lexing/lines.rs)
//! 2. Lex the leading marker of the trimmed line with logos (./lexing/markers.rs)
//! 3. Classify the line from its marker and remainder (./lexing/line_classification.rs)
//! 4. Resolve the classification against the open block, if any, and emit one token
//!
//! Block handling
//!
//!     Preformatted (```) and pass-through (+++) blocks are line-local toggles. Fence
//!     lines are recognised before anything else, even inside an open block. Inside a
//!     block every other line becomes a body token holding the raw, untrimmed line,
//!     with no pattern matching at all. A block left open at the end of input simply
//!     stays open: no closing token is synthesized.
//!
//! Headings
//!
//!     Every heading, whatever its level, takes the next value of a document-wide
//!     counter starting at 1. The text of the first level 1 heading becomes the
//!     document title.

pub mod line_classification;
pub mod lines;
pub mod markers;

pub use line_classification::{classify_line, LineType};
pub use lines::split_lines;
pub use markers::{leading_marker, Marker};

use crate::gemtext::parser::Document;
use crate::gemtext::token::{Heading, HeadingLevel, Link, Token};

/// Tokenize a document
///
/// Absent input yields an empty token sequence and no title. Each call starts
/// from a clean state.
pub fn tokenize(input: Option<&str>) -> Document {
    let Some(source) = input else {
        tracing::debug!("no input, nothing to tokenize");
        return Document::empty();
    };

    let lines = split_lines(source);
    let mut tokenizer = Tokenizer::with_capacity(lines.len());
    for line in &lines {
        tokenizer.push_line(line);
    }
    let document = tokenizer.finish();

    tracing::debug!(
        lines = lines.len(),
        tokens = document.tokens().len(),
        title = ?document.title(),
        "tokenized document"
    );
    document
}

/// Convenience function to tokenize a source that is known to be present
pub fn tokenize_str(source: &str) -> Document {
    tokenize(Some(source))
}

/// Line-by-line tokenizer state
#[derive(Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    title: Option<String>,
    in_pre: bool,
    in_passthru: bool,
    heading_count: u32,
}

impl Tokenizer {
    pub fn with_capacity(lines: usize) -> Self {
        Tokenizer {
            tokens: Vec::with_capacity(lines),
            ..Self::default()
        }
    }

    /// Consume one physical line, emitting exactly one token
    pub fn push_line(&mut self, line: &str) {
        let token = self.next_token(line);
        self.tokens.push(token);
    }

    fn next_token(&mut self, line: &str) -> Token {
        let line_type = classify_line(line.trim());

        match line_type {
            LineType::PreFence { caption } => {
                self.in_pre = !self.in_pre;
                tracing::trace!(open = self.in_pre, "preformatted fence");
                if self.in_pre {
                    Token::PreBegin {
                        caption: (!caption.is_empty()).then(|| caption.to_string()),
                    }
                } else {
                    Token::PreEnd
                }
            }
            LineType::PassthruFence => {
                self.in_passthru = !self.in_passthru;
                tracing::trace!(open = self.in_passthru, "pass-through fence");
                if self.in_passthru {
                    Token::PassthruBegin
                } else {
                    Token::PassthruEnd
                }
            }
            _ if self.in_pre => Token::PreText(line.to_string()),
            _ if self.in_passthru => Token::PassthruText(line.to_string()),
            LineType::Link { url, alt_text } => Token::Link(Link {
                url: url.to_string(),
                alt_text: alt_text.to_string(),
            }),
            LineType::Heading { level, text } => self.heading(level, text),
            LineType::Rule => Token::HorizontalRule,
            LineType::ListItem(text) => Token::ListItem(text.to_string()),
            LineType::Blockquote(text) => Token::Blockquote(text.to_string()),
            LineType::Text => Token::Text(line.to_string()),
        }
    }

    fn heading(&mut self, level: HeadingLevel, text: &str) -> Token {
        self.heading_count += 1;
        if level == HeadingLevel::One && self.title.is_none() {
            self.title = Some(text.to_string());
        }
        Token::Heading(Heading {
            level,
            sequence: self.heading_count,
            text: text.to_string(),
        })
    }

    /// Finish tokenization, returning the token sequence and title
    pub fn finish(self) -> Document {
        Document::new(self.tokens, self.title)
    }
}
