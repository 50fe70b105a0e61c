//! Token definitions for the Gemtext format
//!
//! A Gemtext document is strictly line based, so the tokenizer produces exactly one
//! token per physical line. Block fences are tokens of their own: the lines between
//! a `PreBegin` and `PreEnd` (or `PassthruBegin` and `PassthruEnd`) become body tokens
//! carrying the raw line.
//!
//! Tokens are immutable once produced. Renderers only ever see them through a shared
//! slice.

use serde::Serialize;
use std::fmt;

/// Prefix of every synthesized heading identifier
pub const HEADING_ID_PREFIX: &str = "jt-heading-";

/// All possible tokens in a Gemtext document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Plain paragraph line, possibly empty, kept untrimmed
    Text(String),
    ListItem(String),
    Blockquote(String),
    PreBegin {
        caption: Option<String>,
    },
    PreText(String),
    PreEnd,
    PassthruBegin,
    PassthruText(String),
    PassthruEnd,
    HorizontalRule,
    Heading(Heading),
    Link(Link),
}

impl Token {
    /// Check if this token is a list item
    pub fn is_list_item(&self) -> bool {
        matches!(self, Token::ListItem(_))
    }

    /// Check if this token is an empty plain text line
    ///
    /// Only a truly empty line counts; a line holding whitespace is not blank here.
    /// List grouping relies on this distinction.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Token::Text(text) if text.is_empty())
    }

    /// Check if this token belongs to a pass-through block (fences included)
    pub fn is_passthru(&self) -> bool {
        matches!(
            self,
            Token::PassthruBegin | Token::PassthruText(_) | Token::PassthruEnd
        )
    }

    /// The heading payload, if this is a heading
    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Token::Heading(heading) => Some(heading),
            _ => None,
        }
    }
}

/// Heading depth. Gemtext only knows three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Numeric level, 1 to 3
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }

    /// The `#` run that introduces a heading of this level
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::One => "#",
            HeadingLevel::Two => "##",
            HeadingLevel::Three => "###",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.depth()
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: HeadingLevel,
    /// Document-wide heading counter, starting at 1 and shared by all levels
    pub sequence: u32,
    pub text: String,
}

impl Heading {
    /// Stable identifier used as the HTML `id` and as the TOC anchor target
    pub fn id(&self) -> String {
        heading_id(self.sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    /// Equal to `url` when the source line carries no alt text
    pub alt_text: String,
}

impl Link {
    /// Whether the source line carried alt text of its own
    pub fn has_alt_text(&self) -> bool {
        self.url != self.alt_text
    }
}

/// Synthesize a heading identifier from its sequence number (lowercase hex)
pub fn heading_id(sequence: u32) -> String {
    format!("{HEADING_ID_PREFIX}{sequence:x}")
}
