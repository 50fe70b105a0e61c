//! Character escaping for the output formats
//!
//! Three fixed rulesets are supported:
//!
//! - [`Ruleset::HtmlMinimal`]: the five markup-significant characters
//!   (`&`, `<`, `>`, `"`, `'`).
//! - [`Ruleset::HtmlFull`]: the minimal set plus the HTML 4 named entities for
//!   typographic symbols and non-ASCII letters.
//! - [`Ruleset::Markdown`]: backslash escapes for Markdown metacharacters.
//!
//! The lookup tables are built once, on first use, and never written afterwards.
//! Encoding borrows the input unchanged when no character needs escaping.

mod entities;

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// The escaping ruleset to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruleset {
    HtmlMinimal,
    HtmlFull,
    Markdown,
}

const MARKUP_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

// https://www.markdownguide.org/basic-syntax/#escaping-characters
const MARKDOWN_ESCAPES: &[(char, &str)] = &[
    ('\\', "\\\\"),
    ('`', "\\`"),
    ('*', "\\*"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('[', "\\["),
    (']', "\\]"),
    ('<', "\\<"),
    ('>', "\\>"),
    ('(', "\\("),
    (')', "\\)"),
    ('#', "\\#"),
    ('+', "\\+"),
    ('-', "\\-"),
];

type EscapeTable = HashMap<char, &'static str>;

static HTML_MINIMAL: Lazy<EscapeTable> = Lazy::new(|| MARKUP_ENTITIES.iter().copied().collect());

static HTML_FULL: Lazy<EscapeTable> = Lazy::new(|| {
    MARKUP_ENTITIES
        .iter()
        .chain(entities::NAMED_ENTITIES)
        .copied()
        .collect()
});

static MARKDOWN: Lazy<EscapeTable> = Lazy::new(|| MARKDOWN_ESCAPES.iter().copied().collect());

impl Ruleset {
    fn table(self) -> &'static EscapeTable {
        match self {
            Ruleset::HtmlMinimal => &*HTML_MINIMAL,
            Ruleset::HtmlFull => &*HTML_FULL,
            Ruleset::Markdown => &*MARKDOWN,
        }
    }

    /// The replacement for `c`, if this ruleset escapes it
    pub fn escape(self, c: char) -> Option<&'static str> {
        self.table().get(&c).copied()
    }
}

/// Escape `text` under `ruleset`
///
/// Returns the input borrowed when nothing needed escaping.
pub fn encode(text: &str, ruleset: Ruleset) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| ruleset.escape(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + 16);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match ruleset.escape(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Absent-preserving form of [`encode`]
pub fn encode_opt(text: Option<&str>, ruleset: Ruleset) -> Option<Cow<'_, str>> {
    text.map(|text| encode(text, ruleset))
}
