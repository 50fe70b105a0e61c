//! Line marker definitions for the Gemtext format
//!
//! Every Gemtext line type is introduced by a short marker at the start of the
//! (trimmed) line. The markers are defined using the logos derive macro; the lexer
//! is only ever run for a single token, after which the classifier inspects the
//! remainder of the line.
use logos::Logos;

/// All possible leading markers of a Gemtext line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Marker {
    // Block fences
    #[token("```")]
    PreFence,
    #[token("+++")]
    PassthruFence,

    #[token("=>")]
    Link,

    // Headings (logos picks the longest run of `#`)
    #[token("###")]
    Heading3,
    #[token("##")]
    Heading2,
    #[token("#")]
    Heading1,

    #[token("===")]
    Rule,

    #[token("*")]
    Bullet,

    #[token(">")]
    Quote,
}

/// Lex the leading marker of `line` and return it with the rest of the line
///
/// Returns `None` when the line does not start with a known marker.
pub fn leading_marker(line: &str) -> Option<(Marker, &str)> {
    let mut lexer = Marker::lexer(line);
    match lexer.next() {
        Some(Ok(marker)) => Some((marker, lexer.remainder())),
        _ => None,
    }
}
