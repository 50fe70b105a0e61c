//! Line Classification
//!
//! Core classification logic for determining line types from the trimmed line.
//! Classification is context free: deciding whether a line is a block body line
//! (which depends on the open pre / pass-through block) is up to the tokenizer.

use crate::gemtext::lexing::markers::{leading_marker, Marker};
use crate::gemtext::token::HeadingLevel;

/// The type of a trimmed line, borrowing its payload from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    /// Preformatted fence, with the (possibly empty) text following the backticks
    PreFence { caption: &'a str },
    PassthruFence,
    Link {
        url: &'a str,
        alt_text: &'a str,
    },
    Heading {
        level: HeadingLevel,
        text: &'a str,
    },
    Rule,
    ListItem(&'a str),
    Blockquote(&'a str),
    Text,
}

/// Determine the type of a trimmed line.
///
/// Classification follows this specific order (important for correctness):
/// 1. Preformatted fence (three backticks, optional caption)
/// 2. Pass-through fence (exactly `+++`)
/// 3. Link (`=>`, URL, optional alt text)
/// 4. Headings (`###`, `##`, `#` followed by whitespace)
/// 5. Horizontal rule (exactly `===`)
/// 6. List item (`*` followed by whitespace)
/// 7. Blockquote (`>`)
/// 8. Default to text
pub fn classify_line(line: &str) -> LineType<'_> {
    let Some((marker, rest)) = leading_marker(line) else {
        return LineType::Text;
    };

    match marker {
        Marker::PreFence => LineType::PreFence { caption: rest },
        Marker::PassthruFence if rest.is_empty() => LineType::PassthruFence,
        Marker::Link => classify_link(rest),
        Marker::Heading1 => classify_heading(HeadingLevel::One, rest),
        Marker::Heading2 => classify_heading(HeadingLevel::Two, rest),
        Marker::Heading3 => classify_heading(HeadingLevel::Three, rest),
        Marker::Rule if rest.is_empty() => LineType::Rule,
        Marker::Bullet => match after_whitespace(rest) {
            Some(text) => LineType::ListItem(text),
            None => LineType::Text,
        },
        Marker::Quote => LineType::Blockquote(rest.trim_start()),
        _ => LineType::Text,
    }
}

/// `=>` is followed by optional whitespace, a URL and optional alt text
fn classify_link(rest: &str) -> LineType<'_> {
    let rest = rest.trim_start();
    let (url, alt_text) = match rest.find(char::is_whitespace) {
        Some(end) => (&rest[..end], rest[end..].trim_start()),
        None => (rest, ""),
    };

    if url.is_empty() {
        return LineType::Text;
    }

    LineType::Link {
        url,
        alt_text: if alt_text.is_empty() { url } else { alt_text },
    }
}

fn classify_heading(level: HeadingLevel, rest: &str) -> LineType<'_> {
    match after_whitespace(rest) {
        Some(text) => LineType::Heading { level, text },
        None => LineType::Text,
    }
}

/// The text after a mandatory whitespace run, or `None` if there is no whitespace
fn after_whitespace(rest: &str) -> Option<&str> {
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_pre_fence() {
        assert_eq!(classify_line("```"), LineType::PreFence { caption: "" });
        assert_eq!(
            classify_line("```Pre examples"),
            LineType::PreFence {
                caption: "Pre examples"
            }
        );
    }

    #[test]
    fn test_classify_passthru_fence() {
        assert_eq!(classify_line("+++"), LineType::PassthruFence);
        assert_eq!(classify_line("+++ more"), LineType::Text);
    }

    #[test]
    fn test_classify_link() {
        assert_eq!(
            classify_line("=> https://example.org/ An example"),
            LineType::Link {
                url: "https://example.org/",
                alt_text: "An example"
            }
        );
        assert_eq!(
            classify_line("=>https://example.org/"),
            LineType::Link {
                url: "https://example.org/",
                alt_text: "https://example.org/"
            }
        );
        assert_eq!(
            classify_line("=>  /a\t  spaced   alt"),
            LineType::Link {
                url: "/a",
                alt_text: "spaced   alt"
            }
        );
        assert_eq!(classify_line("=>"), LineType::Text);
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            classify_line("# One"),
            LineType::Heading {
                level: HeadingLevel::One,
                text: "One"
            }
        );
        assert_eq!(
            classify_line("##   Two"),
            LineType::Heading {
                level: HeadingLevel::Two,
                text: "Two"
            }
        );
        assert_eq!(
            classify_line("###\tThree"),
            LineType::Heading {
                level: HeadingLevel::Three,
                text: "Three"
            }
        );
    }

    #[test]
    fn test_heading_requires_whitespace() {
        assert_eq!(classify_line("#hashtag"), LineType::Text);
        assert_eq!(classify_line("#### Four"), LineType::Text);
        assert_eq!(classify_line("#"), LineType::Text);
    }

    #[test]
    fn test_classify_rule() {
        assert_eq!(classify_line("==="), LineType::Rule);
        assert_eq!(classify_line("===="), LineType::Text);
    }

    #[test]
    fn test_classify_list_item() {
        assert_eq!(classify_line("* Item"), LineType::ListItem("Item"));
        assert_eq!(classify_line("*emphasis*"), LineType::Text);
    }

    #[test]
    fn test_classify_blockquote() {
        assert_eq!(classify_line("> Quoted"), LineType::Blockquote("Quoted"));
        assert_eq!(classify_line(">Quoted"), LineType::Blockquote("Quoted"));
        assert_eq!(classify_line(">"), LineType::Blockquote(""));
        assert_eq!(classify_line(">> nested"), LineType::Blockquote("> nested"));
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify_line("Just a line"), LineType::Text);
        assert_eq!(classify_line(""), LineType::Text);
        assert_eq!(classify_line("==> arrow"), LineType::Text);
    }
}
