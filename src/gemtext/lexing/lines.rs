//! Physical line splitting
//!
//! Any line-break convention separates lines: `\r\n`, `\n`, `\r`, vertical tab,
//! form feed, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR. Trailing empty lines
//! are dropped, so a source made only of line breaks has no lines at all.

use once_cell::sync::Lazy;
use regex::Regex;

/// `\r\n` must stay the first alternative so it is consumed as one break
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").unwrap());

/// Split `source` into physical lines
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(source).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_every_convention() {
        assert_eq!(
            split_lines("a\nb\r\nc\rd\u{2028}e\u{85}f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn test_crlf_is_a_single_break() {
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_trailing_empty_lines_dropped() {
        assert_eq!(split_lines("a\n\n\n"), vec!["a"]);
        assert_eq!(split_lines("a\n  \n"), vec!["a", "  "]);
    }

    #[test]
    fn test_inner_empty_lines_kept() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_no_lines() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\r\n").is_empty());
    }
}
