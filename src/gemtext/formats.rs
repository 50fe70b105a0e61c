//! Output format implementations for token streams
//!
//! This module contains the renderers that turn a token stream into:
//! - HTML (html)
//! - canonical Gemtext (gemini)
//! - Markdown (markdown)
//! - an HTML table of contents (toc)
//! - a JSON dump of the tokens themselves (tokens)
//!
//! Every renderer is a pure function over a borrowed token slice and returns
//! `None` when there are no tokens, so callers can tell "nothing to render" apart
//! from "rendered to nothing".

pub mod gemini;
pub mod html;
pub mod markdown;
pub mod registry;
pub mod toc;
pub mod tokens;

pub use gemini::{render_gemini, GeminiFormatter};
pub use html::{render_html, HtmlFormatter, HtmlOptions};
pub use markdown::{render_markdown, MarkdownFormatter, MarkdownOptions};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use toc::{render_toc, TocFormatter};
pub use tokens::{render_tokens_json, TokensFormatter};

use once_cell::sync::Lazy;
use regex::Regex;

/// Link targets rendered as images when image expansion is on
static IMAGE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S*\.(?i:gif|jpeg|jpg|jfif|png)$").unwrap());

/// Check if a link URL points to an image (by extension, case-insensitive)
pub fn is_image_url(url: &str) -> bool {
    IMAGE_URL.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        for url in [
            "https://example.org/cat.gif",
            "cat.jpeg",
            "/img/cat.jpg",
            "cat.jfif",
            "gemini://example.org/CAT.PNG",
            "cat.JpG",
        ] {
            assert!(is_image_url(url), "{url} should be an image");
        }
    }

    #[test]
    fn test_non_image_urls() {
        for url in [
            "https://example.org/",
            "cat.png.html",
            "cat.svg",
            "catpng",
            "cat .png",
        ] {
            assert!(!is_image_url(url), "{url} should not be an image");
        }
    }
}
