//! # gemtext
//!
//! A tokenizer and renderer for Gemtext, the line-oriented markup of the Gemini
//! protocol.
//!
//! A document is tokenized once into a flat stream of [`Token`]s and can then be
//! rendered any number of times to HTML, canonical Gemtext, Markdown or an HTML
//! table-of-contents fragment, without re-parsing.
//!
//! ```rust,ignore
//! use gemtext::GemParser;
//!
//! let mut parser = GemParser::new();
//! parser.parse(Some("# Hello\n=> gemini://example.org/ Example"));
//!
//! assert_eq!(parser.title(), Some("Hello"));
//! let html = parser.html().unwrap();
//! ```
//!
//! ## Testing
//!
//! Unit tests live next to the code they cover; rendering behaviour across whole
//! documents is covered by the integration tests under `tests/`.

pub mod gemtext;

pub use gemtext::config::{Loader, RenderConfig};
pub use gemtext::encoding::{encode, encode_opt, Ruleset};
pub use gemtext::formats::{
    render_gemini, render_html, render_markdown, render_toc, render_tokens_json, FormatError,
    FormatRegistry, Formatter, HtmlOptions, MarkdownOptions,
};
pub use gemtext::lexing::{tokenize, tokenize_str};
pub use gemtext::parser::{Document, GemParser};
pub use gemtext::token::{heading_id, Heading, HeadingLevel, Link, Token};
