//! JSON dump of the token stream, for inspecting what the tokenizer produced

use crate::gemtext::formats::registry::{FormatError, Formatter};
use crate::gemtext::token::Token;

/// Serialize tokens as a pretty-printed JSON array
///
/// Returns `Ok(None)` when there are no tokens.
pub fn render_tokens_json(tokens: &[Token]) -> Result<Option<String>, FormatError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string_pretty(tokens)?))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn description(&self) -> &str {
        "Token stream as JSON"
    }

    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError> {
        render_tokens_json(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemtext::lexing::tokenize_str;
    use serde_json::{json, Value};

    #[test]
    fn test_empty_tokens_render_nothing() {
        assert!(render_tokens_json(&[]).unwrap().is_none());
    }

    #[test]
    fn test_tokens_as_json() {
        let document = tokenize_str("# Title\n=> /a About\n```\nx\n```");
        let rendered = render_tokens_json(document.tokens()).unwrap().unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value,
            json!([
                {"heading": {"level": 1, "sequence": 1, "text": "Title"}},
                {"link": {"url": "/a", "alt_text": "About"}},
                {"pre_begin": {"caption": null}},
                {"pre_text": "x"},
                "pre_end"
            ])
        );
    }
}
