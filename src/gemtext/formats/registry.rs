//! Format registry for token stream rendering
//!
//! This module provides a pluggable registry system for output formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::gemtext::config::RenderConfig;
use crate::gemtext::formats::{
    GeminiFormatter, HtmlFormatter, HtmlOptions, MarkdownFormatter, TocFormatter, TokensFormatter,
};
use crate::gemtext::token::Token;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for token stream formatters
///
/// Implementors provide a way to render a token stream to a string representation.
/// Rendering an empty token stream yields `Ok(None)`.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Render a token stream in this format
    fn render(&self, tokens: &[Token]) -> Result<Option<String>, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters
///
/// Provides a centralized registry for all available output formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render a token stream using the specified format
    pub fn render(&self, tokens: &[Token], format: &str) -> Result<Option<String>, FormatError> {
        let formatter = self.get(format)?;
        tracing::trace!(format, tokens = tokens.len(), "rendering");
        formatter.render(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over (name, description) pairs, sorted by name
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self.formatters[&name].description().to_string();
                (name, description)
            })
            .collect()
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        Self::with_options(&RenderConfig::default())
    }

    /// Create a registry whose formatters use the configured options
    ///
    /// `html-strict` always renders strictly; every other option is taken from the
    /// configuration.
    pub fn with_options(config: &RenderConfig) -> Self {
        let mut registry = Self::new();

        registry.register(HtmlFormatter::new(HtmlOptions {
            strict: false,
            ..config.html
        }));
        registry.register(HtmlFormatter::new(HtmlOptions {
            strict: true,
            ..config.html
        }));
        registry.register(GeminiFormatter);
        registry.register(MarkdownFormatter::new(config.markdown));
        registry.register(TocFormatter);
        registry.register(TokensFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
