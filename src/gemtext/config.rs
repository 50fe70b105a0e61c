//! Render configuration loader.
//!
//! `defaults/gemtext.default.toml` is embedded into the library so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RenderConfig`].

use crate::gemtext::formats::{HtmlOptions, MarkdownOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/gemtext.default.toml");

/// Top-level render configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub html: HtmlOptions,
    pub markdown: MarkdownOptions,
    pub output: OutputConfig,
}

/// Settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Registry name of the format to render when none is requested
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: "html".to_string(),
        }
    }
}

/// Builds a [`RenderConfig`]: embedded defaults, then a TOML file, then
/// individual settings. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Select the output format by registry name
    pub fn format(self, name: &str) -> Result<Self, ConfigError> {
        self.set("output.format", name)
    }

    /// Render HTML without pass-through blocks and rules
    pub fn strict(self) -> Result<Self, ConfigError> {
        self.set("html.strict", true)
    }

    /// Keep image links as plain links, in HTML and Markdown
    pub fn without_image_expansion(self) -> Result<Self, ConfigError> {
        self.set("html.expand_images", false)?
            .set("markdown.expand_images", false)
    }

    /// Do not wrap expanded HTML images in a link
    pub fn without_image_links(self) -> Result<Self, ConfigError> {
        self.set("html.link_images", false)
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let config: RenderConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "loaded render configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_code_defaults() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn settings_override_defaults() {
        let config = Loader::new()
            .strict()
            .and_then(|loader| loader.format("markdown"))
            .and_then(Loader::without_image_expansion)
            .and_then(Loader::build)
            .expect("config to build");
        assert!(config.html.strict);
        assert!(!config.html.expand_images);
        assert!(!config.markdown.expand_images);
        assert!(config.html.link_images);
        assert_eq!(config.output.format, "markdown");
    }

    #[test]
    fn settings_override_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[html]\nlink_images = true").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .without_image_links()
            .and_then(Loader::build)
            .expect("config to build");
        assert!(!config.html.link_images);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[markdown]\nexpand_images = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(!config.markdown.expand_images);
        assert!(config.html.link_images);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/gemtext.toml").build();
        assert!(result.is_err());
    }
}
