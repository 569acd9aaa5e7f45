//! Static application configuration
//!
//! Shipped alongside the extension and loaded once at startup. Source of
//! truth for default guide ids; never written back.

use crate::embed::EmbedConfig;
use crate::error::{ConfigError, ConfigResult};
use guide_core::DefaultConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Serialization format of the configuration resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(extension)),
        }
    }
}

/// Application configuration resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Locale used when the host does not provide one
    pub default_locale: String,
    /// Host environment used during development
    pub development_environment: String,
    /// Default guide per content type
    pub content_type_guides: DefaultConfig,
    /// UI labels by key
    pub labels: BTreeMap<String, String>,
    /// Tutorial video embed settings
    pub embed: EmbedConfig,
}

impl AppConfig {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or has the wrong shape
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::InvalidJson)?;
        config.embed.validate()?;
        Ok(config)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or has the wrong shape
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(ConfigError::InvalidYaml)?;
        config.embed.validate()?;
        Ok(config)
    }

    /// Parse content in the given format
    ///
    /// # Errors
    /// Returns error if content is invalid for the format
    pub fn parse(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        match format {
            ConfigFormat::Json => Self::from_json(content),
            ConfigFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Load from file, format chosen by extension
    ///
    /// # Errors
    /// - `ConfigError::UnsupportedFormat` if extension is unknown
    /// - `ConfigError::Io` if file read fails
    /// - `ConfigError::InvalidJson` / `ConfigError::InvalidYaml` on bad content
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;

        let config = Self::parse(&content, format)?;
        tracing::info!(
            path = %path.display(),
            content_types = config.content_type_guides.len(),
            "loaded guide configuration"
        );
        Ok(config)
    }

    /// Set default guides
    #[inline]
    #[must_use]
    pub fn with_content_type_guides(mut self, guides: DefaultConfig) -> Self {
        self.content_type_guides = guides;
        self
    }

    /// Set embed settings
    #[inline]
    #[must_use]
    pub fn with_embed(mut self, embed: EmbedConfig) -> Self {
        self.embed = embed;
        self
    }

    /// Shared handle to the default guides
    #[inline]
    #[must_use]
    pub fn default_config(&self) -> Arc<DefaultConfig> {
        Arc::new(self.content_type_guides.clone())
    }

    /// Look up a UI label
    #[inline]
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}
