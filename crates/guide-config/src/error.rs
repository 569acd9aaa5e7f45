//! Error types for configuration loading

use std::path::PathBuf;

/// Errors while loading the static configuration resource
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resource is not valid JSON for the expected shape
    #[error("invalid json config: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Resource is not valid YAML for the expected shape
    #[error("invalid yaml config: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    /// File extension has no known format
    #[error("unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    /// Embed base URL cannot be used to build video links
    #[error("invalid embed url '{url}': {reason}")]
    InvalidEmbedUrl { url: String, reason: String },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create invalid embed url error
    pub fn invalid_embed_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEmbedUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
