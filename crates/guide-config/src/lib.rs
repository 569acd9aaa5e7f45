//! Guide Hub Configuration
//!
//! Loads the static configuration resource that ships with the extension and
//! derives the read-only [`guide_core::DefaultConfig`] from it.
//!
//! # Example
//!
//! ```rust,ignore
//! use guide_config::AppConfig;
//!
//! let config = AppConfig::load("app.config.json")?;
//! let defaults = config.default_config();
//! let link = config.embed.video_url("clip-1")?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod app_config;
pub mod embed;
pub mod error;
pub mod label;

// Re-exports for convenience
pub use app_config::{AppConfig, ConfigFormat};
pub use embed::{EmbedConfig, DEFAULT_DISPLAY_PARAMS, DEFAULT_EMBED_BASE_URL};
pub use error::{ConfigError, ConfigResult};
pub use label::readable_content_type;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
