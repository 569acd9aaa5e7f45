//! Tutorial video embed settings
//!
//! The video host is external. We only know how to turn a guide id into the
//! link the sidebar embeds.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default tutorial host
pub const DEFAULT_EMBED_BASE_URL: &str = "https://demo.arcade.software/";

/// Default display parameters appended to every video link
pub const DEFAULT_DISPLAY_PARAMS: &str =
    "embed&embed_mobile=inline&embed_desktop=inline&show_copy_link=true";

/// Where tutorial videos live and how they are displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Host base URL, the guide id is appended as a path segment
    pub base_url: String,
    /// Raw query string, flags without values are allowed
    pub display_params: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBED_BASE_URL.to_string(),
            display_params: DEFAULT_DISPLAY_PARAMS.to_string(),
        }
    }
}

impl EmbedConfig {
    /// Set host base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set display parameters
    #[inline]
    #[must_use]
    pub fn with_display_params(mut self, display_params: impl Into<String>) -> Self {
        self.display_params = display_params.into();
        self
    }

    /// Check the base URL can carry a video id
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEmbedUrl`] if the URL does not parse or
    /// cannot have path segments.
    pub fn validate(&self) -> ConfigResult<()> {
        self.base().map(|_| ())
    }

    /// Link to the embedded video for a guide id
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEmbedUrl`] if the base URL is unusable.
    pub fn video_url(&self, guide_id: &str) -> ConfigResult<Url> {
        let mut url = self.base()?;
        url.path_segments_mut()
            .map_err(|()| ConfigError::invalid_embed_url(&self.base_url, "cannot be a base"))?
            .pop_if_empty()
            .push(guide_id);

        if self.display_params.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.display_params));
        }
        Ok(url)
    }

    fn base(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid_embed_url(&self.base_url, e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::invalid_embed_url(
                &self.base_url,
                "cannot be a base",
            ));
        }
        Ok(url)
    }
}
