//! Host platform boundary
//!
//! The host CMS owns persistence and lifecycle. It is handed to the session
//! explicitly as a [`HostPlatform`] implementation.

use crate::error::HostError;
use async_trait::async_trait;
use guide_core::{GuideEntry, GuideMapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Installation parameters as stored by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationParameters {
    /// Guide per content type, absent before the first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type_guides: Option<GuideMapping>,
}

impl InstallationParameters {
    /// Create parameters holding a mapping
    #[inline]
    #[must_use]
    pub fn new(mapping: GuideMapping) -> Self {
        Self {
            content_type_guides: Some(mapping),
        }
    }

    /// Entry for a content type, if any
    #[inline]
    #[must_use]
    pub fn guide_for(&self, content_type: &str) -> Option<&GuideEntry> {
        self.content_type_guides
            .as_ref()
            .and_then(|mapping| mapping.get(content_type))
    }
}

/// Result of the host's configure hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePayload {
    /// Parameters to persist
    pub parameters: InstallationParameters,
    /// Host-defined target state, passed through untouched
    pub target_state: Option<Value>,
}

/// Host platform collaborator
///
/// Implementations perform all I/O. The session only awaits them and works
/// on the returned values.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Read previously saved installation parameters
    async fn load_persisted_state(&self) -> Result<Option<InstallationParameters>, HostError>;

    /// Read the host's current target state
    async fn current_state(&self) -> Result<Option<Value>, HostError>;

    /// Persist the configure payload
    async fn commit_state(&self, payload: ConfigurePayload) -> Result<(), HostError>;

    /// Signal that the configuration screen finished loading
    async fn set_ready(&self) {}
}
