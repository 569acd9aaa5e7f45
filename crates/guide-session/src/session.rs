//! Configuration screen session
//!
//! Owns the single working [`GuideMapping`] for the lifetime of the screen.
//! The presentation layer reads through accessors and changes state only by
//! calling the command methods below. Every command goes through
//! [`guide_core::reconciler`] and replaces the working value with the result.

use crate::error::SessionResult;
use crate::host::{ConfigurePayload, HostPlatform, InstallationParameters};
use guide_config::readable_content_type;
use guide_core::{reconciler, ContentTypeId, DefaultConfig, GuideMapping, NewGuide};
use std::sync::Arc;

/// Read-only listing row for one content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRow {
    /// Content type id
    pub content_type: ContentTypeId,
    /// Human readable content type
    pub label: String,
    /// Default guide, if set
    pub default_guide_id: Option<String>,
    /// Override guide, if set
    pub guide_id: Option<String>,
}

impl GuideRow {
    /// Rows for every entry of a mapping, in content type order
    #[must_use]
    pub fn from_mapping(mapping: &GuideMapping) -> Vec<Self> {
        mapping
            .iter()
            .map(|(content_type, entry)| Self {
                content_type: content_type.clone(),
                label: readable_content_type(content_type),
                default_guide_id: entry.default_guide_id.clone(),
                guide_id: entry.guide_id.clone(),
            })
            .collect()
    }
}

/// Configuration session over a host platform
#[derive(Debug)]
pub struct ConfigSession<H> {
    /// Host collaborator
    host: H,
    /// Static defaults, shared and never mutated
    defaults: Arc<DefaultConfig>,
    /// Authoritative working mapping
    mapping: GuideMapping,
    /// Sync candidate awaiting accept/reject
    sync_preview: Option<GuideMapping>,
    /// Content types from the last successful create, until dismissed
    created_guides: Option<Vec<ContentTypeId>>,
}

impl<H: HostPlatform> ConfigSession<H> {
    /// Open the session
    ///
    /// Loads persisted parameters, falls back to `defaults` when there are
    /// none, then tells the host the screen is ready.
    ///
    /// # Errors
    /// Returns `SessionError::Host` if the parameters cannot be loaded.
    pub async fn open(host: H, defaults: Arc<DefaultConfig>) -> SessionResult<Self> {
        let persisted = host
            .load_persisted_state()
            .await?
            .and_then(|params| params.content_type_guides);
        let restored = persisted.as_ref().is_some_and(|m| !m.is_empty());

        let mapping = reconciler::initialize(persisted, &defaults);
        tracing::info!(
            content_types = mapping.len(),
            restored,
            "opened guide configuration"
        );

        host.set_ready().await;

        Ok(Self {
            host,
            defaults,
            mapping,
            sync_preview: None,
            created_guides: None,
        })
    }

    /// Host collaborator
    #[inline]
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Static defaults
    #[inline]
    #[must_use]
    pub fn defaults(&self) -> &DefaultConfig {
        &self.defaults
    }

    /// Current working mapping
    #[inline]
    #[must_use]
    pub fn mapping(&self) -> &GuideMapping {
        &self.mapping
    }

    /// Listing rows for the working mapping
    #[must_use]
    pub fn rows(&self) -> Vec<GuideRow> {
        GuideRow::from_mapping(&self.mapping)
    }

    /// Insert or overwrite one content type's guides
    pub fn update_guide(
        &mut self,
        content_type: impl Into<ContentTypeId>,
        default_guide_id: Option<String>,
        guide_id: Option<String>,
    ) {
        let content_type = content_type.into();
        tracing::debug!(%content_type, "update guide");
        self.replace(reconciler::upsert(
            &self.mapping,
            content_type,
            default_guide_id,
            guide_id,
        ));
    }

    /// Change only the override, keeping the current default
    ///
    /// A blank override clears it. Only existing entries are edited: for a
    /// content type without an entry nothing changes and `false` is returned.
    pub fn set_override(&mut self, content_type: &str, guide_id: Option<String>) -> bool {
        let Some(current) = self.mapping.get(content_type) else {
            tracing::debug!(%content_type, "override for unknown content type ignored");
            return false;
        };
        let default_guide_id = current.default_guide_id.clone();
        let guide_id = guide_id.filter(|id| !id.trim().is_empty());
        self.update_guide(content_type, default_guide_id, guide_id);
        true
    }

    /// Remove one content type; absent content types are ignored
    pub fn delete_guide(&mut self, content_type: &str) {
        tracing::debug!(%content_type, "delete guide");
        self.replace(reconciler::delete(&self.mapping, content_type));
    }

    /// Content types from `candidates` that already have guides
    #[must_use]
    pub fn validate_new<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<ContentTypeId> {
        reconciler::validate_no_collision(&self.mapping, candidates)
    }

    /// Create guides for a batch of new content types
    ///
    /// On success the created content types are kept for
    /// [`created_guides`](Self::created_guides) and returned.
    ///
    /// # Errors
    /// Returns `SessionError::Collision` listing every content type that
    /// already has a guide. The working mapping is left untouched.
    pub fn create_guides(&mut self, batch: &[NewGuide]) -> SessionResult<&[ContentTypeId]> {
        let created = match reconciler::bulk_create(&self.mapping, batch) {
            Ok(created) => created,
            Err(err) => {
                tracing::warn!(conflicts = ?err.conflicts, "create batch rejected");
                return Err(err.into());
            }
        };

        tracing::info!(added = created.added.len(), "created guides");
        self.replace(created.mapping);
        let added: &[ContentTypeId] = self.created_guides.insert(created.added);
        Ok(added)
    }

    /// Content types from the last successful create
    #[inline]
    #[must_use]
    pub fn created_guides(&self) -> Option<&[ContentTypeId]> {
        self.created_guides.as_deref()
    }

    /// Clear the created notice
    #[inline]
    pub fn dismiss_created_notice(&mut self) {
        self.created_guides = None;
    }

    /// Compute a sync candidate against the defaults
    ///
    /// The working mapping is not touched until [`accept_sync`](Self::accept_sync).
    pub fn propose_sync(&mut self) -> &GuideMapping {
        let candidate = reconciler::sync(&self.mapping, &self.defaults);
        tracing::debug!(content_types = candidate.len(), "proposed sync");
        self.sync_preview.insert(candidate)
    }

    /// Pending sync candidate, if any
    #[inline]
    #[must_use]
    pub fn pending_sync(&self) -> Option<&GuideMapping> {
        self.sync_preview.as_ref()
    }

    /// Replace the working mapping with the pending candidate
    ///
    /// Returns `false` and changes nothing if no candidate is pending.
    pub fn accept_sync(&mut self) -> bool {
        match self.sync_preview.take() {
            Some(candidate) => {
                tracing::info!(content_types = candidate.len(), "accepted sync");
                self.mapping = candidate;
                true
            }
            None => false,
        }
    }

    /// Drop the pending candidate without touching the working mapping
    ///
    /// Returns whether a candidate was pending.
    pub fn reject_sync(&mut self) -> bool {
        let discarded = self.sync_preview.take().is_some();
        if discarded {
            tracing::debug!("rejected sync");
        }
        discarded
    }

    /// Build the payload for the host's configure hook
    ///
    /// # Errors
    /// Returns `SessionError::Host` if the host state cannot be read.
    pub async fn configure(&self) -> SessionResult<ConfigurePayload> {
        let target_state = self.host.current_state().await?;
        Ok(ConfigurePayload {
            parameters: InstallationParameters::new(self.mapping.clone()),
            target_state,
        })
    }

    /// Build the configure payload and commit it through the host
    ///
    /// # Errors
    /// Returns `SessionError::Host` if reading state or committing fails.
    pub async fn save(&self) -> SessionResult<ConfigurePayload> {
        let payload = self.configure().await?;
        self.host.commit_state(payload.clone()).await?;
        tracing::info!(content_types = self.mapping.len(), "saved guide configuration");
        Ok(payload)
    }

    /// Install a new working mapping
    ///
    /// A pending sync candidate was computed from the old mapping and is
    /// dropped.
    fn replace(&mut self, next: GuideMapping) {
        if self.sync_preview.take().is_some() {
            tracing::debug!("discarded stale sync preview");
        }
        self.mapping = next;
    }
}
