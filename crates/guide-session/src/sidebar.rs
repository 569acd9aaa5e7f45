//! Sidebar guide lookup
//!
//! Runs next to the entry editor. Looks up the guide for the content type
//! being edited in the installed parameters and links to the video.

use crate::error::SessionResult;
use crate::host::InstallationParameters;
use guide_config::EmbedConfig;
use guide_core::{reconciler, ContentTypeId};
use url::Url;

/// What the sidebar shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarView {
    /// No guide for this content type
    Unavailable,
    /// Guide found, waiting for the user to open it
    Ready {
        /// Resolved guide id
        video_id: String,
    },
    /// Guide opened
    Playing {
        /// Embed link for the video
        url: Url,
    },
}

/// Sidebar state for one open entry
#[derive(Debug, Clone)]
pub struct Sidebar {
    content_type: ContentTypeId,
    video_id: Option<String>,
    embed: EmbedConfig,
    playing: bool,
}

impl Sidebar {
    /// Resolve the guide for `content_type` from installed parameters
    ///
    /// An empty guide id counts as no guide.
    #[must_use]
    pub fn new(
        params: &InstallationParameters,
        content_type: impl Into<ContentTypeId>,
        embed: EmbedConfig,
    ) -> Self {
        let content_type = content_type.into();
        let video_id = params
            .guide_for(&content_type)
            .and_then(reconciler::resolve)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        tracing::debug!(%content_type, found = video_id.is_some(), "sidebar guide lookup");

        Self {
            content_type,
            video_id,
            embed,
            playing: false,
        }
    }

    /// Content type being edited
    #[inline]
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Resolved guide id
    #[inline]
    #[must_use]
    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    /// Embed link for the resolved guide
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the embed base URL is unusable.
    pub fn embed_url(&self) -> SessionResult<Option<Url>> {
        self.video_id
            .as_deref()
            .map(|id| self.embed.video_url(id))
            .transpose()
            .map_err(Into::into)
    }

    /// Open the guide; does nothing when there is none
    ///
    /// Returns whether the sidebar is now playing.
    pub fn play(&mut self) -> bool {
        self.playing = self.video_id.is_some();
        self.playing
    }

    /// Current view
    ///
    /// # Errors
    /// Returns `SessionError::Config` if the embed base URL is unusable.
    pub fn view(&self) -> SessionResult<SidebarView> {
        let Some(video_id) = self.video_id.as_deref() else {
            return Ok(SidebarView::Unavailable);
        };

        if !self.playing {
            return Ok(SidebarView::Ready {
                video_id: video_id.to_owned(),
            });
        }

        Ok(SidebarView::Playing {
            url: self.embed.video_url(video_id)?,
        })
    }
}
