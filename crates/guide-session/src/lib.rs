//! Guide Hub Session
//!
//! Drives the configuration screen and the sidebar over a host CMS:
//! - Loads installation parameters from the host, or seeds them from defaults
//! - Applies create / edit / delete commands to a single working mapping
//! - Previews a sync against the defaults, then accepts or rejects it
//! - Hands the final mapping back to the host on save
//! - Resolves the guide for the entry being edited in the sidebar
//!
//! # Example
//!
//! ```rust,ignore
//! use guide_session::{ConfigSession, HostPlatform};
//! use guide_config::AppConfig;
//!
//! # async fn example(host: impl HostPlatform) -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load("app.config.json")?;
//! let mut session = ConfigSession::open(host, config.default_config()).await?;
//!
//! session.propose_sync();
//! session.accept_sync();
//!
//! session.save().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod host;
pub mod session;
pub mod sidebar;

// Re-exports for convenience
pub use error::{HostError, SessionError, SessionResult};
pub use host::{ConfigurePayload, HostPlatform, InstallationParameters};
pub use session::{ConfigSession, GuideRow};
pub use sidebar::{Sidebar, SidebarView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with configuration sessions
    pub use crate::{
        ConfigSession, ConfigurePayload, GuideRow, HostError, HostPlatform,
        InstallationParameters, SessionError, Sidebar, SidebarView,
    };
    pub use guide_core::prelude::*;
}
