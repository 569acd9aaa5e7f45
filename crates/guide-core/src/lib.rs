//! Guide Hub Core
//!
//! Content-type → tutorial guide mapping and the rules for reconciling it.
//!
//! # Core Concepts
//!
//! - [`GuideMapping`]: persisted table of [`GuideEntry`] per content type
//! - [`DefaultConfig`]: read-only defaults from the static resource
//! - [`reconciler`]: pure operations producing the next mapping value
//!
//! # Example
//!
//! ```rust
//! use guide_core::{reconciler, DefaultConfig, NewGuide};
//!
//! let defaults: DefaultConfig = [("blogPost", "vid-1")].into_iter().collect();
//! let mapping = reconciler::initialize(None, &defaults);
//!
//! let batch = vec![NewGuide::new("landingPage", "vid-2")];
//! assert!(reconciler::validate_no_collision(&mapping, &["landingPage"]).is_empty());
//! let created = reconciler::bulk_create(&mapping, &batch).unwrap();
//!
//! let preview = reconciler::sync(&created.mapping, &defaults);
//! assert_eq!(preview.get("blogPost").and_then(|e| e.resolve()), Some("vid-1"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod reconciler;
pub mod types;

// Re-exports for convenience
pub use error::{CollisionError, ReconcileResult};
pub use reconciler::BulkCreated;
pub use types::{ContentTypeId, DefaultConfig, GuideEntry, GuideMapping, NewGuide};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with guide mappings
    pub use crate::error::CollisionError;
    pub use crate::reconciler::{self, BulkCreated};
    pub use crate::types::{ContentTypeId, DefaultConfig, GuideEntry, GuideMapping, NewGuide};
}
