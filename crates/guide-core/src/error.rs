//! Error types for guide reconciliation
//!
//! Batch creation is the only operation that can be rejected. Every other
//! reconciliation step is total.

use crate::types::ContentTypeId;

/// Create batch rejected because some content types already have guides
///
/// Carries every colliding identifier so all conflicts can be shown at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("content types already in use: {}", .conflicts.join(", "))]
pub struct CollisionError {
    /// Colliding content types, in batch order
    pub conflicts: Vec<ContentTypeId>,
}

impl CollisionError {
    /// Create collision error
    #[inline]
    #[must_use]
    pub fn new(conflicts: Vec<ContentTypeId>) -> Self {
        Self { conflicts }
    }
}

/// Result type alias for reconciliation operations
pub type ReconcileResult<T> = Result<T, CollisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_error_display() {
        let err = CollisionError::new(vec!["blogPost".into(), "page".into()]);
        assert_eq!(
            err.to_string(),
            "content types already in use: blogPost, page"
        );
    }
}
