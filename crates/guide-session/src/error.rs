//! Error types for configuration sessions
//!
//! Host failures are reported as they come; the session does not retry.

use guide_config::ConfigError;
use guide_core::CollisionError;

/// Failures reported by the host platform
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Persisted parameters could not be read
    #[error("failed to load installation parameters: {0}")]
    Load(String),

    /// Current host state could not be read
    #[error("failed to read host state: {0}")]
    State(String),

    /// Parameters could not be committed
    #[error("failed to commit installation parameters: {0}")]
    Commit(String),
}

/// Main session error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Create batch collides with existing guides
    #[error("create rejected: {0}")]
    Collision(#[from] CollisionError),

    /// Host platform failed
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// Configuration resource is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Colliding content types, if this is a rejected batch
    #[inline]
    #[must_use]
    pub fn conflicts(&self) -> Option<&[String]> {
        match self {
            Self::Collision(err) => Some(err.conflicts.as_slice()),
            _ => None,
        }
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
