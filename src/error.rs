//! Unified error handling for the Matrix plugin.
//!
//! A single error enum for the service surface, with stable error codes
//! for log labeling.

use thiserror::Error;

/// Errors surfaced by the Matrix service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The caller lacks the capability required for a gated mutation.
    #[error("permission denied: {0} required")]
    PermissionDenied(&'static str),

    /// The configured homeserver URL cannot be parsed into a hostname.
    #[error("malformed homeserver url {url:?}: {reason}")]
    MalformedHomeserverUrl { url: String, reason: String },
}

impl MatrixError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "permission_denied",
            Self::MalformedHomeserverUrl { .. } => "malformed_homeserver_url",
        }
    }
}

/// Result type for Matrix service operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
