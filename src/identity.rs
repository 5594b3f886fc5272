//! Identity data model and Matrix-ID derivation.
//!
//! Matrix does not own identity here: local (Citadel) users are the source of
//! truth, and this module defines the record written each time one of them is
//! mirrored to a Matrix identifier.

use crate::error::MatrixError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A local user descriptor carried by lifecycle hooks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    /// Local user identifier.
    pub id: String,
    /// Local username, reused as the Matrix localpart.
    pub name: String,
}

/// Sync state of an identity mapping.
///
/// Only `Active` exists today; no deactivation path is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Active,
}

/// A recorded local-to-Matrix identity mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdentityMap {
    /// Local user identifier this record belongs to.
    pub citadel_user_id: String,
    /// Derived Matrix identifier, `@{name}:{homeserver-host}`.
    pub matrix_user_id: String,
    /// When this record was last written.
    pub synced_at: DateTime<Utc>,
    pub status: SyncStatus,
}

/// Outcome of a sync call.
///
/// `Skipped` is an expected idle state (no homeserver configured), not an
/// error, and stays distinguishable from a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A mapping was derived and recorded.
    Synced(IdentityMap),
    /// Nothing was done; the reason says why.
    Skipped { reason: &'static str },
}

/// Derive a Matrix user ID of the form `@{name}:{host}` from a homeserver URL.
///
/// The host part is the hostname component of the parsed URL. URLs that fail
/// to parse, or parse without a hostname (e.g. `unix:` paths), are malformed
/// for this purpose.
pub fn derive_matrix_user_id(name: &str, homeserver: &str) -> Result<String, MatrixError> {
    let parsed = Url::parse(homeserver).map_err(|e| MatrixError::MalformedHomeserverUrl {
        url: homeserver.to_string(),
        reason: e.to_string(),
    })?;

    let host = parsed
        .host_str()
        .ok_or_else(|| MatrixError::MalformedHomeserverUrl {
            url: homeserver.to_string(),
            reason: "no hostname component".to_string(),
        })?;

    Ok(format!("@{}:{}", name, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_uses_hostname_only() {
        let id = derive_matrix_user_id("alice", "https://matrix.example.org:8448/path").unwrap();
        assert_eq!(id, "@alice:matrix.example.org");
    }

    #[test]
    fn test_derive_rejects_unparseable_url() {
        let err = derive_matrix_user_id("alice", "not a url").unwrap_err();
        assert_eq!(err.error_code(), "malformed_homeserver_url");
    }

    #[test]
    fn test_derive_rejects_hostless_url() {
        // Parses as a valid URL but carries no hostname.
        let err = derive_matrix_user_id("alice", "unix:/run/synapse.sock").unwrap_err();
        assert!(matches!(err, MatrixError::MalformedHomeserverUrl { .. }));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SyncStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }
}
