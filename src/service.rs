//! The registered "matrix" service: configuration state and identity registry.
//!
//! A single shared instance lives behind `Arc` in the kernel's service
//! registry. Interior mutability (`parking_lot` for the scalar config cell,
//! `DashMap` for the registry) keeps it safe under concurrent hook dispatch
//! even though the kernel serializes events in practice.

use crate::caps::MATRIX_ADMIN;
use crate::error::MatrixError;
use crate::identity::{IdentityMap, SyncOutcome, SyncStatus, UserRecord, derive_matrix_user_id};
use crate::kernel::PermissionProvider;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// Skip reason reported when syncing without a configured homeserver.
pub const SKIP_NO_HOMESERVER: &str = "no homeserver configured";

/// The Matrix service exposed to other plugins.
pub struct MatrixService {
    permissions: Arc<dyn PermissionProvider>,
    homeserver: RwLock<Option<String>>,
    /// Connection-status flag. Nothing sets it true: real homeserver
    /// connectivity is an extension point, not current behavior.
    connected: bool,
    identity_maps: DashMap<String, IdentityMap>,
}

impl MatrixService {
    /// Create an unconfigured service.
    pub fn new(permissions: Arc<dyn PermissionProvider>) -> Self {
        Self {
            permissions,
            homeserver: RwLock::new(None),
            connected: false,
            identity_maps: DashMap::new(),
        }
    }

    /// Replace the configured homeserver URL.
    ///
    /// Gated on `matrix.admin`. The URL is stored opaquely (format validation
    /// is a UI concern) and no connection is attempted.
    pub fn configure(&self, homeserver_url: &str) -> Result<(), MatrixError> {
        if !self.permissions.has_permission(MATRIX_ADMIN) {
            trace!(capability = MATRIX_ADMIN, "Configuration denied");
            return Err(MatrixError::PermissionDenied(MATRIX_ADMIN));
        }

        debug!(homeserver = %homeserver_url, "Homeserver configured");
        *self.homeserver.write() = Some(homeserver_url.to_string());
        Ok(())
    }

    /// The configured homeserver URL, if any.
    pub fn homeserver(&self) -> Option<String> {
        self.homeserver.read().clone()
    }

    /// Whether a homeserver connection is established.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Sync a local user to Matrix, recording an identity mapping.
    ///
    /// Unconfigured state yields an explicit `Skipped` result rather than an
    /// error. Re-syncing a user overwrites the prior record, recomputing both
    /// the derived Matrix ID and the sync timestamp.
    pub fn sync_user(&self, user: &UserRecord) -> Result<SyncOutcome, MatrixError> {
        let homeserver = match self.homeserver() {
            Some(url) => url,
            None => {
                return Ok(SyncOutcome::Skipped {
                    reason: SKIP_NO_HOMESERVER,
                });
            }
        };

        let matrix_user_id = derive_matrix_user_id(&user.name, &homeserver)?;
        let map = IdentityMap {
            citadel_user_id: user.id.clone(),
            matrix_user_id,
            synced_at: Utc::now(),
            status: SyncStatus::Active,
        };

        self.identity_maps.insert(registry_key(&user.id), map.clone());
        Ok(SyncOutcome::Synced(map))
    }

    /// Snapshot of all identity mappings, in no particular order.
    pub fn identity_maps(&self) -> Vec<IdentityMap> {
        self.identity_maps
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Apply init-time configuration without a capability check.
    ///
    /// File config is operator-supplied before any caller exists to gate;
    /// runtime mutation still goes through [`configure`](Self::configure).
    pub(crate) fn apply_initial_homeserver(&self, homeserver_url: &str) {
        *self.homeserver.write() = Some(homeserver_url.to_string());
    }
}

fn registry_key(user_id: &str) -> String {
    format!("user:{}", user_id)
}
