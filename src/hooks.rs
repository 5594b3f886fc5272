//! Plugin manifest and the user-lifecycle hook adapter.
//!
//! The kernel fires a user-sync hook whenever a user is created or logs in.
//! The adapter here translates those notifications into `sync_user` calls and
//! isolates sync failures: user creation and login must never be blocked by a
//! Matrix problem.

use crate::caps::{PermissionDescriptor, permission_descriptors};
use crate::config::MatrixConfig;
use crate::identity::{SyncOutcome, UserRecord};
use crate::kernel::PermissionProvider;
use crate::service::MatrixService;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Plugin identifier in the kernel registry.
pub const PLUGIN_ID: &str = "matrix";

/// Lifecycle actions that trigger identity sync. Everything else is a no-op,
/// keeping the hook forward-compatible with future lifecycle actions.
const SYNC_ACTIONS: [&str; 2] = ["create", "login"];

/// Declarative plugin manifest collected by the kernel at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginManifest {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    /// Plugins that must be loaded before this one.
    pub requires: &'static [&'static str],
}

/// An extension point other plugins may contribute to. Declared only; no
/// behavior is attached in this core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPoint {
    pub id: &'static str,
    pub description: &'static str,
}

/// A section contributed to the kernel's settings or admin framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u32,
    pub category: Option<&'static str>,
}

/// This plugin's manifest.
pub fn manifest() -> PluginManifest {
    PluginManifest {
        id: PLUGIN_ID,
        name: "Matrix",
        version: env!("CARGO_PKG_VERSION"),
        description: "Matrix protocol - federated messaging with Citadel identity integration",
        category: "Core",
        tags: &["core-required", "communication", "federation", "chat"],
        requires: &["system", "user", "auth"],
    }
}

/// Extension points declared for future bridge, bot, and widget plugins.
pub fn extension_points() -> Vec<ExtensionPoint> {
    vec![
        ExtensionPoint {
            id: "matrix:bridges",
            description: "Matrix bridge plugins (Discord, Slack, IRC, etc.)",
        },
        ExtensionPoint {
            id: "matrix:bots",
            description: "Matrix bot integrations",
        },
        ExtensionPoint {
            id: "matrix:widgets",
            description: "Matrix widget definitions",
        },
    ]
}

/// Section contributed to the settings framework.
pub fn settings_section() -> SectionDescriptor {
    SectionDescriptor {
        id: PLUGIN_ID,
        label: "Matrix",
        weight: 65,
        category: Some("Services"),
    }
}

/// Section contributed to the admin framework.
pub fn admin_section() -> SectionDescriptor {
    SectionDescriptor {
        id: PLUGIN_ID,
        label: "Matrix",
        weight: 65,
        category: None,
    }
}

/// The Matrix plugin: owns the service instance and adapts kernel hooks.
pub struct MatrixPlugin {
    service: Arc<MatrixService>,
}

impl MatrixPlugin {
    /// Initialize the plugin with a fresh, unconfigured service.
    pub fn new(permissions: Arc<dyn PermissionProvider>) -> Self {
        Self {
            service: Arc::new(MatrixService::new(permissions)),
        }
    }

    /// Initialize the plugin with file configuration applied.
    pub fn with_config(permissions: Arc<dyn PermissionProvider>, config: &MatrixConfig) -> Self {
        let plugin = Self::new(permissions);
        if let Some(homeserver) = &config.homeserver {
            plugin.service.apply_initial_homeserver(homeserver);
            info!(homeserver = %homeserver, "Homeserver applied from config");
        }
        plugin
    }

    /// Handle to the registered "matrix" service.
    pub fn service(&self) -> Arc<MatrixService> {
        Arc::clone(&self.service)
    }

    /// Capability vocabulary contributed to the permission subsystem.
    pub fn permissions(&self) -> Vec<PermissionDescriptor> {
        permission_descriptors()
    }

    /// React to a user lifecycle event fired by the kernel.
    ///
    /// Only `create` and `login` trigger a sync. Failures are logged and
    /// swallowed at this boundary so the triggering lifecycle event always
    /// completes.
    pub fn on_user_sync(&self, action: &str, user: &UserRecord) {
        if !SYNC_ACTIONS.contains(&action) {
            return;
        }

        match self.service.sync_user(user) {
            Ok(SyncOutcome::Synced(map)) => {
                info!(
                    action = %action,
                    user = %user.name,
                    matrix_user_id = %map.matrix_user_id,
                    "User synced to Matrix"
                );
            }
            Ok(SyncOutcome::Skipped { reason }) => {
                debug!(action = %action, user = %user.name, reason = %reason, "User sync skipped");
            }
            Err(e) => {
                warn!(
                    action = %action,
                    user = %user.name,
                    code = e.error_code(),
                    error = %e,
                    "User sync failed"
                );
            }
        }
    }
}
