//! Seams to the hosting Citadel kernel.
//!
//! The plugin consumes two collaborator interfaces: the permission subsystem
//! (capability checks against the caller's granted set) and the persistent
//! key-value settings store. The kernel owns the implementations; the plugin
//! only holds trait objects.

use serde_json::Value;

/// Capability check collaborator.
pub trait PermissionProvider: Send + Sync {
    /// Returns true if the current caller holds the named capability.
    fn has_permission(&self, capability: &str) -> bool;
}

/// Persistent key-value settings store.
///
/// Used by the settings UI to persist homeserver configuration across
/// restarts. The sync core itself never touches the store.
pub trait SettingsStore: Send + Sync {
    /// Read a stored value, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value, replacing any prior one.
    fn set(&self, key: &str, value: Value);
}
