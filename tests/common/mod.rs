//! Shared test fixtures: stub kernel collaborators.

use citadel_matrix::{PermissionProvider, SettingsStore};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

/// Grants every capability.
pub struct AllowAll;

impl PermissionProvider for AllowAll {
    fn has_permission(&self, _capability: &str) -> bool {
        true
    }
}

/// Grants exactly one capability.
pub struct GrantOnly(pub &'static str);

impl PermissionProvider for GrantOnly {
    fn has_permission(&self, capability: &str) -> bool {
        capability == self.0
    }
}

/// In-memory settings store.
#[derive(Default)]
pub struct MemoryStore(Mutex<HashMap<String, Value>>);

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.0.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.0.lock().insert(key.to_string(), value);
    }
}

/// Initialize tracing for tests (idempotent, respects RUST_LOG).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
