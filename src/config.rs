//! Configuration loading and the settings-store key vocabulary.
//!
//! File configuration is applied once at plugin init. Runtime changes made
//! through the settings UI are persisted by the kernel's settings store under
//! the `settings.matrix_*` keys and pushed through the gated `configure`
//! entry point.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Settings-store key for the homeserver URL.
pub const KEY_HOMESERVER: &str = "settings.matrix_homeserver";

/// Settings-store key for the auto-sync toggle.
pub const KEY_AUTO_SYNC: &str = "settings.matrix_auto_sync";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Matrix plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatrixConfig {
    /// Homeserver base URL applied at plugin init
    /// (e.g. "https://matrix.example.org"). Stored opaquely; hostname
    /// validation happens at sync time.
    #[serde(default)]
    pub homeserver: Option<String>,

    /// Provision Matrix accounts when users are created or log in.
    /// Surfaced as a settings-UI toggle; the sync core does not consult it.
    #[serde(default = "default_auto_sync")]
    pub auto_sync: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            homeserver: None,
            auto_sync: default_auto_sync(),
        }
    }
}

impl MatrixConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: MatrixConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

fn default_auto_sync() -> bool {
    true
}
