//! citadel-matrix - Matrix plugin for the Citadel kernel.
//!
//! Matrix does not own identity: users are provisioned from the Citadel user
//! plugin via the user-sync lifecycle hook. This crate holds the homeserver
//! configuration, the permission-gated configuration entry point, and the
//! local-to-Matrix identity registry. Homeserver connectivity, rooms, and
//! bridges are declared extension points with no behavior.

pub mod caps;
pub mod config;
pub mod error;
pub mod hooks;
pub mod identity;
pub mod kernel;
pub mod service;

pub use config::MatrixConfig;
pub use error::{MatrixError, MatrixResult};
pub use hooks::MatrixPlugin;
pub use identity::{IdentityMap, SyncOutcome, SyncStatus, UserRecord};
pub use kernel::{PermissionProvider, SettingsStore};
pub use service::MatrixService;
