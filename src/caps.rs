//! Permission vocabulary contributed by the Matrix plugin.
//!
//! Capability descriptors are collected by the kernel's permission subsystem
//! at plugin init. Only `matrix.admin` is enforced by current logic; the
//! remaining capabilities are declared for future room and bridge management.

use serde::Serialize;

/// Capability required to change homeserver configuration.
pub const MATRIX_ADMIN: &str = "matrix.admin";

/// Capability reserved for room management.
pub const MATRIX_ROOMS: &str = "matrix.rooms";

/// Capability reserved for bridge management.
pub const MATRIX_BRIDGES: &str = "matrix.bridges";

/// Capability reserved for manually triggered user sync.
pub const MATRIX_SYNC: &str = "matrix.sync";

/// A capability descriptor as collected by the kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub module: &'static str,
}

/// The full capability vocabulary this plugin contributes.
pub fn permission_descriptors() -> Vec<PermissionDescriptor> {
    vec![
        PermissionDescriptor {
            id: MATRIX_ADMIN,
            label: "Administer Matrix",
            module: "matrix",
        },
        PermissionDescriptor {
            id: MATRIX_ROOMS,
            label: "Manage rooms",
            module: "matrix",
        },
        PermissionDescriptor {
            id: MATRIX_BRIDGES,
            label: "Manage bridges",
            module: "matrix",
        },
        PermissionDescriptor {
            id: MATRIX_SYNC,
            label: "Sync users to Matrix",
            module: "matrix",
        },
    ]
}
