//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

pub mod logging;
pub mod rbac;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;

/// Default super admin role name
pub fn default_super_admin_role() -> String {
    crate::auth::rbac::SUPER_ADMIN_ROLE.to_string()
}

/// Default admin role names
pub fn default_admin_roles() -> Vec<String> {
    crate::auth::rbac::ADMIN_ROLES
        .iter()
        .map(|role| role.to_string())
        .collect()
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}
