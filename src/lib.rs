//! # auzap-authz
//!
//! Permission and role evaluation for the Auzap console.
//!
//! A role is a name plus a flat set of permission strings such as
//! `dashboard.read`. `*` grants everything and `dashboard.*` grants every
//! action in the `dashboard` namespace. Evaluation is pure and fails closed:
//! until a role is loaded every check answers `false`.
//!
//! ```rust
//! use auzap_authz::auth::rbac::{PermissionEvaluator, Role};
//!
//! let role = Role::new("manager", ["dashboard.*", "clients.read"]);
//! let evaluator = PermissionEvaluator::new(Some(&role));
//!
//! assert!(evaluator.has_permission("dashboard.read"));
//! assert!(!evaluator.has_permission("billing.read"));
//! assert!(!evaluator.is_admin());
//!
//! assert!(!PermissionEvaluator::unloaded().has_permission("dashboard.read"));
//! ```
//!
//! ## Sessions
//!
//! ```rust
//! use auzap_authz::auth::rbac::{AccessRequirement, ProfileRecord, SessionAccess};
//!
//! let session = SessionAccess::default();
//! let profile = ProfileRecord::from_json(
//!     r#"{"role": {"name": "admin", "permissions": ["billing.*"]}}"#,
//! )?;
//! session.load_profile(profile);
//!
//! let decision = session.gate(&AccessRequirement::Permission("billing.read".into()));
//! assert!(decision.is_granted());
//! # Ok::<(), auzap_authz::AuthzError>(())
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AccessDecision, AccessRequirement, PermissionEvaluator, PermissionSet, ProfileRecord, Role,
    RoleSnapshot, SessionAccess,
};
pub use config::Config;
pub use utils::error::{AuthzError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Seconds since the Unix epoch at build time
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("AUZAP_AUTHZ_BUILD_TIME"),
            git_hash: env!("AUZAP_AUTHZ_GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
