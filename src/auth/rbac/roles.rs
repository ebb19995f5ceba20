//! Role predicates
//!
//! Role names compare by exact string equality. There is no case folding, so
//! `superadmin` and `Admin` are ordinary roles.

use super::permissions::has_permission;
use super::types::{GLOBAL_WILDCARD, PermissionSet};

/// Role that is granted everything regardless of its permission set
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

/// Administrative role below super admin
pub const ADMIN_ROLE: &str = "admin";

/// Roles that count as administrators
pub const ADMIN_ROLES: [&str; 2] = [ADMIN_ROLE, SUPER_ADMIN_ROLE];

pub fn has_role(current: Option<&str>, target: &str) -> bool {
    current == Some(target)
}

pub fn has_any_role<S: AsRef<str>>(current: Option<&str>, targets: &[S]) -> bool {
    targets
        .iter()
        .any(|target| has_role(current, target.as_ref()))
}

/// Super admin by role name, or by holding `*`
///
/// A role name without a loaded set is not enough.
pub fn is_super_admin(current: Option<&str>, set: Option<&PermissionSet>) -> bool {
    if set.is_none() {
        return false;
    }

    has_role(current, SUPER_ADMIN_ROLE) || has_permission(set, GLOBAL_WILDCARD)
}

pub fn is_admin(current: Option<&str>) -> bool {
    has_any_role(current, &ADMIN_ROLES)
}
