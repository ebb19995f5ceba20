//! Role-Based Access Control (RBAC) evaluation
//!
//! Answers whether a role's permission set grants an action. Permissions are
//! `<namespace>.<action>` strings; `*` grants everything and `<namespace>.*`
//! grants every action in that namespace. All predicates are pure and fail
//! closed: without a loaded role they answer `false`.

mod evaluator;
mod gate;
mod permissions;
mod roles;
mod snapshot;
mod types;

// Re-export public types and functions
pub use evaluator::PermissionEvaluator;
pub use gate::{AccessDecision, AccessRequirement, gate, require};
pub use permissions::{
    grant_for, has_all_permissions, has_any_permission, has_permission, missing_permissions,
};
pub use roles::{
    ADMIN_ROLE, ADMIN_ROLES, SUPER_ADMIN_ROLE, has_any_role, has_role, is_admin, is_super_admin,
};
pub use snapshot::{RoleSnapshot, SessionAccess};
pub use types::{
    GLOBAL_WILDCARD, Grant, NAMESPACE_SEPARATOR, PermissionCheck, PermissionSet,
    ProfileRecord, Role, RoleRecord,
};
