//! Access gates for console pages and actions
//!
//! A gate never fails: a denial is an [`AccessDecision::Denied`] value carrying
//! a reason the caller renders as an "access denied" state.

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::evaluator::PermissionEvaluator;

/// What a page or action requires of the current role
///
/// Declared in configuration as `{ kind: any_permission, value: [..] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AccessRequirement {
    Permission(String),
    AllPermissions(Vec<String>),
    AnyPermission(Vec<String>),
    Role(String),
    AnyRole(Vec<String>),
    Admin,
    SuperAdmin,
}

impl fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permission(permission) => write!(f, "permission {}", permission),
            Self::AllPermissions(permissions) => {
                write!(f, "all of [{}]", permissions.join(", "))
            }
            Self::AnyPermission(permissions) => {
                write!(f, "any of [{}]", permissions.join(", "))
            }
            Self::Role(role) => write!(f, "role {}", role),
            Self::AnyRole(roles) => write!(f, "any role of [{}]", roles.join(", ")),
            Self::Admin => f.write_str("admin"),
            Self::SuperAdmin => f.write_str("super admin"),
        }
    }
}

/// Outcome of a gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied { reason: String },
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn denial_reason(&self) -> Option<&str> {
        match self {
            Self::Granted => None,
            Self::Denied { reason } => Some(reason),
        }
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self::Denied {
            reason: reason.into(),
        }
    }

    /// `Err(Forbidden)` for a denial
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Granted => Ok(()),
            Self::Denied { reason } => Err(AuthzError::forbidden(reason)),
        }
    }
}

/// Decide `requirement` against `evaluator`
pub fn gate(
    evaluator: &PermissionEvaluator<'_>,
    requirement: &AccessRequirement,
) -> AccessDecision {
    let decision = decide(evaluator, requirement);
    let role = evaluator.role_name().unwrap_or("<not loaded>");

    match &decision {
        AccessDecision::Granted => {
            debug!(role, requirement = %requirement, "Access granted");
        }
        AccessDecision::Denied { reason } => {
            info!(role, requirement = %requirement, reason = %reason, "Access denied");
        }
    }

    decision
}

/// Like [`gate`], mapping a denial to [`AuthzError::Forbidden`]
pub fn require(
    evaluator: &PermissionEvaluator<'_>,
    requirement: &AccessRequirement,
) -> Result<()> {
    gate(evaluator, requirement).into_result()
}

fn decide(
    evaluator: &PermissionEvaluator<'_>,
    requirement: &AccessRequirement,
) -> AccessDecision {
    if !evaluator.is_loaded() {
        return AccessDecision::denied("role not loaded");
    }

    let granted = match requirement {
        AccessRequirement::Permission(permission) => evaluator.has_permission(permission),
        AccessRequirement::AllPermissions(permissions) => {
            evaluator.has_all_permissions(permissions)
        }
        AccessRequirement::AnyPermission(permissions) => {
            evaluator.has_any_permission(permissions)
        }
        AccessRequirement::Role(role) => evaluator.has_role(role),
        AccessRequirement::AnyRole(roles) => evaluator.has_any_role(roles),
        AccessRequirement::Admin => evaluator.is_admin(),
        AccessRequirement::SuperAdmin => evaluator.is_super_admin(),
    };

    if granted {
        return AccessDecision::Granted;
    }

    let reason = match requirement {
        AccessRequirement::Permission(permission) => {
            format!("missing permission: {}", permission)
        }
        AccessRequirement::AllPermissions(permissions) => format!(
            "missing permissions: {}",
            evaluator.missing_permissions(permissions).join(", ")
        ),
        AccessRequirement::AnyPermission(permissions) => {
            format!("requires any of: {}", permissions.join(", "))
        }
        AccessRequirement::Role(role) => format!("requires role: {}", role),
        AccessRequirement::AnyRole(roles) => {
            format!("requires one of roles: {}", roles.join(", "))
        }
        AccessRequirement::Admin => "requires admin role".to_string(),
        AccessRequirement::SuperAdmin => "requires super admin".to_string(),
    };

    AccessDecision::denied(reason)
}
