//! Permission evaluator over a resolved role

use crate::config::RbacConfig;
use std::sync::OnceLock;

use super::permissions;
use super::roles;
use super::types::{GLOBAL_WILDCARD, PermissionCheck, PermissionSet, Role};

static DEFAULT_RBAC: OnceLock<RbacConfig> = OnceLock::new();

fn default_rbac() -> &'static RbacConfig {
    DEFAULT_RBAC.get_or_init(RbacConfig::default)
}

/// Borrowed view answering permission and role questions for one role
///
/// Constructed with `None` while the role is still loading; every predicate
/// then answers `false`.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    role: Option<&'a Role>,
    rbac: &'a RbacConfig,
}

impl<'a> PermissionEvaluator<'a> {
    /// Evaluator using the default `super_admin` / `admin` role names
    pub fn new(role: Option<&'a Role>) -> Self {
        Self {
            role,
            rbac: default_rbac(),
        }
    }

    pub fn with_config(role: Option<&'a Role>, rbac: &'a RbacConfig) -> Self {
        Self { role, rbac }
    }

    /// Evaluator that denies everything
    pub fn unloaded() -> Self {
        Self::new(None)
    }

    pub fn is_loaded(&self) -> bool {
        self.role.is_some()
    }

    pub fn role(&self) -> Option<&'a Role> {
        self.role
    }

    pub fn role_name(&self) -> Option<&'a str> {
        self.role.map(|role| role.name.as_str())
    }

    pub fn permissions(&self) -> Option<&'a PermissionSet> {
        self.role.map(|role| &role.permissions)
    }

    pub fn has_permission(&self, query: &str) -> bool {
        permissions::has_permission(self.permissions(), query)
    }

    pub fn has_all_permissions<S: AsRef<str>>(&self, queries: &[S]) -> bool {
        permissions::has_all_permissions(self.permissions(), queries)
    }

    pub fn has_any_permission<S: AsRef<str>>(&self, queries: &[S]) -> bool {
        permissions::has_any_permission(self.permissions(), queries)
    }

    pub fn has_role(&self, target: &str) -> bool {
        roles::has_role(self.role_name(), target)
    }

    pub fn has_any_role<S: AsRef<str>>(&self, targets: &[S]) -> bool {
        roles::has_any_role(self.role_name(), targets)
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_role(&self.rbac.super_admin_role) || self.has_permission(GLOBAL_WILDCARD)
    }

    pub fn is_admin(&self) -> bool {
        self.role_name()
            .is_some_and(|name| self.rbac.is_admin_role(name))
    }

    /// Like [`has_permission`](Self::has_permission), reporting what matched or why not
    pub fn check_permission_detailed(&self, query: &str) -> PermissionCheck {
        let Some(set) = self.permissions() else {
            return PermissionCheck::denied("role not loaded");
        };

        match permissions::grant_for(set, query) {
            Some(grant) => PermissionCheck::granted(grant),
            None => PermissionCheck::denied(format!("missing permission: {}", query)),
        }
    }

    pub fn missing_permissions<S: AsRef<str>>(&self, queries: &[S]) -> Vec<String> {
        permissions::missing_permissions(self.permissions(), queries)
    }
}
