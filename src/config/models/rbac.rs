//! Role evaluation configuration

use super::*;
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role that passes `is_super_admin` by name alone
    #[serde(default = "default_super_admin_role")]
    pub super_admin_role: String,
    /// Roles that pass `is_admin`
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            super_admin_role: default_super_admin_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations (other takes precedence where it differs from defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.super_admin_role != default_super_admin_role() {
            self.super_admin_role = other.super_admin_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        self
    }

    /// Apply overrides for `AUZAP_AUTHZ_SUPER_ADMIN_ROLE` and `AUZAP_AUTHZ_ADMIN_ROLES`
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(role) = lookup("AUZAP_AUTHZ_SUPER_ADMIN_ROLE") {
            debug!("Super admin role overridden from environment");
            self.super_admin_role = role.trim().to_string();
        }

        if let Some(roles) = lookup("AUZAP_AUTHZ_ADMIN_ROLES") {
            let roles: Vec<String> = roles
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect();
            if roles.is_empty() {
                return Err(AuthzError::config(
                    "AUZAP_AUTHZ_ADMIN_ROLES is set but names no roles",
                ));
            }
            debug!("Admin roles overridden from environment");
            self.admin_roles = roles;
        }

        Ok(())
    }

    pub fn is_admin_role(&self, role: &str) -> bool {
        self.admin_roles.iter().any(|admin| admin == role)
    }
}
