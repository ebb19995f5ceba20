//! Role, logging and gate configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::AccessRequirement;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;
use tracing_subscriber::EnvFilter;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        if self.super_admin_role.trim().is_empty() {
            return Err("Super admin role cannot be empty".to_string());
        }

        if self.admin_roles.is_empty() {
            return Err("At least one admin role is required".to_string());
        }

        let mut seen = HashSet::new();
        for role in &self.admin_roles {
            if role.trim().is_empty() {
                return Err("Admin role names cannot be empty".to_string());
            }
            if !seen.insert(role.as_str()) {
                return Err(format!("Duplicate admin role: {}", role));
            }
        }

        if !self.is_admin_role(&self.super_admin_role) {
            return Err(format!(
                "Super admin role '{}' must also be listed in admin_roles",
                self.super_admin_role
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}

impl Validate for AccessRequirement {
    fn validate(&self) -> Result<(), String> {
        let names = match self {
            Self::Permission(name) | Self::Role(name) => std::slice::from_ref(name),
            Self::AllPermissions(names) | Self::AnyPermission(names) | Self::AnyRole(names) => {
                if names.is_empty() {
                    return Err(format!("{} lists nothing", self));
                }
                names.as_slice()
            }
            Self::Admin | Self::SuperAdmin => return Ok(()),
        };

        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(format!("{} contains an empty name", self));
        }

        Ok(())
    }
}
