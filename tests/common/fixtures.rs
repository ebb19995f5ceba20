//! Test fixtures and data factories
//!
//! Roles mirror the ones the Auzap console ships with.

use auzap_authz::auth::rbac::{ProfileRecord, Role, RoleRecord};
use std::io::Write;
use tempfile::NamedTempFile;

/// Factory for creating test roles
pub struct RoleFactory;

impl RoleFactory {
    pub fn super_admin() -> Role {
        Role::new("super_admin", Vec::<String>::new())
    }

    pub fn admin() -> Role {
        Role::new(
            "admin",
            ["dashboard.*", "clients.*", "pets.*", "messages.*", "settings.read"],
        )
    }

    pub fn receptionist() -> Role {
        Role::new(
            "receptionist",
            [
                "dashboard.read",
                "clients.read",
                "clients.write",
                "appointments.*",
                "messages.send",
            ],
        )
    }

    pub fn wildcard(name: &str) -> Role {
        Role::new(name, ["*"])
    }

    pub fn with_permissions(name: &str, permissions: &[&str]) -> Role {
        Role::new(name, permissions.iter().copied())
    }
}

/// Factory for identity store profile records
pub struct ProfileFactory;

impl ProfileFactory {
    pub fn with_role(role: &Role) -> ProfileRecord {
        ProfileRecord {
            role: Some(RoleRecord {
                name: role.name.clone(),
                permissions: role.permissions.sorted().into_iter().map(String::from).collect(),
            }),
        }
    }

    pub fn without_role() -> ProfileRecord {
        ProfileRecord::default()
    }

    /// Write `record` as JSON to a temporary file
    pub fn json_file(record: &ProfileRecord) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(serde_json::to_string(record).unwrap().as_bytes())
            .unwrap();
        file
    }

    /// Write raw `content` to a temporary file with `suffix`
    pub fn raw_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }
}
