//! RBAC type definitions

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;

/// The permission that grants everything
pub const GLOBAL_WILDCARD: &str = "*";

/// Separates the namespace from the action in a permission string
pub const NAMESPACE_SEPARATOR: char = '.';

/// Namespace segment of a permission query
pub(crate) fn namespace_of(query: &str) -> &str {
    query
        .split_once(NAMESPACE_SEPARATOR)
        .map_or(query, |(namespace, _)| namespace)
}

pub(crate) fn namespace_wildcard_for(query: &str) -> String {
    format!(
        "{}{}{}",
        namespace_of(query),
        NAMESPACE_SEPARATOR,
        GLOBAL_WILDCARD
    )
}

/// Unordered set of permission strings held by a role
///
/// Duplicates collapse on construction and ordering is never observable
/// through the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbatim membership, no wildcard expansion
    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn insert(&mut self, permission: impl Into<String>) -> bool {
        self.0.insert(permission.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Permissions in lexical order, for display
    pub fn sorted(&self) -> Vec<&str> {
        let mut permissions: Vec<&str> = self.0.iter().map(String::as_str).collect();
        permissions.sort_unstable();
        permissions
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for PermissionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name
    pub name: String,
    /// Permissions granted by this role
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Role {
    pub fn new<I, S>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().collect(),
        }
    }
}

/// Role as returned by the identity store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl From<RoleRecord> for Role {
    fn from(record: RoleRecord) -> Self {
        Self::new(record.name, record.permissions)
    }
}

/// Profile row as returned by the identity store: `{ "role": { ... } }`
///
/// `role` is `None` while the role has not been resolved; the evaluator
/// treats that as deny-all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub role: Option<RoleRecord>,
}

impl ProfileRecord {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn into_role(self) -> Option<Role> {
        self.role.map(Role::from)
    }
}

/// How a granted permission was matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// The set holds `*`
    GlobalWildcard,
    /// The set holds the query verbatim
    Exact,
    /// The set holds `<namespace>.*`
    NamespaceWildcard(String),
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlobalWildcard => f.write_str("global wildcard"),
            Self::Exact => f.write_str("exact"),
            Self::NamespaceWildcard(wildcard) => write!(f, "namespace wildcard {wildcard}"),
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Which entry of the set granted it
    pub matched_by: Option<Grant>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(crate) fn granted(grant: Grant) -> Self {
        Self {
            granted: true,
            matched_by: Some(grant),
            denial_reason: None,
        }
    }

    pub(crate) fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            matched_by: None,
            denial_reason: Some(reason.into()),
        }
    }
}
