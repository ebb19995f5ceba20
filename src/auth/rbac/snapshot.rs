//! Session role snapshots
//!
//! A session holds at most one resolved role. Re-fetching replaces the whole
//! snapshot through `ArcSwapOption`, so a reader sees either the previous role
//! or the new one and never a partially updated set.

use crate::config::RbacConfig;
use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::evaluator::PermissionEvaluator;
use super::gate::{self, AccessDecision, AccessRequirement};
use super::types::{ProfileRecord, Role};

/// Immutable role resolved for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSnapshot {
    role: Role,
    loaded_at: DateTime<Utc>,
}

impl RoleSnapshot {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            loaded_at: Utc::now(),
        }
    }

    /// `None` when the profile carries no role yet
    pub fn from_profile(record: ProfileRecord) -> Option<Self> {
        record.into_role().map(Self::new)
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn name(&self) -> &str {
        &self.role.name
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn evaluator<'a>(&'a self, rbac: &'a RbacConfig) -> PermissionEvaluator<'a> {
        PermissionEvaluator::with_config(Some(&self.role), rbac)
    }
}

/// Current role of one signed-in session
pub struct SessionAccess {
    current: ArcSwapOption<RoleSnapshot>,
    rbac: Arc<RbacConfig>,
}

impl SessionAccess {
    /// Empty session; everything is denied until a role is loaded
    pub fn new(rbac: RbacConfig) -> Self {
        Self::with_shared_config(Arc::new(rbac))
    }

    pub fn with_shared_config(rbac: Arc<RbacConfig>) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            rbac,
        }
    }

    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Install `snapshot`, returning the one it replaced
    pub fn replace(&self, snapshot: RoleSnapshot) -> Option<Arc<RoleSnapshot>> {
        info!(
            role = %snapshot.name(),
            permissions = snapshot.role().permissions.len(),
            "Role snapshot replaced"
        );
        self.current.swap(Some(Arc::new(snapshot)))
    }

    /// Install the role carried by `record`; a record without one clears the session
    ///
    /// Returns whether a role is loaded afterwards.
    pub fn load_profile(&self, record: ProfileRecord) -> bool {
        match RoleSnapshot::from_profile(record) {
            Some(snapshot) => {
                self.replace(snapshot);
                true
            }
            None => {
                debug!("Profile carries no role, clearing session");
                self.clear();
                false
            }
        }
    }

    /// Drop the current snapshot, e.g. on sign-out
    pub fn clear(&self) -> Option<Arc<RoleSnapshot>> {
        self.current.swap(None)
    }

    pub fn current(&self) -> Option<Arc<RoleSnapshot>> {
        self.current.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Run `f` against one consistent snapshot
    pub fn evaluate<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PermissionEvaluator<'_>) -> R,
    {
        let snapshot = self.current.load_full();
        let role = snapshot.as_deref().map(RoleSnapshot::role);
        let evaluator = PermissionEvaluator::with_config(role, &self.rbac);
        f(&evaluator)
    }

    pub fn has_permission(&self, query: &str) -> bool {
        self.evaluate(|evaluator| evaluator.has_permission(query))
    }

    pub fn gate(&self, requirement: &AccessRequirement) -> AccessDecision {
        self.evaluate(|evaluator| gate::gate(evaluator, requirement))
    }
}

impl Default for SessionAccess {
    fn default() -> Self {
        Self::new(RbacConfig::default())
    }
}

impl fmt::Debug for SessionAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current.load_full();
        f.debug_struct("SessionAccess")
            .field("role", &current.as_deref().map(RoleSnapshot::name))
            .field("rbac", &self.rbac)
            .finish()
    }
}
