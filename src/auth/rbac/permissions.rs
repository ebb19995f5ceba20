//! Permission predicates
//!
//! Pure functions over an already-loaded permission set. `None` means the
//! role has not been resolved yet, and every predicate answers `false`.

use super::types::{GLOBAL_WILDCARD, Grant, PermissionSet, namespace_wildcard_for};

/// Find the entry of `set` that grants `query`, if any
///
/// Checked in order: `*`, the query verbatim, then `<namespace>.*` where the
/// namespace is everything before the first `.`. A query with no `.` is its
/// own namespace, so `admin` is granted by a stored `admin.*`.
pub fn grant_for(set: &PermissionSet, query: &str) -> Option<Grant> {
    if set.contains(GLOBAL_WILDCARD) {
        return Some(Grant::GlobalWildcard);
    }

    if set.contains(query) {
        return Some(Grant::Exact);
    }

    let wildcard = namespace_wildcard_for(query);
    if set.contains(&wildcard) {
        return Some(Grant::NamespaceWildcard(wildcard));
    }

    None
}

/// Whether `set` grants `query`
pub fn has_permission(set: Option<&PermissionSet>, query: &str) -> bool {
    set.is_some_and(|set| grant_for(set, query).is_some())
}

/// Whether `set` grants every query; true for an empty list once loaded
pub fn has_all_permissions<S: AsRef<str>>(set: Option<&PermissionSet>, queries: &[S]) -> bool {
    let Some(set) = set else {
        return false;
    };

    queries
        .iter()
        .all(|query| grant_for(set, query.as_ref()).is_some())
}

/// Whether `set` grants at least one query; false for an empty list
pub fn has_any_permission<S: AsRef<str>>(set: Option<&PermissionSet>, queries: &[S]) -> bool {
    let Some(set) = set else {
        return false;
    };

    queries
        .iter()
        .any(|query| grant_for(set, query.as_ref()).is_some())
}

/// Queries from `queries` that `set` does not grant, in input order
pub fn missing_permissions<S: AsRef<str>>(
    set: Option<&PermissionSet>,
    queries: &[S],
) -> Vec<String> {
    queries
        .iter()
        .map(|query| query.as_ref())
        .filter(|query| !has_permission(set, query))
        .map(str::to_string)
        .collect()
}
