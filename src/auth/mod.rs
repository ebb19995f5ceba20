//! Authorization for the Auzap console
//!
//! Authentication and role storage live in the managed backend; this module
//! only evaluates an already-fetched role.

pub mod rbac;
