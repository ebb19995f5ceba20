//! Error handling utilities
//!
//! Every fallible operation around the evaluator (config loading, profile
//! parsing, access requirements enforced with `?`) reports an [`AuthzError`].

mod helpers;
mod types;

pub use types::{AuthzError, Result};
