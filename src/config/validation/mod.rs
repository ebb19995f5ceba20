//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `rbac_validators`: role names, logging and gate validators

mod rbac_validators;
mod trait_def;

pub use trait_def::Validate;
