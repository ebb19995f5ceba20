//! Validation trait definition

/// Checked after a configuration section is parsed
///
/// The error is a human-readable reason; callers wrap it in
/// `AuthzError::Validation` together with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
