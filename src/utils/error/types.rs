//! Error types for the authorization crate

use thiserror::Error;

/// Result type alias for the authorization crate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization crate
///
/// Permission predicates never produce one of these; a missing or unknown
/// grant is simply `false`.
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Access denied by a gate
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),
}
