//! Logging configuration

use super::*;
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `auzap_authz=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        if other.json {
            self.json = true;
        }
        self
    }

    /// Apply overrides for `AUZAP_AUTHZ_LOG_LEVEL` and `AUZAP_AUTHZ_LOG_JSON`
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("AUZAP_AUTHZ_LOG_LEVEL") {
            self.level = level;
        }

        if let Some(json) = lookup("AUZAP_AUTHZ_LOG_JSON") {
            self.json = match json.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(AuthzError::config(format!(
                        "AUZAP_AUTHZ_LOG_JSON must be a boolean, got: {}",
                        other
                    )));
                }
            };
        }

        Ok(())
    }
}
