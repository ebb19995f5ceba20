//! Configuration management
//!
//! This module handles loading, validation, and merging of the role names,
//! logging settings and declared page gates.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::rbac::AccessRequirement;
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reserved role names
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Access requirement per console page or action
    #[serde(default)]
    pub gates: BTreeMap<String, AccessRequirement>,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthzError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_yaml(&content)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AuthzError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Optional file, then environment overrides on top, validated once
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path.as_ref()).await?,
            None => Self::default(),
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `AUZAP_AUTHZ_*` environment overrides without validating
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; a variable that is set always wins,
    /// even when it names the default value
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.rbac.apply_overrides(&lookup)?;
        self.logging.apply_overrides(&lookup)?;
        Ok(())
    }

    /// Look up a declared gate
    pub fn gate(&self, name: &str) -> Result<&AccessRequirement> {
        self.gates
            .get(name)
            .ok_or_else(|| AuthzError::not_found(format!("gate '{}'", name)))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| AuthzError::validation(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthzError::validation(format!("Logging config error: {}", e)))?;

        for (name, requirement) in &self.gates {
            requirement
                .validate()
                .map_err(|e| AuthzError::validation(format!("Gate '{}' error: {}", name, e)))?;
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self.gates.extend(other.gates);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuthzError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
