use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{RoleName, RoleRegistry};

/// The limit the person dialog places on a single days-off entry.
pub const DEFAULT_MAX_INTERVAL_LENGTH: u32 = 2;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Longest accepted days-off entry, as days between first and last day.
    /// `null` removes the limit.
    pub max_interval_length: Option<u32>,
    pub roles: Vec<RoleName>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_interval_length: Some(DEFAULT_MAX_INTERVAL_LENGTH),
            roles: Vec::new(),
        }
    }
}

impl EditorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn role_registry(&self) -> RoleRegistry {
        RoleRegistry::from_names(self.roles.iter().cloned())
    }
}
