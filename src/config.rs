//! Framework configuration
//!
//! Operator-facing settings parsed from the buildpack's YAML configuration
//! file. Unknown keys are ignored so operator forks can carry extra settings
//! without breaking staging.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaratekAgentError};

/// Operator configuration for the Waratek agent framework
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Whether the framework may participate in staging at all
    #[serde(default)]
    pub enabled: bool,

    /// Pinned download URI for the agent archive
    #[serde(default)]
    pub uri: Option<String>,

    /// Pinned agent version; detection yields nothing without one
    #[serde(default)]
    pub version: Option<String>,
}

impl FrameworkConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: FrameworkConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| WaratekAgentError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_yaml::from_str(&contents).map_err(|e| WaratekAgentError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
