//! Application environment signals
//!
//! Applications opt in to the agent and steer it through plain environment
//! variables. The external driver stages those into a key-value map before
//! any framework runs; `from_process_env` mirrors that assembly for callers
//! that sit directly on the process environment.

use std::collections::HashMap;

/// Environment variable marking the agent as requested by the application
pub const REQUESTED_VAR: &str = "waratek_required";

/// Environment variable carrying the fallback agent archive URI
pub const DOWNLOAD_URI_VAR: &str = "waratek_treasure";

/// Environment variable naming a properties file relative to the app root
pub const PROPERTIES_VAR: &str = "waratek_properties";

/// Agent-related signals read from the application environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEnvironment {
    /// Whether the application asked for the agent
    pub requested: bool,

    /// Fallback archive URI used when configuration pins none
    pub download_uri: Option<String>,

    /// Properties file path, relative to the application root
    pub properties_path: Option<String>,
}

impl AppEnvironment {
    /// Build signals from an orchestrator-supplied key-value map
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self {
            requested: vars.get(REQUESTED_VAR).is_some_and(|v| parse_flag(v)),
            download_uri: vars.get(DOWNLOAD_URI_VAR).cloned(),
            properties_path: vars.get(PROPERTIES_VAR).cloned(),
        }
    }

    /// Build signals straight from the process environment
    pub fn from_process_env() -> Self {
        Self {
            requested: std::env::var(REQUESTED_VAR).is_ok_and(|v| parse_flag(&v)),
            download_uri: std::env::var(DOWNLOAD_URI_VAR).ok(),
            properties_path: std::env::var(PROPERTIES_VAR).ok(),
        }
    }

    /// Mark the agent as requested
    pub fn with_requested(mut self, requested: bool) -> Self {
        self.requested = requested;
        self
    }

    /// Set the fallback archive URI
    pub fn with_download_uri(mut self, uri: impl Into<String>) -> Self {
        self.download_uri = Some(uri.into());
        self
    }

    /// Set the properties file path
    pub fn with_properties_path(mut self, path: impl Into<String>) -> Self {
        self.properties_path = Some(path.into());
        self
    }
}

/// Interpret a boolean-like environment value
fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
