//! Error types for the Waratek agent framework
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Usage errors (missing application root, compile before detect) and the
//! single download re-wrap are the fatal paths; an agent that is simply not
//! requested is absence, not an error.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for framework operations
#[derive(Error, Diagnostic, Debug)]
pub enum WaratekAgentError {
    // Compile usage errors
    #[error("Application directory must be provided")]
    #[diagnostic(
        code(waratek_agent::compile::app_dir_missing),
        help("The staging orchestrator must set the application root on the staging context")
    )]
    AppDirMissing,

    #[error("Agent archive URI is not available; detect must be invoked before compile")]
    #[diagnostic(
        code(waratek_agent::compile::uri_unresolved),
        help(
            "Set 'uri' in the framework configuration, or have the application point waratek_treasure at the agent archive"
        )
    )]
    DownloadUriUnresolved,

    // Compile filesystem/download errors
    #[error("Failed to create agent directory: {path}")]
    #[diagnostic(code(waratek_agent::compile::agent_home_create_failed))]
    AgentHomeCreateFailed { path: String, reason: String },

    #[error("Unable to download the Waratek agent archive from {uri}: {reason}")]
    #[diagnostic(
        code(waratek_agent::compile::download_failed),
        help("Ensure the agent archive at this URI is available and accessible")
    )]
    AgentDownloadFailed { uri: String, reason: String },

    // Configuration errors
    #[error("Failed to read framework configuration: {path}")]
    #[diagnostic(code(waratek_agent::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse framework configuration: {path}")]
    #[diagnostic(
        code(waratek_agent::config::parse_failed),
        help("Expected YAML with 'enabled', 'uri' and 'version' keys")
    )]
    ConfigParseFailed { path: String, reason: String },
}

impl From<serde_yaml::Error> for WaratekAgentError {
    fn from(err: serde_yaml::Error) -> Self {
        WaratekAgentError::ConfigParseFailed {
            path: "inline YAML".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WaratekAgentError>;
