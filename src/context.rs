//! Staging context
//!
//! Everything a framework receives at construction time for one staging run.

use std::path::PathBuf;

use crate::config::FrameworkConfig;
use crate::environment::AppEnvironment;
use crate::paths::CommonPaths;

/// Construction-time inputs for a single staging run
///
/// The orchestrator builds one of these per run. The application root is
/// optional so detection can run before the root is known; compile refuses
/// to proceed without it. Common paths default in when the orchestrator
/// supplies none.
#[derive(Debug, Clone, Default)]
pub struct StagingContext {
    /// Application root being staged
    pub app_dir: Option<PathBuf>,

    /// Operator configuration for this framework
    pub configuration: FrameworkConfig,

    /// Shared droplet path descriptor
    pub common_paths: CommonPaths,

    /// Signals from the application environment
    pub environment: AppEnvironment,
}

impl StagingContext {
    /// Create a context with no application root and default common paths
    pub fn new(configuration: FrameworkConfig, environment: AppEnvironment) -> Self {
        Self {
            app_dir: None,
            configuration,
            common_paths: CommonPaths::default(),
            environment,
        }
    }

    /// Set the application root
    pub fn with_app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = Some(app_dir.into());
        self
    }

    /// Replace the default common paths descriptor
    pub fn with_common_paths(mut self, common_paths: CommonPaths) -> Self {
        self.common_paths = common_paths;
        self
    }
}
