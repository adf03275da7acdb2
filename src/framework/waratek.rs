//! Waratek agent framework
//!
//! Conditionally stages the Waratek Java agent into an application droplet.
//! Applications opt in through their environment; operators gate and pin the
//! agent through configuration. When both agree, `compile` places the agent
//! under `.waratek/` in the application root and `release` injects the JVM
//! options that activate it at runtime.

use std::fs;

use tracing::{debug, info};

use crate::context::StagingContext;
use crate::download::AgentDownloader;
use crate::error::{Result, WaratekAgentError};
use crate::opts::JavaOpts;

/// Jar the unpacked archive is expected to place at the install root
const AGENT_JAR: &str = "waratek.jar";

/// Subdirectory created under the application root for the agent
const AGENT_DIR: &str = ".waratek";

/// Guest JVM home directory the agent containerizes
const GUEST_JAVA_DIR: &str = ".java";

/// Version identifier reported by detection
///
/// Detection reports this constant regardless of the configured version
/// value; the configured value only gates whether detection succeeds.
const VERSION_IDENTIFIER: &str = "waratek-secure-19.0.0";

/// Human-readable component name handed to the download capability
const DOWNLOAD_NAME: &str = "Waratek Agent";

/// System property naming the containerized JVM home
const CONTAINER_HOME_PROPERTY: &str = "com.waratek.ContainerHome";

/// System property naming the agent rules/properties file
const PROPERTIES_PROPERTY: &str = "com.waratek.WaratekProperties";

/// Agent version and archive source pinned by a successful detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAgent {
    /// Version identifier reported to the orchestrator
    pub version: String,

    /// Archive source: the configuration value, else the environment fallback
    pub uri: Option<String>,
}

impl ResolvedAgent {
    /// Versioned archive file name
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.version)
    }
}

/// The Waratek agent staging framework
///
/// One instance serves one staging run. `detect` must run (and succeed)
/// before `compile`; `release` only reads the context, never the resolved
/// reference.
#[derive(Debug)]
pub struct WaratekAgent {
    context: StagingContext,
    resolved: Option<ResolvedAgent>,
}

impl WaratekAgent {
    /// Create the framework for one staging run
    pub fn new(context: StagingContext) -> Self {
        Self {
            context,
            resolved: None,
        }
    }

    /// Decide whether the agent applies to this application
    ///
    /// Returns the version identifier when the application requested the
    /// agent, the operator enabled the framework and the configuration pins
    /// a version. Otherwise returns `None` and pins nothing, so a later
    /// `compile` refuses to run.
    pub fn detect(&mut self) -> Option<String> {
        if !self.agent_required() {
            debug!(
                requested = self.context.environment.requested,
                enabled = self.context.configuration.enabled,
                "waratek agent not applicable"
            );
            return None;
        }
        self.process_config()
    }

    /// Stage the agent archive into the droplet
    ///
    /// Creates `.waratek/` under the application root and delegates the
    /// fetch-and-unpack to the download capability. Fails before touching
    /// the filesystem when the application root is missing or no archive
    /// URI was resolved by detection.
    pub fn compile(&self, downloader: &dyn AgentDownloader) -> Result<()> {
        let app_dir = self
            .context
            .app_dir
            .as_ref()
            .ok_or(WaratekAgentError::AppDirMissing)?;
        let resolved = self
            .resolved
            .as_ref()
            .ok_or(WaratekAgentError::DownloadUriUnresolved)?;
        let uri = resolved
            .uri
            .as_ref()
            .ok_or(WaratekAgentError::DownloadUriUnresolved)?;

        let agent_home = app_dir.join(AGENT_DIR);
        fs::create_dir_all(&agent_home).map_err(|e| WaratekAgentError::AgentHomeCreateFailed {
            path: agent_home.display().to_string(),
            reason: e.to_string(),
        })?;

        info!(version = %resolved.version, uri = %uri, "downloading waratek agent");
        downloader
            .download_zip(&resolved.version, uri, DOWNLOAD_NAME, &agent_home)
            .map_err(|e| WaratekAgentError::AgentDownloadFailed {
                uri: uri.clone(),
                reason: e.to_string(),
            })?;
        debug!(target_dir = %agent_home.display(), "waratek agent staged");
        Ok(())
    }

    /// Contribute the agent's JVM options to the runtime command line
    ///
    /// Appends the `-javaagent:` option, the container-home property and,
    /// when the application names one, the properties-file property. Paths
    /// are joined under the droplet-relative application root so they stay
    /// valid after relocation.
    pub fn release(&self, java_opts: &mut JavaOpts) {
        // The staging protocol owns stdout and stderr during this phase;
        // writing to either blocks staging. Append options, print nothing.
        let app_dir = &self.context.common_paths.relative_location;

        let agent_jar = app_dir.join(AGENT_DIR).join(AGENT_JAR);
        java_opts.add_javaagent(&agent_jar);

        let java_home = app_dir.join(GUEST_JAVA_DIR);
        java_opts.add_system_property(CONTAINER_HOME_PROPERTY, java_home.display());

        // Without an application-supplied properties file the rules bundled
        // inside the downloaded archive apply at runtime.
        if let Some(properties) = &self.context.environment.properties_path {
            let properties_file = app_dir.join(properties);
            java_opts.add_system_property(PROPERTIES_PROPERTY, properties_file.display());
        }
    }

    /// The reference pinned by the last successful detection, if any
    pub fn resolved(&self) -> Option<&ResolvedAgent> {
        self.resolved.as_ref()
    }

    fn agent_required(&self) -> bool {
        self.context.environment.requested && self.context.configuration.enabled
    }

    /// Resolve the archive source and pin the version identifier
    ///
    /// The URI prefers the configuration value and falls back to the
    /// environment-supplied one; it may stay unresolved, which `compile`
    /// reports as a usage error. Without a configured version nothing is
    /// pinned at all.
    fn process_config(&mut self) -> Option<String> {
        let uri = self
            .context
            .configuration
            .uri
            .clone()
            .or_else(|| self.context.environment.download_uri.clone());

        if self.context.configuration.version.is_none() {
            debug!("no agent version configured, skipping");
            return None;
        }

        let resolved = ResolvedAgent {
            version: VERSION_IDENTIFIER.to_string(),
            uri,
        };
        debug!(version = %resolved.version, uri = ?resolved.uri, "waratek agent detected");
        self.resolved = Some(resolved);
        Some(VERSION_IDENTIFIER.to_string())
    }
}
