//! Waratek agent staging framework.
//!
//! This crate implements one framework for a cloud application staging
//! pipeline: it conditionally stages the Waratek Java agent into an
//! application droplet and contributes the JVM options that activate it.
//! The surrounding pipeline drives three phases in order:
//! - `detect` decides whether the agent applies and pins its version and
//!   archive source
//! - `compile` creates `.waratek/` in the application root and delegates the
//!   archive download to the orchestrator-supplied [`AgentDownloader`]
//! - `release` appends the agent's JVM options to the caller-owned
//!   [`JavaOpts`]
//!
//! # Example
//!
//! ```rust
//! use waratek_agent::{
//!     AppEnvironment, FrameworkConfig, JavaOpts, StagingContext, WaratekAgent,
//! };
//!
//! let config = FrameworkConfig {
//!     enabled: true,
//!     uri: Some("https://example.com/waratek/agent.zip".to_string()),
//!     version: Some("19.0.0".to_string()),
//! };
//! let environment = AppEnvironment::default().with_requested(true);
//! let context = StagingContext::new(config, environment).with_app_dir("/tmp/app");
//!
//! let mut agent = WaratekAgent::new(context);
//! assert!(agent.detect().is_some());
//!
//! let mut java_opts = JavaOpts::new();
//! agent.release(&mut java_opts);
//! assert_eq!(java_opts.len(), 2);
//! ```

pub mod config;
pub mod context;
pub mod download;
pub mod environment;
pub mod error;
pub mod framework;
pub mod opts;
pub mod paths;

pub use config::FrameworkConfig;
pub use context::StagingContext;
pub use download::{AgentDownloader, DownloadResult};
pub use environment::AppEnvironment;
pub use error::{Result, WaratekAgentError};
pub use framework::{ResolvedAgent, WaratekAgent};
pub use opts::JavaOpts;
pub use paths::CommonPaths;
