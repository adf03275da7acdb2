//! Download seam
//!
//! The buildpack's shared download machinery (HTTP, caching, zip unpacking)
//! lives outside this crate. Compile reaches it through `AgentDownloader`;
//! the orchestrator supplies the implementation.

use std::path::Path;

/// Outcome of a delegated download
///
/// The boxed error carries whatever the external machinery reports; compile
/// re-wraps it once into its own diagnostic.
pub type DownloadResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// External capability that fetches and unpacks an agent archive
///
/// Implementations download the zip archive at `uri` and unpack it into
/// `target_dir`, leaving at minimum `waratek.jar` at its root. Archive
/// contents, transfer policy and timeouts are the implementation's concern.
pub trait AgentDownloader: Send + Sync + std::fmt::Debug {
    /// Fetch and unpack the archive described by `version` and `uri`
    ///
    /// `name` is the human-readable component name for the implementation's
    /// own progress reporting.
    fn download_zip(
        &self,
        version: &str,
        uri: &str,
        name: &str,
        target_dir: &Path,
    ) -> DownloadResult;
}
