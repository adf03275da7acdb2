//! Droplet-relative path handling
//!
//! The orchestrator may relocate the application root between staging and
//! runtime; options emitted during release must stay valid after that move,
//! so every emitted path is joined under a relocatable base.

use std::path::PathBuf;

/// Shared droplet path descriptor
///
/// `relative_location` is the application root as seen from the runtime
/// working directory. It defaults to `.` until the orchestrator re-points it
/// for a relocated droplet layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPaths {
    /// Application root relative to the runtime working directory
    pub relative_location: PathBuf,
}

impl CommonPaths {
    /// Create a descriptor with the default relative location
    pub fn new() -> Self {
        Self {
            relative_location: PathBuf::from("."),
        }
    }

    /// Re-point the application root for a relocated droplet layout
    pub fn set_relative_location(&mut self, location: impl Into<PathBuf>) {
        self.relative_location = location.into();
    }
}

impl Default for CommonPaths {
    fn default() -> Self {
        Self::new()
    }
}
