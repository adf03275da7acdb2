//! Common test utilities for staging integration tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;
use waratek_agent::{AgentDownloader, DownloadResult};

/// An application directory under staging
#[allow(dead_code)]
pub struct TestApp {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the application root
    pub path: PathBuf,
}

impl TestApp {
    /// Create a new application directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the application root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the application root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists under the application root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded download request
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub version: String,
    pub uri: String,
    pub name: String,
    pub target_dir: PathBuf,
}

/// Recording stand-in for the buildpack's download machinery
///
/// On success it unpacks a minimal agent layout (just `waratek.jar`) into
/// the target directory; a failing instance returns the configured message.
#[derive(Debug, Default)]
pub struct FakeDownloader {
    requests: Mutex<Vec<DownloadRequest>>,
    fail_with: Option<String>,
}

impl FakeDownloader {
    /// A downloader whose every request succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// A downloader whose every request fails with the given message
    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    /// The requests recorded so far, in call order
    pub fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.lock().expect("Request log poisoned").clone()
    }
}

impl AgentDownloader for FakeDownloader {
    fn download_zip(
        &self,
        version: &str,
        uri: &str,
        name: &str,
        target_dir: &Path,
    ) -> DownloadResult {
        self.requests
            .lock()
            .expect("Request log poisoned")
            .push(DownloadRequest {
                version: version.to_string(),
                uri: uri.to_string(),
                name: name.to_string(),
                target_dir: target_dir.to_path_buf(),
            });
        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => {
                std::fs::write(target_dir.join("waratek.jar"), b"agent jar")?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = TestApp::new();
        assert!(app.path.exists());
    }

    #[test]
    fn test_app_file_operations() {
        let app = TestApp::new();
        app.write_file("rules/custom.props", "rule = allow");
        assert!(app.file_exists("rules/custom.props"));
        assert_eq!(app.read_file("rules/custom.props"), "rule = allow");
    }

    #[test]
    fn test_fake_downloader_records_and_unpacks() {
        let app = TestApp::new();
        let downloader = FakeDownloader::new();
        downloader
            .download_zip(
                "waratek-secure-19.0.0",
                "https://example.com/agent.zip",
                "Waratek Agent",
                &app.path,
            )
            .expect("Download should succeed");

        assert!(app.file_exists("waratek.jar"));
        let requests = downloader.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].uri, "https://example.com/agent.zip");
    }

    #[test]
    fn test_fake_downloader_failure() {
        let app = TestApp::new();
        let downloader = FakeDownloader::failing("connection refused");
        let result = downloader.download_zip("v", "https://example.com/agent.zip", "n", &app.path);
        assert!(result.is_err());
        assert!(!app.file_exists("waratek.jar"));
    }
}
