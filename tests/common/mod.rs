//! Common test utilities for BundleMe integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a text file, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write raw bytes, creating parent directories
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of a file inside the project
    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }
}

/// Body of a `<! NAME !>` section, without the trailing blank line
#[allow(dead_code)]
pub fn section<'a>(bundle: &'a str, name: &str) -> &'a str {
    let marker = format!("<! {name} !>\n");
    let start = bundle
        .find(&marker)
        .map(|i| i + marker.len())
        .expect("section not found");
    let rest = &bundle[start..];
    let end = rest.find("\n\n").unwrap_or(rest.len());
    &rest[..end]
}

/// Bundle text with the random BUNDLE-ID blanked out
#[allow(dead_code)]
pub fn without_bundle_id(bundle: &str) -> String {
    let id = section(bundle, "BUNDLE-ID");
    bundle.replacen(id, "\"<id>\"", 1)
}

/// Read a bundle written at `path`
#[allow(dead_code)]
pub fn read_bundle(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read bundle")
}
