// Test fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Extension directory nested inside a temp root
///
/// The root leaves room for files that sit *outside* the served
/// directory, which traversal tests try to reach.
#[allow(dead_code)] // Used in integration tests
pub struct VsixDir {
    pub root: TempDir,
    pub dir: PathBuf,
}

impl VsixDir {
    /// Create an empty extension directory
    #[allow(dead_code)]
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let dir = root.path().join("vsix_files");
        fs::create_dir(&dir).expect("Failed to create vsix dir");
        Self { root, dir }
    }

    /// Create an extension directory holding the given files
    #[allow(dead_code)]
    pub fn with_files<C: AsRef<[u8]>>(files: &[(&str, C)]) -> Self {
        let fixture = Self::empty();
        for (name, content) in files {
            fixture.add_file(name, content.as_ref());
        }
        fixture
    }

    /// Path of a directory that was never created
    #[allow(dead_code)]
    pub fn missing() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let dir = root.path().join("does_not_exist");
        Self { root, dir }
    }

    #[allow(dead_code)]
    pub fn add_file(&self, name: &str, content: &[u8]) {
        fs::write(self.dir.join(name), content).expect("Failed to write fixture file");
    }

    /// Write a file next to (not inside) the extension directory
    #[allow(dead_code)]
    pub fn add_outside_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write outside file");
        path
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.dir
    }
}
