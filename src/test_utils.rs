//! Test utilities for building temporary directory trees.
//!
//! Compiled only with the `test-utils` feature, for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Removed from disk when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// The `foo` / `folder/bar` layout most command tests use.
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.add_file("foo", "foo");
        dir.add_file("folder/bar", "bar");
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `path` pointing at `target` (which need not exist).
    #[cfg(unix)]
    pub fn add_symlink(&self, path: &str, target: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
