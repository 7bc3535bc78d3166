//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a (possibly nested) empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Make `path` unlistable and report whether the permission actually bites.
    ///
    /// Returns `false` when the current user can still read the directory
    /// (e.g. running as root), so callers can skip permission tests.
    #[cfg(unix)]
    pub fn make_unreadable(&self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        let mut perms = fs::metadata(&full_path)
            .expect("Failed to stat dir")
            .permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&full_path, perms).expect("Failed to set permissions");
        fs::read_dir(&full_path).is_err()
    }

    /// Make `path` read-only (`r--r--r--`): it can be listed but its children
    /// cannot be stat'ed. Returns `false` when that does not bite, as above.
    #[cfg(unix)]
    pub fn make_unsearchable(&self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        let mut perms = fs::metadata(&full_path)
            .expect("Failed to stat dir")
            .permissions();
        perms.set_mode(0o444);
        fs::set_permissions(&full_path, perms).expect("Failed to set permissions");

        fs::read_dir(&full_path)
            .ok()
            .and_then(|mut entries| entries.next())
            .and_then(Result::ok)
            .is_some_and(|entry| fs::metadata(entry.path()).is_err())
    }

    /// Undo `make_unreadable` / `make_unsearchable` so the temp dir can be cleaned up.
    #[cfg(unix)]
    pub fn make_readable(&self, path: &str) {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        let mut perms = fs::metadata(&full_path)
            .expect("Failed to stat dir")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&full_path, perms).expect("Failed to restore permissions");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
