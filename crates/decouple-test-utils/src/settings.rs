//! [`TestSettingsDir`] builder for settings file fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding `settings.ini` and/or `.env` fixtures.
///
/// # Example
///
/// ```rust,no_run
/// use decouple_test_utils::TestSettingsDir;
///
/// let dir = TestSettingsDir::new().with_env_file("DEBUG=yes\n");
/// dir.assert_file_exists(".env");
/// ```
pub struct TestSettingsDir {
    temp_dir: TempDir,
}

impl Default for TestSettingsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSettingsDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `.env` with raw `content`.
    pub fn with_env_file(self, content: &str) -> Self {
        self.write(".env", content);
        self
    }

    /// Write raw `settings.ini` content.
    pub fn with_ini_file(self, content: &str) -> Self {
        self.write("settings.ini", content);
        self
    }

    /// Write `settings.ini` with a `[settings]` section holding `pairs`.
    pub fn with_settings(self, pairs: &[(&str, &str)]) -> Self {
        let mut content = String::from("[settings]\n");
        for (key, value) in pairs {
            content.push_str(&format!("{key} = {value}\n"));
        }
        self.with_ini_file(&content)
    }

    /// Write any file relative to the root.
    pub fn write(&self, name: &str, content: &str) {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write fixture {}: {e}", path.display()));
    }

    /// Assert that `name` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
