//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing depcycle components.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use depcycle::config::Config;

/// A temporary project tree with a config file and source files
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file (creating parent directories), returning its absolute path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        depcycle::paths::normalize(&full_path)
    }

    /// Write `.depcycle.toml` with the given body, returning its path.
    pub fn write_config(&self, body: &str) -> PathBuf {
        self.write(".depcycle.toml", body)
    }

    /// Write a config selecting every `.ts` file under the root, with the
    /// golden at `goldens/deps.json`.
    pub fn write_default_config(&self) -> PathBuf {
        self.write_config(
            r#"
base_dir = "."
golden_file = "goldens/deps.json"
glob = "**/*.ts"
"#,
        )
    }

    /// Load the project's config file.
    pub fn config(&self) -> Config {
        Config::load(&self.dir.path().join(".depcycle.toml")).expect("config loads")
    }
}
