//! Project configuration loading
//!
//! A run is driven by a TOML file (`.depcycle.toml` by default) that selects
//! the participating files, names the golden baseline, and supplies the
//! module resolution policy. All relative paths in the file are resolved
//! against the directory containing it, so the config can be committed and
//! used from any working directory.
//!
//! ```toml
//! base_dir = "src"
//! golden_file = "goldens/circular-deps.json"
//! glob = "src/**/*.ts"
//! ignore = ["**/node_modules/**"]
//!
//! [resolve]
//! extensions = ["ts"]
//! index_files = ["index.ts"]
//!
//! [resolve.aliases]
//! "@app" = "src/app"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths;

/// Default config filename, looked up in the current directory
pub const CONFIG_FILE: &str = ".depcycle.toml";

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the config file
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for one cycle-detection run
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory golden paths are written relative to
    pub base_dir: PathBuf,

    /// Path of the golden baseline artifact
    pub golden_file: PathBuf,

    /// Include pattern selecting the participating files, relative to the
    /// config directory
    pub glob: String,

    /// Exclusion patterns (vendored dependency directories and the like)
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Command printed as the remediation hint when the baseline diverges
    #[serde(default)]
    pub approve_command: Option<String>,

    /// Module resolution policy
    #[serde(default)]
    pub resolve: ResolveConfig,

    /// Directory containing the config file (set during load, absolute)
    #[serde(skip)]
    pub root: PathBuf,
}

/// Module resolution policy supplied by the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveConfig {
    /// Candidate file extensions appended when probing a specifier
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Package-root candidates probed when a specifier maps to a directory
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,

    /// Module-path prefix mapping, e.g. `"@app" = "src/app"`; targets are
    /// relative to the config directory
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_ignore() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_index_files() -> Vec<String> {
    vec!["index.ts".to_string()]
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            index_files: default_index_files(),
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load a config file and anchor its relative paths at the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let path = std::path::absolute(path)?;
        let content = fs::read_to_string(&path)?;
        let mut config: Self = toml::from_str(&content)?;

        // The config always lives in a directory; `absolute` keeps the parent.
        let root = paths::normalize(path.parent().unwrap_or_else(|| Path::new("/")));
        config.base_dir = paths::normalize(&root.join(&config.base_dir));
        config.golden_file = paths::normalize(&root.join(&config.golden_file));
        config.root = root;

        Ok(config)
    }

    /// Rewrite an alias target to its absolute on-disk path.
    #[must_use]
    pub fn alias_target(&self, target: &str) -> PathBuf {
        paths::normalize(&self.root.join(target))
    }
}
