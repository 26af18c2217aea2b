//! Source file selection
//!
//! Expands the configured include pattern into the set of files that
//! participate in the dependency graph. The walk is rooted at the config
//! directory, skips hidden entries, drops anything matching an ignore
//! pattern, and returns a sorted list so runs are deterministic.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::Config;
use crate::paths;

/// Errors that can occur while selecting source files
#[derive(Debug, Error)]
pub enum SourceError {
    /// Scan root does not exist
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// An include or ignore pattern failed to compile
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// The underlying compile error
        source: PatternError,
    },

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Selects the files participating in one run
#[derive(Debug)]
pub struct SourceSelector {
    root: PathBuf,
    include: Pattern,
    ignore: Vec<Pattern>,
}

impl SourceSelector {
    /// Build a selector from the loaded config.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        if !config.root.is_dir() {
            return Err(SourceError::RootNotFound(config.root.clone()));
        }

        let include = compile(&config.glob)?;
        let ignore = config.ignore.iter().map(|p| compile(p)).collect::<Result<_, _>>()?;

        Ok(Self {
            root: config.root.clone(),
            include,
            ignore,
        })
    }

    /// Get the scan root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect all matching files as normalized absolute paths, sorted.
    pub fn collect(&self) -> Result<Vec<PathBuf>, SourceError> {
        let mut matches = Vec::new();
        let root = &self.root;

        for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == root {
                return true;
            }
            !Self::is_hidden(e)
        }) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);

            if self.matches(relative) {
                matches.push(paths::normalize(path));
            }
        }

        // Sort for deterministic traversal order
        matches.sort();
        Ok(matches)
    }

    /// Check whether a root-relative path is selected.
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.include.matches_path_with(relative, options)
            && !self.ignore.iter().any(|p| p.matches_path_with(relative, options))
    }

    /// Check if an entry is hidden (starts with .)
    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}

fn compile(pattern: &str) -> Result<Pattern, SourceError> {
    Pattern::new(pattern).map_err(|source| SourceError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
