//! Module reference resolution
//!
//! Maps a raw specifier found inside a source file to the project file it
//! names, or reports it as unresolved (third-party and generated modules
//! commonly are). Resolution is a pluggable capability behind
//! [`ModuleResolver`]; the built-in [`PathResolver`] implements the policy
//! supplied by the config file: relative paths, alias prefixes, extension
//! probing and package-root (index file) detection.
//!
//! Resolution is total and deterministic: it never fails a run, and the same
//! inputs produce the same outcome for the duration of a run.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::paths;

/// Outcome of resolving one specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The specifier maps to an in-project file
    Resolved(PathBuf),
    /// The specifier could not be mapped; carries the raw specifier text
    Unresolved(String),
}

/// Resolves module specifiers to project files
pub trait ModuleResolver: Send + Sync {
    /// Resolve `specifier` as referenced from `source_file`.
    fn resolve(&self, source_file: &Path, specifier: &str) -> Resolution;
}

/// Config-driven filesystem resolver
#[derive(Debug)]
pub struct PathResolver {
    /// Alias prefixes, longest first so the most specific mapping wins
    aliases: Vec<(String, PathBuf)>,
    extensions: Vec<String>,
    index_files: Vec<String>,
}

impl PathResolver {
    /// Build a resolver from the loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut aliases: Vec<(String, PathBuf)> = config
            .resolve
            .aliases
            .iter()
            .map(|(prefix, target)| (prefix.clone(), config.alias_target(target)))
            .collect();
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self {
            aliases,
            extensions: config.resolve.extensions.clone(),
            index_files: config.resolve.index_files.clone(),
        }
    }

    /// Map a specifier to the unprobed candidate path, if any policy applies.
    fn candidate(&self, source_file: &Path, specifier: &str) -> Option<PathBuf> {
        if specifier.starts_with("./") || specifier.starts_with("../") {
            let parent = source_file.parent()?;
            return Some(paths::normalize(&parent.join(specifier)));
        }

        for (prefix, target) in &self.aliases {
            if specifier == prefix {
                return Some(target.clone());
            }
            if let Some(rest) = specifier.strip_prefix(prefix.as_str()) {
                if let Some(rest) = rest.strip_prefix('/') {
                    return Some(paths::normalize(&target.join(rest)));
                }
            }
        }

        None
    }

    /// Probe a candidate path: as-is, with each extension appended, then as a
    /// directory containing an index file.
    fn probe(&self, candidate: &Path) -> Option<PathBuf> {
        if candidate.is_file() {
            return Some(candidate.to_path_buf());
        }

        for extension in &self.extensions {
            let with_extension = PathBuf::from(format!(
                "{}.{}",
                candidate.to_string_lossy(),
                extension
            ));
            if with_extension.is_file() {
                return Some(with_extension);
            }
        }

        if candidate.is_dir() {
            for index in &self.index_files {
                let index_path = candidate.join(index);
                if index_path.is_file() {
                    return Some(index_path);
                }
            }
        }

        None
    }
}

impl ModuleResolver for PathResolver {
    fn resolve(&self, source_file: &Path, specifier: &str) -> Resolution {
        self.candidate(source_file, specifier)
            .and_then(|candidate| self.probe(&candidate))
            .map_or_else(
                || Resolution::Unresolved(specifier.to_string()),
                Resolution::Resolved,
            )
    }
}
