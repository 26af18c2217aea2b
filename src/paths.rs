//! Path normalization helpers
//!
//! Golden files must be byte-identical across platforms and runs, so every
//! path that ends up in a golden (or in rendered output) goes through the
//! helpers in this module: lexical normalization for node identity,
//! base-relative rewriting, and forward-slash conversion.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a forward-slash string, regardless of platform.
#[must_use]
pub fn to_forward_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where possible.
///
/// Normalization is purely textual. Symlinks are deliberately not resolved so
/// that node identity stays deterministic and independent of the checkout's
/// filesystem layout.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                },
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}

/// Compute `path` relative to `base`.
///
/// Both paths must be absolute and normalized. Where `path` does not live
/// under `base`, the result climbs with `..` components, mirroring how
/// relative paths behave in golden files produced on differently rooted
/// checkouts.
#[must_use]
pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    let base_components: Vec<Component> = base.components().collect();
    let path_components: Vec<Component> = path.components().collect();

    let common = base_components
        .iter()
        .zip(path_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_components.len() {
        out.push(Component::ParentDir);
    }
    for component in &path_components[common..] {
        out.push(component);
    }
    out
}

/// Convert an absolute path to its base-relative forward-slash form.
#[must_use]
pub fn relative_forward_slash(base: &Path, path: &Path) -> String {
    to_forward_slash(&relative_to(base, path))
}
