//! Dependency graph construction and cycle enumeration
//!
//! The [`Analyzer`] owns the per-run state: a memoized edge list per source
//! file (each file is read and parsed at most once, however many times the
//! traversal reaches it) and the diagnostic sets for references that could
//! not be resolved. Cycle enumeration is a depth-first walk sharing one
//! fully-explored marker set across all entry files, so subgraphs proven
//! cycle-complete are never walked twice.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::parser::SpecifierParser;
use crate::resolver::{ModuleResolver, Resolution};

/// An ordered sequence of nodes where each references the next and the last
/// element repeats the first, closing the loop.
///
/// Nodes are absolute paths during detection and base-relative strings once
/// encoded into a golden. A direct self-reference is the length-2 chain
/// `[a, a]`.
pub type ReferenceChain<T = PathBuf> = Vec<T>;

/// Builds the reference graph and enumerates cycles
pub struct Analyzer {
    resolver: Box<dyn ModuleResolver>,
    parser: Box<dyn SpecifierParser>,

    /// Memoized outgoing edges per file; presence means the file was parsed
    edges: HashMap<PathBuf, Vec<PathBuf>>,

    unresolved_modules: BTreeSet<String>,
    unresolved_files: BTreeMap<PathBuf, Vec<String>>,
    unreadable_files: BTreeMap<PathBuf, String>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("parser", &self.parser.name())
            .field("parsed_files", &self.edges.len())
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Create an analyzer over the given resolution and parsing capabilities.
    #[must_use]
    pub fn new(resolver: Box<dyn ModuleResolver>, parser: Box<dyn SpecifierParser>) -> Self {
        Self {
            resolver,
            parser,
            edges: HashMap::new(),
            unresolved_modules: BTreeSet::new(),
            unresolved_files: BTreeMap::new(),
            unreadable_files: BTreeMap::new(),
        }
    }

    /// Get the outgoing reference edges of `file`, computing and caching them
    /// on first request.
    ///
    /// Unresolved references are recorded in the diagnostic sets and never
    /// become edges. An unreadable file contributes zero edges; the failure
    /// is recorded and the run continues.
    pub fn reference_edges(&mut self, file: &Path) -> &[PathBuf] {
        if !self.edges.contains_key(file) {
            let computed = self.compute_edges(file);
            self.edges.insert(file.to_path_buf(), computed);
        }
        self.edges.get(file).map_or(&[], Vec::as_slice)
    }

    fn compute_edges(&mut self, file: &Path) -> Vec<PathBuf> {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                warn!("failed to read {}: {err}", file.display());
                self.unreadable_files.insert(file.to_path_buf(), err.to_string());
                return Vec::new();
            },
        };

        let mut edges = Vec::new();
        let mut seen_targets = HashSet::new();
        let mut seen_specifiers = HashSet::new();

        for specifier in self.parser.parse_specifiers(&content) {
            if !seen_specifiers.insert(specifier.clone()) {
                continue;
            }
            match self.resolver.resolve(file, &specifier) {
                Resolution::Resolved(target) => {
                    if seen_targets.insert(target.clone()) {
                        edges.push(target);
                    }
                },
                Resolution::Unresolved(specifier) => {
                    debug!("unresolved in {}: {specifier}", file.display());
                    self.unresolved_modules.insert(specifier.clone());
                    self.unresolved_files.entry(file.to_path_buf()).or_default().push(specifier);
                },
            }
        }

        edges
    }

    /// Enumerate all cycles reachable from `entry`.
    ///
    /// The `explored` set is shared across every entry file of a run: a node
    /// it contains has had its reachable subgraph fully walked, so every
    /// cycle through it has already been reported and the traversal prunes
    /// there. Each node enters the set exactly once per run.
    pub fn find_cycles(
        &mut self,
        entry: &Path,
        explored: &mut HashSet<PathBuf>,
    ) -> Vec<ReferenceChain> {
        let mut cycles = Vec::new();
        let mut stack = Vec::new();
        self.visit(entry.to_path_buf(), &mut stack, explored, &mut cycles);
        cycles
    }

    fn visit(
        &mut self,
        file: PathBuf,
        stack: &mut Vec<PathBuf>,
        explored: &mut HashSet<PathBuf>,
        cycles: &mut Vec<ReferenceChain>,
    ) {
        // A node already on the active path closes a cycle: emit the slice
        // from its first occurrence, then the node again to close the loop.
        if let Some(position) = stack.iter().position(|node| *node == file) {
            let mut chain: ReferenceChain = stack[position..].to_vec();
            chain.push(file);
            cycles.push(chain);
            return;
        }

        if explored.contains(&file) {
            return;
        }

        stack.push(file.clone());
        let targets = self.reference_edges(&file).to_vec();
        for target in targets {
            self.visit(target, stack, explored, cycles);
        }
        stack.pop();

        // The whole reachable subgraph of `file` has been walked, so every
        // cycle through it is already emitted. Later traversals prune here.
        explored.insert(file);
    }

    /// Specifiers that could not be mapped to a project file, sorted.
    #[must_use]
    pub const fn unresolved_modules(&self) -> &BTreeSet<String> {
        &self.unresolved_modules
    }

    /// Source files with unresolvable references and the specifiers each
    /// failed on, sorted by file.
    #[must_use]
    pub const fn unresolved_files(&self) -> &BTreeMap<PathBuf, Vec<String>> {
        &self.unresolved_files
    }

    /// Source files that could not be read, with the error text, sorted.
    #[must_use]
    pub const fn unreadable_files(&self) -> &BTreeMap<PathBuf, String> {
        &self.unreadable_files
    }

    /// Total number of unresolved-import diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.unresolved_modules.len() + self.unresolved_files.len()
    }
}
