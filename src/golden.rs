//! Golden baseline encoding and comparison
//!
//! A golden is the committed list of currently-accepted cycles. It must be
//! byte-identical across runs over unchanged sources and human-diffable in
//! version control, so chains are stored as base-relative forward-slash
//! paths, each chain is rotated to a canonical starting node, and the outer
//! list is sorted. Discovery order never leaks into the artifact.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::ReferenceChain;
use crate::paths;

/// A single accepted cycle: base-relative forward-slash paths, with the
/// first path repeated at the end to close the loop
pub type CircularDependency = Vec<String>;

/// Canonical, persistable set of cycles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Golden {
    chains: Vec<CircularDependency>,
}

/// Symmetric difference between a current golden and a baseline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoldenDiff {
    /// Cycles present in the current run but not in the baseline
    pub new_cycles: Vec<CircularDependency>,
    /// Cycles present in the baseline but absent from the current run
    pub fixed_cycles: Vec<CircularDependency>,
}

impl GoldenDiff {
    /// True when current state and baseline agree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_cycles.is_empty() && self.fixed_cycles.is_empty()
    }
}

impl Golden {
    /// Encode detected chains into their canonical golden form.
    ///
    /// Node identities are rewritten relative to `base_dir` with forward
    /// slashes, every chain is rotated to start at its lexicographically
    /// smallest member, and the chain list is sorted.
    #[must_use]
    pub fn from_chains(chains: &[ReferenceChain], base_dir: &Path) -> Self {
        Self::from_relative(
            chains
                .iter()
                .map(|chain| {
                    chain
                        .iter()
                        .map(|node| paths::relative_forward_slash(base_dir, node))
                        .collect()
                })
                .collect(),
        )
    }

    /// Canonicalize an already-relative chain list.
    ///
    /// Applied to loaded baselines as well, so hand-edited goldens with
    /// rotated or unsorted entries still compare correctly, and re-encoding
    /// an encoded golden is a no-op.
    #[must_use]
    pub fn from_relative(chains: Vec<CircularDependency>) -> Self {
        let mut chains: Vec<CircularDependency> =
            chains.iter().map(|chain| canonicalize_rotation(chain)).collect();
        chains.sort();
        Self { chains }
    }

    /// The decoded chain list, for comparison purposes only.
    #[must_use]
    pub fn chains(&self) -> &[CircularDependency] {
        &self.chains
    }

    /// Number of cycles in the golden.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// True when the golden records no cycles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Classify the symmetric difference against a baseline.
    ///
    /// Chains present in both sides are ignored; the rest are purely new
    /// (only here) or purely fixed (only in the baseline). Both result lists
    /// preserve the order of their source golden.
    #[must_use]
    pub fn diff(&self, baseline: &Self) -> GoldenDiff {
        let current: HashSet<&CircularDependency> = self.chains.iter().collect();
        let expected: HashSet<&CircularDependency> = baseline.chains.iter().collect();

        GoldenDiff {
            new_cycles: self.chains.iter().filter(|c| !expected.contains(*c)).cloned().collect(),
            fixed_cycles: baseline
                .chains
                .iter()
                .filter(|c| !current.contains(*c))
                .cloned()
                .collect(),
        }
    }
}

/// Rotate a chain so it starts at its lexicographically smallest member.
///
/// The closing repetition is stripped before rotating and re-appended after,
/// so `[b, a, b]` and `[a, b, a]` both canonicalize to `[a, b, a]`. A chain
/// missing its closing element is closed in the process, keeping the
/// canonical form total over hand-written input.
fn canonicalize_rotation(chain: &[String]) -> CircularDependency {
    let ring: &[String] = if chain.len() > 1 && chain.first() == chain.last() {
        &chain[..chain.len() - 1]
    } else {
        chain
    };

    if ring.is_empty() {
        return Vec::new();
    }

    let smallest = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(index, _)| index);

    let mut canonical: CircularDependency = Vec::with_capacity(ring.len() + 1);
    canonical.extend_from_slice(&ring[smallest..]);
    canonical.extend_from_slice(&ring[..smallest]);
    canonical.push(ring[smallest].clone());
    canonical
}
