//! Tests for golden encoding, canonicalization and diffing

use std::path::PathBuf;

use depcycle::golden::{CircularDependency, Golden};

fn chain(nodes: &[&str]) -> CircularDependency {
    nodes.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Canonicalization Tests
// =============================================================================

#[test]
fn rotations_encode_to_the_same_entry() {
    let first = Golden::from_relative(vec![chain(&["a", "b", "c", "a"])]);
    let second = Golden::from_relative(vec![chain(&["b", "c", "a", "b"])]);
    let third = Golden::from_relative(vec![chain(&["c", "a", "b", "c"])]);

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.chains()[0], chain(&["a", "b", "c", "a"]));
}

#[test]
fn self_loop_is_representable() {
    let golden = Golden::from_relative(vec![chain(&["a", "a"])]);
    assert_eq!(golden.chains()[0], chain(&["a", "a"]));
}

#[test]
fn chains_are_sorted_independent_of_discovery_order() {
    let golden = Golden::from_relative(vec![
        chain(&["z", "y", "z"]),
        chain(&["b", "a", "b"]),
        chain(&["m", "m"]),
    ]);

    assert_eq!(
        golden.chains(),
        &[
            chain(&["a", "b", "a"]),
            chain(&["m", "m"]),
            chain(&["y", "z", "y"]),
        ]
    );
}

#[test]
fn encode_is_idempotent() {
    let golden = Golden::from_relative(vec![
        chain(&["src/b.ts", "src/a.ts", "src/b.ts"]),
        chain(&["src/c.ts", "src/c.ts"]),
    ]);
    let reencoded = Golden::from_relative(golden.chains().to_vec());
    assert_eq!(golden, reencoded);
}

#[test]
fn absolute_chains_become_base_relative_forward_slash() {
    let base = PathBuf::from("/repo/src");
    let chains = vec![vec![
        PathBuf::from("/repo/src/app/b.ts"),
        PathBuf::from("/repo/src/app/a.ts"),
        PathBuf::from("/repo/src/app/b.ts"),
    ]];

    let golden = Golden::from_chains(&chains, &base);
    assert_eq!(
        golden.chains()[0],
        chain(&["app/a.ts", "app/b.ts", "app/a.ts"])
    );
}

#[test]
fn serializes_as_plain_nested_arrays() {
    let golden = Golden::from_relative(vec![chain(&["a", "b", "a"])]);
    let json = serde_json::to_string(&golden).unwrap();
    assert_eq!(json, r#"[["a","b","a"]]"#);

    let empty = Golden::default();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");

    let parsed: Golden = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.chains().len(), 1);
}

// =============================================================================
// Diff Tests
// =============================================================================

#[test]
fn identical_goldens_diff_empty() {
    let golden = Golden::from_relative(vec![chain(&["a", "b", "a"])]);
    let diff = golden.diff(&golden.clone());
    assert!(diff.is_empty());
}

#[test]
fn fixed_cycle_is_classified_fixed() {
    // Baseline has a cycle, current run found none
    let current = Golden::default();
    let baseline = Golden::from_relative(vec![chain(&["a", "b", "a"])]);

    let diff = current.diff(&baseline);
    assert!(diff.new_cycles.is_empty());
    assert_eq!(diff.fixed_cycles, vec![chain(&["a", "b", "a"])]);
}

#[test]
fn new_cycle_is_classified_new() {
    let current = Golden::from_relative(vec![chain(&["a", "b", "a"])]);
    let baseline = Golden::default();

    let diff = current.diff(&baseline);
    assert_eq!(diff.new_cycles, vec![chain(&["a", "b", "a"])]);
    assert!(diff.fixed_cycles.is_empty());
}

#[test]
fn shared_chains_appear_in_neither_set() {
    let current = Golden::from_relative(vec![
        chain(&["a", "b", "a"]),
        chain(&["c", "d", "c"]),
    ]);
    let baseline = Golden::from_relative(vec![
        chain(&["a", "b", "a"]),
        chain(&["e", "f", "e"]),
    ]);

    let diff = current.diff(&baseline);
    assert_eq!(diff.new_cycles, vec![chain(&["c", "d", "c"])]);
    assert_eq!(diff.fixed_cycles, vec![chain(&["e", "f", "e"])]);
}

#[test]
fn diff_is_symmetric() {
    let x = Golden::from_relative(vec![
        chain(&["a", "b", "a"]),
        chain(&["c", "d", "c"]),
    ]);
    let y = Golden::from_relative(vec![
        chain(&["c", "d", "c"]),
        chain(&["e", "e"]),
    ]);

    let forward = x.diff(&y);
    let backward = y.diff(&x);
    assert_eq!(forward.new_cycles, backward.fixed_cycles);
    assert_eq!(forward.fixed_cycles, backward.new_cycles);
}

#[test]
fn rotated_baseline_matches_current() {
    // A hand-edited baseline may store a different rotation of the same ring
    let current = Golden::from_relative(vec![chain(&["a", "b", "c", "a"])]);
    let baseline = Golden::from_relative(vec![chain(&["c", "a", "b", "c"])]);

    assert!(current.diff(&baseline).is_empty());
}
