//! Tests for source file selection

use std::path::Path;

use depcycle::sources::SourceSelector;

use crate::common::TestProject;

fn collect(project: &TestProject) -> Vec<String> {
    let selector = SourceSelector::from_config(&project.config()).unwrap();
    selector
        .collect()
        .unwrap()
        .iter()
        .map(|p| {
            depcycle::paths::relative_forward_slash(
                &depcycle::paths::normalize(project.path()),
                p,
            )
        })
        .collect()
}

#[test]
fn include_pattern_selects_matching_files() {
    let project = TestProject::new();
    project.write_config(
        "base_dir = \".\"\ngolden_file = \"deps.json\"\nglob = \"src/**/*.ts\"\n",
    );
    project.write("src/a.ts", "");
    project.write("src/app/b.ts", "");
    project.write("src/readme.md", "");
    project.write("top.ts", "");

    assert_eq!(collect(&project), vec!["src/a.ts", "src/app/b.ts"]);
}

#[test]
fn results_are_sorted() {
    let project = TestProject::new();
    project.write_default_config();
    project.write("z.ts", "");
    project.write("a.ts", "");
    project.write("m/mid.ts", "");

    assert_eq!(collect(&project), vec!["a.ts", "m/mid.ts", "z.ts"]);
}

#[test]
fn ignore_patterns_exclude_vendored_trees() {
    let project = TestProject::new();
    project.write_default_config();
    project.write("a.ts", "");
    project.write("node_modules/pkg/index.ts", "");
    project.write("deep/node_modules/pkg/main.ts", "");

    assert_eq!(collect(&project), vec!["a.ts"]);
}

#[test]
fn custom_ignore_patterns_apply() {
    let project = TestProject::new();
    project.write_config(
        "base_dir = \".\"\ngolden_file = \"deps.json\"\nglob = \"**/*.ts\"\nignore = [\"gen/**\"]\n",
    );
    project.write("a.ts", "");
    project.write("gen/out.ts", "");

    assert_eq!(collect(&project), vec!["a.ts"]);
}

#[test]
fn hidden_entries_are_skipped() {
    let project = TestProject::new();
    project.write_default_config();
    project.write("a.ts", "");
    project.write(".cache/b.ts", "");

    assert_eq!(collect(&project), vec!["a.ts"]);
}

#[test]
fn missing_root_errors() {
    let project = TestProject::new();
    project.write_default_config();
    let config = {
        let mut config = project.config();
        config.root = Path::new("/nonexistent/root").to_path_buf();
        config
    };

    assert!(SourceSelector::from_config(&config).is_err());
}

#[test]
fn invalid_pattern_errors() {
    let project = TestProject::new();
    project.write_config(
        "base_dir = \".\"\ngolden_file = \"deps.json\"\nglob = \"src/[unclosed.ts\"\n",
    );

    assert!(SourceSelector::from_config(&project.config()).is_err());
}
