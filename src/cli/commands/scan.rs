//! Shared scan pipeline: file set → graph → cycles → golden

use std::collections::HashSet;

use anyhow::Context;
use log::debug;

use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::golden::Golden;
use crate::output::{UnresolvedFile, WarningReport};
use crate::parser::EsModuleParser;
use crate::paths;
use crate::resolver::PathResolver;
use crate::sources::SourceSelector;

/// Everything a command needs from one pass over the source tree
#[derive(Debug)]
pub struct Scan {
    /// Canonical golden for the current state
    pub golden: Golden,
    /// Number of chains discovered during traversal
    pub cycle_count: usize,
    /// Unresolved-reference diagnostics
    pub warnings: WarningReport,
}

/// Expand the configured file set, walk every entry file and collect the
/// resulting cycles and diagnostics.
pub fn scan(config: &Config) -> anyhow::Result<Scan> {
    let selector = SourceSelector::from_config(config)?;
    let files = selector.collect().context("failed to scan source tree")?;
    debug!("selected {} source files", files.len());

    let mut analyzer = Analyzer::new(
        Box::new(PathResolver::from_config(config)),
        Box::new(EsModuleParser::new()),
    );

    // One explored set for the whole run, shared across entry files
    let mut explored = HashSet::new();
    let mut chains = Vec::new();
    for file in &files {
        chains.extend(analyzer.find_cycles(file, &mut explored));
    }

    let warnings = warning_report(&analyzer, config);
    Ok(Scan {
        cycle_count: chains.len(),
        golden: Golden::from_chains(&chains, &config.base_dir),
        warnings,
    })
}

fn warning_report(analyzer: &Analyzer, config: &Config) -> WarningReport {
    let unresolved_files: Vec<UnresolvedFile> = analyzer
        .unresolved_files()
        .iter()
        .map(|(file, specifiers)| {
            let mut specifiers = specifiers.clone();
            specifiers.sort();
            UnresolvedFile {
                file: paths::relative_forward_slash(&config.base_dir, file),
                specifiers,
            }
        })
        .collect();

    WarningReport {
        unresolved_module_count: analyzer.unresolved_modules().len(),
        unresolved_file_count: analyzer.unresolved_files().len(),
        unresolved_modules: analyzer.unresolved_modules().iter().cloned().collect(),
        unresolved_files,
        unreadable_files: analyzer
            .unreadable_files()
            .keys()
            .map(|file| paths::relative_forward_slash(&config.base_dir, file))
            .collect(),
    }
}
