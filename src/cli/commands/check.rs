//! Check the current cycles against the committed golden

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use super::scan;
use crate::config::Config;
use crate::golden::Golden;
use crate::output::{CheckReport, MissingGoldenReport, OutputMode};

/// Compare the current cycles against the baseline and map the outcome to an
/// exit status. Never writes the golden file.
pub fn check(config_path: &Path, warnings: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let config = Config::load(config_path)?;
    let scan = scan::scan(&config)?;

    if !config.golden_file.is_file() {
        let report = MissingGoldenReport {
            golden_file: config.golden_file.display().to_string(),
            cycle_count: scan.cycle_count,
        };
        report.render(mode);
        return Ok(ExitCode::from(1));
    }

    let raw = fs::read_to_string(&config.golden_file)
        .with_context(|| format!("failed to read golden file {}", config.golden_file.display()))?;
    let baseline: Golden = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse golden file {}", config.golden_file.display()))?;
    // Canonicalize so hand-edited baselines still compare correctly
    let baseline = Golden::from_relative(baseline.chains().to_vec());

    let diff = scan.golden.diff(&baseline);
    let passed = diff.is_empty();

    let report = CheckReport {
        passed,
        cycle_count: scan.cycle_count,
        new_cycles: diff.new_cycles,
        fixed_cycles: diff.fixed_cycles,
        warnings: scan.warnings,
        approve_hint: approve_hint(&config, config_path),
        show_warnings: warnings,
    };
    report.render(mode);

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn approve_hint(config: &Config, config_path: &Path) -> String {
    config.approve_command.clone().unwrap_or_else(|| {
        format!("depcycle approve --config {}", config_path.display())
    })
}
