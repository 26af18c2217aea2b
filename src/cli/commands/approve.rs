//! Approve the current cycles as the new baseline

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use super::scan;
use crate::config::Config;
use crate::output::{ApproveReport, OutputMode};

/// Recompute the golden and overwrite the baseline unconditionally.
pub fn approve(config_path: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let config = Config::load(config_path)?;
    let scan = scan::scan(&config)?;

    if let Some(parent) = config.golden_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut content = serde_json::to_string_pretty(&scan.golden)?;
    content.push('\n');
    fs::write(&config.golden_file, content)
        .with_context(|| format!("failed to write golden file {}", config.golden_file.display()))?;

    let report = ApproveReport {
        cycle_count: scan.cycle_count,
        golden_file: config.golden_file.display().to_string(),
    };
    report.render(mode);

    Ok(ExitCode::SUCCESS)
}
