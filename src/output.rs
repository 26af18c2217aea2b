//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text (colored, mirroring the console script of a CI gate)
//! or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::golden::CircularDependency;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Unresolved-reference diagnostics for one run
///
/// Informational only: warnings never affect the exit status.
#[derive(Debug, Default, Serialize)]
pub struct WarningReport {
    /// Number of distinct specifiers that could not be resolved
    pub unresolved_module_count: usize,
    /// Number of files containing unresolvable references
    pub unresolved_file_count: usize,
    /// Distinct unresolvable specifiers, sorted
    pub unresolved_modules: Vec<String>,
    /// Files with unresolvable references, sorted
    pub unresolved_files: Vec<UnresolvedFile>,
    /// Files that could not be read at all, sorted
    pub unreadable_files: Vec<String>,
}

/// One source file and the specifiers it could not resolve
#[derive(Debug, Serialize)]
pub struct UnresolvedFile {
    /// Base-relative path of the file
    pub file: String,
    /// The specifiers that failed to resolve, sorted
    pub specifiers: Vec<String>,
}

impl WarningReport {
    /// Total warning count shown in the one-line summary.
    #[must_use]
    pub fn count(&self) -> usize {
        self.unresolved_module_count + self.unresolved_file_count
    }

    fn render_itemized(&self) {
        println!("{}", "⚠   The following imports could not be resolved:".yellow());
        for specifier in &self.unresolved_modules {
            println!("  • {specifier}");
        }
        for entry in &self.unresolved_files {
            println!("  • {}", entry.file);
            for specifier in &entry.specifiers {
                println!("      {specifier}");
            }
        }
        for file in &self.unreadable_files {
            println!("  • {} {}", file, "(unreadable)".yellow());
        }
    }

    fn render_summary(&self) {
        println!("{}", format!("⚠   {} imports could not be resolved.", self.count()).yellow());
        println!(
            "{}",
            "    Please rerun with \"--warnings\" to inspect unresolved imports.".yellow()
        );
    }
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the golden matches the current cycles
    pub passed: bool,
    /// Number of cycles found in the current run
    pub cycle_count: usize,
    /// Cycles not present in the baseline
    pub new_cycles: Vec<CircularDependency>,
    /// Baseline cycles no longer present
    pub fixed_cycles: Vec<CircularDependency>,
    /// Unresolved-reference diagnostics
    pub warnings: WarningReport,

    /// Command suggested to regenerate the baseline
    #[serde(skip)]
    pub approve_hint: String,
    /// Itemize warnings instead of printing the one-line count
    #[serde(skip)]
    pub show_warnings: bool,
}

impl CheckReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        print_cycle_count(self.cycle_count);

        if self.show_warnings && self.warnings.count() != 0 {
            self.warnings.render_itemized();
        } else {
            self.warnings.render_summary();
        }

        if self.passed {
            println!("{}", "✅  Golden matches current circular dependencies.".green());
            return;
        }

        eprintln!("{}", "❌  Golden does not match current circular dependencies.".red());
        if !self.new_cycles.is_empty() {
            eprintln!("{}", "   New circular dependencies which are not allowed:".yellow());
            for chain in &self.new_cycles {
                eprintln!("     • {}", chain_to_string(chain));
            }
            eprintln!();
        }
        if !self.fixed_cycles.is_empty() {
            eprintln!(
                "{}",
                "   Fixed circular dependencies that need to be removed from the golden:".yellow()
            );
            for chain in &self.fixed_cycles {
                eprintln!("     • {}", chain_to_string(chain));
            }
        }
        eprintln!(
            "{}",
            format!(
                "\n   Total: {} new cycle(s), {} fixed cycle(s).",
                self.new_cycles.len(),
                self.fixed_cycles.len()
            )
            .yellow()
        );
        eprintln!("{}", format!("   Please approve the new golden with: {}", self.approve_hint).yellow());
    }
}

/// Result of an approve run
#[derive(Debug, Serialize)]
pub struct ApproveReport {
    /// Number of cycles written to the baseline
    pub cycle_count: usize,
    /// Path of the golden file that was written
    pub golden_file: String,
}

impl ApproveReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                print_cycle_count(self.cycle_count);
                println!("{}", "✅  Updated golden file.".green());
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Failure report for a check run without a baseline
#[derive(Debug, Serialize)]
pub struct MissingGoldenReport {
    /// Path the baseline was expected at
    pub golden_file: String,
    /// Number of cycles found in the current run
    pub cycle_count: usize,
}

impl MissingGoldenReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                print_cycle_count(self.cycle_count);
                eprintln!(
                    "{}",
                    format!("❌  Could not find golden file: {}", self.golden_file).red()
                );
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn print_cycle_count(count: usize) {
    println!(
        "{}{}",
        "   Current number of cycles: ".green(),
        count.to_string().yellow()
    );
}

/// Render a reference chain as `a → b → a`.
#[must_use]
pub fn chain_to_string(chain: &[String]) -> String {
    chain.join(" → ")
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
