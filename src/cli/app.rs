//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use super::commands;
use crate::config::CONFIG_FILE;
use crate::output::OutputMode;

/// depcycle - Module dependency cycle gate with golden diffing
#[derive(Parser, Debug)]
#[command(
    name = "depcycle",
    version,
    about = "Detect module dependency cycles and gate builds on new ones",
    long_about = "Build a reference graph over the configured source files, enumerate\n\
                  dependency cycles and compare them against a committed golden file.\n\n\
                  Pre-existing cycles recorded in the golden are tolerated; newly\n\
                  introduced ones fail the run."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the circular dependencies have changed
    Check {
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Print all unresolved-import warnings
        #[arg(long)]
        warnings: bool,
    },

    /// Approve the current circular dependencies
    Approve {
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
}

/// Run the CLI
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let result = match cli.command {
        Command::Check { config, warnings } => commands::check(&config, warnings, mode),
        Command::Approve { config } => commands::approve(&config, mode),
    };

    match result {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            ExitCode::from(2)
        },
    }
}
