//! depcycle - a CLI tool to detect module dependency cycles and gate builds
//! on newly introduced ones
//!
//! This library builds a directed graph of inter-module references over a set
//! of source files, enumerates reference cycles, and compares them against a
//! committed baseline ("golden") so that pre-existing cycles are tolerated
//! while new ones fail the run.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod golden;
pub mod output;
pub mod parser;
pub mod paths;
pub mod resolver;
pub mod sources;
