//! depcycle - a CLI tool to detect module dependency cycles and gate builds
//! on newly introduced ones
//!
//! The binary is a thin wrapper: all behavior lives in the library so it can
//! be exercised directly from tests.

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

use std::process::ExitCode;

/// Main entry point for the depcycle CLI
fn main() -> ExitCode {
    depcycle::cli::run()
}
