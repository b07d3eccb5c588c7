//! CLI logic for the testmap ERD tool.
//!
//! This module contains the core CLI logic for the testmap ERD tool.

pub mod error_adapter;

mod args;

pub use args::Args;

use std::io;

use log::info;

use testmap::{ErdEmitter, TestmapError};

/// Run the testmap CLI application
///
/// This function writes the fixed ERD report - the conceptual diagram, the
/// logical diagram, a confirmation line, and a rendering hint - to standard
/// output.
///
/// # Errors
///
/// Returns `TestmapError` if the report cannot be written to standard
/// output.
pub fn run() -> Result<(), TestmapError> {
    info!("Emitting ERD report to standard output");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    ErdEmitter::new().write_report(&mut out)?;

    info!("ERD report emitted");

    Ok(())
}
