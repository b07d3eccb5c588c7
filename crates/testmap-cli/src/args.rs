//! Command-line argument definitions for the testmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The emitted report is fixed; the only argument controls
//! logging verbosity on stderr.

use clap::Parser;

/// Command-line arguments for the testmap ERD tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
