//! Error types for testmap operations.
//!
//! This module provides the main error type [`TestmapError`]. The emitter
//! performs no parsing or validation, so the only failure it can surface is
//! a fault on the output stream.

use std::io;

use thiserror::Error;

/// The main error type for testmap operations.
#[derive(Debug, Error)]
pub enum TestmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
