//! Emission of the fixed ERD report.
//!
//! [`ErdEmitter`] writes the two diagram blocks plus two informational lines
//! to a writer in a fixed sequence. Emission is pure: no state is read, the
//! output is byte-identical across calls.

use std::io::Write;

use log::{debug, info};

use crate::{diagram::ErdKind, error::TestmapError};

/// Confirmation line emitted after both diagram blocks.
const CONFIRMATION: &str = "ERD diagrams created successfully!";

/// Hint line recommending an external rendering step.
const RENDER_HINT: &str = "Save these to .puml files and render with PlantUML";

/// Emitter for the fixed ERD report.
///
/// Writes, in order: the conceptual diagram, the logical diagram, a
/// confirmation line, and a rendering hint. Each unit is terminated by a
/// line break.
///
/// # Examples
///
/// ```rust
/// use testmap::ErdEmitter;
///
/// let mut out = Vec::new();
/// ErdEmitter::new()
///     .write_report(&mut out)
///     .expect("writing to a Vec cannot fail");
///
/// let report = String::from_utf8(out).expect("report is UTF-8");
/// assert!(report.starts_with("@startuml Conceptual_ERD"));
/// ```
#[derive(Debug, Default)]
pub struct ErdEmitter;

impl ErdEmitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self
    }

    /// Write a single diagram block to `out`, terminated by a line break.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which of the two diagrams to write
    /// * `out` - Destination writer
    ///
    /// # Errors
    ///
    /// Returns `TestmapError::Io` if the write fails.
    pub fn write_diagram<W: Write>(&self, kind: ErdKind, out: &mut W) -> Result<(), TestmapError> {
        debug!(kind:?; "Writing diagram block");

        writeln!(out, "{}", kind.source())?;

        Ok(())
    }

    /// Write the full report to `out`.
    ///
    /// The sequence is fixed: conceptual diagram, logical diagram,
    /// confirmation line, rendering hint. Blocks are separated by a blank
    /// line.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination writer
    ///
    /// # Errors
    ///
    /// Returns `TestmapError::Io` if any write fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use testmap::ErdEmitter;
    ///
    /// let mut out = Vec::new();
    /// ErdEmitter::new()
    ///     .write_report(&mut out)
    ///     .expect("writing to a Vec cannot fail");
    ///
    /// let report = String::from_utf8(out).expect("report is UTF-8");
    /// assert!(report.contains("@startuml Logical_ERD"));
    /// assert!(report.ends_with("render with PlantUML\n"));
    /// ```
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<(), TestmapError> {
        info!("Emitting ERD report");

        self.write_diagram(ErdKind::Conceptual, out)?;
        writeln!(out)?;
        self.write_diagram(ErdKind::Logical, out)?;
        writeln!(out)?;
        writeln!(out, "{CONFIRMATION}")?;
        writeln!(out)?;
        writeln!(out, "{RENDER_HINT}")?;
        out.flush()?;

        debug!("ERD report emitted");

        Ok(())
    }
}
