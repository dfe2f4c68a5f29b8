//! Text summary of a batch.
//!
//! One block per successful attempt, in index order:
//!
//! ```text
//! Number of words: 15
//! Number of words added: 9
//! Shape: (14, 11)
//!
//! ```
//!
//! Failed attempts are left out.

use std::fmt;

use crossgrid_grid::Layout;

use crate::batch::BatchReport;

/// Append the block for one layout to `out`.
pub fn write_layout_summary<W: fmt::Write>(out: &mut W, layout: &Layout) -> fmt::Result {
    writeln!(out, "Number of words: {}", layout.input_count())?;
    writeln!(out, "Number of words added: {}", layout.placed_count())?;
    writeln!(out, "Shape: ({}, {})", layout.width(), layout.height())?;
    writeln!(out)
}

/// Append the summary of every successful attempt to `out`.
pub fn write_summary<W: fmt::Write>(out: &mut W, report: &BatchReport) -> fmt::Result {
    for (_, attempt) in report.successes() {
        write_layout_summary(out, &attempt.layout)?;
    }
    Ok(())
}

/// The summary as a new string.
pub fn render_summary(report: &BatchReport) -> String {
    let mut out = String::new();
    let _ = write_summary(&mut out, report);
    out
}
