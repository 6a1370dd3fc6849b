//! Console rendering of a comparison.

use std::io::{self, Write};

use super::scan::Comparison;

/// Write the human-readable report for a comparison.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write + ?Sized>(comparison: &Comparison, out: &mut W) -> io::Result<()> {
    match comparison {
        Comparison::DimensionMismatch {
            candidate,
            reference,
        } => writeln!(out, "Image dimensions don't match: {candidate} vs {reference}"),
        Comparison::Identical => writeln!(out, "Images are identical"),
        Comparison::Different { count, samples } => {
            writeln!(out, "Found {count} different pixels")?;
            for diff in samples {
                writeln!(out, "Difference at ({}, {}):", diff.x(), diff.y())?;
                writeln!(out, "  File1: {}", format_pixel(&diff.candidate))?;
                writeln!(out, "  File2: {}", format_pixel(&diff.reference))?;
            }
            Ok(())
        }
    }
}

/// Format channel values as a bracketed row, each right-aligned to the
/// widest value: `[  0   0 255]`.
#[must_use]
pub fn format_pixel(values: &[u8]) -> String {
    let width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    let cells: Vec<String> = values.iter().map(|v| format!("{v:>width$}")).collect();
    format!("[{}]", cells.join(" "))
}
