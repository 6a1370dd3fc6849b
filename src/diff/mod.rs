//! Candidate-versus-reference image comparison.

mod comparator;
mod report;
mod scan;

pub use comparator::{Comparator, Config, DEFAULT_REFERENCE};
pub use report::{format_pixel, write_report};
pub use scan::{scan, Comparison, Difference, Shape};
