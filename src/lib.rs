//! # refdiff
//!
//! Pixel-by-pixel comparison of a rendered image against a golden reference,
//! for visual regression tests such as checking an emulator frame against
//! `reference-dmg.png`.
//!
//! Both images are decoded, normalized to 8-bit RGB and compared element by
//! element. The report lists how many channel values differ and the first
//! few differing positions.
//!
//! ## Example
//!
//! ```no_run
//! use refdiff::{Comparator, Config};
//!
//! # fn main() -> refdiff::Result<()> {
//! let comparator = Comparator::new(Config::default())?;
//!
//! comparator.compare_images("frame.png", &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod image;

pub use diff::{Comparator, Comparison, Config};
pub use error::{Error, Result};
