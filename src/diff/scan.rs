//! Elementwise difference scan over two pixel arrays.

use std::fmt;

use crate::image::{PixelArray, RGB_CHANNELS};

/// Array shape as (height, width, channels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Shape {
    /// Shape of a decoded pixel array.
    #[must_use]
    pub fn of(array: &PixelArray) -> Self {
        let (height, width, channels) = array.dim();
        Self {
            height,
            width,
            channels,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// A single differing element position and the pixels around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    pub row: usize,
    pub col: usize,
    pub channel: usize,
    /// Full pixel of the candidate image at (row, col).
    pub candidate: [u8; RGB_CHANNELS],
    /// Full pixel of the reference image at (row, col).
    pub reference: [u8; RGB_CHANNELS],
}

impl Difference {
    /// Horizontal pixel coordinate.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.col
    }

    /// Vertical pixel coordinate.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.row
    }
}

/// Outcome of comparing a candidate against a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Shapes differ; no elementwise comparison was made.
    DimensionMismatch { candidate: Shape, reference: Shape },

    /// Every element is equal.
    Identical,

    /// Some elements differ.
    Different {
        /// Number of differing element positions, not pixels. A pixel
        /// differing in all three channels counts three times.
        count: usize,
        /// The first differences in row-major, channel-fastest order.
        samples: Vec<Difference>,
    },
}

/// Compare two pixel arrays element by element.
///
/// Positions are visited in row-major order (height, then width) with the
/// channel varying fastest. At most `max_reported` differences are kept in
/// `samples`; all of them are counted.
#[must_use]
pub fn scan(candidate: &PixelArray, reference: &PixelArray, max_reported: usize) -> Comparison {
    let candidate_shape = Shape::of(candidate);
    let reference_shape = Shape::of(reference);

    if candidate_shape != reference_shape {
        return Comparison::DimensionMismatch {
            candidate: candidate_shape,
            reference: reference_shape,
        };
    }

    let mut count = 0;
    let mut samples = Vec::with_capacity(max_reported.min(16));

    for (((row, col, channel), a), b) in candidate.indexed_iter().zip(reference.iter()) {
        if a == b {
            continue;
        }

        count += 1;
        if samples.len() < max_reported {
            samples.push(Difference {
                row,
                col,
                channel,
                candidate: pixel_at(candidate, row, col),
                reference: pixel_at(reference, row, col),
            });
        }
    }

    tracing::debug!("Scanned {candidate_shape}: {count} differing elements");

    if count == 0 {
        Comparison::Identical
    } else {
        Comparison::Different { count, samples }
    }
}

fn pixel_at(array: &PixelArray, row: usize, col: usize) -> [u8; RGB_CHANNELS] {
    [array[[row, col, 0]], array[[row, col, 1]], array[[row, col, 2]]]
}
