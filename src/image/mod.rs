//! Image loading and normalization.

mod load;

pub use load::{image_to_array, load_image};

use ndarray::Array3;

/// Decoded image in HWC layout (height, width, channels), RGB order.
pub type PixelArray = Array3<u8>;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;
