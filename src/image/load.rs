//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use ndarray::Array3;

use crate::error::{Error, Result};

use super::{PixelArray, RGB_CHANNELS};

/// Load an image from disk and convert it to an RGB pixel array.
///
/// The image is:
/// 1. Decoded from the specified path (format sniffed from the
///    file contents, not the extension)
/// 2. Converted to 8-bit RGB, dropping any alpha channel
/// 3. Returned as an HWC array (height, width, 3)
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelArray> {
    let path = path.as_ref();

    let load_error = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_error(ImageError::IoError(err)))?
        .decode()
        .map_err(load_error)?;

    tracing::debug!(
        "Decoded {} as {:?} {}x{}",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    Ok(image_to_array(&img))
}

/// Convert a `DynamicImage` to an HWC `u8` array in RGB order.
///
/// Grayscale is expanded to three equal channels and wider sample types are
/// rescaled to 8 bits.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn image_to_array(img: &DynamicImage) -> PixelArray {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    // Safe: indices are bounded by the u32 image dimensions
    Array3::from_shape_fn(
        (height as usize, width as usize, RGB_CHANNELS),
        |(y, x, c)| rgb.get_pixel(x as u32, y as u32)[c],
    )
}
