//! Custom error types for refdiff.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the refdiff library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error while writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for refdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_chain_names_cause_once() {
        let err = Error::ImageLoad {
            path: PathBuf::from("frame.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            )),
        };

        assert_eq!(err.to_string(), "failed to load image from frame.png");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "failed to load image from frame.png: no such file"
        );
    }
}
