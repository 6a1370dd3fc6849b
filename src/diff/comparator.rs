//! Load, compare and report against a golden reference image.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image::load_image;

use super::report::write_report;
use super::scan::{scan, Comparison};

/// Reference image used when none is configured, relative to the working directory.
pub const DEFAULT_REFERENCE: &str = "reference-dmg.png";

/// Configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the golden reference image.
    pub reference: PathBuf,

    /// Maximum number of difference blocks to report.
    pub max_reported: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: PathBuf::from(DEFAULT_REFERENCE),
            max_reported: 10,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.max_reported == 0 {
            return Err(Error::InvalidParameter {
                name: "max_reported".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.reference.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                name: "reference".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Compares candidate images against a single reference image.
#[derive(Debug, Clone)]
pub struct Comparator {
    config: Config,
}

impl Comparator {
    /// Create a new comparator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing comparator with config: {config:?}");

        Ok(Self { config })
    }

    /// Compare a candidate image against the reference.
    ///
    /// The candidate is decoded first, then the reference. Both are
    /// normalized to RGB before their shapes are checked.
    ///
    /// # Errors
    ///
    /// Returns an error if either image cannot be loaded.
    pub fn compare<P: AsRef<Path>>(&self, candidate: P) -> Result<Comparison> {
        let candidate = candidate.as_ref();

        let candidate_pixels = load_image(candidate)?;
        let reference_pixels = load_image(&self.config.reference)?;

        let comparison = scan(
            &candidate_pixels,
            &reference_pixels,
            self.config.max_reported,
        );

        match &comparison {
            Comparison::DimensionMismatch { .. } => {
                tracing::info!("{} does not match reference dimensions", candidate.display());
            }
            Comparison::Identical => {
                tracing::info!("{} matches reference", candidate.display());
            }
            Comparison::Different { count, .. } => {
                tracing::info!(
                    "{} differs from reference in {count} elements",
                    candidate.display()
                );
            }
        }

        Ok(comparison)
    }

    /// Compare a candidate image and write the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if either image cannot be loaded or the report
    /// cannot be written.
    pub fn compare_images<P, W>(&self, candidate: P, out: &mut W) -> Result<Comparison>
    where
        P: AsRef<Path>,
        W: Write + ?Sized,
    {
        let comparison = self.compare(candidate)?;
        write_report(&comparison, out)?;
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("refdiff-{}-{name}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn png(&self, name: &str, img: &RgbImage) -> PathBuf {
            let path = self.0.join(name);
            img.save(&path).unwrap();
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn comparator(reference: PathBuf) -> Comparator {
        Comparator::new(Config {
            reference,
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.reference, Path::new("reference-dmg.png"));
        assert_eq!(config.max_reported, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_reported_rejected() {
        let config = Config {
            max_reported: 0,
            ..Config::default()
        };

        assert!(matches!(
            Comparator::new(config),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_empty_reference_rejected() {
        let config = Config {
            reference: PathBuf::new(),
            ..Config::default()
        };

        match Comparator::new(config) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "reference"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_red_blue_example() {
        let scratch = Scratch::new("red-blue");
        let red = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let mut candidate = red.clone();
        candidate.put_pixel(1, 0, Rgb([0, 0, 255]));

        let reference = scratch.png("reference.png", &red);
        let candidate = scratch.png("candidate.png", &candidate);

        let mut out = Vec::new();
        let comparison = comparator(reference)
            .compare_images(&candidate, &mut out)
            .unwrap();

        assert!(matches!(comparison, Comparison::Different { count: 2, .. }));

        let block = "Difference at (1, 0):\n  File1: [  0   0 255]\n  File2: [255   0   0]\n";
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Found 2 different pixels\n{block}{block}")
        );
    }

    #[test]
    fn test_identical_files() {
        let scratch = Scratch::new("identical");
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));

        let reference = scratch.png("reference.png", &img);
        let candidate = scratch.png("candidate.png", &img);

        let mut out = Vec::new();
        comparator(reference)
            .compare_images(&candidate, &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Images are identical\n");
    }

    #[test]
    fn test_missing_reference_is_an_error() {
        let scratch = Scratch::new("missing-reference");
        let candidate = scratch.png("candidate.png", &RgbImage::new(1, 1));

        let err = comparator(scratch.0.join("absent.png"))
            .compare(&candidate)
            .unwrap_err();

        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
