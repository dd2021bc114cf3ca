//! The single-window structural similarity formula, see
//! <https://en.wikipedia.org/wiki/Structural_similarity>. The whole image
//! is treated as one window; there is no sliding-window averaging.

use crate::error::Error;
use crate::grayscale::GrayscaleImage;
use crate::statistics::{covariance, mean, stdev};
use crate::Result;

/// Dynamic range of the 8 bit luminance samples.
pub const DYNAMIC_RANGE: f64 = 255.0;
pub const K1: f64 = 0.01;
pub const K2: f64 = 0.03;

const C1: f64 = (K1 * DYNAMIC_RANGE) * (K1 * DYNAMIC_RANGE);
const C2: f64 = (K2 * DYNAMIC_RANGE) * (K2 * DYNAMIC_RANGE);

/// Computes the similarity index of two grayscale images of equal
/// dimensions. Images with fewer than two pixels are rejected, since the
/// sample statistics are undefined for them.
pub fn similarity_index(image1: &GrayscaleImage, image2: &GrayscaleImage) -> Result<f64> {
    validate_pixel_count(image1)?;
    validate_pixel_count(image2)?;
    let covariance = covariance(image1, image2)?;

    let average1 = mean(image1);
    let average2 = mean(image2);
    let stdev1 = stdev(image1);
    let stdev2 = stdev(image2);
    log::debug!(
        "mean {:.3}/{:.3}, stdev {:.3}/{:.3}, covariance {:.3}",
        average1,
        average2,
        stdev1,
        stdev2,
        covariance
    );

    let numerator = (2.0 * average1 * average2 + C1) * (2.0 * covariance + C2);
    let denominator =
        (average1.powi(2) + average2.powi(2) + C1) * (stdev1.powi(2) + stdev2.powi(2) + C2);
    Ok(numerator / denominator)
}

fn validate_pixel_count(image: &GrayscaleImage) -> Result<()> {
    if image.pixel_count() < 2 {
        return Err(Error::ImageTooSmallForStatistics(
            image.width(),
            image.height(),
        ));
    }
    Ok(())
}
