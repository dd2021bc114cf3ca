//! Statistics over grayscale pixel grids.
//!
//! All sums are divided by the pixel count minus one (the sample
//! convention), including the one in [`mean`]. This matches the reference
//! numerics of the similarity index; the bias cancels in the final formula
//! because all three statistics share the divisor. Images with fewer than
//! two pixels make the divisor non-positive and yield IEEE Inf/NaN here;
//! [`crate::ssim::similarity_index`] rejects them before calling in.

use crate::error::Error;
use crate::grayscale::GrayscaleImage;
use crate::Result;

pub fn mean(image: &GrayscaleImage) -> f64 {
    let sum: f64 = image.pixel_values().sum();
    sum / sample_size(image)
}

pub fn stdev(image: &GrayscaleImage) -> f64 {
    let average = mean(image);
    let sum: f64 = image
        .pixel_values()
        .map(|value| (value - average).powi(2))
        .sum();
    (sum / sample_size(image)).sqrt()
}

/// Covariance of two luminance grids of equal dimensions.
pub fn covariance(image1: &GrayscaleImage, image2: &GrayscaleImage) -> Result<f64> {
    if image1.dimensions() != image2.dimensions() {
        let (width1, height1) = image1.dimensions();
        let (width2, height2) = image2.dimensions();
        return Err(Error::DimensionMismatch(width1, height1, width2, height2));
    }
    let average1 = mean(image1);
    let average2 = mean(image2);
    let sum: f64 = image1
        .pixel_values()
        .zip(image2.pixel_values())
        .map(|(value1, value2)| (value1 - average1) * (value2 - average2))
        .sum();
    Ok(sum / sample_size(image1))
}

fn sample_size(image: &GrayscaleImage) -> f64 {
    image.pixel_count() as f64 - 1.0
}

#[cfg(test)]
mod tests {
    use super::{covariance, mean, stdev};
    use crate::grayscale::GrayscaleImage;

    fn checkerboard() -> GrayscaleImage {
        GrayscaleImage::new(2, 2, vec![0, 255, 255, 0])
    }

    #[test]
    fn mean_of_checkerboard() {
        let expected = (0.0 + 255.0 + 255.0 + 0.0) / 3.0;
        assert_eq!(mean(&checkerboard()), expected);
    }

    #[test]
    fn stdev_of_checkerboard() {
        // Deviations from the mean of 170 are -170, 85, 85, -170.
        let expected = (72250.0_f64 / 3.0).sqrt();
        let actual = stdev(&checkerboard());
        assert!(
            (actual - expected).abs() < 1e-9,
            "stdev was {}, expected {}",
            actual,
            expected
        );
    }

    #[test]
    fn stdev_of_all_black_image_is_zero() {
        let image = GrayscaleImage::new(2, 2, vec![0, 0, 0, 0]);
        assert_eq!(stdev(&image), 0.0);
    }

    #[test]
    fn covariance_of_image_with_itself_is_its_variance() {
        let image = checkerboard();
        let actual = covariance(&image, &image).expect("Dimensions are equal");
        let expected = stdev(&image).powi(2);
        assert!(
            (actual - expected).abs() < 1e-9,
            "covariance was {}, expected {}",
            actual,
            expected
        );
    }

    #[test]
    fn covariance_is_symmetric() {
        let image1 = checkerboard();
        let image2 = GrayscaleImage::new(2, 2, vec![10, 200, 30, 90]);
        let forward = covariance(&image1, &image2).expect("Dimensions are equal");
        let backward = covariance(&image2, &image1).expect("Dimensions are equal");
        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn covariance_of_mismatched_dimensions_fails() {
        let image1 = checkerboard();
        let image2 = GrayscaleImage::new(1, 4, vec![0, 255, 255, 0]);
        let result = covariance(&image1, &image2);
        assert!(result.is_err(), "Dimension mismatch was not detected");
    }
}
