use std::path::{Path, PathBuf};

pub use cli::CLIParser;
use image::DynamicImage;

mod cli;
mod error;
pub mod grayscale;
mod logger;
pub mod reader;
pub mod ssim;
pub mod statistics;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    image1_file: PathBuf,
    image2_file: PathBuf,
}

pub fn compare_images(arguments: &Arguments) -> Result<f64> {
    calculate_ssim(&arguments.image1_file, &arguments.image2_file)
}

/// Computes the structural similarity index of two image files.
///
/// Both files are decoded, reduced to grayscale and compared as a single
/// window. The first error encountered is returned; a decode failure of the
/// first file takes precedence over one of the second.
pub fn calculate_ssim(image1_path: &Path, image2_path: &Path) -> Result<f64> {
    let (image1, image2) = reader::read_image_pair(image1_path, image2_path)?;
    calculate_ssim_of_images(&image1, &image2)
}

/// In-memory variant of [`calculate_ssim`] for already decoded images.
pub fn calculate_ssim_of_images(image1: &DynamicImage, image2: &DynamicImage) -> Result<f64> {
    let gray1 = grayscale::convert_to_gray(image1);
    let gray2 = grayscale::convert_to_gray(image2);
    ssim::similarity_index(&gray1, &gray2)
}
