use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenImageFileForReading(String, std::io::Error),
    UnableToDecodeImageFile(String, image::ImageError),
    DimensionMismatch(u32, u32, u32, u32),
    ImageTooSmallForStatistics(u32, u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenImageFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open image file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeImageFile(path, error) => {
                write!(f, "Unable to decode image file '{}': {}", path, error)
            }
            Self::DimensionMismatch(width1, height1, width2, height2) => {
                write!(
                    f,
                    "Images must have the same dimensions, but got {}x{} and {}x{}",
                    width1, height1, width2, height2
                )
            }
            Self::ImageTooSmallForStatistics(width, height) => {
                write!(
                    f,
                    "Image of size {}x{} does not contain enough pixels for statistics",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for Error {}
