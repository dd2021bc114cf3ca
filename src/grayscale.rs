use image::DynamicImage;

// ITU-R BT.601 luma weights.
const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// A single-channel luminance image with 8 bit samples in row-major order.
pub struct GrayscaleImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayscaleImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        if pixels.len() != width as usize * height as usize {
            panic!(
                "Pixel buffer of length {} does not match dimensions {}x{}",
                pixels.len(),
                width,
                height
            );
        }
        GrayscaleImage {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// The luminance sample at `(x, y)` as a float in [0, 255].
    pub fn pixel_value(&self, x: u32, y: u32) -> f64 {
        self.pixels[y as usize * self.width as usize + x as usize] as f64
    }

    /// All luminance samples in row-major order, as floats in [0, 255].
    pub fn pixel_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.pixels.iter().map(|&value| value as f64)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }
}

/// Reduces a decoded image to grayscale luminance.
///
/// The source is normalized to 8 bit RGB first, so deeper bit depths are
/// rescaled and alpha is dropped before the per-pixel weighting.
pub fn convert_to_gray(image: &DynamicImage) -> GrayscaleImage {
    let rgb_image = image.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let pixels = rgb_image.pixels().map(|pixel| luminance(pixel.0)).collect();
    GrayscaleImage::new(width, height, pixels)
}

fn luminance([red, green, blue]: [u8; 3]) -> u8 {
    let weighted =
        RED_WEIGHT * red as f64 + GREEN_WEIGHT * green as f64 + BLUE_WEIGHT * blue as f64;
    weighted.round() as u8
}

#[cfg(test)]
mod test {
    use super::{convert_to_gray, GrayscaleImage};
    use image::{DynamicImage, GrayImage, Rgb, RgbImage};

    #[test]
    fn conversion_keeps_dimensions() {
        let rgb_image = RgbImage::from_pixel(3, 5, Rgb([120, 30, 200]));
        let gray = convert_to_gray(&DynamicImage::ImageRgb8(rgb_image));
        assert_eq!(gray.dimensions(), (3, 5));
        assert_eq!(gray.pixel_count(), 15);
    }

    #[test]
    fn primary_colors_use_bt601_weights() {
        let red_image = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let green_image = RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]));
        let blue_image = RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]));
        let red_gray = convert_to_gray(&DynamicImage::ImageRgb8(red_image));
        let green_gray = convert_to_gray(&DynamicImage::ImageRgb8(green_image));
        let blue_gray = convert_to_gray(&DynamicImage::ImageRgb8(blue_image));
        assert_eq!(red_gray.pixel_value(0, 0), 76.0);
        assert_eq!(green_gray.pixel_value(0, 0), 150.0);
        assert_eq!(blue_gray.pixel_value(0, 0), 29.0);
    }

    #[test]
    fn conversion_is_idempotent() {
        let rgb_image = RgbImage::from_fn(4, 4, |x, y| Rgb([(x * 60) as u8, (y * 50) as u8, 90]));
        let first_pass = convert_to_gray(&DynamicImage::ImageRgb8(rgb_image));
        let gray_image =
            GrayImage::from_raw(4, 4, first_pass.as_raw().to_vec()).expect("Buffer size is valid");
        let second_pass = convert_to_gray(&DynamicImage::ImageLuma8(gray_image));
        assert_eq!(first_pass.as_raw(), second_pass.as_raw());
    }

    #[test]
    #[should_panic(expected = "does not match dimensions")]
    fn mismatched_buffer_length_is_rejected() {
        GrayscaleImage::new(2, 2, vec![0, 0, 0]);
    }
}
