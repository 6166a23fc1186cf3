//! Movie posters, decoded and scaled to a fixed box.

use image::imageops::FilterType;
use image::RgbImage;

use crate::error::ApiResult;

pub const POSTER_WIDTH: u32 = 140;
pub const POSTER_HEIGHT: u32 = 200;

/// A decoded poster, always exactly [`POSTER_WIDTH`] by [`POSTER_HEIGHT`].
#[derive(Debug, Clone)]
pub struct Poster {
    image: RgbImage,
}

impl Poster {
    /// Decode image bytes in any supported format and resize them to the
    /// poster box, ignoring the original aspect ratio.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a decodable image.
    pub fn decode(bytes: &[u8]) -> ApiResult<Self> {
        let image = image::load_from_memory(bytes)?
            .resize_exact(POSTER_WIDTH, POSTER_HEIGHT, FilterType::Triangle)
            .to_rgb8();
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The RGB value at (`x`, `y`), clamped to the poster bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width() - 1);
        let y = y.min(self.height() - 1);
        self.image.get_pixel(x, y).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_resizes_to_box() {
        let poster = Poster::decode(&png_bytes(300, 450, [200, 10, 10])).unwrap();
        assert_eq!(poster.width(), POSTER_WIDTH);
        assert_eq!(poster.height(), POSTER_HEIGHT);
        assert_eq!(poster.pixel(70, 100), [200, 10, 10]);
    }

    #[test]
    fn test_decode_ignores_aspect_ratio() {
        let poster = Poster::decode(&png_bytes(10, 10, [0, 0, 255])).unwrap();
        assert_eq!((poster.width(), poster.height()), (POSTER_WIDTH, POSTER_HEIGHT));
    }

    #[test]
    fn test_pixel_clamps_out_of_bounds() {
        let poster = Poster::decode(&png_bytes(4, 4, [1, 2, 3])).unwrap();
        assert_eq!(poster.pixel(10_000, 10_000), [1, 2, 3]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = Poster::decode(b"<html>not an image</html>").unwrap_err();
        assert!(!err.is_network());
    }
}
