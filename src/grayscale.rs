use std::borrow::Cow;

use image::{GrayImage, Luma, Pixel};

use crate::buffer::PixelBuffer;

#[rustfmt::skip]
#[inline]
fn luma([r, g, b]: [u8; 3]) -> u8 {
    let y = 0.299 * r as f32 +
            0.587 * g as f32 +
            0.114 * b as f32;

    y.round().min(255.0) as u8
}

/// Reduce a buffer to a single intensity channel of the same dimensions.
///
/// Single-channel input is returned as-is without copying. Alpha is ignored.
pub fn normalize(buffer: &PixelBuffer) -> Cow<'_, GrayImage> {
    match buffer {
        PixelBuffer::Gray(img) => Cow::Borrowed(img),
        PixelBuffer::GrayAlpha(img) => Cow::Owned(GrayImage::from_fn(
            img.width(),
            img.height(),
            |x, y| Luma([img.get_pixel(x, y)[0]]),
        )),
        PixelBuffer::Rgb(img) => Cow::Owned(GrayImage::from_fn(
            img.width(),
            img.height(),
            |x, y| Luma([luma(img.get_pixel(x, y).0)]),
        )),
        PixelBuffer::Rgba(img) => Cow::Owned(GrayImage::from_fn(
            img.width(),
            img.height(),
            |x, y| Luma([luma(img.get_pixel(x, y).to_rgb().0)]),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn gray_input_is_identity() {
        let img = GrayImage::from_fn(5, 3, |x, y| Luma([(x * 40 + y) as u8]));
        let buffer = PixelBuffer::Gray(img.clone());

        let gray = normalize(&buffer);

        assert!(matches!(gray, Cow::Borrowed(_)));
        assert_eq!(*gray, img);
    }

    #[test]
    fn color_uses_weighted_luminance() {
        let img = RgbImage::from_fn(3, 1, |x, _| match x {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });

        let buffer = PixelBuffer::Rgb(img);
        let gray = normalize(&buffer);

        assert_eq!(gray.get_pixel(0, 0)[0], 76);
        assert_eq!(gray.get_pixel(1, 0)[0], 150);
        assert_eq!(gray.get_pixel(2, 0)[0], 29);
    }

    #[test]
    fn white_stays_white() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        let buffer = PixelBuffer::Rgba(img);
        let gray = normalize(&buffer);

        assert!(gray.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn gray_alpha_drops_alpha() {
        let img = GrayAlphaImage::from_pixel(2, 2, LumaA([90, 10]));
        let buffer = PixelBuffer::GrayAlpha(img);
        let gray = normalize(&buffer);

        assert!(gray.pixels().all(|p| p[0] == 90));
    }

    #[test]
    fn zero_sized_input() {
        let buffer = PixelBuffer::Rgb(RgbImage::new(0, 0));
        let gray = normalize(&buffer);

        assert_eq!(gray.dimensions(), (0, 0));
    }
}
