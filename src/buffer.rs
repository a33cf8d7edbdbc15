//! Decoded pixel data, tagged by channel layout.

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

/// An 8-bit image buffer whose variant records how many channels each pixel has.
///
/// Buffers are never modified in place; every stage of the pipeline produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    Gray(GrayImage),
    GrayAlpha(GrayAlphaImage),
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl PixelBuffer {
    /// Number of channels per pixel, `1..=4`.
    pub fn channels(&self) -> u8 {
        match self {
            PixelBuffer::Gray(_) => 1,
            PixelBuffer::GrayAlpha(_) => 2,
            PixelBuffer::Rgb(_) => 3,
            PixelBuffer::Rgba(_) => 4,
        }
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PixelBuffer::Gray(img) => img.dimensions(),
            PixelBuffer::GrayAlpha(img) => img.dimensions(),
            PixelBuffer::Rgb(img) => img.dimensions(),
            PixelBuffer::Rgba(img) => img.dimensions(),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Number of rows, i.e. the height.
    pub fn rows(&self) -> u32 {
        self.dimensions().1
    }

    pub fn is_empty(&self) -> bool {
        let (width, height) = self.dimensions();
        width == 0 || height == 0
    }
}

impl From<GrayImage> for PixelBuffer {
    fn from(img: GrayImage) -> Self {
        PixelBuffer::Gray(img)
    }
}

impl From<GrayAlphaImage> for PixelBuffer {
    fn from(img: GrayAlphaImage) -> Self {
        PixelBuffer::GrayAlpha(img)
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(img: RgbImage) -> Self {
        PixelBuffer::Rgb(img)
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        PixelBuffer::Rgba(img)
    }
}

/// Keeps the channel count of the source, narrowing deeper formats to 8 bits per channel.
impl From<DynamicImage> for PixelBuffer {
    fn from(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(img) => PixelBuffer::Gray(img),
            DynamicImage::ImageLumaA8(img) => PixelBuffer::GrayAlpha(img),
            DynamicImage::ImageRgb8(img) => PixelBuffer::Rgb(img),
            DynamicImage::ImageRgba8(img) => PixelBuffer::Rgba(img),
            other => match other.color().channel_count() {
                1 => PixelBuffer::Gray(other.to_luma8()),
                2 => PixelBuffer::GrayAlpha(other.to_luma_alpha8()),
                3 => PixelBuffer::Rgb(other.to_rgb8()),
                _ => PixelBuffer::Rgba(other.to_rgba8()),
            },
        }
    }
}
