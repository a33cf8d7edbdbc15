use image::imageops::{self, FilterType};

use crate::buffer::PixelBuffer;

/// Buffers larger than this in either dimension are halved before analysis.
pub const RESIZE_LIMIT: u32 = 2000;

/// Target `(width, height)` for a buffer of the given size, if it needs shrinking.
pub fn target_dimensions(width: u32, height: u32) -> Option<(u32, u32)> {
    if width > RESIZE_LIMIT || height > RESIZE_LIMIT {
        Some((width / 2, height / 2))
    } else {
        None
    }
}

/// Halve both dimensions (rounding down) when either exceeds [`RESIZE_LIMIT`],
/// keeping the channel layout. Smaller buffers pass through untouched.
pub fn downscale_oversized(buffer: PixelBuffer) -> PixelBuffer {
    let (width, height) = buffer.dimensions();

    let Some((w, h)) = target_dimensions(width, height) else {
        return buffer;
    };

    tracing::debug!(width, height, to_width = w, to_height = h, "downscaling");

    match buffer {
        PixelBuffer::Gray(img) => imageops::resize(&img, w, h, FilterType::Triangle).into(),
        PixelBuffer::GrayAlpha(img) => imageops::resize(&img, w, h, FilterType::Triangle).into(),
        PixelBuffer::Rgb(img) => imageops::resize(&img, w, h, FilterType::Triangle).into(),
        PixelBuffer::Rgba(img) => imageops::resize(&img, w, h, FilterType::Triangle).into(),
    }
}
