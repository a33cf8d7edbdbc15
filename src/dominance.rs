//! Prevalence of the single most common exact pixel value.
//!
//! Flat-color artwork tends to have one color covering large areas, photographs rarely do.

use std::collections::HashMap;
use std::hash::Hash;

use image::{ImageBuffer, Pixel};

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Occurrence count of every exact pixel value, keyed by the pixel itself
/// (`Luma<u8>`, `Rgb<u8>`, ...) so each channel layout gets its own key type.
pub fn histogram<P>(img: &ImageBuffer<P, Vec<u8>>) -> HashMap<P, u64>
where
    P: Pixel<Subpixel = u8> + Eq + Hash,
{
    let mut counts = HashMap::new();
    for &p in img.pixels() {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

fn max_count<P>(img: &ImageBuffer<P, Vec<u8>>) -> Option<u64>
where
    P: Pixel<Subpixel = u8> + Eq + Hash,
{
    histogram(img).into_values().max()
}

/// Occurrences of the most frequent exact pixel value.
///
/// # Errors
///
/// [`Error::EmptyInput`] if the buffer has no pixels.
pub fn dominant_count(buffer: &PixelBuffer) -> Result<u64> {
    let count = match buffer {
        PixelBuffer::Gray(img) => max_count(img),
        PixelBuffer::GrayAlpha(img) => max_count(img),
        PixelBuffer::Rgb(img) => max_count(img),
        PixelBuffer::Rgba(img) => max_count(img),
    };

    count.ok_or(Error::EmptyInput)
}

/// Dominant color count divided by the number of rows.
///
/// This is normalized per row, not per pixel, so a uniform image yields its width
/// rather than `1.0`. The score weights are calibrated against this scale.
///
/// # Errors
///
/// [`Error::EmptyInput`] if the buffer has no pixels.
pub fn color_fraction(buffer: &PixelBuffer) -> Result<f64> {
    let count = dominant_count(buffer)?;

    Ok(count as f64 / buffer.rows() as f64)
}
