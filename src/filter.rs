//! 5x5 smoothing filters applied before edge detection.

use image::GrayImage;

/// Side length of both smoothing windows.
pub const KERNEL_SIZE: usize = 5;

/// Standard deviation of the Gaussian window, in pixels.
pub const GAUSSIAN_SIGMA: f32 = 1.0;

const RADIUS: isize = (KERNEL_SIZE / 2) as isize;

/// Mirror an out-of-range index back into `0..n` without repeating the border pixel,
/// so `-1` maps to `1` and `n` maps to `n - 2`.
#[inline]
fn reflect_101(mut i: isize, n: isize) -> usize {
    if n == 1 {
        return 0;
    }

    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}

fn gaussian_kernel() -> [f32; KERNEL_SIZE] {
    let mut kernel = [0.0; KERNEL_SIZE];
    let denom = 2.0 * GAUSSIAN_SIGMA * GAUSSIAN_SIGMA;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - RADIUS as f32;
        *k = (-(x * x) / denom).exp();
    }

    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }

    kernel
}

/// Separable 5x5 Gaussian blur with mirrored borders.
pub fn gaussian_blur(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let (w, h) = (width as isize, height as isize);

    if w == 0 || h == 0 {
        return img.clone();
    }

    let kernel = gaussian_kernel();
    let src = img.as_raw();

    // horizontal pass, kept in float to avoid double rounding
    let mut rows = vec![0.0f32; src.len()];
    for y in 0..h {
        let line = &src[(y * w) as usize..((y + 1) * w) as usize];
        for x in 0..w {
            let mut acc = 0.0;
            for (&k, dx) in kernel.iter().zip(-RADIUS..=RADIUS) {
                acc += k * line[reflect_101(x + dx, w)] as f32;
            }
            rows[(y * w + x) as usize] = acc;
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as isize, y as isize);
        let mut acc = 0.0;
        for (&k, dy) in kernel.iter().zip(-RADIUS..=RADIUS) {
            acc += k * rows[reflect_101(y + dy, h) * w as usize + x as usize];
        }
        image::Luma([acc.round().clamp(0.0, 255.0) as u8])
    })
}

/// 5x5 median filter with replicated borders.
pub fn median_blur(img: &GrayImage) -> GrayImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }

    let radius = RADIUS as u32;
    imageproc::filter::median_filter(img, radius, radius)
}
