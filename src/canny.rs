//! Canny-style binary edge detection.
//!
//! The detector runs directly on the image it is given; any smoothing is up to the caller.

use image::{GrayImage, Luma};

/// Intensity written to edge pixels.
pub const EDGE: u8 = 255;

/// Binary edge map, same dimensions as the image it was detected on.
///
/// Every pixel is either [`EDGE`] or `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap(GrayImage);

impl EdgeMap {
    /// Number of edge pixels, i.e. the sum of the map divided by 255.
    pub fn edge_count(&self) -> u64 {
        self.0.as_raw().iter().filter(|&&p| p == EDGE).count() as u64
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        self.0.get_pixel(x, y)[0] == EDGE
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_marked(img: GrayImage) -> EdgeMap {
        EdgeMap(img)
    }
}

/// tan(22.5°) in Q15 fixed point
const TG22: i64 = 13573;
const SHIFT: u32 = 15;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    None,
    Weak,
    Strong,
}

/// Detect edges with a 3x3 Sobel gradient, L1 magnitude, non-maximum suppression
/// and hysteresis thresholding.
///
/// A pixel survives as a candidate when its gradient magnitude is above `low`, and
/// seeds an edge when above `high`. Candidates become edges only when 8-connected
/// to a seed.
pub fn detect(img: &GrayImage, low: f32, high: f32) -> EdgeMap {
    let (width, height) = img.dimensions();
    let (w, h) = (width as usize, height as usize);

    if w == 0 || h == 0 {
        return EdgeMap(GrayImage::new(width, height));
    }

    let src = img.as_raw();
    let px = |x: isize, y: isize| -> i32 {
        let x = x.clamp(0, w as isize - 1) as usize;
        let y = y.clamp(0, h as isize - 1) as usize;
        src[y * w + x] as i32
    };

    let mut dx = vec![0i32; w * h];
    let mut dy = vec![0i32; w * h];
    let mut mag = vec![0i32; w * h];

    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as isize, y as isize);

            #[rustfmt::skip]
            let gx = (px(xi + 1, yi - 1) + 2 * px(xi + 1, yi) + px(xi + 1, yi + 1))
                   - (px(xi - 1, yi - 1) + 2 * px(xi - 1, yi) + px(xi - 1, yi + 1));

            #[rustfmt::skip]
            let gy = (px(xi - 1, yi + 1) + 2 * px(xi, yi + 1) + px(xi + 1, yi + 1))
                   - (px(xi - 1, yi - 1) + 2 * px(xi, yi - 1) + px(xi + 1, yi - 1));

            let i = y * w + x;
            dx[i] = gx;
            dy[i] = gy;
            mag[i] = gx.abs() + gy.abs();
        }
    }

    // magnitude outside the image counts as zero
    let m_at = |x: isize, y: isize| -> i32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0
        } else {
            mag[y as usize * w + x as usize]
        }
    };

    let low = low.floor() as i32;
    let high = high.floor() as i32;

    let mut marks = vec![Mark::None; w * h];
    let mut stack = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let m = mag[i];

            if m <= low {
                continue;
            }

            let (xi, yi) = (x as isize, y as isize);
            let xs = dx[i].abs() as i64;
            let ys = (dy[i].abs() as i64) << SHIFT;

            let tg22x = xs * TG22;
            let tg67x = tg22x + (xs << (SHIFT + 1));

            let is_max = if ys < tg22x {
                m > m_at(xi - 1, yi) && m >= m_at(xi + 1, yi)
            } else if ys > tg67x {
                m > m_at(xi, yi - 1) && m >= m_at(xi, yi + 1)
            } else {
                let s = if (dx[i] ^ dy[i]) < 0 { -1 } else { 1 };
                m > m_at(xi - s, yi - 1) && m > m_at(xi + s, yi + 1)
            };

            if !is_max {
                continue;
            }

            if m > high {
                marks[i] = Mark::Strong;
                stack.push(i);
            } else {
                marks[i] = Mark::Weak;
            }
        }
    }

    // hysteresis: grow strong edges into 8-connected weak neighbours
    while let Some(i) = stack.pop() {
        let (x, y) = ((i % w) as isize, (i / w) as isize);

        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }

                let j = ny as usize * w + nx as usize;
                if marks[j] == Mark::Weak {
                    marks[j] = Mark::Strong;
                    stack.push(j);
                }
            }
        }
    }

    EdgeMap(GrayImage::from_fn(width, height, |x, y| {
        match marks[y as usize * w + x as usize] {
            Mark::Strong => Luma([EDGE]),
            _ => Luma([0]),
        }
    }))
}
