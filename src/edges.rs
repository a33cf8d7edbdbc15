//! Edge stability under smoothing.
//!
//! Line art keeps its edges through a blur, photographic texture mostly does not.

use image::GrayImage;

use crate::canny::{self, EdgeMap};
use crate::filter;
use crate::score::Params;

/// The three edge maps of one grayscale image.
#[derive(Debug, Clone)]
pub struct EdgeMaps {
    /// Edges of the unsmoothed image.
    pub raw: EdgeMap,
    /// Edges after the 5x5 Gaussian blur.
    pub gaussian: EdgeMap,
    /// Edges after the 5x5 median filter.
    pub median: EdgeMap,
}

/// Edge-stability ratios, the fraction of raw edges lost to each kind of smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFeatures {
    pub gau_ratio: f64,
    pub med_ratio: f64,
}

impl EdgeMaps {
    pub fn detect(gray: &GrayImage, params: &Params) -> EdgeMaps {
        let (low, high) = (params.canny_low, params.canny_high);

        let raw = canny::detect(gray, low, high);
        let gaussian = canny::detect(&filter::gaussian_blur(gray), low, high);
        let median = canny::detect(&filter::median_blur(gray), low, high);

        tracing::trace!(
            raw = raw.edge_count(),
            gaussian = gaussian.edge_count(),
            median = median.edge_count(),
            "edge counts"
        );

        EdgeMaps {
            raw,
            gaussian,
            median,
        }
    }

    pub fn features(&self) -> EdgeFeatures {
        EdgeFeatures {
            gau_ratio: stability_ratio(&self.raw, &self.gaussian),
            med_ratio: stability_ratio(&self.raw, &self.median),
        }
    }
}

/// `(raw - smoothed) / raw` over edge pixel counts.
///
/// Defined as `0` when `raw` has no edges at all. Negative when smoothing
/// produced more edges than it removed.
pub fn stability_ratio(raw: &EdgeMap, smoothed: &EdgeMap) -> f64 {
    let raw_count = raw.edge_count();

    if raw_count == 0 {
        return 0.0;
    }

    let smoothed_count = smoothed.edge_count();

    (raw_count as f64 - smoothed_count as f64) / raw_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::STANDARD_PARAMS;
    use image::Luma;

    fn map(width: u32, height: u32, edges: &[(u32, u32)]) -> EdgeMap {
        let mut img = GrayImage::new(width, height);
        for &(x, y) in edges {
            img.put_pixel(x, y, Luma([canny::EDGE]));
        }
        EdgeMap::from_marked(img)
    }

    #[test]
    fn zero_raw_edges_is_zero_not_nan() {
        let raw = map(4, 4, &[]);
        let smoothed = map(4, 4, &[(1, 1)]);

        assert_eq!(stability_ratio(&raw, &smoothed), 0.0);
    }

    #[test]
    fn ratio_is_fraction_of_lost_edges() {
        let raw = map(4, 4, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let smoothed = map(4, 4, &[(0, 0)]);

        assert_eq!(stability_ratio(&raw, &smoothed), 0.75);
        assert_eq!(stability_ratio(&raw, &raw), 0.0);
    }

    #[test]
    fn ratio_goes_negative_when_smoothing_adds_edges() {
        let raw = map(4, 4, &[(0, 0), (1, 0)]);
        let smoothed = map(4, 4, &[(0, 0), (1, 0), (2, 0)]);

        assert_eq!(stability_ratio(&raw, &smoothed), -0.5);
    }

    #[test]
    fn flat_image_has_zero_features() {
        let gray = GrayImage::from_pixel(4, 4, Luma([200]));
        let maps = EdgeMaps::detect(&gray, &STANDARD_PARAMS);

        assert_eq!(maps.raw.edge_count(), 0);
        assert_eq!(
            maps.features(),
            EdgeFeatures {
                gau_ratio: 0.0,
                med_ratio: 0.0
            }
        );
    }

    #[test]
    fn wide_bar_survives_smoothing() {
        let gray = GrayImage::from_fn(24, 24, |x, _| {
            Luma([if (8..16).contains(&x) { 0 } else { 255 }])
        });
        let maps = EdgeMaps::detect(&gray, &STANDARD_PARAMS);
        let features = maps.features();

        assert_eq!(maps.raw.edge_count(), 48);
        assert_eq!(features.gau_ratio, 0.0);
        assert_eq!(features.med_ratio, 0.0);
    }
}
