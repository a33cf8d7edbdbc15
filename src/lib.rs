#![doc = include_str!("../README.md")]

pub mod batch;
pub mod buffer;
pub mod canny;
pub mod dominance;
pub mod edges;
pub mod error;
pub mod filter;
pub mod grayscale;
pub mod load;
pub mod resize;
pub mod score;

use std::path::Path;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use score::{Label, Params, STANDARD_PARAMS};

use edges::EdgeMaps;

/// Image analysis results, the inputs of the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Fraction of raw edges lost to the Gaussian blur
    pub gau_ratio: f64,
    /// Fraction of raw edges lost to the median filter
    pub med_ratio: f64,
    /// Dominant exact color count per row
    pub color_fraction: f64,
    pub raw_edges: u64,
    pub gaussian_edges: u64,
    pub median_edges: u64,
}

impl Analysis {
    pub fn score(&self, params: &Params) -> f64 {
        score::combine(self.gau_ratio, self.med_ratio, self.color_fraction, params)
    }

    pub fn label(&self, params: &Params) -> Label {
        Label::from_score(self.score(params), params)
    }

    /// Returns true if the image is likely an illustration.
    pub fn is_illust(&self, params: &Params) -> bool {
        self.label(params) == Label::Illust
    }

    /// Returns true if the image is likely a photograph.
    pub fn is_picture(&self, params: &Params) -> bool {
        !self.is_illust(params)
    }
}

/// Outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub analysis: Analysis,
    pub score: f64,
    pub label: Label,
}

/// Analyze a buffer with [`STANDARD_PARAMS`].
///
/// # Errors
///
/// [`Error::EmptyInput`] if the buffer has no pixels.
pub fn analyze(buffer: &PixelBuffer) -> Result<Analysis> {
    analyze_with(buffer, &STANDARD_PARAMS)
}

pub fn analyze_with(buffer: &PixelBuffer, params: &Params) -> Result<Analysis> {
    let gray = grayscale::normalize(buffer);
    let maps = EdgeMaps::detect(&gray, params);
    let features = maps.features();

    // runs on the original buffer so colors that share a luminance stay distinct
    let color_fraction = dominance::color_fraction(buffer)?;

    Ok(Analysis {
        gau_ratio: features.gau_ratio,
        med_ratio: features.med_ratio,
        color_fraction,
        raw_edges: maps.raw.edge_count(),
        gaussian_edges: maps.gaussian.edge_count(),
        median_edges: maps.median.edge_count(),
    })
}

/// Classify an in-memory buffer.
///
/// Pure and deterministic; safe to call from many threads at once.
///
/// # Errors
///
/// [`Error::EmptyInput`] if the buffer has no pixels.
pub fn classify(buffer: &PixelBuffer) -> Result<Classification> {
    let params = &STANDARD_PARAMS;
    let analysis = analyze_with(buffer, params)?;

    let score = analysis.score(params);
    let label = Label::from_score(score, params);

    tracing::debug!(
        gau_ratio = analysis.gau_ratio,
        med_ratio = analysis.med_ratio,
        color_fraction = analysis.color_fraction,
        raw_edges = analysis.raw_edges,
        score,
        %label,
        "classified"
    );

    Ok(Classification {
        analysis,
        score,
        label,
    })
}

/// Load an image file, shrink it if oversized, and classify it.
///
/// # Errors
///
/// [`Error::FileNotFound`], [`Error::Decode`] or [`Error::EmptyInput`].
pub fn classify_path(path: impl AsRef<Path>) -> Result<Classification> {
    let buffer = resize::downscale_oversized(load::open(path)?);

    classify(&buffer)
}
