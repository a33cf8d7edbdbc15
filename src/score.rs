use std::fmt;

/// Fixed constants of the heuristic.
///
/// The decision boundary was tuned empirically around these exact values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Canny hysteresis low threshold, on a 0-255 intensity scale.
    pub canny_low: f32,
    /// Canny hysteresis high threshold.
    pub canny_high: f32,
    /// Weight of the inverse edge-stability term.
    pub edge_weight: f64,
    /// Weight of the color dominance term.
    pub color_weight: f64,
    /// The color fraction is divided by this before weighting.
    pub color_scale: f64,
    /// Applied to the weighted sum.
    pub score_scale: f64,
    /// Scores at or above this are illustrations.
    pub threshold: f64,
}

pub const STANDARD_PARAMS: Params = Params {
    canny_low: 100.0,
    canny_high: 200.0,
    edge_weight: 0.8,
    color_weight: 0.2,
    color_scale: 100.0,
    score_scale: 0.625,
    threshold: 0.5,
};

impl Default for Params {
    fn default() -> Self {
        STANDARD_PARAMS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Illust,
    Picture,
}

impl Label {
    pub fn from_score(score: f64, params: &Params) -> Label {
        if score >= params.threshold {
            Label::Illust
        } else {
            Label::Picture
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Illust => "illust",
            Label::Picture => "picture",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "illust" => Ok(Label::Illust),
            "picture" => Ok(Label::Picture),
            _ => Err(format!("unknown label `{s}`, expected `illust` or `picture`")),
        }
    }
}

/// Merge both edge-stability ratios and the color fraction into one score.
///
/// Returns exactly `0` when both ratios sum to zero, which happens when no raw
/// edges were found at all.
pub fn combine(gau_ratio: f64, med_ratio: f64, color_fraction: f64, params: &Params) -> f64 {
    let edge_score = gau_ratio + med_ratio;

    if edge_score == 0.0 {
        return 0.0;
    }

    ((1.0 / edge_score) * params.edge_weight
        + (color_fraction / params.color_scale) * params.color_weight)
        * params.score_scale
}
