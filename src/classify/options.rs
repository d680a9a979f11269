//! Heuristic gates and confidence bonuses for each region type.
//!
//! These are hand-tuned rules, not a learned model. The defaults reproduce
//! the reference scoring exactly; retuned values should be recorded
//! alongside the configuration that uses them.
use serde::{Deserialize, Serialize};

/// Open interval `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpenRange {
    pub min: f32,
    pub max: f32,
}

impl OpenRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v > self.min && v < self.max
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRule {
    pub aspect: OpenRange,
    pub area: OpenRange,
    pub base: f32,
    pub strong_aspect: OpenRange,
    pub strong_aspect_bonus: f32,
    pub line_height: OpenRange,
    pub line_height_bonus: f32,
}

impl Default for TextRule {
    fn default() -> Self {
        Self {
            aspect: OpenRange::new(1.5, 20.0),
            area: OpenRange::new(500.0, 50_000.0),
            base: 0.5,
            strong_aspect: OpenRange::new(2.0, 15.0),
            strong_aspect_bonus: 0.3,
            line_height: OpenRange::new(10.0, 50.0),
            line_height_bonus: 0.2,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRule {
    pub aspect: OpenRange,
    /// Area must be strictly above this.
    pub min_area: f32,
    pub base: f32,
    pub large_area: f32,
    pub large_area_bonus: f32,
    /// Bonus applies when strictly more quantized colors are sampled.
    pub distinct_colors: usize,
    pub color_bonus: f32,
    pub samples_per_axis: usize,
}

impl Default for ImageRule {
    fn default() -> Self {
        Self {
            aspect: OpenRange::new(0.3, 3.0),
            min_area: 5_000.0,
            base: 0.6,
            large_area: 10_000.0,
            large_area_bonus: 0.2,
            distinct_colors: 5,
            color_bonus: 0.2,
            samples_per_axis: 10,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoRule {
    /// Contour compactness must be strictly below this.
    pub max_compactness: f32,
    pub area: OpenRange,
    pub base: f32,
    /// Sampled brightness range strictly above this counts as high contrast.
    pub contrast_range: f32,
    pub contrast_bonus: f32,
    pub contrast_samples_per_axis: usize,
    /// Regions starting above this fraction of the image height.
    pub top_fraction: f32,
    pub top_bonus: f32,
}

impl Default for LogoRule {
    fn default() -> Self {
        Self {
            max_compactness: 50.0,
            area: OpenRange::new(1_000.0, 20_000.0),
            base: 0.7,
            contrast_range: 100.0,
            contrast_bonus: 0.2,
            contrast_samples_per_axis: 5,
            top_fraction: 0.3,
            top_bonus: 0.1,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IconRule {
    pub area: OpenRange,
    pub aspect: OpenRange,
    pub confidence: f32,
}

impl Default for IconRule {
    fn default() -> Self {
        Self {
            area: OpenRange::new(100.0, 5_000.0),
            aspect: OpenRange::new(0.5, 2.0),
            confidence: 0.7,
        }
    }
}

/// How table candidates are scored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TableConfidence {
    /// Constant placeholder confidence.
    Fixed { confidence: f32 },
    /// `base + span * regularity`, regularity from line-spacing variation.
    GridRegularity { base: f32, span: f32 },
}

impl Default for TableConfidence {
    fn default() -> Self {
        TableConfidence::Fixed { confidence: 0.8 }
    }
}

impl TableConfidence {
    pub fn confidence(&self, regularity: f32) -> f32 {
        match *self {
            TableConfidence::Fixed { confidence } => confidence,
            TableConfidence::GridRegularity { base, span } => base + span * regularity,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    pub text: TextRule,
    pub image: ImageRule,
    pub logo: LogoRule,
    pub icon: IconRule,
    pub table: TableConfidence,
    /// Placeholder confidence for chart axis pairs.
    pub chart_confidence: f32,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            text: TextRule::default(),
            image: ImageRule::default(),
            logo: LogoRule::default(),
            icon: IconRule::default(),
            table: TableConfidence::default(),
            chart_confidence: 0.8,
        }
    }
}
