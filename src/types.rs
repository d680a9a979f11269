use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle. `width`/`height` are pixel extents, so a
/// region spans columns `x..x + width` and rows `y..y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from inclusive min/max pixel coordinates.
    pub fn from_extent(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x).saturating_add(1),
            height: max_y.saturating_sub(min_y).saturating_add(1),
        }
    }

    /// Exclusive right edge, saturating at `usize::MAX`.
    #[inline]
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `usize::MAX`.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// `width / height`, or 0 for a degenerate region.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains_point(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest region covering both.
    pub fn union(&self, other: &Region) -> Region {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Region {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    pub fn intersection_area(&self, other: &Region) -> usize {
        let w = self
            .right()
            .min(other.right())
            .saturating_sub(self.x.max(other.x));
        let h = self
            .bottom()
            .min(other.bottom())
            .saturating_sub(self.y.max(other.y));
        w.saturating_mul(h)
    }

    /// True when the region lies fully inside a `width × height` image.
    pub fn is_within(&self, width: usize, height: usize) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// Semantic label assigned by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    Text,
    Image,
    Logo,
    Chart,
    Table,
    Icon,
    Background,
}

/// A classified region. Confidence is clamped to `[0, 1]` on construction
/// and the value is immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRegion {
    #[serde(flatten)]
    region: Region,
    confidence: f32,
    #[serde(rename = "type")]
    kind: RegionType,
}

impl CandidateRegion {
    pub fn new(region: Region, kind: RegionType, confidence: f32) -> Self {
        Self {
            region,
            confidence: clamp_unit(confidence),
            kind,
        }
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    #[inline]
    pub fn kind(&self) -> RegionType {
        self.kind
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Bounding box in percent of the image dimensions (0–100).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Clamp into `[0, 100]` so that `x + width <= 100` and
    /// `y + height <= 100` hold exactly in f32 arithmetic.
    pub fn clamped(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = fit_span(x, width);
        let (y, height) = fit_span(y, height);
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

fn fit_span(start: f32, span: f32) -> (f32, f32) {
    let start = if start.is_nan() {
        0.0
    } else {
        start.clamp(0.0, 100.0)
    };
    let span = if span.is_nan() { 0.0 } else { span };
    let mut span = span.clamp(0.0, 100.0 - start);
    if start + span > 100.0 {
        span = (span - 100.0 * f32::EPSILON).max(0.0);
    }
    (start, span)
}

/// Final output unit handed to cropping and storage.
///
/// Externally detected regions use the same shape when merged in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedComponent {
    pub name: String,
    pub description: String,
    pub category: String,
    pub bounding_box: BoundingBox,
}

/// Region supplied by an external detector, already in percentage space.
pub type ExternalRegion = NormalizedComponent;
