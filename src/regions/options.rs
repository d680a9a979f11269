use super::criteria::{ColorCriterion, EdgeCriterion};
use serde::{Deserialize, Serialize};

/// Seed grid and output cap for one region scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Seed every `stride` pixels along both axes (>= 1).
    pub stride: usize,
    /// Stop scanning after this many regions.
    pub max_regions: usize,
}

impl ScanOptions {
    /// Whether a scan holding `found` regions has hit `max_regions`.
    pub fn cap_reached(&self, found: usize) -> bool {
        found >= self.max_regions
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            stride: 5,
            max_regions: 500,
        }
    }
}

/// Thresholds for the edge-based and color-based region scans.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOptions {
    /// Edge magnitude (0–255) a pixel must exceed to join an edge region.
    pub edge_threshold: u8,
    pub edge_stride: usize,
    pub edge_min_pixels: usize,
    /// Maximum Euclidean RGB distance from the seed color.
    pub color_delta: f32,
    pub color_stride: usize,
    /// Color regions are coarser than edge regions, hence the larger floor.
    pub color_min_pixels: usize,
    /// Seeds with luminance at or above this are treated as background.
    pub background_luma: f32,
    /// Cap per scan, bounds pure-noise inputs.
    pub max_regions: usize,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            edge_threshold: 50,
            edge_stride: 5,
            edge_min_pixels: 100,
            color_delta: 30.0,
            color_stride: 10,
            color_min_pixels: 200,
            background_luma: 240.0,
            max_regions: 500,
        }
    }
}

impl RegionOptions {
    pub fn edge_criterion(&self) -> EdgeCriterion {
        EdgeCriterion {
            threshold: self.edge_threshold,
        }
    }

    pub fn color_criterion(&self) -> ColorCriterion {
        ColorCriterion {
            delta: self.color_delta,
            background_luma: self.background_luma,
        }
    }

    pub fn edge_scan(&self) -> ScanOptions {
        ScanOptions {
            stride: self.edge_stride,
            max_regions: self.max_regions,
        }
    }

    pub fn color_scan(&self) -> ScanOptions {
        ScanOptions {
            stride: self.color_stride,
            max_regions: self.max_regions,
        }
    }
}
