use super::timing::TimingBreakdown;
use crate::types::{CandidateRegion, NormalizedComponent};
use serde::{Deserialize, Serialize};

/// Input image dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Item counts produced by each stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub edge_pixels: usize,
    pub edge_regions: usize,
    pub color_regions: usize,
    pub contours: usize,
    pub contour_candidates: usize,
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub tables: usize,
    pub charts: usize,
    /// Classified candidates with non-zero confidence, before the cap.
    pub candidates: usize,
    pub resolved: usize,
    pub external: usize,
    pub components: usize,
}

/// Everything one segmentation run produced.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub input: InputDescriptor,
    pub components: Vec<NormalizedComponent>,
    /// Deduplicated candidates in descending confidence.
    pub candidates: Vec<CandidateRegion>,
    pub counts: StageCounts,
    pub timing: TimingBreakdown,
    /// A deadline expired, or a region, contour or candidate cap cut the
    /// results short.
    pub truncated: bool,
    /// The edge map came from a workspace cache.
    pub edge_cache_hit: bool,
}

impl SegmentationReport {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// One-line summary for logs and CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{}x{} components={} candidates={} (edge={} color={} contour={} tables={} charts={}) truncated={} total={:.2}ms",
            self.input.width,
            self.input.height,
            self.components.len(),
            self.counts.candidates,
            self.counts.edge_regions,
            self.counts.color_regions,
            self.counts.contour_candidates,
            self.counts.tables,
            self.counts.charts,
            self.truncated,
            self.timing.total_ms
        )
    }
}
