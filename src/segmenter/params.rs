//! Parameter types configuring the segmentation stages.
//!
//! Every heuristic constant lives in one of the per-stage option structs
//! below. All of them deserialize with `#[serde(default)]`, so a JSON file
//! naming a single field leaves the rest at their documented defaults.

use crate::classify::ClassifierOptions;
use crate::contour::ContourOptions;
use crate::lines::LineOptions;
use crate::mapper::MapperOptions;
use crate::overlap::OverlapOptions;
use crate::regions::RegionOptions;
use serde::{Deserialize, Serialize};

/// Segmenter-wide parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    /// Flood-fill seeding and region floors for edge and color fills.
    pub regions: RegionOptions,
    /// Contour tracing over the edge map.
    pub contours: ContourOptions,
    /// Run-length line scan and table/chart assembly.
    pub lines: LineOptions,
    /// Gates and bonuses of the rule-based classifier.
    pub classifier: ClassifierOptions,
    /// Dedup and external-merge thresholds.
    pub overlap: OverlapOptions,
    /// Padding and fallback for the final components.
    pub mapper: MapperOptions,
    /// Candidates must score strictly above this to enter deduplication.
    pub min_confidence: f32,
    /// Upper bound on candidates entering deduplication; the
    /// highest-confidence ones are kept.
    pub max_candidates: usize,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            regions: RegionOptions::default(),
            contours: ContourOptions::default(),
            lines: LineOptions::default(),
            classifier: ClassifierOptions::default(),
            overlap: OverlapOptions::default(),
            mapper: MapperOptions::default(),
            min_confidence: 0.0,
            max_candidates: 2000,
        }
    }
}
