#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod budget;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod segmenter;
pub mod types;

// Stage modules, public for tools and tests.
pub mod classify;
pub mod contour;
pub mod edges;
pub mod lines;
pub mod mapper;
pub mod overlap;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

// Main entry points: segmenter + results.
pub use crate::segmenter::{RegionSegmenter, SegmenterParams, SegmenterWorkspace};
pub use crate::types::{
    BoundingBox, CandidateRegion, ExternalRegion, NormalizedComponent, Region, RegionType,
};

pub use crate::budget::{CancelToken, Deadline};
pub use crate::diagnostics::SegmentationReport;
pub use crate::error::InputError;
pub use crate::image::RasterImage;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use region_segmenter::prelude::*;
///
/// # fn main() -> Result<(), InputError> {
/// let (w, h) = (640usize, 480usize);
/// let rgba = vec![255u8; w * h * 4];
///
/// let segmenter = RegionSegmenter::new(SegmenterParams::default());
/// let report = segmenter.process_rgba(w, h, &rgba)?;
/// println!("components={} truncated={}", report.components.len(), report.truncated);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        InputError, NormalizedComponent, RasterImage, RegionSegmenter, SegmenterParams,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::classify::{classify, classify_contour, classify_table, ImageContext, RegionEvidence};
    pub use crate::contour::{trace_contour, trace_contours};
    pub use crate::edges::detect_edges;
    pub use crate::lines::{
        detect_horizontal_lines, detect_vertical_lines, find_table_structures, split_chart_axes,
    };
    pub use crate::mapper::{to_components, whole_image_component};
    pub use crate::overlap::{merge_external, overlap_ratio, resolve, resolve_with};
    pub use crate::regions::{find_color_regions, find_edge_regions, find_regions};

    // Structured diagnostics types.
    pub use crate::diagnostics::{InputDescriptor, StageCounts, StageTiming, TimingBreakdown};
}
