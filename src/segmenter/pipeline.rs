//! Segmenter pipeline driving region segmentation end-to-end.
//!
//! [`RegionSegmenter`] is stateless apart from its parameters: feed it a
//! [`RasterImage`] and get a [`SegmentationReport`] holding the final
//! components, the deduplicated candidates and per-stage diagnostics.
//!
//! Typical usage:
//! ```no_run
//! use region_segmenter::{RasterImage, RegionSegmenter, SegmenterParams};
//!
//! # fn example(image: RasterImage) {
//! let segmenter = RegionSegmenter::new(SegmenterParams::default());
//! let report = segmenter.process(&image);
//! for c in &report.components {
//!     println!("{} {:?}", c.name, c.bounding_box);
//! }
//! # }
//! ```
use super::params::SegmenterParams;
use super::workspace::SegmenterWorkspace;
use crate::budget::Deadline;
use crate::classify::{classify, classify_contour, classify_table, ImageContext, RegionEvidence};
use crate::contour::trace_contours;
use crate::diagnostics::{InputDescriptor, SegmentationReport, StageCounts, TimingBreakdown};
use crate::edges::{detect_edges, EdgeMap};
use crate::error::InputError;
use crate::image::RasterImage;
use crate::lines::{
    detect_horizontal_lines, detect_vertical_lines, find_table_structures, split_chart_axes,
};
use crate::mapper::to_components;
use crate::overlap::{self, resolve_with};
use crate::regions::{find_color_regions, find_edge_regions};
use crate::types::{CandidateRegion, ExternalRegion};
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

fn ms_since(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

/// Region segmenter orchestrating edges, fills, contours, lines,
/// classification, deduplication and mapping.
#[derive(Clone, Debug, Default)]
pub struct RegionSegmenter {
    params: SegmenterParams,
}

impl RegionSegmenter {
    pub fn new(params: SegmenterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    /// Run the full pipeline without a time limit.
    pub fn process(&self, image: &RasterImage) -> SegmentationReport {
        self.process_until(image, &Deadline::none())
    }

    /// Validate a raw RGBA buffer and run the pipeline on it.
    pub fn process_rgba(
        &self,
        width: usize,
        height: usize,
        bytes: &[u8],
    ) -> Result<SegmentationReport, InputError> {
        let image = RasterImage::from_rgba_bytes(width, height, bytes)?;
        Ok(self.process(&image))
    }

    /// Run the pipeline, returning what was found when `deadline` expires.
    pub fn process_until(&self, image: &RasterImage, deadline: &Deadline) -> SegmentationReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let edge_start = Instant::now();
        let edges = detect_edges(image);
        timing.push("edges", ms_since(edge_start));
        self.segment(image, &edges, deadline, timing, total_start, false)
    }

    /// Like [`process_until`](Self::process_until) but reuses the edge map
    /// cached in `workspace` when the pixels are unchanged.
    pub fn process_with_workspace(
        &self,
        image: &RasterImage,
        workspace: &mut SegmenterWorkspace,
        deadline: &Deadline,
    ) -> SegmentationReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let edge_start = Instant::now();
        let (edges, hit) = workspace.edge_map(image);
        timing.push("edges", ms_since(edge_start));
        self.segment(image, edges, deadline, timing, total_start, hit)
    }

    /// Run the pipeline and merge the components with externally detected
    /// regions (see [`merge_external`](Self::merge_external)).
    pub fn process_with_external(
        &self,
        image: &RasterImage,
        external: Vec<ExternalRegion>,
        deadline: &Deadline,
    ) -> SegmentationReport {
        let report = self.process_until(image, deadline);
        self.merge_external(report, external)
    }

    /// Merge a finished report with externally detected regions. The
    /// external list is kept; heuristic components overlapping one of them
    /// above the external threshold are dropped.
    pub fn merge_external(
        &self,
        mut report: SegmentationReport,
        external: Vec<ExternalRegion>,
    ) -> SegmentationReport {
        let start = Instant::now();
        report.counts.external = external.len();
        let heuristic = std::mem::take(&mut report.components);
        report.components =
            overlap::merge_external(external, heuristic, self.params.overlap.external_threshold);
        report.counts.components = report.components.len();
        let elapsed = ms_since(start);
        report.timing.push("merge", elapsed);
        report.timing.total_ms += elapsed;
        report
    }

    /// One image per rayon worker; reports keep input order.
    pub fn process_batch(&self, images: &[RasterImage], deadline: &Deadline) -> Vec<SegmentationReport> {
        let start = Instant::now();
        let reports: Vec<SegmentationReport> = images
            .par_iter()
            .map(|image| self.process_until(image, deadline))
            .collect();
        debug!(
            "RegionSegmenter::process_batch images={} elapsed={:.2}ms",
            images.len(),
            ms_since(start)
        );
        reports
    }

    fn segment(
        &self,
        image: &RasterImage,
        edges: &EdgeMap,
        deadline: &Deadline,
        mut timing: TimingBreakdown,
        total_start: Instant,
        edge_cache_hit: bool,
    ) -> SegmentationReport {
        let p = &self.params;
        let (width, height) = image.dimensions();
        debug!(
            "RegionSegmenter::segment start w={} h={} cache_hit={}",
            width, height, edge_cache_hit
        );
        let ctx = ImageContext::new(image, &p.classifier);
        let mut counts = StageCounts {
            edge_pixels: edges.edge_pixel_count(p.regions.edge_threshold),
            ..StageCounts::default()
        };
        let mut candidates: Vec<CandidateRegion> = Vec::new();

        // Flood-filled blobs.
        let stage = Instant::now();
        let edge_regions = find_edge_regions(edges, &p.regions, deadline);
        let color_regions = find_color_regions(image, &p.regions, deadline);
        counts.edge_regions = edge_regions.len();
        counts.color_regions = color_regions.len();
        let mut capped = p.regions.edge_scan().cap_reached(edge_regions.len())
            || p.regions.color_scan().cap_reached(color_regions.len());
        candidates.extend(
            edge_regions
                .iter()
                .chain(color_regions.iter())
                .map(|r| classify(*r, &RegionEvidence::Blob, &ctx)),
        );
        timing.push("regions", ms_since(stage));

        // Contours.
        let stage = Instant::now();
        let contours = trace_contours(edges, &p.contours, deadline);
        counts.contours = contours.len();
        capped |= p.contours.cap_reached(contours.len());
        let before = candidates.len();
        candidates.extend(
            contours
                .iter()
                .filter_map(|c| classify_contour(c, p.contours.min_points, &ctx)),
        );
        counts.contour_candidates = candidates.len() - before;
        timing.push("contours", ms_since(stage));

        // Lines, tables and chart axes.
        let stage = Instant::now();
        if deadline.expired() {
            warn!("RegionSegmenter: deadline expired, skipping line detection");
        } else {
            let h_lines = detect_horizontal_lines(image, &p.lines);
            let v_lines = detect_vertical_lines(image, &p.lines);
            counts.horizontal_lines = h_lines.len();
            counts.vertical_lines = v_lines.len();
            let structures = find_table_structures(&h_lines, &v_lines, &p.lines);
            let (tables, charts) = split_chart_axes(structures, &p.lines);
            counts.tables = tables.len();
            counts.charts = charts.len();
            candidates.extend(tables.iter().map(|t| classify_table(t, &ctx)));
            candidates.extend(
                charts
                    .iter()
                    .map(|r| classify(*r, &RegionEvidence::Chart, &ctx)),
            );
        }
        timing.push("lines", ms_since(stage));

        candidates.retain(|c| c.confidence() > p.min_confidence);
        counts.candidates = candidates.len();
        let mut truncated = capped;
        if candidates.len() > p.max_candidates {
            warn!(
                "RegionSegmenter: {} candidates exceed cap {}, keeping the most confident",
                candidates.len(),
                p.max_candidates
            );
            candidates.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
            candidates.truncate(p.max_candidates);
            truncated = true;
        }

        let stage = Instant::now();
        let resolved = resolve_with(candidates, p.overlap.dedup_threshold);
        counts.resolved = resolved.len();
        timing.push("resolve", ms_since(stage));

        let stage = Instant::now();
        let components = to_components(&resolved, (width, height), &p.mapper);
        counts.components = components.len();
        timing.push("map", ms_since(stage));

        if deadline.expired() {
            truncated = true;
        }
        timing.total_ms = ms_since(total_start);
        let report = SegmentationReport {
            input: InputDescriptor { width, height },
            components,
            candidates: resolved,
            counts,
            timing,
            truncated,
            edge_cache_hit,
        };
        debug!("RegionSegmenter::segment done {}", report.summary());
        report
    }
}
