//! Region segmenter orchestrating the heuristic pipeline.
//!
//! Overview
//! - Computes a Sobel edge map of the luminance (optionally cached in a
//!   [`SegmenterWorkspace`]).
//! - Flood-fills strong-edge blobs on the edge map and uniform-color blobs
//!   on the source image.
//! - Traces contours on the edge map to surface compact, logo-like shapes.
//! - Scans rows and columns for long dark rules and assembles them into
//!   table grids and chart axis pairs.
//! - Classifies every candidate with rule-based gates, deduplicates by
//!   overlap and maps the survivors to padded percentage boxes.
//!
//! Every stage polls the [`Deadline`](crate::budget::Deadline) it is given
//! and returns what it has so far when it expires; the report is then
//! flagged `truncated`. Hitting a region, contour or candidate cap sets the
//! same flag.
//!
//! Modules
//! - [`params`] – configuration aggregating the per-stage options.
//! - `pipeline` – the [`RegionSegmenter`] implementation.
//! - `workspace` – the edge-map cache.

pub mod params;
mod pipeline;
mod workspace;

pub use params::SegmenterParams;
pub use pipeline::RegionSegmenter;
pub use workspace::SegmenterWorkspace;
